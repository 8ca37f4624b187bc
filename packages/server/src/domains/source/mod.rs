//! Source domain - ministry recruitment boards and their scraping policies

pub mod data;
pub mod models;
pub mod policy;

pub use data::{SourceSeed, MINISTRY_SOURCES};
pub use models::Source;
pub use policy::{LabelExtraction, PolicyTable, SourcePolicy};
