pub mod seed;

pub use seed::{SourceSeed, MINISTRY_SOURCES};
