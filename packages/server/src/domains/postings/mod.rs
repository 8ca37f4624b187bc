//! Postings domain - turning board pages into deduplicated job postings

pub mod activities;
pub mod classifier;
pub mod dedup;
pub mod errors;
pub mod extraction;
pub mod models;
pub mod synthesizer;

pub use activities::{run_poll_cycle, CycleReport};
pub use errors::IngestError;
pub use models::{EmploymentType, JobPosting, JobType, NewJobPosting};
