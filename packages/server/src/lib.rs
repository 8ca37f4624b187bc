// Ministry Jobs - ingestion core
//
// Polls central-government ministry recruitment boards, keeps the notices that
// look like hiring announcements, and stores them as normalized job postings.
// Architecture follows domain-driven design: infrastructure traits live in
// kernel/, decision logic in domains/*/.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;

pub use config::*;
