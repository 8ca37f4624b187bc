pub mod ingest_source;
pub mod poll_sources;

pub use ingest_source::{ingest_source, SourceOutcome};
pub use poll_sources::{run_poll_cycle, CycleReport};
