//! One poll cycle over every active source.

use serde::Serialize;
use tracing::{error, info, warn};

use super::ingest_source::ingest_source;
use crate::domains::postings::errors::IngestError;
use crate::kernel::ServerDeps;

/// Summary of a poll cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CycleReport {
    pub sources_polled: usize,
    pub candidates_accepted: usize,
    pub postings_inserted: usize,
    pub duplicates_skipped: usize,
    /// Sources whose page could not be fetched.
    pub failed_sources: usize,
    /// Sources whose page had no recognizable rows.
    pub unmatched_sources: usize,
}

/// Poll every active source in order. A failing source is logged and skipped;
/// the cycle itself never fails.
pub async fn run_poll_cycle(deps: &ServerDeps) -> CycleReport {
    let mut report = CycleReport::default();

    let sources = match deps.store.list_active_sources().await {
        Ok(sources) => sources,
        Err(e) => {
            error!(error = %e, "Failed to list active sources, skipping cycle");
            return report;
        }
    };

    info!(count = sources.len(), "Starting poll cycle");

    for source in &sources {
        report.sources_polled += 1;

        match ingest_source(source, deps).await {
            Ok(outcome) => {
                report.candidates_accepted += outcome.accepted;
                report.postings_inserted += outcome.inserted;
                report.duplicates_skipped += outcome.duplicates;
            }
            Err(IngestError::NoRowsMatched { ministry }) => {
                report.unmatched_sources += 1;
                info!(source = %ministry, "No board rows matched");
            }
            Err(e) => {
                report.failed_sources += 1;
                warn!(source = %source.name, url = %source.url, error = %e, "Source failed");
            }
        }
    }

    info!(
        sources = report.sources_polled,
        inserted = report.postings_inserted,
        duplicates = report.duplicates_skipped,
        failed = report.failed_sources,
        unmatched = report.unmatched_sources,
        "Poll cycle complete"
    );
    report
}
