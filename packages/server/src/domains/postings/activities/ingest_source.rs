//! Ingest one source: fetch → extract → classify → synthesize → dedup.

use tracing::{debug, info, warn};

use crate::domains::postings::dedup::{admit_posting, GateDecision};
use crate::domains::postings::errors::IngestError;
use crate::domains::postings::extraction::extract_candidates;
use crate::domains::postings::synthesizer::synthesize_posting;
use crate::domains::source::Source;
use crate::kernel::ServerDeps;

/// Counts for one source in one cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceOutcome {
    pub rows_seen: usize,
    pub accepted: usize,
    pub inserted: usize,
    pub duplicates: usize,
    pub failed_inserts: usize,
}

/// Process a single source.
///
/// Per-row problems never fail the source: rows without a title are skipped
/// and a failed insert drops only that posting. The source's last-checked
/// time is updated whenever its page was fetched and scanned for rows.
pub async fn ingest_source(source: &Source, deps: &ServerDeps) -> Result<SourceOutcome, IngestError> {
    let base_url = source
        .base_url()
        .map_err(|_| IngestError::InvalidSourceUrl {
            url: source.url.clone(),
        })?;

    let html = deps.fetcher.fetch(&source.url).await?;

    let policy = *deps.policies.for_source(&source.name);
    let page = extract_candidates(&html, &base_url, policy.label_extraction.as_ref());
    let now = deps.clock.now();

    if let Err(e) = deps.store.touch_source_last_checked(source.id, now).await {
        warn!(source = %source.name, error = %e, "Failed to update last checked time");
    }

    let Some(pattern) = page.pattern else {
        return Err(IngestError::NoRowsMatched {
            ministry: source.name.clone(),
        });
    };
    debug!(
        source = %source.name,
        pattern,
        rows = page.rows_seen,
        titled = page.candidates.len(),
        "Matched board rows"
    );

    let accepted: Vec<_> = page
        .candidates
        .into_iter()
        .filter(|fields| policy.rule.accepts(&fields.title))
        .take(deps.ingest.max_postings_per_source)
        .collect();

    let mut outcome = SourceOutcome {
        rows_seen: page.rows_seen,
        accepted: accepted.len(),
        ..SourceOutcome::default()
    };

    for fields in &accepted {
        if let Some(posted_on) = fields.posted_on {
            debug!(source = %source.name, title = %fields.title, %posted_on, "Board date");
        }

        let posting = synthesize_posting(fields, source, now, deps.random.as_ref());
        match admit_posting(posting, deps.store.as_ref()).await {
            Ok(GateDecision::Inserted(_)) => outcome.inserted += 1,
            Ok(GateDecision::Duplicate) => outcome.duplicates += 1,
            Err(e) => {
                outcome.failed_inserts += 1;
                warn!(
                    source = %source.name,
                    title = %fields.title,
                    error = %e,
                    "Dropping posting after repository error"
                );
            }
        }
    }

    info!(
        source = %source.name,
        accepted = outcome.accepted,
        inserted = outcome.inserted,
        duplicates = outcome.duplicates,
        "Source processed"
    );
    Ok(outcome)
}
