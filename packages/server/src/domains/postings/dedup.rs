//! Dedup gate in front of the repository.
//!
//! A (title, ministry) pair is stored at most once. The check and the insert
//! are separate repository calls; callers must not race the same pair.

use anyhow::Result;
use tracing::{debug, info};

use crate::domains::postings::models::{JobPosting, NewJobPosting};
use crate::kernel::BaseJobStore;

#[derive(Debug, Clone)]
pub enum GateDecision {
    Inserted(JobPosting),
    Duplicate,
}

/// Insert the posting unless one with the same title already exists for the ministry.
pub async fn admit_posting(posting: NewJobPosting, store: &dyn BaseJobStore) -> Result<GateDecision> {
    if store.posting_exists(&posting.title, &posting.ministry).await? {
        debug!(ministry = %posting.ministry, title = %posting.title, "Skipping duplicate posting");
        return Ok(GateDecision::Duplicate);
    }

    let stored = store.insert_posting(posting).await?;
    info!(
        posting_id = %stored.id,
        ministry = %stored.ministry,
        title = %stored.title,
        "Stored new posting"
    );
    Ok(GateDecision::Inserted(stored))
}
