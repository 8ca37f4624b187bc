use tracing::{error, info};

use crate::kernel::ServerDeps;

/// Delete postings created more than `retention_days` ago, regardless of
/// their application window. Returns the number deleted; a repository
/// failure is logged and counts as zero so the next sweep retries.
pub async fn sweep_expired_postings(deps: &ServerDeps, retention_days: i64) -> u64 {
    let now = deps.clock.now();
    match deps
        .store
        .delete_postings_older_than(retention_days, now)
        .await
    {
        Ok(deleted) => {
            info!(deleted, retention_days, "Retention sweep complete");
            deleted
        }
        Err(e) => {
            error!(error = %e, retention_days, "Retention sweep failed");
            0
        }
    }
}
