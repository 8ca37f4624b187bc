use thiserror::Error;

use crate::kernel::FetchError;

/// Why a source produced no postings in a cycle.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("source URL is not a valid absolute URL: {url}")]
    InvalidSourceUrl { url: String },

    #[error("no board rows matched on {ministry}")]
    NoRowsMatched { ministry: String },
}
