// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Classification, synthesis and dedup are domain functions that use these traits.
//
// Naming convention: Base* for trait names (e.g., BaseJobStore, BaseClock)

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::http_fetcher::FetchError;
use crate::common::SourceId;
use crate::domains::postings::models::{JobPosting, NewJobPosting};
use crate::domains::source::{Source, SourceSeed};

// =============================================================================
// Page Fetcher Trait (Infrastructure - HTTP GET of a board page)
// =============================================================================

#[async_trait]
pub trait BasePageFetcher: Send + Sync {
    /// Fetch a page body as text. Non-2xx statuses are errors.
    async fn fetch(&self, url: &str) -> std::result::Result<String, FetchError>;
}

// =============================================================================
// Job Store Trait (Infrastructure - repository for sources and postings)
// =============================================================================

/// Each call is its own atomic operation; there are no multi-call transactions.
#[async_trait]
pub trait BaseJobStore: Send + Sync {
    /// Active sources, in a stable order.
    async fn list_active_sources(&self) -> Result<Vec<Source>>;

    async fn posting_exists(&self, title: &str, ministry: &str) -> Result<bool>;

    /// Store a posting. The store assigns id, created_at and updated_at.
    async fn insert_posting(&self, posting: NewJobPosting) -> Result<JobPosting>;

    async fn touch_source_last_checked(&self, id: SourceId, at: DateTime<Utc>) -> Result<()>;

    /// Delete postings created more than `age_days` before `now`. Returns rows deleted.
    async fn delete_postings_older_than(&self, age_days: i64, now: DateTime<Utc>) -> Result<u64>;

    /// Register the seed list if no sources exist yet. Returns sources inserted.
    async fn ensure_sources(&self, seeds: &[SourceSeed]) -> Result<usize>;
}

// =============================================================================
// Clock / Random Traits (Infrastructure - injectable time and randomness)
// =============================================================================

pub trait BaseClock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

pub trait BaseRandom: Send + Sync {
    /// Uniform integer in `[low, high]`.
    fn range_inclusive(&self, low: i32, high: i32) -> i32;
}
