// TestDependencies - mock implementations for testing
//
// Provides mock services that can be injected into ServerDeps for tests.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use reqwest::StatusCode;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use super::{
    BaseClock, BaseJobStore, BasePageFetcher, FetchError, FixedClock, FixedRandom,
    InMemoryJobStore, ServerDeps,
};
use crate::common::SourceId;
use crate::config::IngestConfig;
use crate::domains::postings::models::{JobPosting, NewJobPosting};
use crate::domains::source::{PolicyTable, Source, SourceSeed};

// =============================================================================
// Mock Page Fetcher
// =============================================================================

#[derive(Debug, Clone)]
enum MockPage {
    Html(String),
    Status(StatusCode),
    Timeout,
}

/// Serves canned pages by URL. Unknown URLs answer 404.
pub struct MockPageFetcher {
    pages: Arc<Mutex<HashMap<String, MockPage>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockPageFetcher {
    pub fn new() -> Self {
        Self {
            pages: Arc::new(Mutex::new(HashMap::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_page(self, url: &str, html: impl Into<String>) -> Self {
        self.set_page(url, html);
        self
    }

    pub fn with_status(self, url: &str, status: StatusCode) -> Self {
        self.pages
            .lock()
            .unwrap()
            .insert(url.to_string(), MockPage::Status(status));
        self
    }

    pub fn with_timeout(self, url: &str) -> Self {
        self.pages
            .lock()
            .unwrap()
            .insert(url.to_string(), MockPage::Timeout);
        self
    }

    /// Replace a page between cycles.
    pub fn set_page(&self, url: &str, html: impl Into<String>) {
        self.pages
            .lock()
            .unwrap()
            .insert(url.to_string(), MockPage::Html(html.into()));
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Default for MockPageFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BasePageFetcher for MockPageFetcher {
    async fn fetch(&self, url: &str) -> std::result::Result<String, FetchError> {
        self.calls.lock().unwrap().push(url.to_string());

        let page = self.pages.lock().unwrap().get(url).cloned();
        match page {
            Some(MockPage::Html(html)) => Ok(html),
            Some(MockPage::Status(status)) => Err(FetchError::Status {
                status,
                url: url.to_string(),
            }),
            Some(MockPage::Timeout) => Err(FetchError::Timeout {
                url: url.to_string(),
            }),
            None => Err(FetchError::Status {
                status: StatusCode::NOT_FOUND,
                url: url.to_string(),
            }),
        }
    }
}

// =============================================================================
// Flaky Job Store
// =============================================================================

/// Wraps the in-memory store and fails selected operations on demand.
pub struct FlakyJobStore {
    inner: Arc<InMemoryJobStore>,
    fail_inserts: AtomicBool,
    fail_deletes: AtomicBool,
    fail_listing: AtomicBool,
}

impl FlakyJobStore {
    pub fn new(inner: Arc<InMemoryJobStore>) -> Self {
        Self {
            inner,
            fail_inserts: AtomicBool::new(false),
            fail_deletes: AtomicBool::new(false),
            fail_listing: AtomicBool::new(false),
        }
    }

    pub fn fail_inserts(&self, fail: bool) {
        self.fail_inserts.store(fail, Ordering::SeqCst);
    }

    pub fn fail_deletes(&self, fail: bool) {
        self.fail_deletes.store(fail, Ordering::SeqCst);
    }

    pub fn fail_listing(&self, fail: bool) {
        self.fail_listing.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl BaseJobStore for FlakyJobStore {
    async fn list_active_sources(&self) -> Result<Vec<Source>> {
        if self.fail_listing.load(Ordering::SeqCst) {
            anyhow::bail!("connection reset while listing sources");
        }
        self.inner.list_active_sources().await
    }

    async fn posting_exists(&self, title: &str, ministry: &str) -> Result<bool> {
        self.inner.posting_exists(title, ministry).await
    }

    async fn insert_posting(&self, posting: NewJobPosting) -> Result<JobPosting> {
        if self.fail_inserts.load(Ordering::SeqCst) {
            anyhow::bail!("insert rejected");
        }
        self.inner.insert_posting(posting).await
    }

    async fn touch_source_last_checked(&self, id: SourceId, at: DateTime<Utc>) -> Result<()> {
        self.inner.touch_source_last_checked(id, at).await
    }

    async fn delete_postings_older_than(&self, age_days: i64, now: DateTime<Utc>) -> Result<u64> {
        if self.fail_deletes.load(Ordering::SeqCst) {
            anyhow::bail!("delete timed out");
        }
        self.inner.delete_postings_older_than(age_days, now).await
    }

    async fn ensure_sources(&self, seeds: &[SourceSeed]) -> Result<usize> {
        self.inner.ensure_sources(seeds).await
    }
}

// =============================================================================
// TestDependencies - Builder for test dependencies
// =============================================================================

#[derive(Clone)]
pub struct TestDependencies {
    pub fetcher: Arc<MockPageFetcher>,
    pub clock: Arc<FixedClock>,
    pub random: Arc<FixedRandom>,
    pub store: Arc<InMemoryJobStore>,
    pub policies: PolicyTable,
    pub ingest: IngestConfig,
}

impl TestDependencies {
    pub fn new() -> Self {
        let clock = Arc::new(FixedClock::new(
            Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap(),
        ));
        Self {
            fetcher: Arc::new(MockPageFetcher::new()),
            store: Arc::new(InMemoryJobStore::new(clock.clone())),
            clock,
            random: Arc::new(FixedRandom::new(2)),
            policies: PolicyTable::standard(),
            ingest: IngestConfig::default(),
        }
    }

    /// Set a mock page fetcher
    pub fn mock_fetcher(mut self, fetcher: MockPageFetcher) -> Self {
        self.fetcher = Arc::new(fetcher);
        self
    }

    pub fn random(mut self, value: i32) -> Self {
        self.random = Arc::new(FixedRandom::new(value));
        self
    }

    pub fn policies(mut self, policies: PolicyTable) -> Self {
        self.policies = policies;
        self
    }

    pub fn max_postings_per_source(mut self, max: usize) -> Self {
        self.ingest.max_postings_per_source = max;
        self
    }

    /// Register an active source in the store.
    pub fn with_source(self, name: &str, url: &str) -> Self {
        self.store.add_source(Source::new(name, url, self.clock.now()));
        self
    }

    pub fn into_server_deps(self) -> ServerDeps {
        let store: Arc<dyn BaseJobStore> = self.store.clone();
        self.into_server_deps_with_store(store)
    }

    /// Same as `into_server_deps` but with a different store in front.
    pub fn into_server_deps_with_store(self, store: Arc<dyn BaseJobStore>) -> ServerDeps {
        ServerDeps::new(
            store,
            self.fetcher,
            self.clock,
            self.random,
            Arc::new(self.policies),
            self.ingest,
        )
    }
}

impl Default for TestDependencies {
    fn default() -> Self {
        Self::new()
    }
}
