//! In-memory test harness.
//!
//! Wires the pipeline to an `InMemoryJobStore`, a `MockPageFetcher`, a
//! `FixedClock` and a `FixedRandom`. No network or database is touched.

use std::sync::Arc;

use jobs_core::domains::postings::JobPosting;
use jobs_core::domains::source::Source;
use jobs_core::kernel::{
    BaseClock, BaseJobStore, FixedClock, FlakyJobStore, InMemoryJobStore, MockPageFetcher,
    ServerDeps, TestDependencies,
};
use test_context::AsyncTestContext;

pub struct TestHarness {
    pub deps: ServerDeps,
    pub store: Arc<InMemoryJobStore>,
    pub fetcher: Arc<MockPageFetcher>,
    pub clock: Arc<FixedClock>,
}

impl TestHarness {
    pub fn with_deps(test_deps: TestDependencies) -> Self {
        init_tracing();
        let store = test_deps.store.clone();
        let fetcher = test_deps.fetcher.clone();
        let clock = test_deps.clock.clone();
        Self {
            deps: test_deps.into_server_deps(),
            store,
            fetcher,
            clock,
        }
    }

    /// Harness whose store fails on demand.
    pub fn with_flaky_store(test_deps: TestDependencies) -> (Self, Arc<FlakyJobStore>) {
        init_tracing();
        let store = test_deps.store.clone();
        let fetcher = test_deps.fetcher.clone();
        let clock = test_deps.clock.clone();
        let flaky = Arc::new(FlakyJobStore::new(store.clone()));
        let front: Arc<dyn BaseJobStore> = flaky.clone();
        let harness = Self {
            deps: test_deps.into_server_deps_with_store(front),
            store,
            fetcher,
            clock,
        };
        (harness, flaky)
    }

    /// Register an active source created at the harness clock's time.
    pub fn register(&self, name: &str, url: &str) -> Source {
        let source = Source::new(name, url, self.clock.now());
        self.store.add_source(source.clone());
        source
    }

    pub fn source(&self, name: &str) -> Source {
        self.store
            .source_named(name)
            .unwrap_or_else(|| panic!("source {} not registered", name))
    }

    pub fn postings_for(&self, ministry: &str) -> Vec<JobPosting> {
        self.store
            .postings()
            .into_iter()
            .filter(|p| p.ministry == ministry)
            .collect()
    }
}

impl AsyncTestContext for TestHarness {
    async fn setup() -> Self {
        TestHarness::with_deps(TestDependencies::new())
    }

    async fn teardown(self) {}
}

/// Respect RUST_LOG in tests. Run with: RUST_LOG=debug cargo test -- --nocapture
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
