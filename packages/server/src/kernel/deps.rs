//! Server dependencies for activities (using traits for testability)
//!
//! This module provides the central dependency container used by the poll
//! cycle and the retention sweep. All external services sit behind traits.

use std::sync::Arc;

use crate::config::IngestConfig;
use crate::domains::source::PolicyTable;
use crate::kernel::{BaseClock, BaseJobStore, BasePageFetcher, BaseRandom};

/// Server dependencies accessible to activities
#[derive(Clone)]
pub struct ServerDeps {
    pub store: Arc<dyn BaseJobStore>,
    pub fetcher: Arc<dyn BasePageFetcher>,
    pub clock: Arc<dyn BaseClock>,
    /// Used only for the head-count guess on titles without a number.
    pub random: Arc<dyn BaseRandom>,
    pub policies: Arc<PolicyTable>,
    pub ingest: IngestConfig,
}

impl ServerDeps {
    pub fn new(
        store: Arc<dyn BaseJobStore>,
        fetcher: Arc<dyn BasePageFetcher>,
        clock: Arc<dyn BaseClock>,
        random: Arc<dyn BaseRandom>,
        policies: Arc<PolicyTable>,
        ingest: IngestConfig,
    ) -> Self {
        Self {
            store,
            fetcher,
            clock,
            random,
            policies,
            ingest,
        }
    }
}
