//! In-process job store.
//!
//! Used by tests and when no database is configured. Data lives only as long
//! as the process.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex};

use super::{retention_cutoff, BaseClock, BaseJobStore};
use crate::common::{PostingId, SourceId};
use crate::domains::postings::models::{JobPosting, NewJobPosting};
use crate::domains::source::{Source, SourceSeed};

pub struct InMemoryJobStore {
    clock: Arc<dyn BaseClock>,
    sources: Mutex<Vec<Source>>,
    postings: Mutex<Vec<JobPosting>>,
}

impl InMemoryJobStore {
    pub fn new(clock: Arc<dyn BaseClock>) -> Self {
        Self {
            clock,
            sources: Mutex::new(Vec::new()),
            postings: Mutex::new(Vec::new()),
        }
    }

    pub fn sources(&self) -> Vec<Source> {
        self.sources.lock().unwrap().clone()
    }

    pub fn postings(&self) -> Vec<JobPosting> {
        self.postings.lock().unwrap().clone()
    }

    pub fn source_named(&self, name: &str) -> Option<Source> {
        self.sources
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.name == name)
            .cloned()
    }

    pub fn add_source(&self, source: Source) {
        self.sources.lock().unwrap().push(source);
    }

    /// Insert a posting as-is, keeping its timestamps.
    pub fn insert_existing_posting(&self, posting: JobPosting) {
        self.postings.lock().unwrap().push(posting);
    }
}

#[async_trait]
impl BaseJobStore for InMemoryJobStore {
    async fn list_active_sources(&self) -> Result<Vec<Source>> {
        let mut active: Vec<Source> = self
            .sources
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.is_active)
            .cloned()
            .collect();
        active.sort_by(|a, b| (a.created_at, &a.name).cmp(&(b.created_at, &b.name)));
        Ok(active)
    }

    async fn posting_exists(&self, title: &str, ministry: &str) -> Result<bool> {
        Ok(self
            .postings
            .lock()
            .unwrap()
            .iter()
            .any(|p| p.title == title && p.ministry == ministry))
    }

    async fn insert_posting(&self, posting: NewJobPosting) -> Result<JobPosting> {
        let stored = posting.into_posting(PostingId::new(), self.clock.now());
        self.postings.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn touch_source_last_checked(&self, id: SourceId, at: DateTime<Utc>) -> Result<()> {
        let mut sources = self.sources.lock().unwrap();
        let source = sources
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| anyhow::anyhow!("Source not found: {}", id))?;
        source.last_checked_at = Some(at);
        Ok(())
    }

    async fn delete_postings_older_than(&self, age_days: i64, now: DateTime<Utc>) -> Result<u64> {
        let cutoff = retention_cutoff(now, age_days)?;
        let mut postings = self.postings.lock().unwrap();
        let before = postings.len();
        postings.retain(|p| p.created_at >= cutoff);
        Ok((before - postings.len()) as u64)
    }

    async fn ensure_sources(&self, seeds: &[SourceSeed]) -> Result<usize> {
        let mut sources = self.sources.lock().unwrap();
        if !sources.is_empty() {
            return Ok(0);
        }
        let now = self.clock.now();
        sources.extend(seeds.iter().map(|seed| Source::new(seed.name, seed.url, now)));
        Ok(seeds.len())
    }
}
