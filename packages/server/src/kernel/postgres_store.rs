//! Postgres-backed job store. Queries live on the models.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;
use tracing::info;

use super::{retention_cutoff, BaseClock, BaseJobStore};
use crate::common::SourceId;
use crate::domains::postings::models::{JobPosting, NewJobPosting};
use crate::domains::source::{Source, SourceSeed};

#[derive(Clone)]
pub struct PostgresJobStore {
    pool: PgPool,
    clock: Arc<dyn BaseClock>,
}

impl PostgresJobStore {
    pub fn new(pool: PgPool, clock: Arc<dyn BaseClock>) -> Self {
        Self { pool, clock }
    }
}

#[async_trait]
impl BaseJobStore for PostgresJobStore {
    async fn list_active_sources(&self) -> Result<Vec<Source>> {
        Source::find_active(&self.pool).await
    }

    async fn posting_exists(&self, title: &str, ministry: &str) -> Result<bool> {
        JobPosting::exists_for_ministry(title, ministry, &self.pool).await
    }

    async fn insert_posting(&self, posting: NewJobPosting) -> Result<JobPosting> {
        JobPosting::create(&posting, &self.pool).await
    }

    async fn touch_source_last_checked(&self, id: SourceId, at: DateTime<Utc>) -> Result<()> {
        Source::touch_last_checked(id, at, &self.pool).await
    }

    async fn delete_postings_older_than(&self, age_days: i64, now: DateTime<Utc>) -> Result<u64> {
        let cutoff = retention_cutoff(now, age_days)?;
        JobPosting::delete_created_before(cutoff, &self.pool).await
    }

    async fn ensure_sources(&self, seeds: &[SourceSeed]) -> Result<usize> {
        let existing = Source::count(&self.pool).await?;
        if existing > 0 {
            info!(existing, "Sources already provisioned");
            return Ok(0);
        }

        let now = self.clock.now();
        for seed in seeds {
            Source::new(seed.name, seed.url, now).insert(&self.pool).await?;
        }
        info!(count = seeds.len(), "Provisioned ministry sources");
        Ok(seeds.len())
    }
}
