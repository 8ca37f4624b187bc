use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use url::Url;

use crate::common::SourceId;

/// Source - one ministry's recruitment board
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Source {
    pub id: SourceId,
    pub name: String,
    pub url: String,
    pub is_active: bool,
    pub last_checked_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Source {
    /// Build a new, active, never-polled source.
    pub fn new(name: impl Into<String>, url: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: SourceId::new(),
            name: name.into(),
            url: url.into(),
            is_active: true,
            last_checked_at: None,
            created_at,
        }
    }

    /// Board URL, used as the base when resolving relative detail links.
    pub fn base_url(&self) -> Result<Url> {
        Url::parse(&self.url).with_context(|| format!("Invalid source URL: {}", self.url))
    }

    pub async fn find_active(pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM sources WHERE is_active = true ORDER BY created_at, name",
        )
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn count(pool: &PgPool) -> Result<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM sources")
            .fetch_one(pool)
            .await
            .map_err(Into::into)
    }

    pub async fn insert(&self, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO sources (id, name, url, is_active, last_checked_at, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(self.id)
        .bind(&self.name)
        .bind(&self.url)
        .bind(self.is_active)
        .bind(self.last_checked_at)
        .bind(self.created_at)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn touch_last_checked(id: SourceId, at: DateTime<Utc>, pool: &PgPool) -> Result<()> {
        sqlx::query("UPDATE sources SET last_checked_at = $2 WHERE id = $1")
            .bind(id)
            .bind(at)
            .execute(pool)
            .await?;
        Ok(())
    }
}
