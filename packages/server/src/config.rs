use anyhow::{Context, Result};
use chrono::{FixedOffset, Offset, Utc};
use dotenvy::dotenv;
use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Browser-like identity sent with every board request. Several ministry
/// sites answer non-browser agents with an empty board.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Longest retention accepted from the environment, in days.
pub const MAX_RETENTION_DAYS: i64 = 3650;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: Option<String>,
    pub fetcher: FetcherConfig,
    pub scheduler: SchedulerConfig,
    pub ingest: IngestConfig,
}

/// HTTP settings for the board fetcher
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Timer settings for the poll loop and the retention sweep
#[derive(Debug, Clone)]
pub struct SchedulerConfig {
    pub poll_interval: Duration,
    pub retention_days: i64,
    /// Offset used to find "midnight" for the daily sweep.
    pub schedule_offset: FixedOffset,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(5 * 60),
            retention_days: 60,
            schedule_offset: kst(),
        }
    }
}

/// Per-cycle ingestion limits
#[derive(Debug, Clone)]
pub struct IngestConfig {
    /// Accepted candidates kept per source per cycle. Guards against an
    /// over-broad selector flooding the store.
    pub max_postings_per_source: usize,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            max_postings_per_source: 3,
        }
    }
}

/// Korea Standard Time, where every seeded board lives.
fn kst() -> FixedOffset {
    FixedOffset::east_opt(9 * 3600).unwrap_or_else(|| Utc.fix())
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let poll_minutes: u64 = parse_var("POLL_INTERVAL_MINUTES", 5)?;
        if poll_minutes == 0 {
            anyhow::bail!("POLL_INTERVAL_MINUTES must be greater than zero");
        }

        let retention_days = check_retention_days(parse_var("RETENTION_DAYS", 60)?)?;

        let offset_hours: i32 = parse_var("SCHEDULE_UTC_OFFSET_HOURS", 9)?;
        let schedule_offset = FixedOffset::east_opt(offset_hours * 3600)
            .with_context(|| format!("SCHEDULE_UTC_OFFSET_HOURS out of range: {}", offset_hours))?;

        Ok(Self {
            database_url: env::var("DATABASE_URL").ok().filter(|v| !v.is_empty()),
            fetcher: FetcherConfig {
                timeout: Duration::from_secs(parse_var("FETCH_TIMEOUT_SECS", 30)?),
                user_agent: env::var("SCRAPER_USER_AGENT")
                    .unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string()),
            },
            scheduler: SchedulerConfig {
                poll_interval: Duration::from_secs(poll_minutes * 60),
                retention_days,
                schedule_offset,
            },
            ingest: IngestConfig {
                max_postings_per_source: parse_var("MAX_POSTINGS_PER_SOURCE", 3)?,
            },
        })
    }
}

fn check_retention_days(days: i64) -> Result<i64> {
    if days <= 0 || days > MAX_RETENTION_DAYS {
        anyhow::bail!(
            "RETENTION_DAYS must be between 1 and {}, got {}",
            MAX_RETENTION_DAYS,
            days
        );
    }
    Ok(days)
}

fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} must be a valid number", name)),
        Err(_) => Ok(default),
    }
}
