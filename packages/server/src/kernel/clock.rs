//! Wall-clock implementations and schedule helpers.

use anyhow::{Context, Result};
use chrono::{DateTime, Duration as ChronoDuration, FixedOffset, TimeZone, Utc};
use std::sync::Mutex;
use std::time::Duration;

use super::BaseClock;

const ONE_DAY: Duration = Duration::from_secs(24 * 60 * 60);

pub struct SystemClock;

impl BaseClock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock that only moves when told to.
pub struct FixedClock {
    now: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock().unwrap() = now;
    }

    pub fn advance(&self, by: ChronoDuration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }
}

impl BaseClock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

/// Time from `now` until the next 00:00 in `offset`. Exactly at midnight this
/// is a full day.
pub fn until_next_midnight(now: DateTime<Utc>, offset: FixedOffset) -> Duration {
    let local = now.with_timezone(&offset);
    local
        .date_naive()
        .succ_opt()
        .and_then(|day| day.and_hms_opt(0, 0, 0))
        .and_then(|midnight| offset.from_local_datetime(&midnight).single())
        .and_then(|midnight| (midnight - local).to_std().ok())
        .unwrap_or(ONE_DAY)
}

/// Creation-time cutoff for a retention sweep: rows created before it expire.
/// Negative ages and ages that overflow the calendar are rejected.
pub fn retention_cutoff(now: DateTime<Utc>, age_days: i64) -> Result<DateTime<Utc>> {
    if age_days < 0 {
        anyhow::bail!("Retention age must not be negative: {} days", age_days);
    }
    ChronoDuration::try_days(age_days)
        .and_then(|age| now.checked_sub_signed(age))
        .with_context(|| format!("Retention age out of range: {} days", age_days))
}
