//! Scheduled background tasks.
//!
//! A single control loop owns both timers:
//! - the poll timer (fires immediately, then every poll interval)
//! - the retention timer (fires at the next local midnight, then every 24 hours)
//!
//! ```text
//! Scheduler::start()
//!     │
//!     └─► control loop (select!)
//!             ├─► poll tick   → run_poll_cycle()
//!             ├─► sweep tick  → sweep_expired_postings()
//!             └─► cancelled   → exit
//! ```
//!
//! Work dispatched by the loop runs to completion; stopping the scheduler
//! takes effect between tasks, never in the middle of a cycle.

use anyhow::{Context, Result};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval, interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use super::clock::until_next_midnight;
use super::ServerDeps;
use crate::config::SchedulerConfig;
use crate::domains::postings::run_poll_cycle;
use crate::domains::retention::sweep_expired_postings;

const SWEEP_PERIOD: Duration = Duration::from_secs(24 * 60 * 60);

pub struct Scheduler {
    deps: ServerDeps,
    config: SchedulerConfig,
}

impl Scheduler {
    pub fn new(deps: ServerDeps, config: SchedulerConfig) -> Self {
        Self { deps, config }
    }

    /// Spawn the control loop. Must be called inside a Tokio runtime.
    pub fn start(self) -> SchedulerHandle {
        let token = CancellationToken::new();
        let task = tokio::spawn(run_control_loop(self.deps, self.config, token.clone()));
        SchedulerHandle { token, task }
    }
}

/// Owner of a running scheduler.
pub struct SchedulerHandle {
    token: CancellationToken,
    task: JoinHandle<()>,
}

impl SchedulerHandle {
    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }

    /// Cancel the loop and wait for it to exit.
    pub async fn stop(self) -> Result<()> {
        self.token.cancel();
        self.task.await.context("Scheduler task panicked")?;
        info!("Scheduler stopped");
        Ok(())
    }
}

async fn run_control_loop(deps: ServerDeps, config: SchedulerConfig, token: CancellationToken) {
    let mut poll = interval(config.poll_interval);
    poll.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let first_sweep = until_next_midnight(deps.clock.now(), config.schedule_offset);
    let mut sweep = interval_at(Instant::now() + first_sweep, SWEEP_PERIOD);
    sweep.set_missed_tick_behavior(MissedTickBehavior::Delay);

    info!(
        poll_interval_secs = config.poll_interval.as_secs(),
        first_sweep_in_secs = first_sweep.as_secs(),
        retention_days = config.retention_days,
        "Scheduler started"
    );

    loop {
        tokio::select! {
            biased;
            _ = token.cancelled() => break,
            _ = poll.tick() => {
                let report = run_poll_cycle(&deps).await;
                if report.sources_polled > 0 && report.failed_sources == report.sources_polled {
                    warn!(failed = report.failed_sources, "Every source failed this cycle");
                }
            }
            _ = sweep.tick() => {
                sweep_expired_postings(&deps, config.retention_days).await;
            }
        }
    }
}
