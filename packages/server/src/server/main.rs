// Main entry point for the ministry job ingester

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use jobs_core::domains::postings::run_poll_cycle;
use jobs_core::domains::retention::sweep_expired_postings;
use jobs_core::domains::source::{PolicyTable, MINISTRY_SOURCES};
use jobs_core::kernel::{
    BaseClock, BaseJobStore, HttpPageFetcher, InMemoryJobStore, PostgresJobStore, Scheduler,
    ServerDeps, SystemClock, ThreadRandom,
};
use jobs_core::Config;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "ministry-jobs", about = "Ministry recruitment board ingester")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Seed sources and run the scheduler until Ctrl-C (default)
    Run,
    /// Run a single poll cycle and print its report as JSON
    PollOnce,
    /// Run a single retention sweep
    Sweep,
    /// Print the active source registry as JSON
    Sources,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,jobs_core=debug,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded");

    let clock: Arc<dyn BaseClock> = Arc::new(SystemClock);
    let store: Arc<dyn BaseJobStore> = match &config.database_url {
        Some(database_url) => {
            tracing::info!("Connecting to database...");
            let pool = PgPoolOptions::new()
                .max_connections(5)
                .connect(database_url)
                .await
                .context("Failed to connect to database")?;

            tracing::info!("Running database migrations...");
            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to run migrations")?;
            tracing::info!("Migrations complete");

            Arc::new(PostgresJobStore::new(pool, clock.clone()))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, postings are kept in memory only");
            Arc::new(InMemoryJobStore::new(clock.clone()))
        }
    };

    let seeded = store
        .ensure_sources(MINISTRY_SOURCES)
        .await
        .context("Failed to provision sources")?;
    if seeded > 0 {
        tracing::info!(count = seeded, "Seeded ministry sources");
    }

    let fetcher = HttpPageFetcher::new(&config.fetcher).context("Failed to build fetcher")?;
    let deps = ServerDeps::new(
        store,
        Arc::new(fetcher),
        clock,
        Arc::new(ThreadRandom),
        Arc::new(PolicyTable::standard()),
        config.ingest.clone(),
    );

    match cli.command.unwrap_or(Command::Run) {
        Command::Run => {
            let handle = Scheduler::new(deps, config.scheduler.clone()).start();
            tokio::signal::ctrl_c()
                .await
                .context("Failed to listen for Ctrl-C")?;
            tracing::info!("Shutdown requested");
            handle.stop().await?;
        }
        Command::PollOnce => {
            let report = run_poll_cycle(&deps).await;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Command::Sweep => {
            let deleted = sweep_expired_postings(&deps, config.scheduler.retention_days).await;
            println!("{}", serde_json::json!({ "deleted": deleted }));
        }
        Command::Sources => {
            let sources = deps.store.list_active_sources().await?;
            println!("{}", serde_json::to_string_pretty(&sources)?);
        }
    }

    Ok(())
}
