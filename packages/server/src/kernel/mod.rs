//! Kernel module - server infrastructure and dependencies.

pub mod clock;
pub mod deps;
pub mod http_fetcher;
pub mod memory_store;
pub mod postgres_store;
pub mod random;
pub mod scheduled_tasks;
pub mod test_dependencies;
pub mod traits;

pub use clock::{retention_cutoff, until_next_midnight, FixedClock, SystemClock};
pub use deps::ServerDeps;
pub use http_fetcher::{FetchError, HttpPageFetcher};
pub use memory_store::InMemoryJobStore;
pub use postgres_store::PostgresJobStore;
pub use random::{FixedRandom, ThreadRandom};
pub use scheduled_tasks::{Scheduler, SchedulerHandle};
pub use test_dependencies::{FlakyJobStore, MockPageFetcher, TestDependencies};
pub use traits::*;
