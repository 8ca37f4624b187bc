pub mod sweep_expired;

pub use sweep_expired::sweep_expired_postings;
