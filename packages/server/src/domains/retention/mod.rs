//! Retention domain - retiring postings past their age limit

pub mod activities;

pub use activities::sweep_expired_postings;
