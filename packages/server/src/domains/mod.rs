// Business domains
pub mod postings;
pub mod retention;
pub mod source;
