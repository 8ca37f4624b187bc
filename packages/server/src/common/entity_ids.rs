//! Typed ID aliases for the entities this crate persists.

pub use super::id::Id;

/// Marker type for a ministry job board.
pub struct MinistrySource;

/// Marker type for a stored recruitment announcement.
pub struct Posting;

pub type SourceId = Id<MinistrySource>;

pub type PostingId = Id<Posting>;
