//! HTML → candidate notices.
//!
//! Parsing happens synchronously and only owned data leaves this module, so
//! callers can hold the result across `.await` points.

pub mod fields;
pub mod rows;

use scraper::Html;
use url::Url;

use crate::domains::source::LabelExtraction;
pub use fields::{parse_board_date, ExtractedFields};
use fields::{extract_fields, LabelPasses};
pub use rows::{find_candidate_rows, ROW_SELECTORS};

/// Everything extracted from one board page.
#[derive(Debug, Clone, Default)]
pub struct PageExtraction {
    /// Row pattern that matched, `None` when the page had no recognizable rows.
    pub pattern: Option<&'static str>,
    pub rows_seen: usize,
    pub candidates: Vec<ExtractedFields>,
}

impl PageExtraction {
    pub fn matched(&self) -> bool {
        self.pattern.is_some()
    }
}

pub fn extract_candidates(
    html: &str,
    base_url: &Url,
    label: Option<&LabelExtraction>,
) -> PageExtraction {
    let document = Html::parse_document(html);
    let Some(found) = find_candidate_rows(&document) else {
        return PageExtraction::default();
    };

    let passes = label.map(LabelPasses::compile);
    let candidates = found
        .rows
        .iter()
        .filter_map(|row| extract_fields(*row, base_url, passes.as_ref()))
        .collect();

    PageExtraction {
        pattern: Some(found.pattern),
        rows_seen: found.rows.len(),
        candidates,
    }
}
