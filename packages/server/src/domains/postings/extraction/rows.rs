//! Row extraction: find the repeating structure that holds a board's notices.

use lazy_static::lazy_static;
use scraper::{ElementRef, Html, Selector};

/// Board layouts seen on ministry sites, most specific first. `tbody tr` is the catch-all.
pub const ROW_SELECTORS: &[&str] = &[
    "table tbody tr",
    ".board-list tbody tr",
    ".list tbody tr",
    ".notice-list li",
    ".board tbody tr",
    ".tbl tbody tr",
    ".board_list tbody tr",
    ".bbs-list-body tr",
    ".board_type01 tbody tr",
    ".notice_list li",
    ".board_list tr",
    ".list_table tbody tr",
    "tbody tr",
];

lazy_static! {
    static ref ROW_PATTERNS: Vec<(&'static str, Selector)> = parse_selectors(ROW_SELECTORS);
}

/// Parse a selector list, dropping any pattern the CSS parser rejects.
pub(crate) fn parse_selectors(patterns: &[&'static str]) -> Vec<(&'static str, Selector)> {
    patterns
        .iter()
        .filter_map(|pattern| Selector::parse(pattern).ok().map(|sel| (*pattern, sel)))
        .collect()
}

/// Rows matched by the winning pattern.
#[derive(Debug)]
pub struct RowMatch<'a> {
    pub pattern: &'static str,
    pub rows: Vec<ElementRef<'a>>,
}

/// Use the first pattern that matches anything. Later patterns are never
/// consulted for the page, even if the winning rows turn out to be useless.
pub fn find_candidate_rows(document: &Html) -> Option<RowMatch<'_>> {
    ROW_PATTERNS.iter().find_map(|(pattern, selector)| {
        let rows: Vec<_> = document.select(selector).collect();
        if rows.is_empty() {
            None
        } else {
            Some(RowMatch {
                pattern: *pattern,
                rows,
            })
        }
    })
}
