//! Field extraction from a single candidate row.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use scraper::{ElementRef, Selector};
use tracing::debug;
use url::Url;

use super::rows::parse_selectors;
use crate::domains::source::LabelExtraction;

pub const TITLE_SELECTORS: &[&str] = &[
    ".title a",
    ".subject a",
    "td:nth-child(2) a",
    "td:nth-child(3) a",
    ".tit a",
    r#"a[href*="view"]"#,
    r#"a[href*="detail"]"#,
    "td a",
    "td:first-child + td a",
    ".subject",
    "td:nth-child(2)",
    "td:nth-child(3)",
];

pub const DATE_SELECTORS: &[&str] = &[
    ".date",
    ".reg_date",
    "td:nth-child(4)",
    "td:nth-child(5)",
    "td:last-child",
];

lazy_static! {
    static ref TITLE_PATTERNS: Vec<(&'static str, Selector)> = parse_selectors(TITLE_SELECTORS);
    static ref DATE_PATTERNS: Vec<(&'static str, Selector)> = parse_selectors(DATE_SELECTORS);
    static ref CELL: Selector = Selector::parse("td").unwrap();
    static ref ANCHOR: Selector = Selector::parse("a").unwrap();
    static ref DATE: Regex =
        Regex::new(r"(\d{4})\s*[./-]\s*(\d{1,2})\s*[./-]\s*(\d{1,2})").unwrap();
}

/// What one row yields before classification.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedFields {
    pub title: String,
    pub date_text: Option<String>,
    pub posted_on: Option<NaiveDate>,
    pub detail_url: Option<Url>,
}

/// Compiled form of a source's bracket-label passes.
pub(crate) struct LabelPasses {
    label: &'static str,
    trailing_date: Option<Regex>,
    detail_link: Option<Selector>,
}

impl LabelPasses {
    pub(crate) fn compile(extraction: &LabelExtraction) -> Self {
        let pattern = format!(
            r"{}\s*(.+?)(?:\s+\d{{4}}\.\d{{2}}\.\d{{2}}|$)",
            regex::escape(extraction.label)
        );
        let trailing_date = Regex::new(&pattern).ok();
        let detail_link = Selector::parse(extraction.detail_link_selector).ok();
        if detail_link.is_none() {
            debug!(
                selector = extraction.detail_link_selector,
                "Ignoring unparseable detail link selector"
            );
        }
        Self {
            label: extraction.label,
            trailing_date,
            detail_link,
        }
    }

    /// Returns a replacement title, if any pass finds the label.
    fn apply(&self, row: ElementRef<'_>, title: &str) -> Option<String> {
        // A labelled cell always wins over the generic selectors.
        if let Some(cell) = row
            .select(&CELL)
            .map(element_text)
            .find(|text| text.contains(self.label))
        {
            return Some(cell);
        }
        if !title.is_empty() {
            return None;
        }

        let row_text = row_text(row);
        if !row_text.contains(self.label) {
            return None;
        }
        if let Some(rest) = self
            .trailing_date
            .as_ref()
            .and_then(|regex| regex.captures(&row_text))
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim())
            .filter(|rest| !rest.is_empty())
        {
            return Some(format!("{} {}", self.label, rest));
        }
        if let Some(link_text) = self.detail_link.as_ref().and_then(|selector| {
            row.select(selector)
                .map(element_text)
                .find(|text| text.contains(self.label))
        }) {
            return Some(link_text);
        }
        Some(row_text)
    }
}

/// Extract fields from one row. Rows without any title text yield `None`.
pub(crate) fn extract_fields(
    row: ElementRef<'_>,
    base_url: &Url,
    label: Option<&LabelPasses>,
) -> Option<ExtractedFields> {
    let mut title = first_text(row, &TITLE_PATTERNS).unwrap_or_default();
    if let Some(replacement) = label.and_then(|passes| passes.apply(row, &title)) {
        title = replacement;
    }
    if title.is_empty() {
        return None;
    }

    let date_text = first_text(row, &DATE_PATTERNS);
    let posted_on = date_text.as_deref().and_then(parse_board_date);

    Some(ExtractedFields {
        title,
        date_text,
        posted_on,
        detail_url: detail_link(row, base_url),
    })
}

/// Parse `YYYY.MM.DD`, `YYYY-MM-DD` or `YYYY/MM/DD` anywhere in the text.
pub fn parse_board_date(text: &str) -> Option<NaiveDate> {
    let caps = DATE.captures(text)?;
    let year = caps[1].parse().ok()?;
    let month = caps[2].parse().ok()?;
    let day = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn first_text(row: ElementRef<'_>, patterns: &[(&'static str, Selector)]) -> Option<String> {
    patterns.iter().find_map(|(_, selector)| {
        row.select(selector)
            .map(element_text)
            .find(|text| !text.is_empty())
    })
}

/// First anchor's href, resolved against the board URL. Script links are dropped.
fn detail_link(row: ElementRef<'_>, base_url: &Url) -> Option<Url> {
    let href = row.select(&ANCHOR).next()?.value().attr("href")?.trim();
    if href.is_empty() {
        return None;
    }
    base_url
        .join(href)
        .ok()
        .filter(|url| url.scheme() == "http" || url.scheme() == "https")
}

fn element_text(element: ElementRef<'_>) -> String {
    collapse_whitespace(&element.text().collect::<String>())
}

/// Row text with a space between text nodes, so adjacent cells stay apart.
fn row_text(row: ElementRef<'_>) -> String {
    collapse_whitespace(&row.text().collect::<Vec<_>>().join(" "))
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
