//! Per-source scraping policy.
//!
//! Boards differ in how they mark hiring notices. Each source name maps to a
//! policy entry; sources without an entry get the general policy.

use std::collections::HashMap;

use crate::domains::postings::classifier::{
    ClassifierRule, BROAD_RECRUITMENT_KEYWORDS, NARROW_HIRING_KEYWORDS, NON_RECRUITMENT_KEYWORDS,
    STRONG_HR_KEYWORDS,
};

/// Extra title passes for boards that tag hiring notices with a bracket label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelExtraction {
    pub label: &'static str,
    /// Anchor on this board that points at the notice detail page.
    pub detail_link_selector: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourcePolicy {
    pub rule: ClassifierRule,
    pub label_extraction: Option<LabelExtraction>,
}

impl SourcePolicy {
    pub const fn general() -> Self {
        Self {
            rule: ClassifierRule::general(),
            label_extraction: None,
        }
    }

    pub const fn with_rule(rule: ClassifierRule) -> Self {
        Self {
            rule,
            label_extraction: None,
        }
    }
}

impl Default for SourcePolicy {
    fn default() -> Self {
        Self::general()
    }
}

/// Source name → policy lookup.
#[derive(Debug, Clone)]
pub struct PolicyTable {
    entries: HashMap<String, SourcePolicy>,
    fallback: SourcePolicy,
}

impl PolicyTable {
    /// Empty table: every source uses the general policy.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            fallback: SourcePolicy::general(),
        }
    }

    /// Built-in policies for the boards known to mix notice types.
    pub fn standard() -> Self {
        Self::new()
            .with_policy(
                "고용노동부",
                SourcePolicy {
                    rule: ClassifierRule::LabelOrKeywords {
                        label: "[인사]",
                        keywords: STRONG_HR_KEYWORDS,
                    },
                    label_extraction: Some(LabelExtraction {
                        label: "[인사]",
                        detail_link_selector: r#"a[href*="noticeView"]"#,
                    }),
                },
            )
            .with_policy(
                "행정안전부",
                SourcePolicy::with_rule(ClassifierRule::AllowList {
                    keywords: NARROW_HIRING_KEYWORDS,
                }),
            )
            .with_policy(
                "법제처",
                SourcePolicy::with_rule(ClassifierRule::AllowDeny {
                    allow: BROAD_RECRUITMENT_KEYWORDS,
                    deny: NON_RECRUITMENT_KEYWORDS,
                    override_word: "공고",
                }),
            )
    }

    pub fn with_policy(mut self, source_name: impl Into<String>, policy: SourcePolicy) -> Self {
        self.entries.insert(source_name.into(), policy);
        self
    }

    pub fn for_source(&self, source_name: &str) -> &SourcePolicy {
        self.entries.get(source_name).unwrap_or(&self.fallback)
    }
}

impl Default for PolicyTable {
    fn default() -> Self {
        Self::standard()
    }
}
