//! Relevance classifier.
//!
//! Government boards interleave administrative notices with hiring notices,
//! so the decision is a keyword rule chosen per source. Every rule is a pure
//! function of the title text.

/// Strong HR vocabulary used by boards that label hiring notices with a bracket tag.
pub const STRONG_HR_KEYWORDS: &[&str] = &[
    "인사", "채용", "모집", "임용", "선발", "공무원", "직원", "임기제", "공무직", "근로자", "계약직",
];

pub const NARROW_HIRING_KEYWORDS: &[&str] = &["채용", "임기제", "공무직", "근로자"];

pub const BROAD_RECRUITMENT_KEYWORDS: &[&str] = &[
    "채용", "임기제", "공무직", "근로자", "모집", "경력경쟁", "선발", "시험", "임용", "공고",
    "기간제", "계약직", "정규직", "공무원", "직원", "연구원", "전문위원", "사무보조", "실무원",
    "전문임기제",
];

/// Event, procurement and planning notices that share a board with hiring notices.
pub const NON_RECRUITMENT_KEYWORDS: &[&str] = &[
    "입찰", "설명회", "간담회", "토론회", "교육", "세미나", "워크숍", "포럼", "컨퍼런스", "예산",
    "사업계획", "보고서",
];

pub const GENERAL_RECRUITMENT_KEYWORDS: &[&str] = &[
    "채용", "모집", "공고", "선발", "임용", "신규", "경력", "계약직", "정규직", "인턴", "공무원",
    "직원", "연구원", "전문위원", "임기제", "공무직", "근로자",
];

/// Keyword rule deciding whether a title is a recruitment notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifierRule {
    /// Accept when the title carries the bracket label or any keyword.
    LabelOrKeywords {
        label: &'static str,
        keywords: &'static [&'static str],
    },
    /// Accept when the title contains any keyword.
    AllowList { keywords: &'static [&'static str] },
    /// Accept when an allow keyword is present and no deny keyword is,
    /// unless the override word appears in which case deny is ignored.
    AllowDeny {
        allow: &'static [&'static str],
        deny: &'static [&'static str],
        override_word: &'static str,
    },
}

impl ClassifierRule {
    pub const fn general() -> Self {
        ClassifierRule::AllowList {
            keywords: GENERAL_RECRUITMENT_KEYWORDS,
        }
    }

    pub fn accepts(&self, title: &str) -> bool {
        match self {
            ClassifierRule::LabelOrKeywords { label, keywords } => {
                title.contains(label) || contains_any(title, keywords)
            }
            ClassifierRule::AllowList { keywords } => contains_any(title, keywords),
            ClassifierRule::AllowDeny {
                allow,
                deny,
                override_word,
            } => {
                if !contains_any(title, allow) {
                    return false;
                }
                title.contains(override_word) || !contains_any(title, deny)
            }
        }
    }
}

fn contains_any(title: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| title.contains(keyword))
}
