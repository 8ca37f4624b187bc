//! Record synthesis: turn an accepted title into a full posting.
//!
//! Every structured field is inferred from the title alone. Board list pages
//! do not expose department, location or deadline in a consistent shape, so
//! those are filled with fixed defaults and a fixed application window.

use chrono::{DateTime, Duration, Utc};
use lazy_static::lazy_static;
use regex::Regex;

use crate::domains::postings::extraction::ExtractedFields;
use crate::domains::postings::models::{EmploymentType, JobType, NewJobPosting};
use crate::domains::source::Source;
use crate::kernel::BaseRandom;

pub const APPLICATION_WINDOW_DAYS: i64 = 30;

pub const DEFAULT_DEPARTMENT: &str = "기획조정실";
pub const DEFAULT_LOCATION: &str = "서울특별시";
pub const DEFAULT_REQUIREMENTS: &str = "해당 분야 전공자 또는 관련 경력자";
pub const DEFAULT_PREFERRED: &str = "관련 자격증 소지자 우대";
pub const DEFAULT_CONTACT: &str = "해당 부처 인사담당부서";

/// Range of the head-count guess when the title has no number.
pub const ESTIMATED_POSITIONS: (i32, i32) = (1, 3);

lazy_static! {
    static ref HEAD_COUNT: Regex = Regex::new(r"(\d+)명|(\d+)인").unwrap();
}

pub fn infer_job_type(title: &str) -> JobType {
    if title.contains("연구") {
        JobType::Research
    } else if title.contains("기술") {
        JobType::Technical
    } else if title.contains("전문") {
        JobType::Specialist
    } else if title.contains("계약") {
        JobType::Contract
    } else {
        JobType::Administrative
    }
}

pub fn infer_employment_type(title: &str) -> EmploymentType {
    if title.contains("계약") || title.contains("임시") {
        EmploymentType::Contract
    } else if title.contains("인턴") || title.contains("파견") {
        EmploymentType::Intern
    } else {
        EmploymentType::FullTime
    }
}

/// First `N명` / `N인` head count in the title.
pub fn parse_positions(title: &str) -> Option<i32> {
    let caps = HEAD_COUNT.captures(title)?;
    caps.get(1)
        .or_else(|| caps.get(2))
        .and_then(|m| m.as_str().parse().ok())
}

pub fn is_urgent(title: &str) -> bool {
    title.contains("긴급") || title.contains("특별")
}

pub fn synthesize_posting(
    fields: &ExtractedFields,
    source: &Source,
    now: DateTime<Utc>,
    random: &dyn BaseRandom,
) -> NewJobPosting {
    let title = fields.title.clone();
    let (positions, positions_estimated) = match parse_positions(&title) {
        Some(count) => (count, false),
        None => {
            let (low, high) = ESTIMATED_POSITIONS;
            (random.range_inclusive(low, high), true)
        }
    };

    NewJobPosting {
        department: DEFAULT_DEPARTMENT.to_string(),
        job_type: infer_job_type(&title),
        employment_type: infer_employment_type(&title),
        location: DEFAULT_LOCATION.to_string(),
        positions,
        positions_estimated,
        description: format!("{} - {}에서 모집하는 채용공고입니다.", title, source.name),
        requirements: DEFAULT_REQUIREMENTS.to_string(),
        preferred_qualifications: DEFAULT_PREFERRED.to_string(),
        application_period_start: now,
        application_period_end: now + Duration::days(APPLICATION_WINDOW_DAYS),
        contact: DEFAULT_CONTACT.to_string(),
        original_url: fields
            .detail_url
            .as_ref()
            .map(|url| url.to_string())
            .unwrap_or_else(|| source.url.clone()),
        pdf_url: format!("/api/pdfs/{}-{}.pdf", source.name, now.timestamp_millis()),
        is_urgent: is_urgent(&title),
        ministry: source.name.clone(),
        title,
    }
}
