use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::PostingId;

/// Job posting - a normalized recruitment notice
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct JobPosting {
    pub id: PostingId,
    pub title: String,
    pub ministry: String,
    pub department: String,
    pub job_type: String,
    pub employment_type: String,
    pub location: String,
    pub positions: i32,
    /// True when no head count was found in the title and `positions` is a guess.
    pub positions_estimated: bool,
    pub description: String,
    pub requirements: String,
    pub preferred_qualifications: String,
    pub application_period_start: DateTime<Utc>,
    pub application_period_end: DateTime<Utc>,
    pub contact: String,
    pub original_url: String,
    pub pdf_url: String,
    pub is_urgent: bool,
    pub is_new: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A synthesized posting that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewJobPosting {
    pub title: String,
    pub ministry: String,
    pub department: String,
    pub job_type: JobType,
    pub employment_type: EmploymentType,
    pub location: String,
    pub positions: i32,
    pub positions_estimated: bool,
    pub description: String,
    pub requirements: String,
    pub preferred_qualifications: String,
    pub application_period_start: DateTime<Utc>,
    pub application_period_end: DateTime<Utc>,
    pub contact: String,
    pub original_url: String,
    pub pdf_url: String,
    pub is_urgent: bool,
}

impl NewJobPosting {
    /// Materialize the stored row. New rows are always flagged `is_new`.
    pub fn into_posting(self, id: PostingId, now: DateTime<Utc>) -> JobPosting {
        JobPosting {
            id,
            title: self.title,
            ministry: self.ministry,
            department: self.department,
            job_type: self.job_type.to_string(),
            employment_type: self.employment_type.to_string(),
            location: self.location,
            positions: self.positions,
            positions_estimated: self.positions_estimated,
            description: self.description,
            requirements: self.requirements,
            preferred_qualifications: self.preferred_qualifications,
            application_period_start: self.application_period_start,
            application_period_end: self.application_period_end,
            contact: self.contact,
            original_url: self.original_url,
            pdf_url: self.pdf_url,
            is_urgent: self.is_urgent,
            is_new: true,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Job category, stored as its Korean label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobType {
    Research,
    Technical,
    Specialist,
    Contract,
    Administrative,
}

impl std::fmt::Display for JobType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobType::Research => write!(f, "연구직"),
            JobType::Technical => write!(f, "기술직"),
            JobType::Specialist => write!(f, "전문직"),
            JobType::Contract => write!(f, "계약직"),
            JobType::Administrative => write!(f, "행정직"),
        }
    }
}

impl std::str::FromStr for JobType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "연구직" => Ok(JobType::Research),
            "기술직" => Ok(JobType::Technical),
            "전문직" => Ok(JobType::Specialist),
            "계약직" => Ok(JobType::Contract),
            "행정직" => Ok(JobType::Administrative),
            _ => Err(anyhow::anyhow!("Invalid job type: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmploymentType {
    Contract,
    Intern,
    FullTime,
}

impl std::fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmploymentType::Contract => write!(f, "계약직"),
            EmploymentType::Intern => write!(f, "인턴"),
            EmploymentType::FullTime => write!(f, "정규직"),
        }
    }
}

impl std::str::FromStr for EmploymentType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "계약직" => Ok(EmploymentType::Contract),
            "인턴" => Ok(EmploymentType::Intern),
            "정규직" => Ok(EmploymentType::FullTime),
            _ => Err(anyhow::anyhow!("Invalid employment type: {}", s)),
        }
    }
}

impl JobPosting {
    pub async fn exists_for_ministry(title: &str, ministry: &str, pool: &PgPool) -> Result<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM job_postings WHERE title = $1 AND ministry = $2)",
        )
        .bind(title)
        .bind(ministry)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn create(posting: &NewJobPosting, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO job_postings (
                id, title, ministry, department, job_type, employment_type, location,
                positions, positions_estimated, description, requirements,
                preferred_qualifications, application_period_start, application_period_end,
                contact, original_url, pdf_url, is_urgent, is_new
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18, true)
            RETURNING *
            "#,
        )
        .bind(PostingId::new())
        .bind(&posting.title)
        .bind(&posting.ministry)
        .bind(&posting.department)
        .bind(posting.job_type.to_string())
        .bind(posting.employment_type.to_string())
        .bind(&posting.location)
        .bind(posting.positions)
        .bind(posting.positions_estimated)
        .bind(&posting.description)
        .bind(&posting.requirements)
        .bind(&posting.preferred_qualifications)
        .bind(posting.application_period_start)
        .bind(posting.application_period_end)
        .bind(&posting.contact)
        .bind(&posting.original_url)
        .bind(&posting.pdf_url)
        .bind(posting.is_urgent)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    /// Delete every posting created before `cutoff`. Returns rows deleted.
    pub async fn delete_created_before(cutoff: DateTime<Utc>, pool: &PgPool) -> Result<u64> {
        let result = sqlx::query("DELETE FROM job_postings WHERE created_at < $1")
            .bind(cutoff)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
