use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Review state of a vacancy.
///
/// `under_review -> accepted` or `under_review -> rejected`; editing a
/// rejected vacancy sends it back to review. An accepted vacancy is
/// immutable to edits and deletes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "vacancy_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum VacancyStatus {
    UnderReview,
    Accepted,
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "employment_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Internship,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "experience_band", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ExperienceBand {
    NoExperience,
    OneToThreeYears,
    ThreeToFiveYears,
    MoreThanFiveYears,
}

impl ExperienceBand {
    /// Human-readable label used in matching prompts.
    pub fn label(&self) -> &'static str {
        match self {
            ExperienceBand::NoExperience => "No experience",
            ExperienceBand::OneToThreeYears => "1-3 years",
            ExperienceBand::ThreeToFiveYears => "3-5 years",
            ExperienceBand::MoreThanFiveYears => "More than 5 years",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "job_format", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum JobFormat {
    Office,
    Remote,
    Hybrid,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct VacancyRow {
    pub id: Uuid,
    pub hr_id: Uuid,
    pub company: String,
    /// Advertised profession.
    pub title: String,
    /// Advertised grade (Junior/Middle/Senior/...).
    pub position: String,
    pub description: String,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
    pub location: String,
    pub employment_type: EmploymentType,
    pub experience_band: ExperienceBand,
    pub job_format: JobFormat,
    pub skills: String,
    pub telegram: Option<String>,
    pub whatsapp: Option<String>,
    pub contact_email: Option<String>,
    pub status: VacancyStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields HR supplies when creating or editing a vacancy. Status, ownership,
/// and timestamps are managed by the service and repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VacancyDraft {
    pub title: String,
    pub position: String,
    pub description: String,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
    pub location: String,
    pub employment_type: EmploymentType,
    pub experience_band: ExperienceBand,
    pub job_format: JobFormat,
    pub skills: String,
    pub telegram: Option<String>,
    pub whatsapp: Option<String>,
    pub contact_email: Option<String>,
}
