use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Lifecycle of an application: `pending -> accepted` or `pending -> rejected`,
/// terminal once decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "application_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Pending,
    Accepted,
    Rejected,
}

/// A user's application to a vacancy, carrying the AI matching verdict.
/// At most one application exists per (user, vacancy) pair.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ApplicationRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub vacancy_id: Uuid,
    pub resume_id: Uuid,
    pub status: ApplicationStatus,
    /// AI-estimated fit, always within [0, 100].
    pub matching_score: i32,
    pub summary: Option<String>,
    /// Copy of the resume's document link, kept on the application for audit.
    pub resume_path: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert payload produced by the submission pipeline.
#[derive(Debug, Clone)]
pub struct NewApplication {
    pub user_id: Uuid,
    pub vacancy_id: Uuid,
    pub resume_id: Uuid,
    pub matching_score: i32,
    pub summary: String,
    pub resume_path: String,
}

/// Per-user listing projection: application status against the vacancy title.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ApplicationSummary {
    pub status: ApplicationStatus,
    pub vacancy_title: String,
    pub matching_score: i32,
}

/// Candidate projection shown to HR for a vacancy: the application joined
/// with the applicant's resume fields.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CandidateRow {
    pub application_id: Uuid,
    pub status: ApplicationStatus,
    pub matching_score: i32,
    pub summary: Option<String>,
    pub resume_path: String,
    pub resume_id: Uuid,
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub grade: Option<String>,
    pub experience_time: f64,
}
