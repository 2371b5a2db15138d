use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// A persisted resume produced by the ingestion pipeline.
///
/// Salary figures come in two pairs: `min_salary`/`max_salary` hold the
/// KZT-normalized values used for comparison, `original_*` keep the figures
/// exactly as stated in the document. `resume_link` is always present: a
/// resume row is only written after the document upload succeeded.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub experience_time: f64,
    pub profession: Option<String>,
    pub education: Option<String>,
    pub skills: Vec<String>,
    pub languages: Option<Value>,
    pub awards: Vec<String>,
    pub projects: Vec<String>,
    pub courses: Vec<String>,
    pub summary: Option<String>,
    pub grade: Option<String>,
    pub min_salary: Option<f64>,
    pub max_salary: Option<f64>,
    pub original_min_salary: Option<f64>,
    pub original_max_salary: Option<f64>,
    pub original_currency: Option<String>,
    pub resume_link: String,
    pub created_at: DateTime<Utc>,
}

/// Insert payload assembled by the ingestion pipeline after analysis and
/// salary normalization. `id` and `created_at` are assigned by the repository.
#[derive(Debug, Clone)]
pub struct NewResume {
    pub user_id: Uuid,
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub experience_time: f64,
    pub profession: Option<String>,
    pub education: Option<String>,
    pub skills: Vec<String>,
    pub languages: Option<Value>,
    pub awards: Vec<String>,
    pub projects: Vec<String>,
    pub courses: Vec<String>,
    pub summary: Option<String>,
    pub grade: Option<String>,
    pub min_salary: Option<f64>,
    pub max_salary: Option<f64>,
    pub original_min_salary: Option<f64>,
    pub original_max_salary: Option<f64>,
    pub original_currency: Option<String>,
    pub resume_link: String,
}
