//! Resume ingestion pipeline.
//!
//! `uploaded -> stored(blob) -> text-extracted -> analyzed ->
//! salary-normalized -> persisted`, strictly in that order. The upload runs
//! first so a storage failure short-circuits before any model cost; the row
//! is written exactly once, after every upstream stage succeeded. There is
//! no compensating delete of the uploaded document when a later stage fails.

use bytes::Bytes;
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::llm_client::ChatModel;
use crate::models::resume::{NewResume, ResumeRow};
use crate::pdf;
use crate::rates::salary::{normalize_salary, CANONICAL_CURRENCY};
use crate::rates::RateSource;
use crate::repo::ResumeRepo;
use crate::resume::analyzer::analyze_resume;
use crate::storage::DocumentStore;

pub async fn create_resume(
    storage: &dyn DocumentStore,
    model: &dyn ChatModel,
    rates: &dyn RateSource,
    resumes: &dyn ResumeRepo,
    user_id: Uuid,
    file_name: Option<&str>,
    content: Bytes,
) -> Result<ResumeRow, AppError> {
    info!("processing resume upload for user {user_id}");

    let key = match file_name {
        Some(name) if !name.trim().is_empty() => format!("resumes/{user_id}/{name}"),
        _ => format!("resumes/{user_id}/{}.pdf", Uuid::new_v4()),
    };
    let resume_link = storage.store(&key, content.clone(), "application/pdf").await?;

    let resume_text = pdf::extract_text(&content)?;
    ingest_extracted_text(model, rates, resumes, user_id, &resume_text, resume_link).await
}

/// The stages downstream of text extraction: analysis, salary normalization,
/// and the single terminal write.
async fn ingest_extracted_text(
    model: &dyn ChatModel,
    rates: &dyn RateSource,
    resumes: &dyn ResumeRepo,
    user_id: Uuid,
    resume_text: &str,
    resume_link: String,
) -> Result<ResumeRow, AppError> {
    let candidate = analyze_resume(model, resume_text).await?;

    let currency = candidate
        .currency
        .clone()
        .unwrap_or_else(|| CANONICAL_CURRENCY.to_string());
    let (min_salary, max_salary) =
        normalize_salary(rates, candidate.min_salary, candidate.max_salary, &currency).await;

    let languages: Option<Value> = candidate
        .languages
        .as_ref()
        .and_then(|map| serde_json::to_value(map).ok());

    let row = resumes
        .create(NewResume {
            user_id,
            first_name: candidate.first_name.unwrap_or_default(),
            last_name: candidate.last_name,
            email: candidate.email,
            phone: candidate.phone,
            experience_time: candidate.experience_time.unwrap_or(0.0),
            profession: candidate.profession,
            education: candidate.education,
            skills: candidate.skills.unwrap_or_default(),
            languages,
            awards: candidate.awards.unwrap_or_default(),
            projects: candidate.projects.unwrap_or_default(),
            courses: candidate.courses.unwrap_or_default(),
            summary: candidate.summary,
            grade: candidate.grade,
            min_salary,
            max_salary,
            original_min_salary: candidate.min_salary,
            original_max_salary: candidate.max_salary,
            original_currency: candidate.currency,
            resume_link,
        })
        .await?;

    info!("resume {} persisted for user {user_id}", row.id);
    Ok(row)
}
