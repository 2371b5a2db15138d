//! In-memory doubles shared by the service-level tests.
//!
//! Every pipeline collaborator sits behind a trait, so tests wire the
//! orchestration against these instead of Postgres/S3/the Anthropic API.
//! The scripted model counts its invocations; several tests assert that
//! guard failures never reach the model.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use bytes::Bytes;
use chrono::Utc;
use uuid::Uuid;

use crate::llm_client::{ChatModel, LlmError};
use crate::models::application::{
    ApplicationRow, ApplicationStatus, ApplicationSummary, CandidateRow, NewApplication,
};
use crate::models::resume::{NewResume, ResumeRow};
use crate::models::vacancy::{
    EmploymentType, ExperienceBand, JobFormat, VacancyDraft, VacancyRow, VacancyStatus,
};
use crate::rates::{RateFeedError, RateSource};
use crate::repo::{ApplicationRepo, RepoError, ResumeRepo, VacancyRepo};
use crate::storage::{DocumentStore, StorageError};

// ── Model double ────────────────────────────────────────────────────────────

/// Replays canned model outputs in order and counts invocations.
pub struct ScriptedModel {
    responses: Mutex<VecDeque<String>>,
    calls: AtomicUsize,
}

impl ScriptedModel {
    pub fn with_responses(responses: Vec<String>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ChatModel for ScriptedModel {
    async fn complete(&self, _system: &str, _prompt: &str) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or(LlmError::EmptyContent)
    }
}

// ── Storage double ──────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MemoryStore {
    uploads: Mutex<Vec<String>>,
    fail: bool,
}

impl MemoryStore {
    pub fn failing() -> Self {
        Self {
            uploads: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn uploads(&self) -> Vec<String> {
        self.uploads.lock().unwrap().clone()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn store(
        &self,
        key: &str,
        _content: Bytes,
        _content_type: &str,
    ) -> Result<String, StorageError> {
        if self.fail {
            return Err(StorageError("container unavailable".to_string()));
        }
        self.uploads.lock().unwrap().push(key.to_string());
        Ok(format!("https://blob.test/{key}"))
    }
}

// ── Rate feed double ────────────────────────────────────────────────────────

pub struct StaticRates(Option<f64>);

impl StaticRates {
    pub fn rate(rate: f64) -> Self {
        Self(Some(rate))
    }

    pub fn not_found() -> Self {
        Self(None)
    }
}

#[async_trait]
impl RateSource for StaticRates {
    async fn tenge_rate(&self, _currency: &str) -> Result<Option<f64>, RateFeedError> {
        Ok(self.0)
    }
}

// ── Repository doubles ──────────────────────────────────────────────────────

#[derive(Default)]
pub struct MemoryResumeRepo {
    rows: Mutex<Vec<ResumeRow>>,
}

impl MemoryResumeRepo {
    pub fn rows(&self) -> Vec<ResumeRow> {
        self.rows.lock().unwrap().clone()
    }

    pub fn push(&self, row: ResumeRow) -> ResumeRow {
        self.rows.lock().unwrap().push(row.clone());
        row
    }
}

#[async_trait]
impl ResumeRepo for MemoryResumeRepo {
    async fn create(&self, resume: NewResume) -> Result<ResumeRow, RepoError> {
        let row = ResumeRow {
            id: Uuid::new_v4(),
            user_id: resume.user_id,
            first_name: resume.first_name,
            last_name: resume.last_name,
            email: resume.email,
            phone: resume.phone,
            experience_time: resume.experience_time,
            profession: resume.profession,
            education: resume.education,
            skills: resume.skills,
            languages: resume.languages,
            awards: resume.awards,
            projects: resume.projects,
            courses: resume.courses,
            summary: resume.summary,
            grade: resume.grade,
            min_salary: resume.min_salary,
            max_salary: resume.max_salary,
            original_min_salary: resume.original_min_salary,
            original_max_salary: resume.original_max_salary,
            original_currency: resume.original_currency,
            resume_link: resume.resume_link,
            created_at: Utc::now(),
        };
        self.rows.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn get(&self, id: Uuid) -> Result<Option<ResumeRow>, RepoError> {
        Ok(self.rows().into_iter().find(|r| r.id == id))
    }

    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<ResumeRow>, RepoError> {
        Ok(self
            .rows()
            .into_iter()
            .filter(|r| r.user_id == user_id)
            .collect())
    }
}

#[derive(Default)]
pub struct MemoryVacancyRepo {
    rows: Mutex<Vec<VacancyRow>>,
}

impl MemoryVacancyRepo {
    pub fn rows(&self) -> Vec<VacancyRow> {
        self.rows.lock().unwrap().clone()
    }

    pub fn push(&self, row: VacancyRow) -> VacancyRow {
        self.rows.lock().unwrap().push(row.clone());
        row
    }

    /// Inserts a vacancy built from a draft with the given status.
    pub fn seed(&self, draft: VacancyDraft, status: VacancyStatus) -> VacancyRow {
        let mut row = row_from_draft(Uuid::new_v4(), "Acme", &draft);
        row.status = status;
        self.push(row)
    }
}

fn row_from_draft(hr_id: Uuid, company: &str, draft: &VacancyDraft) -> VacancyRow {
    VacancyRow {
        id: Uuid::new_v4(),
        hr_id,
        company: company.to_string(),
        title: draft.title.clone(),
        position: draft.position.clone(),
        description: draft.description.clone(),
        salary_min: draft.salary_min,
        salary_max: draft.salary_max,
        location: draft.location.clone(),
        employment_type: draft.employment_type,
        experience_band: draft.experience_band,
        job_format: draft.job_format,
        skills: draft.skills.clone(),
        telegram: draft.telegram.clone(),
        whatsapp: draft.whatsapp.clone(),
        contact_email: draft.contact_email.clone(),
        status: VacancyStatus::UnderReview,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

#[async_trait]
impl VacancyRepo for MemoryVacancyRepo {
    async fn create(
        &self,
        hr_id: Uuid,
        company: &str,
        draft: &VacancyDraft,
    ) -> Result<VacancyRow, RepoError> {
        Ok(self.push(row_from_draft(hr_id, company, draft)))
    }

    async fn get(&self, id: Uuid) -> Result<Option<VacancyRow>, RepoError> {
        Ok(self.rows().into_iter().find(|v| v.id == id))
    }

    async fn update_draft(
        &self,
        id: Uuid,
        draft: &VacancyDraft,
        status: VacancyStatus,
    ) -> Result<VacancyRow, RepoError> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|v| v.id == id)
            .ok_or(RepoError::Database(sqlx::Error::RowNotFound))?;
        row.title = draft.title.clone();
        row.position = draft.position.clone();
        row.description = draft.description.clone();
        row.salary_min = draft.salary_min;
        row.salary_max = draft.salary_max;
        row.location = draft.location.clone();
        row.employment_type = draft.employment_type;
        row.experience_band = draft.experience_band;
        row.job_format = draft.job_format;
        row.skills = draft.skills.clone();
        row.telegram = draft.telegram.clone();
        row.whatsapp = draft.whatsapp.clone();
        row.contact_email = draft.contact_email.clone();
        row.status = status;
        row.updated_at = Utc::now();
        Ok(row.clone())
    }

    async fn update_status(
        &self,
        id: Uuid,
        status: VacancyStatus,
    ) -> Result<VacancyRow, RepoError> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|v| v.id == id)
            .ok_or(RepoError::Database(sqlx::Error::RowNotFound))?;
        row.status = status;
        row.updated_at = Utc::now();
        Ok(row.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        self.rows.lock().unwrap().retain(|v| v.id != id);
        Ok(())
    }

    async fn list_by_status(&self, status: VacancyStatus) -> Result<Vec<VacancyRow>, RepoError> {
        Ok(self
            .rows()
            .into_iter()
            .filter(|v| v.status == status)
            .collect())
    }

    async fn list_for_hr(&self, hr_id: Uuid) -> Result<Vec<VacancyRow>, RepoError> {
        Ok(self
            .rows()
            .into_iter()
            .filter(|v| v.hr_id == hr_id)
            .collect())
    }
}

#[derive(Default)]
pub struct MemoryApplicationRepo {
    rows: Mutex<Vec<ApplicationRow>>,
}

impl MemoryApplicationRepo {
    pub fn rows(&self) -> Vec<ApplicationRow> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl ApplicationRepo for MemoryApplicationRepo {
    async fn create(&self, application: NewApplication) -> Result<ApplicationRow, RepoError> {
        let row = ApplicationRow {
            id: Uuid::new_v4(),
            user_id: application.user_id,
            vacancy_id: application.vacancy_id,
            resume_id: application.resume_id,
            status: ApplicationStatus::Pending,
            matching_score: application.matching_score,
            summary: Some(application.summary),
            resume_path: application.resume_path,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        self.rows.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn get(&self, id: Uuid) -> Result<Option<ApplicationRow>, RepoError> {
        Ok(self.rows().into_iter().find(|a| a.id == id))
    }

    async fn exists_for(&self, user_id: Uuid, vacancy_id: Uuid) -> Result<bool, RepoError> {
        Ok(self
            .rows()
            .iter()
            .any(|a| a.user_id == user_id && a.vacancy_id == vacancy_id))
    }

    async fn update_status(
        &self,
        id: Uuid,
        status: ApplicationStatus,
    ) -> Result<ApplicationRow, RepoError> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(RepoError::Database(sqlx::Error::RowNotFound))?;
        row.status = status;
        row.updated_at = Utc::now();
        Ok(row.clone())
    }

    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<ApplicationSummary>, RepoError> {
        Ok(self
            .rows()
            .into_iter()
            .filter(|a| a.user_id == user_id)
            .map(|a| ApplicationSummary {
                status: a.status,
                vacancy_title: String::new(),
                matching_score: a.matching_score,
            })
            .collect())
    }

    async fn candidates_for_vacancy(
        &self,
        _vacancy_id: Uuid,
    ) -> Result<Vec<CandidateRow>, RepoError> {
        Ok(Vec::new())
    }
}

// ── Fixtures ────────────────────────────────────────────────────────────────

pub fn resume_row() -> ResumeRow {
    ResumeRow {
        id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        first_name: "Aigerim".to_string(),
        last_name: Some("Satpaeva".to_string()),
        email: Some("aigerim@example.com".to_string()),
        phone: Some("+7 701 000 11 22".to_string()),
        experience_time: 4.5,
        profession: Some("Data Analyst".to_string()),
        education: Some("KazNU, Information Systems, 2020".to_string()),
        skills: vec!["SQL".to_string(), "Python".to_string()],
        languages: None,
        awards: Vec::new(),
        projects: Vec::new(),
        courses: Vec::new(),
        summary: Some("Аналитик данных с опытом в продуктовых командах.".to_string()),
        grade: Some("Middle".to_string()),
        min_salary: Some(500_000.0),
        max_salary: Some(700_000.0),
        original_min_salary: Some(1000.0),
        original_max_salary: Some(1400.0),
        original_currency: Some("USD".to_string()),
        resume_link: "https://blob.test/resumes/aigerim.pdf".to_string(),
        created_at: Utc::now(),
    }
}

pub fn vacancy_draft() -> VacancyDraft {
    VacancyDraft {
        title: "Аналитик данных".to_string(),
        position: "Middle".to_string(),
        description: "Ищем аналитика данных: SQL, Python, построение отчётности и A/B-тесты."
            .to_string(),
        salary_min: Some(600_000.0),
        salary_max: Some(900_000.0),
        location: "Алматы".to_string(),
        employment_type: EmploymentType::FullTime,
        experience_band: ExperienceBand::OneToThreeYears,
        job_format: JobFormat::Hybrid,
        skills: "SQL, Python, Tableau".to_string(),
        telegram: None,
        whatsapp: None,
        contact_email: Some("hr@acme.kz".to_string()),
    }
}

pub fn vacancy_row() -> VacancyRow {
    row_from_draft(Uuid::new_v4(), "Acme", &vacancy_draft())
}

pub fn vacancy_row_with_status(status: VacancyStatus) -> VacancyRow {
    let mut row = vacancy_row();
    row.status = status;
    row
}
