use std::sync::Arc;

use crate::llm_client::ChatModel;
use crate::rates::RateSource;
use crate::repo::{ApplicationRepo, ResumeRepo, VacancyRepo};
use crate::storage::DocumentStore;

/// Shared application state injected into all route handlers via Axum
/// extractors. Every collaborator sits behind a trait object so handlers and
/// services never depend on a concrete backend.
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn DocumentStore>,
    pub model: Arc<dyn ChatModel>,
    pub rates: Arc<dyn RateSource>,
    pub resumes: Arc<dyn ResumeRepo>,
    pub vacancies: Arc<dyn VacancyRepo>,
    pub applications: Arc<dyn ApplicationRepo>,
}
