use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::application::CandidateRow;
use crate::models::vacancy::{VacancyDraft, VacancyRow, VacancyStatus};
use crate::state::AppState;
use crate::vacancy::service::{self, CreatedVacancy};

#[derive(Deserialize)]
pub struct CreateVacancyRequest {
    pub hr_id: Uuid,
    pub company: String,
    #[serde(flatten)]
    pub draft: VacancyDraft,
}

/// POST /api/v1/vacancies
pub async fn handle_create_vacancy(
    State(state): State<AppState>,
    Json(req): Json<CreateVacancyRequest>,
) -> Result<Json<CreatedVacancy>, AppError> {
    let created = service::create_vacancy(
        state.model.as_ref(),
        state.vacancies.as_ref(),
        req.hr_id,
        &req.company,
        req.draft,
    )
    .await?;
    Ok(Json(created))
}

#[derive(Deserialize)]
pub struct VacancyListQuery {
    pub status: Option<VacancyStatus>,
    pub hr_id: Option<Uuid>,
}

/// GET /api/v1/vacancies
///
/// `?hr_id=` lists an HR's own vacancies; otherwise `?status=` filters
/// (defaulting to the publicly visible accepted ones).
pub async fn handle_list_vacancies(
    State(state): State<AppState>,
    Query(params): Query<VacancyListQuery>,
) -> Result<Json<Vec<VacancyRow>>, AppError> {
    let vacancies = match params.hr_id {
        Some(hr_id) => state.vacancies.list_for_hr(hr_id).await?,
        None => {
            state
                .vacancies
                .list_by_status(params.status.unwrap_or(VacancyStatus::Accepted))
                .await?
        }
    };
    Ok(Json(vacancies))
}

/// GET /api/v1/vacancies/:id
pub async fn handle_get_vacancy(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<VacancyRow>, AppError> {
    let vacancy = service::get_vacancy(state.vacancies.as_ref(), id).await?;
    Ok(Json(vacancy))
}

/// PUT /api/v1/vacancies/:id
pub async fn handle_update_vacancy(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(draft): Json<VacancyDraft>,
) -> Result<Json<VacancyRow>, AppError> {
    let vacancy = service::update_vacancy(state.vacancies.as_ref(), id, draft).await?;
    Ok(Json(vacancy))
}

/// DELETE /api/v1/vacancies/:id
pub async fn handle_delete_vacancy(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    service::delete_vacancy(state.vacancies.as_ref(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Deserialize)]
pub struct ReviewRequest {
    pub status: VacancyStatus,
}

/// PATCH /api/v1/vacancies/:id/status
pub async fn handle_review_vacancy(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ReviewRequest>,
) -> Result<Json<VacancyRow>, AppError> {
    let vacancy = service::review_vacancy(state.vacancies.as_ref(), id, req.status).await?;
    Ok(Json(vacancy))
}

/// GET /api/v1/vacancies/:id/candidates
pub async fn handle_list_candidates(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<CandidateRow>>, AppError> {
    Ok(Json(state.applications.candidates_for_vacancy(id).await?))
}
