use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::application::service;
use crate::errors::AppError;
use crate::models::application::{ApplicationRow, ApplicationStatus, ApplicationSummary};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SubmitApplicationRequest {
    pub user_id: Uuid,
    pub vacancy_id: Uuid,
    pub resume_id: Uuid,
}

/// POST /api/v1/applications
pub async fn handle_submit_application(
    State(state): State<AppState>,
    Json(req): Json<SubmitApplicationRequest>,
) -> Result<Json<ApplicationRow>, AppError> {
    let application = service::submit_application(
        state.model.as_ref(),
        state.vacancies.as_ref(),
        state.resumes.as_ref(),
        state.applications.as_ref(),
        req.user_id,
        req.vacancy_id,
        req.resume_id,
    )
    .await?;
    Ok(Json(application))
}

/// POST /api/v1/applications/:id/accept
pub async fn handle_accept_candidate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApplicationRow>, AppError> {
    let application =
        service::decide_application(state.applications.as_ref(), id, ApplicationStatus::Accepted)
            .await?;
    Ok(Json(application))
}

/// POST /api/v1/applications/:id/reject
pub async fn handle_reject_candidate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApplicationRow>, AppError> {
    let application =
        service::decide_application(state.applications.as_ref(), id, ApplicationStatus::Rejected)
            .await?;
    Ok(Json(application))
}

/// GET /api/v1/users/:user_id/applications
pub async fn handle_list_user_applications(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Vec<ApplicationSummary>>, AppError> {
    Ok(Json(state.applications.list_for_user(user_id).await?))
}
