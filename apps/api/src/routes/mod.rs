pub mod health;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::application::handlers as application_handlers;
use crate::resume::handlers as resume_handlers;
use crate::state::AppState;
use crate::vacancy::handlers as vacancy_handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Resume ingestion pipeline
        .route(
            "/api/v1/resumes",
            post(resume_handlers::handle_upload_resume),
        )
        .route(
            "/api/v1/resumes/:id",
            get(resume_handlers::handle_get_resume),
        )
        .route(
            "/api/v1/users/:user_id/resumes",
            get(resume_handlers::handle_list_user_resumes),
        )
        // Vacancy lifecycle
        .route(
            "/api/v1/vacancies",
            post(vacancy_handlers::handle_create_vacancy)
                .get(vacancy_handlers::handle_list_vacancies),
        )
        .route(
            "/api/v1/vacancies/:id",
            get(vacancy_handlers::handle_get_vacancy)
                .put(vacancy_handlers::handle_update_vacancy)
                .delete(vacancy_handlers::handle_delete_vacancy),
        )
        .route(
            "/api/v1/vacancies/:id/status",
            patch(vacancy_handlers::handle_review_vacancy),
        )
        .route(
            "/api/v1/vacancies/:id/candidates",
            get(vacancy_handlers::handle_list_candidates),
        )
        // Application submission and review
        .route(
            "/api/v1/applications",
            post(application_handlers::handle_submit_application),
        )
        .route(
            "/api/v1/applications/:id/accept",
            post(application_handlers::handle_accept_candidate),
        )
        .route(
            "/api/v1/applications/:id/reject",
            post(application_handlers::handle_reject_candidate),
        )
        .route(
            "/api/v1/users/:user_id/applications",
            get(application_handlers::handle_list_user_applications),
        )
        .with_state(state)
}
