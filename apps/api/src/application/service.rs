//! Application submission and review.
//!
//! Submission runs its cheap guards (duplicate check, vacancy approval,
//! entity existence) strictly before the matching call so an ineligible
//! request never spends a model invocation. The application row is written
//! once, with the matching verdict and the resume's document link.

use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::llm_client::ChatModel;
use crate::models::application::{ApplicationRow, ApplicationStatus, NewApplication};
use crate::models::vacancy::VacancyStatus;
use crate::repo::{ApplicationRepo, ResumeRepo, VacancyRepo};

use super::matcher::analyze_matching;

pub async fn submit_application(
    model: &dyn ChatModel,
    vacancies: &dyn VacancyRepo,
    resumes: &dyn ResumeRepo,
    applications: &dyn ApplicationRepo,
    user_id: Uuid,
    vacancy_id: Uuid,
    resume_id: Uuid,
) -> Result<ApplicationRow, AppError> {
    if applications.exists_for(user_id, vacancy_id).await? {
        warn!("user {user_id} already applied for vacancy {vacancy_id}");
        return Err(AppError::Conflict(
            "You have already applied for this vacancy".to_string(),
        ));
    }

    let vacancy = vacancies
        .get(vacancy_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Vacancy {vacancy_id} not found")))?;
    if vacancy.status != VacancyStatus::Accepted {
        warn!("vacancy {vacancy_id} is not accepted, rejecting application");
        return Err(AppError::Forbidden(
            "This vacancy has not yet been approved. You cannot apply".to_string(),
        ));
    }

    let resume = resumes
        .get(resume_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {resume_id} not found")))?;

    let outcome = analyze_matching(model, &resume, &vacancy).await?;

    let application = applications
        .create(NewApplication {
            user_id,
            vacancy_id,
            resume_id,
            matching_score: outcome.score,
            summary: outcome.summary,
            resume_path: resume.resume_link.clone(),
        })
        .await?;

    info!(
        "user {user_id} applied to vacancy {vacancy_id} with matching score {}",
        application.matching_score
    );
    Ok(application)
}

/// HR decision on a pending application. Decided applications are terminal.
pub async fn decide_application(
    applications: &dyn ApplicationRepo,
    id: Uuid,
    decision: ApplicationStatus,
) -> Result<ApplicationRow, AppError> {
    if decision == ApplicationStatus::Pending {
        return Err(AppError::Validation(
            "Decision must be accepted or rejected".to_string(),
        ));
    }

    let application = applications
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Application {id} not found")))?;
    if application.status != ApplicationStatus::Pending {
        return Err(AppError::Conflict(
            "This application has already been decided".to_string(),
        ));
    }

    let updated = applications.update_status(id, decision).await?;
    info!("application {id} decided: {:?}", updated.status);
    Ok(updated)
}
