//! Vacancy lifecycle.
//!
//! Creation is gated by the AI classifier: a description the model cannot
//! map to at least one profession is rejected outright. Review moves a
//! vacancy `under_review -> accepted | rejected`; editing a rejected vacancy
//! puts it back under review, and an accepted vacancy is immutable.

use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::llm_client::ChatModel;
use crate::models::vacancy::{VacancyDraft, VacancyRow, VacancyStatus};
use crate::repo::VacancyRepo;
use crate::vacancy::classifier::{classify_vacancy, ProfessionSuggestion};

/// Creation result: the persisted vacancy plus the advisory classifier output.
#[derive(Debug, Serialize)]
pub struct CreatedVacancy {
    pub vacancy: VacancyRow,
    pub suggested_professions: Vec<ProfessionSuggestion>,
}

pub async fn create_vacancy(
    model: &dyn ChatModel,
    vacancies: &dyn VacancyRepo,
    hr_id: Uuid,
    company: &str,
    draft: VacancyDraft,
) -> Result<CreatedVacancy, AppError> {
    let suggestions = classify_vacancy(model, &draft.description).await?;
    if suggestions.is_empty() {
        warn!("classifier found no professions for vacancy draft by HR {hr_id}");
        return Err(AppError::Validation(
            "AI could not identify the occupation. Clarify the description".to_string(),
        ));
    }

    let vacancy = vacancies.create(hr_id, company, &draft).await?;
    info!("vacancy {} created by HR {hr_id}", vacancy.id);

    Ok(CreatedVacancy {
        vacancy,
        suggested_professions: suggestions,
    })
}

pub async fn update_vacancy(
    vacancies: &dyn VacancyRepo,
    id: Uuid,
    draft: VacancyDraft,
) -> Result<VacancyRow, AppError> {
    let vacancy = get_vacancy(vacancies, id).await?;

    if vacancy.status == VacancyStatus::Accepted {
        return Err(AppError::Forbidden(
            "Cannot edit an accepted vacancy. Contact admin for changes".to_string(),
        ));
    }

    // Editing a rejected vacancy sends it back to review.
    let updated = vacancies
        .update_draft(id, &draft, VacancyStatus::UnderReview)
        .await?;
    info!("vacancy {id} updated, status {:?}", updated.status);
    Ok(updated)
}

pub async fn delete_vacancy(vacancies: &dyn VacancyRepo, id: Uuid) -> Result<(), AppError> {
    let vacancy = get_vacancy(vacancies, id).await?;

    if vacancy.status == VacancyStatus::Accepted {
        return Err(AppError::Forbidden(
            "Cannot delete an accepted vacancy. Contact admin for removal".to_string(),
        ));
    }

    vacancies.delete(id).await?;
    info!("vacancy {id} deleted");
    Ok(())
}

/// Admin review: `under_review -> accepted | rejected`.
pub async fn review_vacancy(
    vacancies: &dyn VacancyRepo,
    id: Uuid,
    decision: VacancyStatus,
) -> Result<VacancyRow, AppError> {
    if decision == VacancyStatus::UnderReview {
        return Err(AppError::Validation(
            "Review decision must be accepted or rejected".to_string(),
        ));
    }

    let vacancy = get_vacancy(vacancies, id).await?;
    if vacancy.status != VacancyStatus::UnderReview {
        return Err(AppError::Conflict(
            "This vacancy has already been reviewed".to_string(),
        ));
    }

    let updated = vacancies.update_status(id, decision).await?;
    info!("vacancy {id} reviewed: {:?}", updated.status);
    Ok(updated)
}

pub async fn get_vacancy(vacancies: &dyn VacancyRepo, id: Uuid) -> Result<VacancyRow, AppError> {
    vacancies
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Vacancy {id} not found")))
}
