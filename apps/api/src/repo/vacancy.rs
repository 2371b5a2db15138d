use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::RepoError;
use crate::models::vacancy::{VacancyDraft, VacancyRow, VacancyStatus};

#[async_trait]
pub trait VacancyRepo: Send + Sync {
    async fn create(
        &self,
        hr_id: Uuid,
        company: &str,
        draft: &VacancyDraft,
    ) -> Result<VacancyRow, RepoError>;
    async fn get(&self, id: Uuid) -> Result<Option<VacancyRow>, RepoError>;
    /// Replaces the editable fields and sets the given status.
    async fn update_draft(
        &self,
        id: Uuid,
        draft: &VacancyDraft,
        status: VacancyStatus,
    ) -> Result<VacancyRow, RepoError>;
    async fn update_status(
        &self,
        id: Uuid,
        status: VacancyStatus,
    ) -> Result<VacancyRow, RepoError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepoError>;
    async fn list_by_status(&self, status: VacancyStatus) -> Result<Vec<VacancyRow>, RepoError>;
    async fn list_for_hr(&self, hr_id: Uuid) -> Result<Vec<VacancyRow>, RepoError>;
}

pub struct PgVacancyRepo {
    pool: PgPool,
}

impl PgVacancyRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VacancyRepo for PgVacancyRepo {
    async fn create(
        &self,
        hr_id: Uuid,
        company: &str,
        draft: &VacancyDraft,
    ) -> Result<VacancyRow, RepoError> {
        let row = sqlx::query_as::<_, VacancyRow>(
            r#"
            INSERT INTO vacancies
                (id, hr_id, company, title, position, description,
                 salary_min, salary_max, location, employment_type,
                 experience_band, job_format, skills, telegram, whatsapp,
                 contact_email, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10,
                    $11, $12, $13, $14, $15, $16, $17)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(hr_id)
        .bind(company)
        .bind(&draft.title)
        .bind(&draft.position)
        .bind(&draft.description)
        .bind(draft.salary_min)
        .bind(draft.salary_max)
        .bind(&draft.location)
        .bind(draft.employment_type)
        .bind(draft.experience_band)
        .bind(draft.job_format)
        .bind(&draft.skills)
        .bind(&draft.telegram)
        .bind(&draft.whatsapp)
        .bind(&draft.contact_email)
        .bind(VacancyStatus::UnderReview)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn get(&self, id: Uuid) -> Result<Option<VacancyRow>, RepoError> {
        Ok(
            sqlx::query_as::<_, VacancyRow>("SELECT * FROM vacancies WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn update_draft(
        &self,
        id: Uuid,
        draft: &VacancyDraft,
        status: VacancyStatus,
    ) -> Result<VacancyRow, RepoError> {
        let row = sqlx::query_as::<_, VacancyRow>(
            r#"
            UPDATE vacancies SET
                title = $2, position = $3, description = $4,
                salary_min = $5, salary_max = $6, location = $7,
                employment_type = $8, experience_band = $9, job_format = $10,
                skills = $11, telegram = $12, whatsapp = $13,
                contact_email = $14, status = $15, updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&draft.title)
        .bind(&draft.position)
        .bind(&draft.description)
        .bind(draft.salary_min)
        .bind(draft.salary_max)
        .bind(&draft.location)
        .bind(draft.employment_type)
        .bind(draft.experience_band)
        .bind(draft.job_format)
        .bind(&draft.skills)
        .bind(&draft.telegram)
        .bind(&draft.whatsapp)
        .bind(&draft.contact_email)
        .bind(status)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn update_status(
        &self,
        id: Uuid,
        status: VacancyStatus,
    ) -> Result<VacancyRow, RepoError> {
        let row = sqlx::query_as::<_, VacancyRow>(
            "UPDATE vacancies SET status = $2, updated_at = now() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        sqlx::query("DELETE FROM vacancies WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn list_by_status(&self, status: VacancyStatus) -> Result<Vec<VacancyRow>, RepoError> {
        Ok(sqlx::query_as::<_, VacancyRow>(
            "SELECT * FROM vacancies WHERE status = $1 ORDER BY created_at DESC",
        )
        .bind(status)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn list_for_hr(&self, hr_id: Uuid) -> Result<Vec<VacancyRow>, RepoError> {
        Ok(sqlx::query_as::<_, VacancyRow>(
            "SELECT * FROM vacancies WHERE hr_id = $1 ORDER BY created_at DESC",
        )
        .bind(hr_id)
        .fetch_all(&self.pool)
        .await?)
    }
}
