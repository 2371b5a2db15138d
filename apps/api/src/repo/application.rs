use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::RepoError;
use crate::models::application::{
    ApplicationRow, ApplicationStatus, ApplicationSummary, CandidateRow, NewApplication,
};

#[async_trait]
pub trait ApplicationRepo: Send + Sync {
    async fn create(&self, application: NewApplication) -> Result<ApplicationRow, RepoError>;
    async fn get(&self, id: Uuid) -> Result<Option<ApplicationRow>, RepoError>;
    /// True when the user already has an application for the vacancy.
    async fn exists_for(&self, user_id: Uuid, vacancy_id: Uuid) -> Result<bool, RepoError>;
    async fn update_status(
        &self,
        id: Uuid,
        status: ApplicationStatus,
    ) -> Result<ApplicationRow, RepoError>;
    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<ApplicationSummary>, RepoError>;
    async fn candidates_for_vacancy(
        &self,
        vacancy_id: Uuid,
    ) -> Result<Vec<CandidateRow>, RepoError>;
}

pub struct PgApplicationRepo {
    pool: PgPool,
}

impl PgApplicationRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ApplicationRepo for PgApplicationRepo {
    async fn create(&self, application: NewApplication) -> Result<ApplicationRow, RepoError> {
        let row = sqlx::query_as::<_, ApplicationRow>(
            r#"
            INSERT INTO applications
                (id, user_id, vacancy_id, resume_id, status,
                 matching_score, summary, resume_path)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(application.user_id)
        .bind(application.vacancy_id)
        .bind(application.resume_id)
        .bind(ApplicationStatus::Pending)
        .bind(application.matching_score)
        .bind(&application.summary)
        .bind(&application.resume_path)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn get(&self, id: Uuid) -> Result<Option<ApplicationRow>, RepoError> {
        Ok(
            sqlx::query_as::<_, ApplicationRow>("SELECT * FROM applications WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn exists_for(&self, user_id: Uuid, vacancy_id: Uuid) -> Result<bool, RepoError> {
        Ok(sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM applications WHERE user_id = $1 AND vacancy_id = $2)",
        )
        .bind(user_id)
        .bind(vacancy_id)
        .fetch_one(&self.pool)
        .await?)
    }

    async fn update_status(
        &self,
        id: Uuid,
        status: ApplicationStatus,
    ) -> Result<ApplicationRow, RepoError> {
        let row = sqlx::query_as::<_, ApplicationRow>(
            "UPDATE applications SET status = $2, updated_at = now() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<ApplicationSummary>, RepoError> {
        Ok(sqlx::query_as::<_, ApplicationSummary>(
            r#"
            SELECT a.status, v.title AS vacancy_title, a.matching_score
            FROM applications a
            JOIN vacancies v ON v.id = a.vacancy_id
            WHERE a.user_id = $1
            ORDER BY a.created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn candidates_for_vacancy(
        &self,
        vacancy_id: Uuid,
    ) -> Result<Vec<CandidateRow>, RepoError> {
        Ok(sqlx::query_as::<_, CandidateRow>(
            r#"
            SELECT a.id AS application_id, a.status, a.matching_score,
                   a.summary, a.resume_path, r.id AS resume_id,
                   r.first_name, r.last_name, r.email, r.phone,
                   r.grade, r.experience_time
            FROM applications a
            JOIN resumes r ON r.id = a.resume_id
            WHERE a.vacancy_id = $1
            ORDER BY a.matching_score DESC
            "#,
        )
        .bind(vacancy_id)
        .fetch_all(&self.pool)
        .await?)
    }
}
