use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::RepoError;
use crate::models::resume::{NewResume, ResumeRow};

#[async_trait]
pub trait ResumeRepo: Send + Sync {
    async fn create(&self, resume: NewResume) -> Result<ResumeRow, RepoError>;
    async fn get(&self, id: Uuid) -> Result<Option<ResumeRow>, RepoError>;
    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<ResumeRow>, RepoError>;
}

pub struct PgResumeRepo {
    pool: PgPool,
}

impl PgResumeRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResumeRepo for PgResumeRepo {
    async fn create(&self, resume: NewResume) -> Result<ResumeRow, RepoError> {
        let row = sqlx::query_as::<_, ResumeRow>(
            r#"
            INSERT INTO resumes
                (id, user_id, first_name, last_name, email, phone,
                 experience_time, profession, education, skills, languages,
                 awards, projects, courses, summary, grade,
                 min_salary, max_salary, original_min_salary, original_max_salary,
                 original_currency, resume_link)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11,
                    $12, $13, $14, $15, $16, $17, $18, $19, $20, $21, $22)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(resume.user_id)
        .bind(&resume.first_name)
        .bind(&resume.last_name)
        .bind(&resume.email)
        .bind(&resume.phone)
        .bind(resume.experience_time)
        .bind(&resume.profession)
        .bind(&resume.education)
        .bind(&resume.skills)
        .bind(&resume.languages)
        .bind(&resume.awards)
        .bind(&resume.projects)
        .bind(&resume.courses)
        .bind(&resume.summary)
        .bind(&resume.grade)
        .bind(resume.min_salary)
        .bind(resume.max_salary)
        .bind(resume.original_min_salary)
        .bind(resume.original_max_salary)
        .bind(&resume.original_currency)
        .bind(&resume.resume_link)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn get(&self, id: Uuid) -> Result<Option<ResumeRow>, RepoError> {
        Ok(
            sqlx::query_as::<_, ResumeRow>("SELECT * FROM resumes WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<ResumeRow>, RepoError> {
        Ok(sqlx::query_as::<_, ResumeRow>(
            "SELECT * FROM resumes WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?)
    }
}
