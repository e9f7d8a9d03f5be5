use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    entities::resume::Resume,
    errors::AppError,
    repositories::sqlx_repo::SqlxResumeRepo,
};

#[async_trait]
pub trait ResumeRepository: Send + Sync {
    async fn create_resume(&self, title: &str, content: &str) -> Result<Resume, AppError>;
    async fn get_resume_by_id(&self, id: i64) -> Result<Option<Resume>, AppError>;
    /// Earliest-inserted resume, if any.
    async fn get_first_resume(&self) -> Result<Option<Resume>, AppError>;
    async fn update_resume(&self, resume: &Resume) -> Result<Resume, AppError>;
}

impl SqlxResumeRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxResumeRepo { pool }
    }
}

#[async_trait]
impl ResumeRepository for SqlxResumeRepo {
    async fn create_resume(&self, title: &str, content: &str) -> Result<Resume, AppError> {
        let resume = sqlx::query_as::<_, Resume>(
            r#"
            INSERT INTO resumes (title, content)
            VALUES ($1, $2)
            RETURNING *
            "#
        )
        .bind(title)
        .bind(content)
        .fetch_one(&self.pool)
        .await?;

        Ok(resume)
    }

    async fn get_resume_by_id(&self, id: i64) -> Result<Option<Resume>, AppError> {
        let resume = sqlx::query_as::<_, Resume>("SELECT * FROM resumes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(resume)
    }

    async fn get_first_resume(&self) -> Result<Option<Resume>, AppError> {
        let resume = sqlx::query_as::<_, Resume>("SELECT * FROM resumes ORDER BY id ASC LIMIT 1")
            .fetch_optional(&self.pool)
            .await?;

        Ok(resume)
    }

    async fn update_resume(&self, resume: &Resume) -> Result<Resume, AppError> {
        sqlx::query_as::<_, Resume>(
            r#"
            UPDATE resumes SET
                title = $1,
                content = $2,
                updated_at = NOW()
            WHERE id = $3
            RETURNING *
            "#
        )
        .bind(&resume.title)
        .bind(&resume.content)
        .bind(resume.id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => AppError::NotFound("Resume not found".into()),
            e => e.into(),
        })
    }
}
