use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    entities::project::{Project, ProjectInsert},
    errors::AppError,
    repositories::sqlx_repo::{map_unique_violation, SqlxProjectRepo},
};

const SLUG_CONSTRAINT: &str = "projects_slug_key";

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn create_project(&self, project: &ProjectInsert) -> Result<Project, AppError>;
    async fn get_project_by_slug(&self, slug: &str) -> Result<Option<Project>, AppError>;
    /// Persists every mutable column of `project` and refreshes `updated_at`.
    async fn update_project(&self, project: &Project) -> Result<Project, AppError>;
    async fn project_slug_exists(&self, slug: &str, exclude_id: Option<i64>) -> Result<bool, AppError>;
    async fn get_featured_projects(&self, limit: u32) -> Result<Vec<Project>, AppError>;
    async fn list_projects(&self) -> Result<Vec<Project>, AppError>;
}

impl SqlxProjectRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxProjectRepo { pool }
    }
}

#[async_trait]
impl ProjectRepository for SqlxProjectRepo {
    async fn create_project(&self, project: &ProjectInsert) -> Result<Project, AppError> {
        sqlx::query_as::<_, Project>(
            r#"
            INSERT INTO projects (
                title, slug, description, short_description, image, technologies,
                github_url, live_url, featured, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#
        )
        .bind(&project.title)
        .bind(&project.slug)
        .bind(&project.description)
        .bind(&project.short_description)
        .bind(&project.image)
        .bind(&project.technologies)
        .bind(&project.github_url)
        .bind(&project.live_url)
        .bind(project.featured)
        .bind(project.created_at)
        .bind(project.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, SLUG_CONSTRAINT, "Project slug already exists"))
    }

    async fn get_project_by_slug(&self, slug: &str) -> Result<Option<Project>, AppError> {
        let project = sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE slug = $1")
            .bind(slug)
            .fetch_optional(&self.pool)
            .await?;

        Ok(project)
    }

    async fn update_project(&self, project: &Project) -> Result<Project, AppError> {
        sqlx::query_as::<_, Project>(
            r#"
            UPDATE projects SET
                title = $1,
                slug = $2,
                description = $3,
                short_description = $4,
                image = $5,
                technologies = $6,
                github_url = $7,
                live_url = $8,
                featured = $9,
                updated_at = NOW()
            WHERE id = $10
            RETURNING *
            "#
        )
        .bind(&project.title)
        .bind(&project.slug)
        .bind(&project.description)
        .bind(&project.short_description)
        .bind(&project.image)
        .bind(&project.technologies)
        .bind(&project.github_url)
        .bind(&project.live_url)
        .bind(project.featured)
        .bind(project.id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => AppError::NotFound("Project not found".into()),
            e => map_unique_violation(e, SLUG_CONSTRAINT, "Project slug already exists"),
        })
    }

    async fn project_slug_exists(&self, slug: &str, exclude_id: Option<i64>) -> Result<bool, AppError> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT 1
                FROM projects
                WHERE slug = $1
                  AND ($2::BIGINT IS NULL OR id <> $2)
            )
            "#
        )
        .bind(slug)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn get_featured_projects(&self, limit: u32) -> Result<Vec<Project>, AppError> {
        let projects = sqlx::query_as::<_, Project>(
            r#"
            SELECT * FROM projects
            WHERE featured = TRUE
            ORDER BY created_at DESC, id DESC
            LIMIT $1
            "#
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await?;

        Ok(projects)
    }

    async fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        let projects = sqlx::query_as::<_, Project>(
            "SELECT * FROM projects ORDER BY created_at DESC, id DESC"
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(projects)
    }
}
