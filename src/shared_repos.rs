use std::sync::Arc;

use crate::repositories::{
    blog_post::BlogPostRepository,
    contact_message::ContactMessageRepository,
    health::HealthRepository,
    project::ProjectRepository,
    resume::ResumeRepository,
    sqlx_repo::{SqlxBlogPostRepo, SqlxContactMessageRepo, SqlxHealthRepo, SqlxProjectRepo, SqlxResumeRepo},
};

/// Repository set injected into the use-case handlers and the site context provider.
#[derive(Clone)]
pub struct SharedRepositories {
    pub project_repo: Arc<dyn ProjectRepository>,
    pub blog_post_repo: Arc<dyn BlogPostRepository>,
    pub resume_repo: Arc<dyn ResumeRepository>,
    pub contact_repo: Arc<dyn ContactMessageRepository>,
    pub health_repo: Arc<dyn HealthRepository>,
}

impl SharedRepositories {
    pub fn postgres(pool: sqlx::PgPool) -> Self {
        SharedRepositories {
            project_repo: Arc::new(SqlxProjectRepo::new(pool.clone())),
            blog_post_repo: Arc::new(SqlxBlogPostRepo::new(pool.clone())),
            resume_repo: Arc::new(SqlxResumeRepo::new(pool.clone())),
            contact_repo: Arc::new(SqlxContactMessageRepo::new(pool.clone())),
            health_repo: Arc::new(SqlxHealthRepo::new(pool)),
        }
    }
}
