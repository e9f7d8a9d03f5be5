use std::sync::Arc;

use validator::Validate;

use crate::{
    entities::resume::{NewResumeRequest, Resume, ResumeCreatedResponse, UpdateResumeRequest},
    errors::AppError,
    repositories::resume::ResumeRepository,
    utils::html::sanitize_rich_text,
};

pub struct ResumeHandler<R = dyn ResumeRepository>
where
    R: ResumeRepository + ?Sized,
{
    pub resume_repo: Arc<R>,
}

impl<R> ResumeHandler<R>
where
    R: ResumeRepository + ?Sized,
{
    pub fn new(resume_repo: Arc<R>) -> Self {
        ResumeHandler { resume_repo }
    }

    pub async fn create_resume(&self, request: NewResumeRequest) -> Result<ResumeCreatedResponse, AppError> {
        request.validate()?;

        let content = sanitize_rich_text(&request.content);
        let resume = self.resume_repo.create_resume(&request.title, &content).await?;

        Ok(ResumeCreatedResponse {
            id: resume.id,
            admin_url: format!("/admin/api/resumes/{}", resume.id),
        })
    }

    /// The resume shown on the site: the first one ever stored
    pub async fn get_current_resume(&self) -> Result<Option<Resume>, AppError> {
        self.resume_repo.get_first_resume().await
    }

    /// Edits a resume in place
    pub async fn update_resume(&self, id: i64, request: UpdateResumeRequest) -> Result<Resume, AppError> {
        request.validate()?;

        let mut resume = self
            .resume_repo
            .get_resume_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Resume {}", id)))?;

        if let Some(title) = request.title {
            resume.title = title;
        }
        if let Some(content) = request.content {
            resume.content = sanitize_rich_text(&content);
        }

        self.resume_repo.update_resume(&resume).await
    }
}
