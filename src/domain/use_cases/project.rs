use std::sync::Arc;

use validator::Validate;

use crate::{
    entities::project::{NewProjectRequest, Project, ProjectCreatedResponse, UpdateProjectRequest},
    errors::AppError,
    repositories::project::ProjectRepository,
    utils::slugs::{ensure_slug_free, resolve_new_slug},
};

const KIND: &str = "Project";

pub struct ProjectHandler<R = dyn ProjectRepository>
where
    R: ProjectRepository + ?Sized,
{
    pub project_repo: Arc<R>,
}

impl<R> ProjectHandler<R>
where
    R: ProjectRepository + ?Sized,
{
    pub fn new(project_repo: Arc<R>) -> Self {
        ProjectHandler { project_repo }
    }

    /// Creates a project, deriving a unique slug from the title when none is given
    pub async fn create_project(&self, mut request: NewProjectRequest) -> Result<ProjectCreatedResponse, AppError> {
        request.slug = request.slug.take().filter(|s| !s.trim().is_empty());
        request.validate()?;

        let repo = &self.project_repo;
        let slug = resolve_new_slug(request.slug.as_deref(), &request.title, KIND, move |candidate| async move {
            repo.project_slug_exists(&candidate, None).await
        })
        .await?;

        let insert = request.prepare_for_insert(slug);
        let project = self.project_repo.create_project(&insert).await?;

        tracing::info!(project_id = project.id, slug = %project.slug, "Project created");

        Ok(ProjectCreatedResponse {
            id: project.id,
            admin_url: format!("/admin/api/projects/{}", project.slug),
            slug: project.slug,
        })
    }

    /// Retrieves a project by its slug
    pub async fn get_project_by_slug(&self, slug: &str) -> Result<Project, AppError> {
        self.project_repo
            .get_project_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Project '{}'", slug)))
    }

    /// Applies a partial update; a new explicit slug must be free
    pub async fn update_project(&self, slug: &str, mut request: UpdateProjectRequest) -> Result<Project, AppError> {
        request.slug = request.slug.take().filter(|s| !s.trim().is_empty());
        request.validate()?;

        let mut project = self.get_project_by_slug(slug).await?;

        if let Some(new_slug) = request.slug.take() {
            if new_slug != project.slug {
                let taken = self.project_repo.project_slug_exists(&new_slug, Some(project.id));
                ensure_slug_free(&new_slug, KIND, taken).await?;
                project.slug = new_slug;
            }
        }

        request.apply_to(&mut project);

        self.project_repo.update_project(&project).await
    }

    /// All projects, newest first
    pub async fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        self.project_repo.list_projects().await
    }
}
