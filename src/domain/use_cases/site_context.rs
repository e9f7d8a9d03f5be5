use std::sync::Arc;

use serde::Serialize;

use crate::{
    entities::{blog_post::BlogPost, project::Project, resume::Resume},
    errors::AppError,
    repositories::{
        blog_post::BlogPostRepository, project::ProjectRepository, resume::ResumeRepository,
    },
};

pub const FEATURED_PROJECTS_LIMIT: u32 = 3;
pub const RECENT_POSTS_LIMIT: u32 = 3;

/// Static site metadata exposed on every page.
#[derive(Debug, Clone)]
pub struct SiteInfo {
    pub site_name: String,
    pub site_description: String,
}

/// Shared context merged into every rendered page.
#[derive(Debug, Clone, Serialize)]
pub struct SiteContext {
    pub featured_projects: Vec<Project>,
    pub recent_posts: Vec<BlogPost>,
    pub resume: Option<Resume>,
    pub site_name: String,
    pub site_description: String,
}

pub struct SiteContextProvider {
    project_repo: Arc<dyn ProjectRepository>,
    blog_post_repo: Arc<dyn BlogPostRepository>,
    resume_repo: Arc<dyn ResumeRepository>,
    info: SiteInfo,
}

impl SiteContextProvider {
    pub fn new(
        project_repo: Arc<dyn ProjectRepository>,
        blog_post_repo: Arc<dyn BlogPostRepository>,
        resume_repo: Arc<dyn ResumeRepository>,
        info: SiteInfo,
    ) -> Self {
        SiteContextProvider {
            project_repo,
            blog_post_repo,
            resume_repo,
            info,
        }
    }

    /// Builds the context for one request. Nothing is cached between calls.
    pub async fn build(&self) -> Result<SiteContext, AppError> {
        let (featured, recent, resume) = futures_util::try_join!(
            self.project_repo.get_featured_projects(FEATURED_PROJECTS_LIMIT),
            self.blog_post_repo.get_recent_published_posts(RECENT_POSTS_LIMIT),
            self.resume_repo.get_first_resume(),
        )?;

        Ok(SiteContext {
            featured_projects: featured_only(featured),
            recent_posts: newest_published(recent),
            resume,
            site_name: self.info.site_name.clone(),
            site_description: self.info.site_description.clone(),
        })
    }
}

fn featured_only(mut projects: Vec<Project>) -> Vec<Project> {
    projects.retain(|p| p.featured);
    projects.truncate(FEATURED_PROJECTS_LIMIT as usize);
    projects
}

fn newest_published(mut posts: Vec<BlogPost>) -> Vec<BlogPost> {
    posts.retain(|p| p.published);
    posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    posts.truncate(RECENT_POSTS_LIMIT as usize);
    posts
}
