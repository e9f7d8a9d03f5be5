mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod graceful_shutdown;
pub mod shared_repos;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, repositories, routes};
pub use infrastructure::{db, templates, utils};

use errors::AppError;
use shared_repos::SharedRepositories;
use templates::TemplateRenderer;
use use_cases::{
    blog::BlogPostHandler,
    contact::ContactMessageHandler,
    project::ProjectHandler,
    resume::ResumeHandler,
    site_context::{SiteContextProvider, SiteInfo},
};

pub struct AppState {
    pub project_handler: ProjectHandler,
    pub blog_handler: BlogPostHandler,
    pub resume_handler: ResumeHandler,
    pub contact_handler: ContactMessageHandler,
    pub site_context: SiteContextProvider,
    pub renderer: TemplateRenderer,
    pub repos: SharedRepositories,
    pub admin_token: Option<String>,
}

impl AppState {
    pub fn new(config: &settings::AppConfig, repos: SharedRepositories) -> Result<Self, AppError> {
        let renderer = TemplateRenderer::new(&config.static_url, &config.media_url)?;

        let site_info = SiteInfo {
            site_name: config.site_name.clone(),
            site_description: config.site_description.clone(),
        };

        let site_context = SiteContextProvider::new(
            repos.project_repo.clone(),
            repos.blog_post_repo.clone(),
            repos.resume_repo.clone(),
            site_info,
        );

        let admin_token = config
            .admin_token
            .as_ref()
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty());

        Ok(AppState {
            project_handler: ProjectHandler::new(repos.project_repo.clone()),
            blog_handler: BlogPostHandler::new(repos.blog_post_repo.clone()),
            resume_handler: ResumeHandler::new(repos.resume_repo.clone()),
            contact_handler: ContactMessageHandler::new(repos.contact_repo.clone()),
            site_context,
            renderer,
            repos,
            admin_token,
        })
    }
}
