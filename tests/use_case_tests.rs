use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use mockall::{mock, predicate::*};
use portfolio_site::{
    entities::{
        blog_post::{BlogPost, BlogPostInsert},
        project::{NewProjectRequest, Project, ProjectInsert},
        resume::Resume,
    },
    errors::AppError,
    repositories::{blog_post::BlogPostRepository, project::ProjectRepository, resume::ResumeRepository},
    use_cases::{
        project::ProjectHandler,
        site_context::{SiteContextProvider, SiteInfo},
    },
};

mock! {
    pub ProjectRepo {}

    #[async_trait]
    impl ProjectRepository for ProjectRepo {
        async fn create_project(&self, project: &ProjectInsert) -> Result<Project, AppError>;
        async fn get_project_by_slug(&self, slug: &str) -> Result<Option<Project>, AppError>;
        async fn update_project(&self, project: &Project) -> Result<Project, AppError>;
        async fn project_slug_exists(&self, slug: &str, exclude_id: Option<i64>) -> Result<bool, AppError>;
        async fn get_featured_projects(&self, limit: u32) -> Result<Vec<Project>, AppError>;
        async fn list_projects(&self) -> Result<Vec<Project>, AppError>;
    }
}

mock! {
    pub BlogPostRepo {}

    #[async_trait]
    impl BlogPostRepository for BlogPostRepo {
        async fn create_blog_post(&self, post: &BlogPostInsert) -> Result<BlogPost, AppError>;
        async fn get_blog_post_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, AppError>;
        async fn update_blog_post(&self, post: &BlogPost) -> Result<BlogPost, AppError>;
        async fn blog_post_slug_exists(&self, slug: &str, exclude_id: Option<i64>) -> Result<bool, AppError>;
        async fn get_recent_published_posts(&self, limit: u32) -> Result<Vec<BlogPost>, AppError>;
        async fn list_blog_posts(&self, published_only: bool) -> Result<Vec<BlogPost>, AppError>;
    }
}

mock! {
    pub ResumeRepo {}

    #[async_trait]
    impl ResumeRepository for ResumeRepo {
        async fn create_resume(&self, title: &str, content: &str) -> Result<Resume, AppError>;
        async fn get_resume_by_id(&self, id: i64) -> Result<Option<Resume>, AppError>;
        async fn get_first_resume(&self) -> Result<Option<Resume>, AppError>;
        async fn update_resume(&self, resume: &Resume) -> Result<Resume, AppError>;
    }
}

fn minutes(m: i64) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(0, 0).expect("epoch") + Duration::minutes(m)
}

fn project(id: i64, title: &str, featured: bool) -> Project {
    Project {
        id,
        title: title.to_string(),
        slug: title.to_lowercase(),
        description: String::new(),
        short_description: String::new(),
        image: "projects/x.png".to_string(),
        technologies: String::new(),
        github_url: None,
        live_url: None,
        featured,
        created_at: minutes(id),
        updated_at: minutes(id),
    }
}

fn post(id: i64, published: bool, created_minute: i64) -> BlogPost {
    BlogPost {
        id,
        title: format!("Post {id}"),
        slug: format!("post-{id}"),
        content: "<p>x</p>".to_string(),
        excerpt: "x".to_string(),
        image: "blog/x.png".to_string(),
        published,
        created_at: minutes(created_minute),
        updated_at: minutes(created_minute),
    }
}

fn site_info() -> SiteInfo {
    SiteInfo {
        site_name: "Portfolio".to_string(),
        site_description: "Research".to_string(),
    }
}

fn new_project(title: &str, slug: Option<&str>) -> NewProjectRequest {
    NewProjectRequest {
        title: title.to_string(),
        slug: slug.map(str::to_string),
        description: "Description".to_string(),
        short_description: "Short".to_string(),
        image: "projects/x.png".to_string(),
        technologies: String::new(),
        github_url: None,
        live_url: None,
        featured: false,
    }
}

#[actix_rt::test]
async fn site_context_keeps_three_featured_and_three_newest_published() {
    let mut projects = MockProjectRepo::new();
    projects
        .expect_get_featured_projects()
        .with(eq(3u32))
        .times(1)
        .returning(|_| {
            Ok(vec![
                project(1, "One", true),
                project(2, "Two", false),
                project(3, "Three", true),
                project(4, "Four", true),
                project(5, "Five", true),
            ])
        });

    let mut posts = MockBlogPostRepo::new();
    posts
        .expect_get_recent_published_posts()
        .with(eq(3u32))
        .times(1)
        .returning(|_| Ok(vec![post(1, true, 5), post(2, false, 50), post(3, true, 30), post(4, true, 10), post(5, true, 1)]));

    let mut resumes = MockResumeRepo::new();
    resumes.expect_get_first_resume().times(1).returning(|| Ok(None));

    let provider = SiteContextProvider::new(Arc::new(projects), Arc::new(posts), Arc::new(resumes), site_info());
    let context = provider.build().await.unwrap();

    let featured: Vec<i64> = context.featured_projects.iter().map(|p| p.id).collect();
    assert_eq!(featured, vec![1, 3, 4]);

    let recent: Vec<i64> = context.recent_posts.iter().map(|p| p.id).collect();
    assert_eq!(recent, vec![3, 4, 1]);

    assert!(context.resume.is_none());
    assert_eq!(context.site_name, "Portfolio");
    assert_eq!(context.site_description, "Research");
}

#[actix_rt::test]
async fn site_context_surfaces_repository_failures() {
    let mut projects = MockProjectRepo::new();
    projects.expect_get_featured_projects().returning(|_| Ok(vec![]));
    let mut posts = MockBlogPostRepo::new();
    posts.expect_get_recent_published_posts().returning(|_| Ok(vec![]));
    let mut resumes = MockResumeRepo::new();
    resumes
        .expect_get_first_resume()
        .returning(|| Err(AppError::InternalError("connection reset".into())));

    let provider = SiteContextProvider::new(Arc::new(projects), Arc::new(posts), Arc::new(resumes), site_info());
    assert!(matches!(provider.build().await, Err(AppError::InternalError(_))));
}

#[actix_rt::test]
async fn derived_slug_takes_the_first_free_suffix() {
    let mut repo = MockProjectRepo::new();
    repo.expect_project_slug_exists()
        .with(eq("ai-research-lab"), eq(None::<i64>))
        .returning(|_, _| Ok(true));
    repo.expect_project_slug_exists()
        .with(eq("ai-research-lab-2"), eq(None::<i64>))
        .returning(|_, _| Ok(true));
    repo.expect_project_slug_exists()
        .with(eq("ai-research-lab-3"), eq(None::<i64>))
        .returning(|_, _| Ok(false));
    repo.expect_create_project()
        .withf(|insert| insert.slug == "ai-research-lab-3")
        .times(1)
        .returning(|insert| Ok(insert.clone().into_project(9)));

    let handler = ProjectHandler::new(Arc::new(repo));
    let created = handler
        .create_project(new_project("AI Research Lab", None))
        .await
        .unwrap();

    assert_eq!(created.id, 9);
    assert_eq!(created.slug, "ai-research-lab-3");
}

#[actix_rt::test]
async fn explicit_slug_collision_never_writes() {
    let mut repo = MockProjectRepo::new();
    repo.expect_project_slug_exists()
        .with(eq("taken"), eq(None::<i64>))
        .times(1)
        .returning(|_, _| Ok(true));
    repo.expect_create_project().never();

    let handler = ProjectHandler::new(Arc::new(repo));
    let result = handler.create_project(new_project("Anything", Some("taken"))).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
}

#[actix_rt::test]
async fn blank_explicit_slug_falls_back_to_the_title() {
    let mut repo = MockProjectRepo::new();
    repo.expect_project_slug_exists().returning(|_, _| Ok(false));
    repo.expect_create_project()
        .returning(|insert| Ok(insert.clone().into_project(1)));

    let handler = ProjectHandler::new(Arc::new(repo));
    let created = handler
        .create_project(new_project("Bayesian Optimisation", Some("   ")))
        .await
        .unwrap();

    assert_eq!(created.slug, "bayesian-optimisation");
}

#[actix_rt::test]
async fn missing_project_is_not_found() {
    let mut repo = MockProjectRepo::new();
    repo.expect_get_project_by_slug()
        .with(eq("ghost"))
        .returning(|_| Ok(None));

    let handler = ProjectHandler::new(Arc::new(repo));
    assert!(matches!(
        handler.get_project_by_slug("ghost").await,
        Err(AppError::NotFound(_))
    ));
}
