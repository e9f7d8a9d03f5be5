use std::sync::Arc;

use validator::Validate;

use crate::{
    entities::blog_post::{BlogPost, BlogPostCreatedResponse, NewBlogPostRequest, UpdateBlogPostRequest},
    errors::AppError,
    repositories::blog_post::BlogPostRepository,
    utils::{
        html::sanitize_rich_text,
        slugs::{ensure_slug_free, resolve_new_slug},
    },
};

const KIND: &str = "Blog post";

pub struct BlogPostHandler<R = dyn BlogPostRepository>
where
    R: BlogPostRepository + ?Sized,
{
    pub blog_post_repo: Arc<R>,
}

impl<R> BlogPostHandler<R>
where
    R: BlogPostRepository + ?Sized,
{
    pub fn new(blog_post_repo: Arc<R>) -> Self {
        BlogPostHandler { blog_post_repo }
    }

    /// Creates a new blog post with sanitized content and a unique slug
    pub async fn create_blog_post(&self, mut post: NewBlogPostRequest) -> Result<BlogPostCreatedResponse, AppError> {
        post.slug = post.slug.take().filter(|s| !s.trim().is_empty());
        post.validate()?;

        let repo = &self.blog_post_repo;
        let slug = resolve_new_slug(post.slug.as_deref(), &post.title, KIND, move |candidate| async move {
            repo.blog_post_slug_exists(&candidate, None).await
        })
        .await?;

        let content = sanitize_rich_text(&post.content);
        let insert = post.prepare_for_insert(slug, content);
        let created = self.blog_post_repo.create_blog_post(&insert).await?;

        tracing::info!(post_id = created.id, slug = %created.slug, "Blog post created");

        Ok(BlogPostCreatedResponse {
            id: created.id,
            admin_url: format!("/admin/api/posts/{}", created.slug),
            slug: created.slug,
        })
    }

    /// Retrieves a blog post by its slug, drafts included
    pub async fn get_blog_post_by_slug(&self, slug: &str) -> Result<BlogPost, AppError> {
        self.blog_post_repo
            .get_blog_post_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Blog post '{}'", slug)))
    }

    /// Updates an existing blog post
    pub async fn update_blog_post(&self, slug: &str, mut post: UpdateBlogPostRequest) -> Result<BlogPost, AppError> {
        post.slug = post.slug.take().filter(|s| !s.trim().is_empty());
        post.validate()?;

        let mut current = self.get_blog_post_by_slug(slug).await?;

        if let Some(new_slug) = post.slug.take() {
            if new_slug != current.slug {
                let taken = self.blog_post_repo.blog_post_slug_exists(&new_slug, Some(current.id));
                ensure_slug_free(&new_slug, KIND, taken).await?;
                current.slug = new_slug;
            }
        }

        post.content = post.content.take().map(|c| sanitize_rich_text(&c));
        post.apply_to(&mut current);

        self.blog_post_repo.update_blog_post(&current).await
    }

    /// Every post, drafts included unless `published_only`
    pub async fn list_blog_posts(&self, published_only: bool) -> Result<Vec<BlogPost>, AppError> {
        self.blog_post_repo.list_blog_posts(published_only).await
    }
}
