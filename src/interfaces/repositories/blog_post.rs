use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::{
    entities::blog_post::{BlogPost, BlogPostInsert},
    errors::AppError,
    repositories::sqlx_repo::{map_unique_violation, SqlxBlogPostRepo},
};

const SLUG_CONSTRAINT: &str = "blog_posts_slug_key";

#[async_trait]
pub trait BlogPostRepository: Send + Sync {
    async fn create_blog_post(&self, post: &BlogPostInsert) -> Result<BlogPost, AppError>;
    async fn get_blog_post_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, AppError>;
    /// Persists every mutable column of `post` and refreshes `updated_at`.
    async fn update_blog_post(&self, post: &BlogPost) -> Result<BlogPost, AppError>;
    async fn blog_post_slug_exists(&self, slug: &str, exclude_id: Option<i64>) -> Result<bool, AppError>;
    /// Published posts, newest `created_at` first.
    async fn get_recent_published_posts(&self, limit: u32) -> Result<Vec<BlogPost>, AppError>;
    async fn list_blog_posts(&self, published_only: bool) -> Result<Vec<BlogPost>, AppError>;
}

impl SqlxBlogPostRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxBlogPostRepo { pool }
    }
}

#[async_trait]
impl BlogPostRepository for SqlxBlogPostRepo {
    async fn create_blog_post(&self, post: &BlogPostInsert) -> Result<BlogPost, AppError> {
        sqlx::query_as::<_, BlogPost>(
            r#"
            INSERT INTO blog_posts (
                title, slug, content, excerpt, image, published, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#
        )
        .bind(&post.title)
        .bind(&post.slug)
        .bind(&post.content)
        .bind(&post.excerpt)
        .bind(&post.image)
        .bind(post.published)
        .bind(post.created_at)
        .bind(post.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, SLUG_CONSTRAINT, "Blog post slug already exists"))
    }

    async fn get_blog_post_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, AppError> {
        let post = sqlx::query_as::<_, BlogPost>("SELECT * FROM blog_posts WHERE slug = $1")
            .bind(slug)
            .fetch_optional(&self.pool)
            .await?;

        Ok(post)
    }

    async fn update_blog_post(&self, post: &BlogPost) -> Result<BlogPost, AppError> {
        sqlx::query_as::<_, BlogPost>(
            r#"
            UPDATE blog_posts SET
                title = $1,
                slug = $2,
                content = $3,
                excerpt = $4,
                image = $5,
                published = $6,
                updated_at = NOW()
            WHERE id = $7
            RETURNING *
            "#
        )
        .bind(&post.title)
        .bind(&post.slug)
        .bind(&post.content)
        .bind(&post.excerpt)
        .bind(&post.image)
        .bind(post.published)
        .bind(post.id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => AppError::NotFound("Blog post not found".into()),
            e => map_unique_violation(e, SLUG_CONSTRAINT, "Blog post slug already exists"),
        })
    }

    async fn blog_post_slug_exists(&self, slug: &str, exclude_id: Option<i64>) -> Result<bool, AppError> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT 1
                FROM blog_posts
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

    async fn get_recent_published_posts(&self, limit: u32) -> Result<Vec<BlogPost>, AppError> {
        let posts = sqlx::query_as::<_, BlogPost>(
            r#"
            SELECT * FROM blog_posts
            WHERE published = TRUE
            ORDER BY created_at DESC, id DESC
            LIMIT $1
            "#
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }

    async fn list_blog_posts(&self, published_only: bool) -> Result<Vec<BlogPost>, AppError> {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT * FROM blog_posts");

        if published_only {
            builder.push(" WHERE published = TRUE");
        }

        builder.push(" ORDER BY created_at DESC, id DESC");

        let posts = builder
            .build_query_as::<BlogPost>()
            .fetch_all(&self.pool)
            .await?;

        Ok(posts)
    }
}
