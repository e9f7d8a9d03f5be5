use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::entities::validation::{
    validate_not_blank, validate_slug, validate_title, MAX_IMAGE_PATH_LENGTH, MAX_SLUG_LENGTH,
    MAX_SUMMARY_LENGTH, MAX_TITLE_LENGTH,
};

// ───── Database Models ───────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct BlogPost {
    pub id: i64,
    pub title: String,
    pub slug: String,
    /// Sanitized HTML.
    pub content: String,
    pub excerpt: String,
    pub image: String,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct BlogPostInsert {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: String,
    pub image: String,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ───── API Response Models ──────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct BlogPostCreatedResponse {
    pub id: i64,
    pub slug: String,
    pub admin_url: String,
}

// ───── Input & Validation Requests ──────────────────────────────────

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct NewBlogPostRequest {
    #[validate(
        length(min = 1, max = MAX_TITLE_LENGTH),
        custom(function = "validate_title")
    )]
    pub title: String,

    #[validate(
        length(min = 1, max = MAX_SLUG_LENGTH),
        custom(function = "validate_slug")
    )]
    #[serde(default)]
    pub slug: Option<String>,

    #[validate(custom(function = "validate_not_blank"))]
    pub content: String,

    #[validate(length(min = 1, max = MAX_SUMMARY_LENGTH))]
    pub excerpt: String,

    #[validate(length(min = 1, max = MAX_IMAGE_PATH_LENGTH))]
    pub image: String,

    #[serde(default)]
    pub published: bool,
}

#[derive(Debug, Deserialize, Validate, Default)]
#[serde(default)]
pub struct UpdateBlogPostRequest {
    #[validate(
        length(min = 1, max = MAX_TITLE_LENGTH),
        custom(function = "validate_title")
    )]
    pub title: Option<String>,

    #[validate(
        length(min = 1, max = MAX_SLUG_LENGTH),
        custom(function = "validate_slug")
    )]
    pub slug: Option<String>,

    #[validate(custom(function = "validate_not_blank"))]
    pub content: Option<String>,

    #[validate(length(min = 1, max = MAX_SUMMARY_LENGTH))]
    pub excerpt: Option<String>,

    #[validate(length(min = 1, max = MAX_IMAGE_PATH_LENGTH))]
    pub image: Option<String>,

    pub published: Option<bool>,
}

// ───── Conversions ──────────────────────────────────────────────────

impl NewBlogPostRequest {
    /// `content` is expected to be sanitized by the caller.
    pub fn prepare_for_insert(self, slug: String, content: String) -> BlogPostInsert {
        let now = Utc::now();
        BlogPostInsert {
            title: self.title,
            slug,
            content,
            excerpt: self.excerpt,
            image: self.image,
            published: self.published,
            created_at: now,
            updated_at: now,
        }
    }
}

impl BlogPostInsert {
    pub fn into_blog_post(self, id: i64) -> BlogPost {
        BlogPost {
            id,
            title: self.title,
            slug: self.slug,
            content: self.content,
            excerpt: self.excerpt,
            image: self.image,
            published: self.published,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl UpdateBlogPostRequest {
    /// Merges the requested changes into `post`. Slug and content
    /// sanitation are left to the caller.
    pub fn apply_to(self, post: &mut BlogPost) {
        if let Some(title) = self.title {
            post.title = title;
        }
        if let Some(content) = self.content {
            post.content = content;
        }
        if let Some(excerpt) = self.excerpt {
            post.excerpt = excerpt;
        }
        if let Some(image) = self.image {
            post.image = image;
        }
        if let Some(published) = self.published {
            post.published = published;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> NewBlogPostRequest {
        NewBlogPostRequest {
            title: "Notes on Optimal Transport".into(),
            slug: None,
            content: "<p>Wasserstein distances.</p>".into(),
            excerpt: "A short tour".into(),
            image: "blog/ot.png".into(),
            published: false,
        }
    }

    #[test]
    fn excerpt_is_capped() {
        let mut req = request();
        assert!(req.validate().is_ok());
        req.excerpt = "e".repeat(MAX_SUMMARY_LENGTH as usize + 1);
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("excerpt"));
    }

    #[test]
    fn blank_content_is_rejected() {
        let mut req = request();
        req.content = "   ".into();
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("content"));
    }

    #[test]
    fn update_can_publish_without_touching_other_fields() {
        let mut post = request()
            .prepare_for_insert("notes-on-optimal-transport".into(), "<p>body</p>".into())
            .into_blog_post(7);

        let update = UpdateBlogPostRequest {
            published: Some(true),
            ..Default::default()
        };
        update.apply_to(&mut post);

        assert!(post.published);
        assert_eq!(post.title, "Notes on Optimal Transport");
        assert_eq!(post.content, "<p>body</p>");
        assert_eq!(post.id, 7);
    }
}
