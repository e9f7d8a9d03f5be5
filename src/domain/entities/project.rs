use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::entities::{
    option_fields::OptionField,
    validation::{
        validate_not_blank, validate_optional_url_field, validate_slug, validate_title, validate_url,
        MAX_IMAGE_PATH_LENGTH, MAX_SLUG_LENGTH, MAX_SUMMARY_LENGTH, MAX_TECHNOLOGIES_LENGTH,
        MAX_TITLE_LENGTH, MAX_URL_LENGTH,
    },
};

// ───── Database Models ───────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub short_description: String,
    pub image: String,
    pub technologies: String,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ProjectInsert {
    pub title: String,
    pub slug: String,
    pub description: String,
    pub short_description: String,
    pub image: String,
    pub technologies: String,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ───── API Response Models ──────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ProjectCreatedResponse {
    pub id: i64,
    pub slug: String,
    pub admin_url: String,
}

// ───── Input & Validation Requests ──────────────────────────────────

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct NewProjectRequest {
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
    pub description: String,

    #[validate(length(min = 1, max = MAX_SUMMARY_LENGTH))]
    pub short_description: String,

    #[validate(length(min = 1, max = MAX_IMAGE_PATH_LENGTH))]
    pub image: String,

    #[validate(length(max = MAX_TECHNOLOGIES_LENGTH))]
    #[serde(default)]
    pub technologies: String,

    #[validate(length(max = MAX_URL_LENGTH), custom(function = "validate_url"))]
    #[serde(default)]
    pub github_url: Option<String>,

    #[validate(length(max = MAX_URL_LENGTH), custom(function = "validate_url"))]
    #[serde(default)]
    pub live_url: Option<String>,

    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Deserialize, Validate, Default)]
#[serde(default)]
pub struct UpdateProjectRequest {
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
    pub description: Option<String>,

    #[validate(length(min = 1, max = MAX_SUMMARY_LENGTH))]
    pub short_description: Option<String>,

    #[validate(length(min = 1, max = MAX_IMAGE_PATH_LENGTH))]
    pub image: Option<String>,

    #[validate(length(max = MAX_TECHNOLOGIES_LENGTH))]
    pub technologies: Option<String>,

    #[validate(length(max = MAX_URL_LENGTH), custom(function = "validate_optional_url_field"))]
    pub github_url: OptionField<String>,

    #[validate(length(max = MAX_URL_LENGTH), custom(function = "validate_optional_url_field"))]
    pub live_url: OptionField<String>,

    pub featured: Option<bool>,
}

// ───── Conversions ──────────────────────────────────────────────────

impl NewProjectRequest {
    /// Builds the insert payload once the final slug has been resolved.
    pub fn prepare_for_insert(self, slug: String) -> ProjectInsert {
        let now = Utc::now();
        ProjectInsert {
            title: self.title,
            slug,
            description: self.description,
            short_description: self.short_description,
            image: self.image,
            technologies: self.technologies,
            github_url: self.github_url,
            live_url: self.live_url,
            featured: self.featured,
            created_at: now,
            updated_at: now,
        }
    }
}

impl ProjectInsert {
    pub fn into_project(self, id: i64) -> Project {
        Project {
            id,
            title: self.title,
            slug: self.slug,
            description: self.description,
            short_description: self.short_description,
            image: self.image,
            technologies: self.technologies,
            github_url: self.github_url,
            live_url: self.live_url,
            featured: self.featured,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl UpdateProjectRequest {
    /// Merges the requested changes into `project`. Slug handling is left to the caller.
    pub fn apply_to(self, project: &mut Project) {
        if let Some(title) = self.title {
            project.title = title;
        }
        if let Some(description) = self.description {
            project.description = description;
        }
        if let Some(short_description) = self.short_description {
            project.short_description = short_description;
        }
        if let Some(image) = self.image {
            project.image = image;
        }
        if let Some(technologies) = self.technologies {
            project.technologies = technologies;
        }
        self.github_url.apply_to(&mut project.github_url);
        self.live_url.apply_to(&mut project.live_url);
        if let Some(featured) = self.featured {
            project.featured = featured;
        }
    }
}
