use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::entities::validation::{validate_not_blank, validate_title, MAX_TITLE_LENGTH};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Resume {
    pub id: i64,
    pub title: String,
    /// Sanitized HTML.
    pub content: String,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct NewResumeRequest {
    #[validate(
        length(min = 1, max = MAX_TITLE_LENGTH),
        custom(function = "validate_title")
    )]
    pub title: String,

    #[validate(custom(function = "validate_not_blank"))]
    pub content: String,
}

#[derive(Debug, Deserialize, Validate, Default)]
#[serde(default)]
pub struct UpdateResumeRequest {
    #[validate(
        length(min = 1, max = MAX_TITLE_LENGTH),
        custom(function = "validate_title")
    )]
    pub title: Option<String>,

    #[validate(custom(function = "validate_not_blank"))]
    pub content: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ResumeCreatedResponse {
    pub id: i64,
    pub admin_url: String,
}
