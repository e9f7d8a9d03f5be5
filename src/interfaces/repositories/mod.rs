pub mod blog_post;
pub mod contact_message;
pub mod health;
pub mod project;
pub mod resume;
pub mod sqlx_repo;
