pub mod blog_post;
pub mod contact_message;
pub mod option_fields;
pub mod project;
pub mod resume;
pub mod validation;
