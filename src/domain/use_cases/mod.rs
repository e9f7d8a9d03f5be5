pub mod blog;
pub mod contact;
pub mod extractors;
pub mod project;
pub mod resume;
pub mod site_context;
