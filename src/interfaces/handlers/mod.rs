pub mod blog_posts;
pub mod contact_messages;
pub mod pages;
pub mod projects;
pub mod resumes;
pub mod system;
