pub mod html;
pub mod slugs;
