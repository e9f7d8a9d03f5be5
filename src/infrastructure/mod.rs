pub mod db;
pub mod templates;
pub mod utils;
