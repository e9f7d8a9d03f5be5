use actix_web::{error, web};

use crate::errors::AppError;

/// Malformed JSON bodies, query strings and path segments become `400`s
/// with the same `{"error": ...}` body as every other failure.
pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        let message = match &err {
            error::JsonPayloadError::ContentType => "Expected an application/json body".to_string(),
            other => format!("JSON payload error: {}", other),
        };
        AppError::BadRequest(message).into()
    }))
    .app_data(web::QueryConfig::default().error_handler(|err, _req| {
        AppError::BadRequest(format!("Query string error: {}", err)).into()
    }))
    .app_data(web::PathConfig::default().error_handler(|err, _req| {
        AppError::BadRequest(format!("Path error: {}", err)).into()
    }));
}
