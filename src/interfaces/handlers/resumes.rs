use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::resume::{NewResumeRequest, UpdateResumeRequest},
    errors::AppError,
    use_cases::extractors::AdminAccess,
    AppState,
};

#[instrument(skip(_admin, state, data))]
pub async fn create_resume(
    _admin: AdminAccess,
    state: web::Data<AppState>,
    data: web::Json<NewResumeRequest>,
) -> Result<impl Responder, AppError> {
    let response = state.resume_handler.create_resume(data.into_inner()).await?;
    Ok(HttpResponse::Created().json(response))
}

/// The resume shown on the public pages.
#[instrument(skip(_admin, state))]
pub async fn get_current_resume(
    _admin: AdminAccess,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let resume = state
        .resume_handler
        .get_current_resume()
        .await?
        .ok_or_else(|| AppError::NotFound("No resume has been created".into()))?;
    Ok(HttpResponse::Ok().json(resume))
}

#[instrument(skip(_admin, state, data))]
pub async fn update_resume(
    _admin: AdminAccess,
    id: web::Path<i64>,
    state: web::Data<AppState>,
    data: web::Json<UpdateResumeRequest>,
) -> Result<impl Responder, AppError> {
    let resume = state
        .resume_handler
        .update_resume(id.into_inner(), data.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(resume))
}
