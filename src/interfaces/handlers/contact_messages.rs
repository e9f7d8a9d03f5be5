use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::contact_message::{ContactMessageQuery, NewContactMessage, UpdateContactMessageRequest},
    errors::AppError,
    use_cases::extractors::AdminAccess,
    AppState,
};

#[instrument(skip(_admin, state, data))]
pub async fn record_message(
    _admin: AdminAccess,
    state: web::Data<AppState>,
    data: web::Json<NewContactMessage>,
) -> Result<impl Responder, AppError> {
    let message = state.contact_handler.record_message(data.into_inner()).await?;
    Ok(HttpResponse::Created().json(message))
}

#[instrument(skip(_admin, state))]
pub async fn list_messages(
    _admin: AdminAccess,
    state: web::Data<AppState>,
    query: web::Query<ContactMessageQuery>,
) -> Result<impl Responder, AppError> {
    let response = state.contact_handler.list_messages(query.unread).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[instrument(skip(_admin, state, data))]
pub async fn update_message(
    _admin: AdminAccess,
    id: web::Path<i64>,
    state: web::Data<AppState>,
    data: web::Json<UpdateContactMessageRequest>,
) -> Result<impl Responder, AppError> {
    let message = state
        .contact_handler
        .mark_read(id.into_inner(), data.read)
        .await?;
    Ok(HttpResponse::Ok().json(message))
}
