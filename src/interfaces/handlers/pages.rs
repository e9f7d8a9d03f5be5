use actix_web::{http::header::ContentType, web, HttpResponse};
use tracing::instrument;

use crate::{errors::AppError, templates::Page, use_cases::site_context::SiteContext, AppState};

fn render(state: &AppState, page: Page, site: &SiteContext) -> Result<HttpResponse, AppError> {
    let body = state.renderer.render(page, site)?;
    Ok(HttpResponse::Ok().content_type(ContentType::html()).body(body))
}

#[instrument(skip(state, site))]
pub async fn home(state: web::Data<AppState>, site: SiteContext) -> Result<HttpResponse, AppError> {
    render(&state, Page::Home, &site)
}

#[instrument(skip(state, site))]
pub async fn about(state: web::Data<AppState>, site: SiteContext) -> Result<HttpResponse, AppError> {
    render(&state, Page::About, &site)
}

#[instrument(skip(state, site))]
pub async fn projects(state: web::Data<AppState>, site: SiteContext) -> Result<HttpResponse, AppError> {
    render(&state, Page::Projects, &site)
}

#[instrument(skip(state, site))]
pub async fn contact(state: web::Data<AppState>, site: SiteContext) -> Result<HttpResponse, AppError> {
    render(&state, Page::Contact, &site)
}

#[instrument(skip(state, site))]
pub async fn blog(state: web::Data<AppState>, site: SiteContext) -> Result<HttpResponse, AppError> {
    render(&state, Page::Blog, &site)
}

#[instrument(skip(state, site))]
pub async fn gallery(state: web::Data<AppState>, site: SiteContext) -> Result<HttpResponse, AppError> {
    render(&state, Page::Gallery, &site)
}
