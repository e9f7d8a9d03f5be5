use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::instrument;

use crate::{
    entities::blog_post::{NewBlogPostRequest, UpdateBlogPostRequest},
    errors::AppError,
    use_cases::extractors::AdminAccess,
    AppState,
};

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct BlogPostListQuery {
    pub published: bool,
}

#[instrument(skip(_admin, state, data))]
pub async fn create_blog_post(
    _admin: AdminAccess,
    state: web::Data<AppState>,
    data: web::Json<NewBlogPostRequest>,
) -> Result<impl Responder, AppError> {
    let response = state.blog_handler.create_blog_post(data.into_inner()).await?;
    Ok(HttpResponse::Created().json(response))
}

/// Lists every post, drafts included, unless `?published=true`.
#[instrument(skip(_admin, state))]
pub async fn list_blog_posts(
    _admin: AdminAccess,
    state: web::Data<AppState>,
    query: web::Query<BlogPostListQuery>,
) -> Result<impl Responder, AppError> {
    let posts = state.blog_handler.list_blog_posts(query.published).await?;
    Ok(HttpResponse::Ok().json(posts))
}

#[instrument(skip(_admin, state))]
pub async fn get_blog_post(
    _admin: AdminAccess,
    slug: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let post = state.blog_handler.get_blog_post_by_slug(&slug).await?;
    Ok(HttpResponse::Ok().json(post))
}

#[instrument(skip(_admin, state, data))]
pub async fn update_blog_post(
    _admin: AdminAccess,
    slug: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<UpdateBlogPostRequest>,
) -> Result<impl Responder, AppError> {
    let post = state
        .blog_handler
        .update_blog_post(&slug, data.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(post))
}
