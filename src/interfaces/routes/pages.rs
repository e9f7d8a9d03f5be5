use actix_web::web;

use crate::handlers::pages;

/// Public pages. Paths are registered without a trailing slash and
/// requests are normalized with `NormalizePath::trim`.
pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(pages::home))
        .route("/about", web::get().to(pages::about))
        .route("/projects", web::get().to(pages::projects))
        .route("/contact", web::get().to(pages::contact))
        .route("/blog", web::get().to(pages::blog))
        .route("/gallery", web::get().to(pages::gallery));
}
