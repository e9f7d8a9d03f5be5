use actix_web::web;

use crate::handlers::{blog_posts, contact_messages, projects, resumes, system::health_check};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check)
        .service(
            web::resource("/projects")
                .route(web::get().to(projects::list_projects))
                .route(web::post().to(projects::create_project))
        )
        .service(
            web::resource("/projects/{slug}")
                .route(web::get().to(projects::get_project))
                .route(web::patch().to(projects::update_project))
        )
        .service(
            web::resource("/posts")
                .route(web::get().to(blog_posts::list_blog_posts))
                .route(web::post().to(blog_posts::create_blog_post))
        )
        .service(
            web::resource("/posts/{slug}")
                .route(web::get().to(blog_posts::get_blog_post))
                .route(web::patch().to(blog_posts::update_blog_post))
        )
        .service(
            web::resource("/resumes")
                .route(web::post().to(resumes::create_resume))
        )
        .service(
            web::resource("/resumes/current")
                .route(web::get().to(resumes::get_current_resume))
        )
        .service(
            web::resource("/resumes/{id}")
                .route(web::patch().to(resumes::update_resume))
        )
        .service(
            web::resource("/messages")
                .route(web::get().to(contact_messages::list_messages))
                .route(web::post().to(contact_messages::record_message))
        )
        .service(
            web::resource("/messages/{id}")
                .route(web::patch().to(contact_messages::update_message))
        );
}
