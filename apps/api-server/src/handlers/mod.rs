//! HTTP handlers and route configuration.

mod blogs;
mod health;

use actix_web::web;

use crate::middleware::error::{json_config, path_config};

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(path_config())
        // Public routes
        .route("/health", web::get().to(health::health_check))
        // Blog routes (bearer token required)
        .service(
            web::resource("/blogs")
                .route(web::get().to(blogs::list_blogs))
                .route(web::post().to(blogs::create_blog)),
        )
        .service(
            web::resource("/blogs/{id}")
                .route(web::put().to(blogs::update_blog))
                .route(web::delete().to(blogs::delete_blog)),
        );
}
