//! HTTP handlers and route configuration.

mod admin;
mod admin_categories;
mod admin_posts;
mod health;
mod public;

use actix_web::{HttpResponse, http::header, web};
use uuid::Uuid;

/// Number of posts on the home page.
pub const HOME_POST_LIMIT: u64 = 6;

/// Size of the "popular" and "recent" side lists.
pub const SIDEBAR_LIMIT: u64 = 3;

/// `303 See Other` to `location`.
pub(crate) fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Parse a store id from a path segment.
pub(crate) fn parse_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw.trim()).ok()
}

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        // Public routes
        .route("/", web::get().to(public::home))
        .route("/search", web::get().to(public::search))
        .route("/category/{slug}", web::get().to(public::category))
        .route("/post/{id}", web::get().to(public::post_page))
        .route("/post/{id}/like", web::post().to(public::like_post))
        .route("/post/{id}/comment", web::post().to(public::comment_post))
        // Admin routes
        .service(
            web::scope("/admin")
                .route("", web::get().to(admin::dashboard))
                .route("/login", web::get().to(admin::login_page))
                .route("/login", web::post().to(admin::login))
                .route("/logout", web::post().to(admin::logout))
                .route("/posts", web::get().to(admin_posts::list))
                .route("/posts", web::post().to(admin_posts::create))
                .route("/posts/new", web::get().to(admin_posts::new_form))
                .route("/posts/{id}/edit", web::get().to(admin_posts::edit_form))
                .route("/posts/{id}", web::put().to(admin_posts::update))
                .route("/posts/{id}", web::delete().to(admin_posts::delete))
                .route("/categories", web::get().to(admin_categories::list))
                .route("/categories", web::post().to(admin_categories::create))
                .route("/categories/new", web::get().to(admin_categories::new_form))
                .route(
                    "/categories/{id}/edit",
                    web::get().to(admin_categories::edit_form),
                )
                .route("/categories/{id}", web::put().to(admin_categories::update))
                .route(
                    "/categories/{id}",
                    web::delete().to(admin_categories::delete),
                ),
        );
}
