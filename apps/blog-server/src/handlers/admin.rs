//! Admin dashboard and session endpoints.

use actix_web::cookie::{Cookie, SameSite, time::Duration};
use actix_web::{HttpResponse, http::header, web};

use quill_core::ports::AuthError;
use quill_shared::dto::{DashboardView, LoginForm, LoginPageParams, LoginView};

use super::see_other;
use crate::middleware::auth::{ADMIN_ROLE, LOGIN_PATH, SESSION_COOKIE};
use crate::middleware::{AdminSession, AppResult};
use crate::state::AppState;

/// GET /admin
pub async fn dashboard(
    admin: AdminSession,
    state: web::Data<AppState>,
) -> AppResult<HttpResponse> {
    let post_count = state.posts.count().await?;
    let category_count = state.categories.count().await?;
    let comment_count = state.comments.count().await?;

    Ok(HttpResponse::Ok().json(DashboardView {
        admin: admin.username,
        post_count,
        category_count,
        comment_count,
    }))
}

/// GET /admin/login
pub async fn login_page(params: web::Query<LoginPageParams>) -> HttpResponse {
    HttpResponse::Ok().json(LoginView {
        error: params.error.is_some(),
    })
}

/// POST /admin/login
pub async fn login(state: web::Data<AppState>, form: web::Form<LoginForm>) -> HttpResponse {
    let form = form.into_inner();

    match state
        .admin
        .check(&form.username, &form.password, state.passwords.as_ref())
    {
        Ok(()) => {}
        Err(AuthError::InvalidCredentials) => {
            tracing::warn!(username = %form.username, "Rejected admin login");
            return see_other(&format!("{}?error=1", LOGIN_PATH));
        }
        Err(e) => {
            tracing::error!(error = %e, "Admin login failed");
            return see_other(&format!("{}?error=1", LOGIN_PATH));
        }
    }

    let token = match state
        .tokens
        .generate_token(state.admin.username(), vec![ADMIN_ROLE.to_string()])
    {
        Ok(token) => token,
        Err(e) => {
            tracing::error!(error = %e, "Failed to issue session token");
            return see_other(&format!("{}?error=1", LOGIN_PATH));
        }
    };

    let cookie = Cookie::build(SESSION_COOKIE, token)
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(state.secure_cookies)
        .max_age(Duration::seconds(state.tokens.expiration_seconds()))
        .finish();

    tracing::info!(username = %form.username, "Admin logged in");

    HttpResponse::SeeOther()
        .cookie(cookie)
        .insert_header((header::LOCATION, "/admin"))
        .finish()
}

/// POST /admin/logout
pub async fn logout() -> HttpResponse {
    let mut cookie = Cookie::build(SESSION_COOKIE, "").path("/").finish();
    cookie.make_removal();

    HttpResponse::SeeOther()
        .cookie(cookie)
        .insert_header((header::LOCATION, LOGIN_PATH))
        .finish()
}
