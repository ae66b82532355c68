//! Admin session extractor.

use actix_web::{
    FromRequest, HttpRequest, HttpResponse, ResponseError,
    dev::Payload,
    http::{StatusCode, header},
    web,
};
use std::fmt;
use std::future::{Ready, ready};

use quill_core::ports::AuthError;

use crate::state::AppState;

/// Cookie carrying the admin session token.
pub const SESSION_COOKIE: &str = "quill_admin";

/// Role every admin session token must carry.
pub const ADMIN_ROLE: &str = "admin";

/// Where unauthenticated admin requests are sent.
pub const LOGIN_PATH: &str = "/admin/login";

/// Verified admin identity, resolved once per request.
///
/// Use this as the first argument of a handler to guard it:
/// ```ignore
/// async fn dashboard(admin: AdminSession) -> impl Responder {
///     format!("Hello, {}!", admin.username)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub username: String,
}

/// Rejection for admin routes: always a redirect to the login page.
#[derive(Debug)]
pub struct AdminRequired(pub AuthError);

impl fmt::Display for AdminRequired {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Admin session required: {}", self.0)
    }
}

impl ResponseError for AdminRequired {
    fn status_code(&self) -> StatusCode {
        StatusCode::SEE_OTHER
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::SeeOther()
            .insert_header((header::LOCATION, LOGIN_PATH))
            .finish()
    }
}

/// Session token from the cookie, or from an `Authorization: Bearer` header.
fn session_token(req: &HttpRequest) -> Option<String> {
    if let Some(cookie) = req.cookie(SESSION_COOKIE) {
        return Some(cookie.value().to_string());
    }

    req.headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(String::from)
}

fn resolve(req: &HttpRequest) -> Result<AdminSession, AdminRequired> {
    let state = req.app_data::<web::Data<AppState>>().ok_or_else(|| {
        tracing::error!("AppState not found in app data");
        AdminRequired(AuthError::InvalidToken(
            "Server configuration error".to_string(),
        ))
    })?;

    let token = session_token(req).ok_or(AdminRequired(AuthError::MissingAuth))?;
    let claims = state.tokens.validate_token(&token).map_err(AdminRequired)?;

    if !claims.roles.iter().any(|r| r == ADMIN_ROLE) {
        return Err(AdminRequired(AuthError::InsufficientPermissions));
    }

    Ok(AdminSession {
        username: claims.subject,
    })
}

impl FromRequest for AdminSession {
    type Error = AdminRequired;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = resolve(req);
        if let Err(rejection) = &result {
            tracing::debug!(path = %req.path(), reason = %rejection.0, "Admin session rejected");
        }
        ready(result)
    }
}
