//! Method override - lets HTML forms reach `PUT`/`PATCH`/`DELETE` routes.

use actix_web::{
    Error,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
    http::Method,
    web,
};
use serde::Deserialize;
use std::future::{Ready, ready};

/// Header alternative to the `_method` query parameter.
pub static METHOD_OVERRIDE_HEADER: &str = "X-HTTP-Method-Override";

/// Rewrites `POST` requests carrying `?_method=PUT|PATCH|DELETE` (or the
/// override header) to that method before routing.
///
/// Must be registered with `App::wrap` so it runs before route matching.
pub struct MethodOverride;

#[derive(Deserialize)]
struct OverrideParams {
    #[serde(rename = "_method")]
    method: Option<String>,
}

fn allowed(value: &str) -> Option<Method> {
    match value.trim().to_ascii_uppercase().as_str() {
        "PUT" => Some(Method::PUT),
        "PATCH" => Some(Method::PATCH),
        "DELETE" => Some(Method::DELETE),
        _ => None,
    }
}

fn requested_method(req: &ServiceRequest) -> Option<Method> {
    if let Some(value) = req
        .headers()
        .get(METHOD_OVERRIDE_HEADER)
        .and_then(|v| v.to_str().ok())
    {
        return allowed(value);
    }

    web::Query::<OverrideParams>::from_query(req.query_string())
        .ok()?
        .into_inner()
        .method
        .as_deref()
        .and_then(allowed)
}

impl<S, B> Transform<S, ServiceRequest> for MethodOverride
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = MethodOverrideService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(MethodOverrideService { service }))
    }
}

pub struct MethodOverrideService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for MethodOverrideService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = S::Future;

    forward_ready!(service);

    fn call(&self, mut req: ServiceRequest) -> Self::Future {
        if req.method() == Method::POST {
            if let Some(method) = requested_method(&req) {
                tracing::debug!(%method, path = %req.path(), "Overriding request method");
                req.head_mut().method = method;
            }
        }

        self.service.call(req)
    }
}
