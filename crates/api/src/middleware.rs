use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{HeaderMap, Method, StatusCode},
    middleware::Next,
    response::Response,
};
use chrono::Utc;

use gauchorecords_auth::{Principal, TokenValidator};

use crate::app::errors;
use crate::context::PrincipalContext;

const CSRF_HEADER: &str = "x-xsrf-token";

#[derive(Clone)]
pub struct AuthState {
    pub validator: Arc<dyn TokenValidator>,
}

/// Resolve the caller's principal and install it as a request extension.
///
/// Missing or invalid credentials resolve to the anonymous principal; the
/// per-route role gate answers 403, so no 401 is ever produced here.
pub async fn identity_middleware(
    State(state): State<AuthState>,
    mut req: Request,
    next: Next,
) -> Response {
    let principal = principal_from_headers(&state, req.headers());
    req.extensions_mut().insert(PrincipalContext::new(principal));
    next.run(req).await
}

fn principal_from_headers(state: &AuthState, headers: &HeaderMap) -> Principal {
    let Some(token) = extract_bearer(headers) else {
        return Principal::anonymous();
    };

    match state.validator.validate(token, Utc::now()) {
        Ok(claims) => Principal::authenticated(claims.sub, claims.roles),
        Err(e) => {
            tracing::debug!(error = %e, "treating request as anonymous");
            Principal::anonymous()
        }
    }
}

fn extract_bearer(headers: &HeaderMap) -> Option<&str> {
    let header = headers.get(axum::http::header::AUTHORIZATION)?.to_str().ok()?;
    let token = header.strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        return None;
    }
    Some(token)
}

/// Reject state-changing requests that carry no CSRF token.
pub async fn csrf_middleware(req: Request, next: Next) -> Response {
    let mutating = req.method() == Method::POST
        || req.method() == Method::PUT
        || req.method() == Method::DELETE;
    if mutating {
        let token_present = req
            .headers()
            .get(CSRF_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(|v| !v.trim().is_empty())
            .unwrap_or(false);

        if !token_present {
            return errors::json_error(
                StatusCode::FORBIDDEN,
                "AccessDenied",
                "missing CSRF token",
            );
        }
    }
    next.run(req).await
}
