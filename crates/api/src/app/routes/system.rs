use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};

use crate::app::errors;
use crate::context::PrincipalContext;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// Identity echo for the frontend; anonymous callers get 403.
pub async fn current_user(
    Extension(principal): Extension<PrincipalContext>,
) -> axum::response::Response {
    let principal = principal.principal();
    if !principal.is_authenticated() {
        return errors::json_error(
            StatusCode::FORBIDDEN,
            "AccessDenied",
            "access denied: authentication required",
        );
    }

    Json(serde_json::json!({
        "user": principal.subject(),
        "roles": principal.roles().iter().map(|r| r.as_str()).collect::<Vec<_>>(),
    }))
    .into_response()
}
