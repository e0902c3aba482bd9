use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use gauchorecords_auth::AuthzError;
use gauchorecords_core::{DomainError, RecordId};
use gauchorecords_store::StoreError;

/// Render the standard error envelope.
pub fn json_error(
    status: StatusCode,
    kind: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "type": kind,
            "message": message.into(),
        })),
    )
        .into_response()
}

/// Canonical 404 envelope; the message text is part of the API contract.
pub fn entity_not_found(entity: &'static str, id: RecordId) -> axum::response::Response {
    json_error(
        StatusCode::NOT_FOUND,
        "EntityNotFoundException",
        DomainError::entity_not_found(entity, id).to_string(),
    )
}

pub fn access_denied(err: AuthzError) -> axum::response::Response {
    json_error(StatusCode::FORBIDDEN, "AccessDenied", err.to_string())
}

/// Backend failures surface as a generic 500; details go to the log only.
pub fn storage_error(err: StoreError) -> axum::response::Response {
    tracing::error!(error = %err, "storage backend failure");
    json_error(
        StatusCode::INTERNAL_SERVER_ERROR,
        "StorageError",
        "storage backend failure",
    )
}
