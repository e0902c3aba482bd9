//! The shared resource-collection handlers.
//!
//! `list-all` and `get-by-id` are identical for every entity; `create`
//! differs only in the bound parameters and lives in each entity module.

use axum::{http::StatusCode, response::IntoResponse, Json};

use gauchorecords_auth::{require_role, Role};
use gauchorecords_core::Entity;
use gauchorecords_store::RecordStore;

use crate::app::{errors, params::Params};
use crate::context::PrincipalContext;

/// `GET /all`: authorize `USER`, return the JSON array of all records.
pub async fn list_all<E: Entity>(
    store: &dyn RecordStore<E>,
    principal: &PrincipalContext,
) -> axum::response::Response {
    if let Err(e) = require_role(principal.principal(), Role::USER) {
        return errors::access_denied(e);
    }

    match store.find_all().await {
        Ok(records) => (StatusCode::OK, Json(records)).into_response(),
        Err(e) => errors::storage_error(e),
    }
}

/// `GET /?id=<n>`: authorize `USER`, bind `id`, 404 with the canonical
/// envelope when the row is missing.
pub async fn get_by_id<E: Entity>(
    store: &dyn RecordStore<E>,
    principal: &PrincipalContext,
    params: &Params,
) -> axum::response::Response {
    if let Err(e) = require_role(principal.principal(), Role::USER) {
        return errors::access_denied(e);
    }

    let id = match params.record_id("id") {
        Ok(id) => id,
        Err(e) => return e.into_response(),
    };

    match store.find_by_id(id).await {
        Ok(Some(record)) => (StatusCode::OK, Json(record)).into_response(),
        Ok(None) => errors::entity_not_found(E::NAME, id),
        Err(e) => errors::storage_error(e),
    }
}

/// `POST /post` preamble: authorize `ADMIN`.
pub fn authorize_create(principal: &PrincipalContext) -> Result<(), axum::response::Response> {
    require_role(principal.principal(), Role::ADMIN).map_err(errors::access_denied)
}
