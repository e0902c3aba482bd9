use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use gauchorecords_domain::HelpRequest;

use crate::app::routes::common;
use crate::app::{errors, params::Params, AppStores};
use crate::context::PrincipalContext;

pub fn router() -> Router {
    Router::new()
        .route("/all", get(all_help_requests))
        .route("/post", post(post_help_request))
        .route("/", get(get_help_request_by_id))
}

pub async fn all_help_requests(
    Extension(stores): Extension<Arc<AppStores>>,
    Extension(principal): Extension<PrincipalContext>,
) -> axum::response::Response {
    common::list_all(stores.help_requests.as_ref(), &principal).await
}

pub async fn post_help_request(
    Extension(stores): Extension<Arc<AppStores>>,
    Extension(principal): Extension<PrincipalContext>,
    Query(query): Query<HashMap<String, String>>,
) -> axum::response::Response {
    if let Err(resp) = common::authorize_create(&principal) {
        return resp;
    }

    let params = Params::from(query);
    let request = match bind_help_request(&params) {
        Ok(request) => request,
        Err(e) => return e.into_response(),
    };

    tracing::info!(requester = %request.requester_email, "creating help request");

    match stores.help_requests.save(request).await {
        Ok(saved) => (StatusCode::OK, Json(saved)).into_response(),
        Err(e) => errors::storage_error(e),
    }
}

pub async fn get_help_request_by_id(
    Extension(stores): Extension<Arc<AppStores>>,
    Extension(principal): Extension<PrincipalContext>,
    Query(query): Query<HashMap<String, String>>,
) -> axum::response::Response {
    common::get_by_id(stores.help_requests.as_ref(), &principal, &Params::from(query)).await
}

fn bind_help_request(params: &Params) -> Result<HelpRequest, crate::app::params::BindError> {
    Ok(HelpRequest::new(
        params.string("requesterEmail")?,
        params.string("teamId")?,
        params.string("tableOrBreakoutRoom")?,
        params.datetime("requestTime")?,
        params.string("explanation")?,
        params.boolean("solved")?,
    ))
}
