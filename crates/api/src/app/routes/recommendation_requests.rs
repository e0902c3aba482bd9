use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use gauchorecords_domain::RecommendationRequest;

use crate::app::routes::common;
use crate::app::{errors, params::Params, AppStores};
use crate::context::PrincipalContext;

pub fn router() -> Router {
    Router::new()
        .route("/all", get(all_recommendation_requests))
        .route("/post", post(post_recommendation_request))
        .route("/", get(get_recommendation_request_by_id))
}

pub async fn all_recommendation_requests(
    Extension(stores): Extension<Arc<AppStores>>,
    Extension(principal): Extension<PrincipalContext>,
) -> axum::response::Response {
    common::list_all(stores.recommendation_requests.as_ref(), &principal).await
}

pub async fn post_recommendation_request(
    Extension(stores): Extension<Arc<AppStores>>,
    Extension(principal): Extension<PrincipalContext>,
    Query(query): Query<HashMap<String, String>>,
) -> axum::response::Response {
    if let Err(resp) = common::authorize_create(&principal) {
        return resp;
    }

    let params = Params::from(query);
    let request = match bind_recommendation_request(&params) {
        Ok(request) => request,
        Err(e) => return e.into_response(),
    };

    tracing::info!(
        date_requested = %request.date_requested,
        date_needed = %request.date_needed,
        "creating recommendation request"
    );

    match stores.recommendation_requests.save(request).await {
        Ok(saved) => (StatusCode::OK, Json(saved)).into_response(),
        Err(e) => errors::storage_error(e),
    }
}

pub async fn get_recommendation_request_by_id(
    Extension(stores): Extension<Arc<AppStores>>,
    Extension(principal): Extension<PrincipalContext>,
    Query(query): Query<HashMap<String, String>>,
) -> axum::response::Response {
    common::get_by_id(
        stores.recommendation_requests.as_ref(),
        &principal,
        &Params::from(query),
    )
    .await
}

fn bind_recommendation_request(
    params: &Params,
) -> Result<RecommendationRequest, crate::app::params::BindError> {
    // The requester field binds from `requestorEmail` on the wire; the
    // frontend has always sent it with that spelling.
    Ok(RecommendationRequest::new(
        params.string("requestorEmail")?,
        params.string("professorEmail")?,
        params.string("explanation")?,
        params.datetime("dateRequested")?,
        params.datetime("dateNeeded")?,
        params.boolean("done")?,
    ))
}
