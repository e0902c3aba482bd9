use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use gauchorecords_domain::UcsbDate;

use crate::app::routes::common;
use crate::app::{errors, params::Params, AppStores};
use crate::context::PrincipalContext;

pub fn router() -> Router {
    Router::new()
        .route("/all", get(all_ucsb_dates))
        .route("/post", post(post_ucsb_date))
        .route("/", get(get_ucsb_date_by_id))
}

pub async fn all_ucsb_dates(
    Extension(stores): Extension<Arc<AppStores>>,
    Extension(principal): Extension<PrincipalContext>,
) -> axum::response::Response {
    common::list_all(stores.ucsb_dates.as_ref(), &principal).await
}

pub async fn post_ucsb_date(
    Extension(stores): Extension<Arc<AppStores>>,
    Extension(principal): Extension<PrincipalContext>,
    Query(query): Query<HashMap<String, String>>,
) -> axum::response::Response {
    if let Err(resp) = common::authorize_create(&principal) {
        return resp;
    }

    let params = Params::from(query);
    let date = match bind_ucsb_date(&params) {
        Ok(date) => date,
        Err(e) => return e.into_response(),
    };

    tracing::info!(local_date_time = %date.local_date_time, "creating ucsb date");

    match stores.ucsb_dates.save(date).await {
        Ok(saved) => (StatusCode::OK, Json(saved)).into_response(),
        Err(e) => errors::storage_error(e),
    }
}

pub async fn get_ucsb_date_by_id(
    Extension(stores): Extension<Arc<AppStores>>,
    Extension(principal): Extension<PrincipalContext>,
    Query(query): Query<HashMap<String, String>>,
) -> axum::response::Response {
    common::get_by_id(stores.ucsb_dates.as_ref(), &principal, &Params::from(query)).await
}

fn bind_ucsb_date(params: &Params) -> Result<UcsbDate, crate::app::params::BindError> {
    Ok(UcsbDate::new(
        params.string("quarterYYYYQ")?,
        params.string("name")?,
        params.datetime("localDateTime")?,
    ))
}
