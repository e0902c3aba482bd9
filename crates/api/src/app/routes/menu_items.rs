use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use gauchorecords_domain::UcsbDiningCommonsMenuItem;

use crate::app::routes::common;
use crate::app::{errors, params::Params, AppStores};
use crate::context::PrincipalContext;

pub fn router() -> Router {
    Router::new()
        .route("/all", get(all_menu_items))
        .route("/post", post(post_menu_item))
        .route("/", get(get_menu_item_by_id))
}

pub async fn all_menu_items(
    Extension(stores): Extension<Arc<AppStores>>,
    Extension(principal): Extension<PrincipalContext>,
) -> axum::response::Response {
    common::list_all(stores.menu_items.as_ref(), &principal).await
}

pub async fn post_menu_item(
    Extension(stores): Extension<Arc<AppStores>>,
    Extension(principal): Extension<PrincipalContext>,
    Query(query): Query<HashMap<String, String>>,
) -> axum::response::Response {
    if let Err(resp) = common::authorize_create(&principal) {
        return resp;
    }

    let params = Params::from(query);
    let item = match bind_menu_item(&params) {
        Ok(item) => item,
        Err(e) => return e.into_response(),
    };

    tracing::info!(dining_commons = %item.dining_commons_code, "creating menu item");

    match stores.menu_items.save(item).await {
        Ok(saved) => (StatusCode::OK, Json(saved)).into_response(),
        Err(e) => errors::storage_error(e),
    }
}

pub async fn get_menu_item_by_id(
    Extension(stores): Extension<Arc<AppStores>>,
    Extension(principal): Extension<PrincipalContext>,
    Query(query): Query<HashMap<String, String>>,
) -> axum::response::Response {
    common::get_by_id(stores.menu_items.as_ref(), &principal, &Params::from(query)).await
}

fn bind_menu_item(
    params: &Params,
) -> Result<UcsbDiningCommonsMenuItem, crate::app::params::BindError> {
    Ok(UcsbDiningCommonsMenuItem::new(
        params.string("name")?,
        params.string("diningCommonsCode")?,
        params.string("station")?,
    ))
}
