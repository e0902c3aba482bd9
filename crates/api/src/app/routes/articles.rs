use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use gauchorecords_domain::Article;

use crate::app::routes::common;
use crate::app::{errors, params::Params, AppStores};
use crate::context::PrincipalContext;

pub fn router() -> Router {
    Router::new()
        .route("/all", get(all_articles))
        .route("/post", post(post_article))
        .route("/", get(get_article_by_id))
}

pub async fn all_articles(
    Extension(stores): Extension<Arc<AppStores>>,
    Extension(principal): Extension<PrincipalContext>,
) -> axum::response::Response {
    common::list_all(stores.articles.as_ref(), &principal).await
}

pub async fn post_article(
    Extension(stores): Extension<Arc<AppStores>>,
    Extension(principal): Extension<PrincipalContext>,
    Query(query): Query<HashMap<String, String>>,
) -> axum::response::Response {
    if let Err(resp) = common::authorize_create(&principal) {
        return resp;
    }

    let params = Params::from(query);
    let article = match bind_article(&params) {
        Ok(article) => article,
        Err(e) => return e.into_response(),
    };

    tracing::info!(date_added = %article.date_added, "creating article");

    match stores.articles.save(article).await {
        Ok(saved) => (StatusCode::OK, Json(saved)).into_response(),
        Err(e) => errors::storage_error(e),
    }
}

pub async fn get_article_by_id(
    Extension(stores): Extension<Arc<AppStores>>,
    Extension(principal): Extension<PrincipalContext>,
    Query(query): Query<HashMap<String, String>>,
) -> axum::response::Response {
    common::get_by_id(stores.articles.as_ref(), &principal, &Params::from(query)).await
}

fn bind_article(params: &Params) -> Result<Article, crate::app::params::BindError> {
    Ok(Article::new(
        params.string("title")?,
        params.string("url")?,
        params.string("explanation")?,
        params.string("email")?,
        params.datetime("dateAdded")?,
    ))
}
