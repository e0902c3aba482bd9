use axum::{routing::get, Router};

pub mod articles;
pub mod common;
pub mod help_requests;
pub mod menu_items;
pub mod recommendation_requests;
pub mod system;
pub mod ucsb_dates;

/// Router for all /api endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/api/currentUser", get(system::current_user))
        .nest("/api/articles", articles::router())
        .nest("/api/helprequest", help_requests::router())
        .nest("/api/recommendationrequests", recommendation_requests::router())
        .nest("/api/ucsbdiningcommonsmenuitem", menu_items::router())
        .nest("/api/ucsbdates", ucsb_dates::router())
}
