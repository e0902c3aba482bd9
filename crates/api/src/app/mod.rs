//! HTTP API application wiring (axum router + store wiring).
//!
//! Layout:
//! - `stores.rs`: the per-entity persistence gateways behind `Arc<dyn _>`
//! - `routes/`: HTTP routes + handlers (one file per entity)
//! - `params.rs`: typed query-parameter binding
//! - `errors.rs`: the `{type, message}` error envelope

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use gauchorecords_auth::{Hs256TokenValidator, TokenValidator};

use crate::middleware;

pub mod errors;
pub mod params;
pub mod routes;
pub mod stores;

pub use stores::AppStores;

/// Build the full HTTP router (public entrypoint used by `main.rs` and tests).
pub fn build_app(jwt_secret: String, stores: Arc<AppStores>) -> Router {
    let validator: Arc<dyn TokenValidator> = Arc::new(Hs256TokenValidator::new(jwt_secret));
    let auth_state = middleware::AuthState { validator };

    // All /api routes see a principal (possibly anonymous) and the CSRF
    // check. ServiceBuilder runs top-down: CSRF, then identity, then the
    // store extension.
    let protected = routes::router().layer(
        ServiceBuilder::new()
            .layer(axum::middleware::from_fn(middleware::csrf_middleware))
            .layer(axum::middleware::from_fn_with_state(
                auth_state,
                middleware::identity_middleware,
            ))
            .layer(Extension(stores)),
    );

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(protected)
}
