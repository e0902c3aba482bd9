use std::sync::Arc;

use gauchorecords_api::app::{build_app, AppStores};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    gauchorecords_observability::init();

    let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
        tracing::warn!("JWT_SECRET not set; using insecure dev default");
        "dev-secret".to_string()
    });

    let stores = match std::env::var("DATABASE_URL") {
        Ok(url) => {
            let pool = sqlx::PgPool::connect(&url).await?;
            gauchorecords_store::ensure_schema(&pool).await?;
            AppStores::postgres(pool)
        }
        Err(_) => {
            tracing::warn!("DATABASE_URL not set; records live in memory only");
            AppStores::in_memory()
        }
    };

    let app = build_app(jwt_secret, Arc::new(stores));

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
