//! Personal finance reports - Application Entry Point
//!
//! An HTTP service that renders report charts (pie and line graphs) from a
//! user's transaction ledger: expenses and income by category or business,
//! cash flow per account, and account balances. Each chart is returned as a
//! script/markup pair for the page layer to embed.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Database**: PostgreSQL ledger store with sqlx
//! - **Authentication**: API key with SHA-256 hashing, one key per user
//! - **Charts**: plotly figures embedded as `Plotly.newPlot` scripts
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Create database connection pool
//! 3. Run database migrations
//! 4. Build HTTP router with routes and middleware
//! 5. Start server on configured port

mod config;
mod db;
mod error;
mod handlers;
mod middleware;
mod models;
mod services;
#[cfg(test)]
mod test_support;

use tracing_subscriber::EnvFilter;

use axum::{Router, middleware as axum_middleware, routing::get};
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // RUST_LOG, defaulting to "info"
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = config::Config::from_env()?;
    tracing::info!("Configuration loaded");

    let pool = db::create_pool(&config.database_url, config.database_max_connections).await?;
    tracing::info!("Database pool created");

    db::run_migrations(&pool).await?;
    tracing::info!("Database migrations complete");

    let app = router(pool);

    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the HTTP router: public health check plus API-key protected reports.
fn router(pool: db::DbPool) -> Router {
    let authenticated_routes = Router::new()
        .route("/api/v1/reports", get(handlers::reports::list_reports))
        .route("/api/v1/reports/{name}", get(handlers::reports::get_report))
        .route_layer(axum_middleware::from_fn_with_state(
            pool.clone(),
            middleware::auth::auth_middleware,
        ));

    Router::new()
        .route("/health", get(handlers::health::health_check))
        .merge(authenticated_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(pool)
}
