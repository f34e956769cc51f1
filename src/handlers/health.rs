//! Health check endpoint for service monitoring.

use crate::{db::DbPool, error::AppError};
use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Service status and ledger store connectivity.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,

    pub database: &'static str,

    pub timestamp: DateTime<Utc>,
}

/// Health check handler.
///
/// Runs `SELECT 1` against the ledger store. An unreachable database is
/// reported through the standard error response (500).
///
/// # Response (200 OK)
///
/// ```json
/// {
///   "status": "healthy",
///   "database": "connected",
///   "timestamp": "2025-12-21T19:00:00Z"
/// }
/// ```
pub async fn health_check(State(pool): State<DbPool>) -> Result<Json<HealthResponse>, AppError> {
    sqlx::query("SELECT 1").execute(&pool).await?;

    Ok(Json(HealthResponse {
        status: "healthy",
        database: "connected",
        timestamp: Utc::now(),
    }))
}
