//! Report chart HTTP handlers.
//!
//! - GET /api/v1/reports - List the available report names
//! - GET /api/v1/reports/{name} - Render one report for the authenticated user

use crate::{
    db::DbPool,
    error::AppError,
    middleware::auth::AuthContext,
    models::report::{ReportKind, ReportListResponse, ReportResponse},
    services::report_service,
};
use axum::{
    Extension, Json,
    extract::{Path, State},
};

/// List every report name a client may request.
///
/// # Response (200 OK)
///
/// ```json
/// {
///   "reports": ["Expenses by Category", "Expenses by Business", "..."]
/// }
/// ```
pub async fn list_reports() -> Json<ReportListResponse> {
    Json(ReportListResponse {
        reports: ReportKind::ALL.iter().map(|kind| kind.name()).collect(),
    })
}

/// Render a report chart.
///
/// # Endpoint
///
/// `GET /api/v1/reports/{name}` where `name` is a percent-encoded report
/// name such as `Expenses%20by%20Category`.
///
/// # Response
///
/// - **Success (200 OK)**: `{report, script, markup}` ready to embed
/// - **Error (401)**: no authenticated user
/// - **Error (404)**: name is not a known report
/// - **Error (500)**: a ledger query failed
pub async fn get_report(
    State(pool): State<DbPool>,
    auth: Option<Extension<AuthContext>>,
    Path(name): Path<String>,
) -> Result<Json<ReportResponse>, AppError> {
    let Extension(auth) = auth.ok_or(AppError::UnauthenticatedAccess)?;

    let artifact = report_service::graph(&pool, auth.user_id, &name).await?;
    tracing::info!("Rendered '{}' for {}", name, auth.username);

    Ok(Json(ReportResponse::new(name, artifact)))
}
