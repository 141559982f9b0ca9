//! Health and schema handlers.

use axum::Json;
use serde::Serialize;
use titlecheck::{COLUMNS, ColumnSpec};

/// Response for the health endpoint.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Liveness check.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// The required columns, in order.
pub async fn get_columns() -> Json<&'static [ColumnSpec]> {
    Json(COLUMNS)
}
