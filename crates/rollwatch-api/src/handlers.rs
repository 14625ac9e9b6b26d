//! HTTP handlers.
//!
//! The check endpoint is total: unknown services and a missing `svc`
//! parameter both evaluate to an estimate of 0.

use axum::Json;
use axum::extract::{Query, State};
use tracing::info;

use crate::ApiState;

/// Query parameters for the check endpoint.
#[derive(serde::Deserialize)]
pub struct CheckQuery {
    /// Service name; absent is treated as the empty name.
    #[serde(default)]
    pub svc: String,
}

/// Response body for the check endpoint.
#[derive(Debug, PartialEq, serde::Serialize)]
pub struct CheckResponse {
    pub error_rate: u32,
}

/// GET /check?svc=<name>
pub async fn check(
    State(state): State<ApiState>,
    Query(query): Query<CheckQuery>,
) -> Json<CheckResponse> {
    let error_rate = state.evaluator.check(&query.svc);

    info!(svc = %query.svc, errors = error_rate, "check");

    Json(CheckResponse { error_rate })
}
