//! rollwatch-api — HTTP API for rollwatch.
//!
//! Provides the axum route handler for the derived error-rate check.
//!
//! # API Routes
//!
//! | Method | Path | Description |
//! |---|---|---|
//! | GET | `/check?svc=<name>` | Estimated error volume for a service |

pub mod handlers;

use axum::Router;
use axum::routing::get;
use rollwatch_health::ErrorRateEvaluator;

/// Shared state for API handlers.
#[derive(Clone)]
pub struct ApiState {
    pub evaluator: ErrorRateEvaluator,
}

/// Build the HTTP router.
pub fn build_router(evaluator: ErrorRateEvaluator) -> Router {
    let state = ApiState { evaluator };

    Router::new()
        .route("/check", get(handlers::check))
        .with_state(state)
}
