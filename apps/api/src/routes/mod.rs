pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers::handle_analyze;
use crate::interview::handlers::handle_interview;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_body_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/analyze", post(handle_analyze))
        .route("/api/v1/interview", post(handle_interview))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
