pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/analyze-text", post(handlers::handle_analyze_text))
        .route("/analyze-file", post(handlers::handle_analyze_file))
        .with_state(state)
}
