use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn create_routes(state: AppState) -> Router {
    Router::new()
        // The three page variants
        .route("/", get(super::handlers::pages::midnight))
        .route("/classic", get(super::handlers::pages::classic))
        .route("/paper", get(super::handlers::pages::paper))
        // API endpoints
        .route("/api/chat", post(super::handlers::api::exchange))
        // Health check
        .route("/health", get(super::handlers::health::health_check))
        .with_state(state)
}
