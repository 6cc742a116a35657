pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::extraction;
use crate::matching;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Document extraction trigger
        .route(
            "/api/v1/documents/parse",
            post(extraction::handlers::handle_parse_document),
        )
        // Match analysis
        .route(
            "/api/v1/matches/analyze",
            post(matching::handlers::handle_analyze),
        )
        .with_state(state)
}
