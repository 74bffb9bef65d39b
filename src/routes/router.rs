use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers::{AppState, handle_walk, handle_walk_batch, health};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { "klassen-walker" }))
        .route("/health", get(health))
        .route("/walk", post(handle_walk))
        .route("/walk/batch", post(handle_walk_batch))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
