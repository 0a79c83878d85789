use super::controller;
use super::AppState;
use axum::routing::{get, post};
use axum::Router;

pub fn register_routes(state: AppState) -> Router {
    Router::new()
        .route("/chat/pool", post(controller::chat_pool))
        .route("/health", get(controller::health))
        .with_state(state)
}
