pub mod controller;
pub mod error;
pub mod route;
pub mod schema;

use axum::http::{HeaderValue, Method};
use axum::Router;
use ethers::types::Address;
use log::warn;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::presenter::PoolPresenter;

#[derive(Clone)]
pub struct AppState {
    pub presenter: Arc<dyn PoolPresenter>,
    pub wallet_address: Address,
    pub chain_id: u64,
    pub allowed_origins: Vec<String>,
}

pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.allowed_origins);
    route::register_routes(state).layer(cors)
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Ignoring CORS origin '{}': {}", origin, e);
                None
            }
        })
        .collect();

    if origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(origins)
    }
}
