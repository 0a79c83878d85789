use super::error::ApiError;
use super::schema::{ChatRequest, HealthResponse};
use super::AppState;
use crate::entity::PoolResponse;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use log::{error, info};

pub async fn chat_pool(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<PoolResponse>, ApiError> {
    let Json(req) = payload.map_err(|rejection| {
        info!("Rejected body: {}", rejection.body_text());
        ApiError::from(rejection)
    })?;
    let presenter = state.presenter.clone();

    // Run detached so a dropped connection cannot abandon a transaction
    // between broadcast and confirmation.
    let dispatch = tokio::spawn(async move { presenter.process_message(&req.message).await });

    match dispatch.await {
        Ok(Ok(response)) => {
            info!("{} -> {}", response.response_type, response.response);
            Ok(Json(response))
        }
        Ok(Err(e)) => {
            if e.is_client_error() {
                info!("Rejected message: {}", e);
            } else {
                error!("Dispatch failed: {}", e);
            }
            Err(e.into())
        }
        Err(e) => {
            error!("Dispatch task aborted: {}", e);
            Err(ApiError::internal(e))
        }
    }
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        wallet: format!("{:#x}", state.wallet_address),
        chain_id: state.chain_id,
    })
}
