//! Pool intent bot - Main executable
//!
//! Serves `POST /chat/pool`: a chat message is classified into one of the
//! supported pool actions (approve, swap, add or remove liquidity) and the
//! matching transaction is sent from the managed wallet.
use anyhow::Context;
use dotenv::dotenv;
use log::info;
use pool_intent_bot::{build_router, AppConfig, ServiceContainer};
use tokio::net::TcpListener;

/// Application entry point
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    // Initialize logging with default level of "info"
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    info!("Starting pool intent bot v{}", pool_intent_bot::VERSION);

    // Load and validate configuration
    let config = AppConfig::from_env().context("Failed to load configuration")?;
    let bind_address = config.bind_address();

    info!("Connecting to {} (chain {})...", config.rpc_url, config.chain_id);
    let services = ServiceContainer::new(config).context("Failed to initialize services")?;

    let app = build_router(services.app_state());

    let listener = TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;

    info!("Server running on {}", bind_address);
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
