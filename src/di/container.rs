use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Duration;

use crate::api::AppState;
use crate::chain::{PoolContract, TokenContract, WalletSession};
use crate::classifier::HuggingFaceClassifier;
use crate::config::AppConfig;
use crate::interactor::PoolInteractorImpl;
use crate::presenter::{PoolPresenter, PoolPresenterImpl};
use crate::router::ActionRegistry;
use crate::view::TextPoolView;

type PoolPresenterService =
    PoolPresenterImpl<HuggingFaceClassifier, PoolInteractorImpl<WalletSession>, TextPoolView>;

/// ServiceContainer provides access to core application dependencies
pub struct ServiceContainer {
    // Core services
    wallet: Arc<WalletSession>,

    // Pool services
    pool_presenter: Arc<PoolPresenterService>,

    // Configuration
    config: AppConfig,
}

impl ServiceContainer {
    /// Build every service from validated configuration
    pub fn new(config: AppConfig) -> Result<Self> {
        let addresses = config.contract_addresses()?;
        let default_allowance = config.default_allowance()?;

        // Wallet is created once and shared by every request
        let wallet = Arc::new(
            WalletSession::connect(&config.rpc_url, &config.acc_private_key, config.chain_id)
                .context("Failed to create wallet session")?,
        );

        let classifier = Arc::new(
            HuggingFaceClassifier::new(
                &config.classifier_url,
                &config.classifier_model,
                &config.hugging_face,
                Duration::from_secs(config.classifier_timeout_secs),
            )
            .context("Failed to create classifier client")?,
        );

        let pool_interactor = Arc::new(PoolInteractorImpl::new(
            wallet.clone(),
            PoolContract::new(addresses.pool),
            TokenContract::new("CLK", addresses.clk_token),
            TokenContract::new("MIR", addresses.mir_token),
            wallet.submission_queue(),
            Duration::from_secs(config.confirmation_timeout_secs),
        ));

        let pool_presenter = Arc::new(PoolPresenterImpl::new(
            classifier,
            pool_interactor,
            Arc::new(TextPoolView),
            ActionRegistry::new(),
            default_allowance,
        ));

        Ok(Self {
            wallet,
            pool_presenter,
            config,
        })
    }

    pub fn pool_presenter(&self) -> Arc<dyn PoolPresenter> {
        self.pool_presenter.clone()
    }

    /// State shared by the HTTP handlers
    pub fn app_state(&self) -> AppState {
        AppState {
            presenter: self.pool_presenter(),
            wallet_address: self.wallet.address(),
            chain_id: self.wallet.chain_id(),
            allowed_origins: self.config.allowed_origins(),
        }
    }
}
