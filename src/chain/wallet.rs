use anyhow::{Context, Result};
use async_trait::async_trait;
use ethers::middleware::SignerMiddleware;
use ethers::providers::{Http, Middleware, PendingTransaction, Provider};
use ethers::signers::{LocalWallet, Signer};
use ethers::types::{Address, TransactionRequest as EthTransactionRequest, H256, U64};
use log::{debug, info};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

use super::{ChainError, TransactionSubmitter};
use crate::entity::TransactionRequest;

pub type SignerClient = SignerMiddleware<Provider<Http>, LocalWallet>;

const RECEIPT_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// The single wallet every action signs with. Built once at start-up and
/// shared by reference.
pub struct WalletSession {
    client: Arc<SignerClient>,
    address: Address,
    chain_id: u64,
    submission_queue: Arc<Mutex<()>>,
}

impl WalletSession {
    /// Connect to the RPC endpoint and bind the private key to `chain_id`.
    pub fn connect(rpc_url: &str, private_key: &str, chain_id: u64) -> Result<Self> {
        let provider = Provider::<Http>::try_from(rpc_url)
            .with_context(|| format!("Invalid RPC URL '{}'", rpc_url))?;

        let wallet = private_key
            .trim()
            .parse::<LocalWallet>()
            .context("Invalid wallet private key")?
            .with_chain_id(chain_id);

        let address = wallet.address();
        info!("Wallet {:#x} bound to chain {}", address, chain_id);

        Ok(Self {
            client: Arc::new(SignerMiddleware::new(provider, wallet)),
            address,
            chain_id,
            submission_queue: Arc::new(Mutex::new(())),
        })
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Lock held while a transaction sequence is being signed and
    /// broadcast. One per wallet.
    pub fn submission_queue(&self) -> Arc<Mutex<()>> {
        self.submission_queue.clone()
    }
}

#[async_trait]
impl TransactionSubmitter for WalletSession {
    async fn submit(&self, request: &TransactionRequest) -> Result<H256, ChainError> {
        let tx = EthTransactionRequest::new()
            .from(self.address)
            .to(request.to)
            .data(request.data.clone());

        debug!("Sending {} to {:#x}", request.function, request.to);

        let pending = self
            .client
            .send_transaction(tx, None)
            .await
            .map_err(|e| ChainError::Submission(e.to_string()))?;

        Ok(pending.tx_hash())
    }

    async fn wait_for_confirmation(&self, tx_hash: H256) -> Result<(), ChainError> {
        let receipt = PendingTransaction::new(tx_hash, self.client.provider())
            .interval(RECEIPT_POLL_INTERVAL)
            .await
            .map_err(|e| ChainError::Confirmation {
                tx_hash,
                reason: e.to_string(),
            })?
            .ok_or(ChainError::MissingReceipt(tx_hash))?;

        if receipt.status != Some(U64::from(1u64)) {
            return Err(ChainError::Reverted(tx_hash));
        }

        Ok(())
    }
}
