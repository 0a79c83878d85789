pub mod contracts;
pub mod wallet;

use async_trait::async_trait;
use ethers::types::H256;

use crate::entity::TransactionRequest;

pub use contracts::{PoolContract, TokenContract};
pub use wallet::WalletSession;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChainError {
    #[error("failed to encode {function} call: {reason}")]
    Encoding {
        function: &'static str,
        reason: String,
    },

    #[error("{0}")]
    Submission(String),

    #[error("transaction {tx_hash:#x} was not confirmed: {reason}")]
    Confirmation { tx_hash: H256, reason: String },

    #[error("transaction {0:#x} reverted")]
    Reverted(H256),

    #[error("no receipt for transaction {0:#x}")]
    MissingReceipt(H256),
}

/// Broadcasts signed contract calls for the managed wallet.
#[async_trait]
pub trait TransactionSubmitter: Send + Sync {
    /// Sign and broadcast, returning as soon as the node accepted the
    /// transaction.
    async fn submit(&self, request: &TransactionRequest) -> Result<H256, ChainError>;

    /// Block until the transaction is mined with a successful status.
    async fn wait_for_confirmation(&self, tx_hash: H256) -> Result<(), ChainError>;
}
