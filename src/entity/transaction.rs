use ethers::types::{Address, Bytes, H256};

use super::Amount;

/// One contract call ready to be signed and broadcast.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRequest {
    pub to: Address,
    pub function: &'static str,
    pub data: Bytes,
    pub amounts: Vec<Amount>,
}

/// Result of an action.
#[derive(Debug, Clone, PartialEq)]
pub enum TransactionOutcome {
    Succeeded {
        tx_hashes: Vec<H256>,
    },
    /// `pending` was broadcast but no receipt arrived in time. It may still
    /// be mined, so later steps were not sent.
    Pending {
        confirmed: Vec<H256>,
        pending: H256,
    },
    /// `completed` are the confirmed steps before the failing one.
    /// `broadcast` is set when the failing step itself reached the chain.
    Failed {
        completed: Vec<H256>,
        broadcast: Option<H256>,
        reason: String,
    },
}

impl TransactionOutcome {
    pub fn failed(reason: impl Into<String>) -> Self {
        TransactionOutcome::Failed {
            completed: Vec::new(),
            broadcast: None,
            reason: reason.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, TransactionOutcome::Succeeded { .. })
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, TransactionOutcome::Pending { .. })
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, TransactionOutcome::Failed { .. })
    }

    /// Every hash that reached the chain, in submission order
    pub fn tx_hashes(&self) -> Vec<H256> {
        match self {
            TransactionOutcome::Succeeded { tx_hashes } => tx_hashes.clone(),
            TransactionOutcome::Pending { confirmed, pending } => {
                confirmed.iter().copied().chain(Some(*pending)).collect()
            }
            TransactionOutcome::Failed {
                completed,
                broadcast,
                ..
            } => completed.iter().copied().chain(*broadcast).collect(),
        }
    }
}
