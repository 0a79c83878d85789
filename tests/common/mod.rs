#![allow(dead_code)]

use async_trait::async_trait;
use ethers::types::{Address, H256};
use pool_intent_bot::chain::{ChainError, PoolContract, TokenContract, TransactionSubmitter};
use pool_intent_bot::classifier::{ClassifierError, IntentClassifier};
use pool_intent_bot::{
    ActionRegistry, Amount, ClassificationResult, LabelScore, PoolInteractorImpl,
    PoolPresenterImpl, TextPoolView, TransactionRequest,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const POOL: u64 = 0x100;
pub const CLK: u64 = 0x200;
pub const MIR: u64 = 0x300;

/// Returns the same ranking for every message
pub struct StaticClassifier {
    scores: Option<Vec<(String, f64)>>,
    pub calls: AtomicUsize,
}

impl StaticClassifier {
    pub fn top(label: &str) -> Self {
        Self {
            scores: Some(vec![(label.to_string(), 0.9), ("allow".to_string(), 0.05)]),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            scores: None,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl IntentClassifier for StaticClassifier {
    async fn classify(
        &self,
        _text: &str,
        labels: &[&str],
    ) -> Result<ClassificationResult, ClassifierError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        assert_eq!(labels.len(), 5);

        let scores = self.scores.clone().ok_or(ClassifierError::Status {
            status: 503,
            body: "Service Unavailable".to_string(),
        })?;

        ClassificationResult::new(
            scores
                .into_iter()
                .map(|(label, score)| LabelScore { label, score })
                .collect(),
        )
        .map_err(ClassifierError::from)
    }
}

/// Records every request and hands out sequential hashes
#[derive(Default)]
pub struct RecordingSubmitter {
    pub sent: Mutex<Vec<TransactionRequest>>,
    pub fail_at: Option<usize>,
    pub revert_at: Option<usize>,
}

impl RecordingSubmitter {
    pub fn failing_at(step: usize) -> Self {
        Self {
            fail_at: Some(step),
            ..Default::default()
        }
    }

    /// Broadcasts every call but the receipt of call `step` reverts
    pub fn reverting_at(step: usize) -> Self {
        Self {
            revert_at: Some(step),
            ..Default::default()
        }
    }

    pub fn sent(&self) -> Vec<TransactionRequest> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl TransactionSubmitter for RecordingSubmitter {
    async fn submit(&self, request: &TransactionRequest) -> Result<H256, ChainError> {
        let mut sent = self.sent.lock().unwrap();
        if self.fail_at == Some(sent.len()) {
            return Err(ChainError::Submission(
                "insufficient funds for gas".to_string(),
            ));
        }
        sent.push(request.clone());
        Ok(tx_hash(sent.len() as u64))
    }

    async fn wait_for_confirmation(&self, tx_hash: H256) -> Result<(), ChainError> {
        if self.revert_at == Some(tx_hash.to_low_u64_be() as usize - 1) {
            return Err(ChainError::Reverted(tx_hash));
        }
        Ok(())
    }
}

pub type TestPresenter =
    PoolPresenterImpl<StaticClassifier, PoolInteractorImpl<RecordingSubmitter>, TextPoolView>;

pub fn tx_hash(n: u64) -> H256 {
    H256::from_low_u64_be(n)
}

pub fn presenter(
    classifier: Arc<StaticClassifier>,
    submitter: Arc<RecordingSubmitter>,
) -> TestPresenter {
    let interactor = PoolInteractorImpl::new(
        submitter,
        PoolContract::new(Address::from_low_u64_be(POOL)),
        TokenContract::new("CLK", Address::from_low_u64_be(CLK)),
        TokenContract::new("MIR", Address::from_low_u64_be(MIR)),
        Arc::new(tokio::sync::Mutex::new(())),
        Duration::from_secs(5),
    );

    PoolPresenterImpl::new(
        classifier,
        Arc::new(interactor),
        Arc::new(TextPoolView),
        ActionRegistry::new(),
        Amount::parse("2").unwrap(),
    )
}
