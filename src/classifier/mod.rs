pub mod huggingface;

use async_trait::async_trait;

use crate::entity::{ClassificationResult, ScoreError};

pub use huggingface::HuggingFaceClassifier;

#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    #[error("classifier request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("classifier returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("unexpected classifier response: {0}")]
    Decode(String),

    #[error("classifier returned no labels")]
    Empty,
}

impl From<ScoreError> for ClassifierError {
    fn from(err: ScoreError) -> Self {
        match err {
            ScoreError::Empty => ClassifierError::Empty,
            err => ClassifierError::Decode(err.to_string()),
        }
    }
}

/// Scores a message against a fixed set of candidate labels.
#[async_trait]
pub trait IntentClassifier: Send + Sync {
    async fn classify(
        &self,
        text: &str,
        labels: &[&str],
    ) -> Result<ClassificationResult, ClassifierError>;
}
