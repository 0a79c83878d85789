use super::AmountError;

/// Reasons a chat message could not be turned into a pool action.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("Message must not be empty")]
    EmptyMessage,

    #[error("Classification failed: {0}")]
    ClassificationFailed(String),

    #[error("Unknown query type: {0}")]
    UnsupportedIntent(String),

    #[error("No amount found in message")]
    NoAmountFound,

    #[error("Invalid amount: {0}")]
    InvalidAmount(#[from] AmountError),
}

impl DispatchError {
    /// Whether the caller sent something we cannot act on, as opposed to
    /// a failure on our side.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, DispatchError::ClassificationFailed(_))
    }
}
