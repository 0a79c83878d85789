mod amount;
mod classification;
mod dispatch_error;
mod intent;
mod pool_response;
mod transaction;

pub use amount::{Amount, AmountError, TOKEN_DECIMALS};
pub use classification::{ClassificationResult, LabelScore, ScoreError};
pub use dispatch_error::DispatchError;
pub use intent::Intent;
pub use pool_response::PoolResponse;
pub use transaction::{TransactionOutcome, TransactionRequest};
