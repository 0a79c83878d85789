use crate::chain::{ChainError, PoolContract, TokenContract, TransactionSubmitter};
use crate::entity::{Amount, TransactionOutcome, TransactionRequest};
use crate::utils::shorten_hash;
use async_trait::async_trait;
use ethers::types::H256;
use log::{error, info, warn};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

/// Executes pool actions with the managed wallet. Chain failures come back
/// as `TransactionOutcome::Failed`, never as an error.
#[async_trait]
pub trait PoolInteractor: Send + Sync {
    /// Approve the pool to spend `amount` of CLK, then of MIR.
    async fn allow(&self, amount: &Amount) -> TransactionOutcome;

    /// Swap MIR for CLK (`swapBtoA`).
    async fn swap_forward(&self, amount: &Amount) -> TransactionOutcome;

    /// Swap CLK for MIR (`swapAtoB`).
    async fn swap_backward(&self, amount: &Amount) -> TransactionOutcome;

    async fn provide_liquidity(&self, amount: &Amount) -> TransactionOutcome;

    async fn remove_liquidity(&self, amount: &Amount) -> TransactionOutcome;
}

/// Why one approval step did not confirm
enum ApprovalError {
    /// `tx_hash` is set when the call was broadcast before it failed
    Failed {
        tx_hash: Option<H256>,
        error: ChainError,
    },
    TimedOut(H256),
}

impl From<ChainError> for ApprovalError {
    fn from(error: ChainError) -> Self {
        ApprovalError::Failed {
            tx_hash: None,
            error,
        }
    }
}

pub struct PoolInteractorImpl<S>
where
    S: TransactionSubmitter,
{
    submitter: Arc<S>,
    pool: PoolContract,
    clk_token: TokenContract,
    mir_token: TokenContract,
    submission_queue: Arc<Mutex<()>>,
    confirmation_timeout: Duration,
}

impl<S> PoolInteractorImpl<S>
where
    S: TransactionSubmitter + 'static,
{
    pub fn new(
        submitter: Arc<S>,
        pool: PoolContract,
        clk_token: TokenContract,
        mir_token: TokenContract,
        submission_queue: Arc<Mutex<()>>,
        confirmation_timeout: Duration,
    ) -> Self {
        Self {
            submitter,
            pool,
            clk_token,
            mir_token,
            submission_queue,
            confirmation_timeout,
        }
    }

    async fn approve_and_wait(
        &self,
        token: &TokenContract,
        amount: &Amount,
    ) -> Result<H256, ApprovalError> {
        let request = token.approve(self.pool.address(), amount)?;
        let tx_hash = self.submitter.submit(&request).await?;
        info!(
            "{} approval of {} sent: {}",
            token.symbol(),
            amount,
            shorten_hash(&tx_hash)
        );

        let confirmation = self.submitter.wait_for_confirmation(tx_hash);
        match tokio::time::timeout(self.confirmation_timeout, confirmation).await {
            Ok(Ok(())) => Ok(tx_hash),
            Ok(Err(error)) => Err(ApprovalError::Failed {
                tx_hash: Some(tx_hash),
                error,
            }),
            Err(_) => Err(ApprovalError::TimedOut(tx_hash)),
        }
    }

    async fn submit_single(
        &self,
        request: Result<TransactionRequest, ChainError>,
    ) -> TransactionOutcome {
        let request = match request {
            Ok(request) => request,
            Err(e) => {
                error!("Failed to build pool call: {}", e);
                return TransactionOutcome::failed(e.to_string());
            }
        };

        let submitted = {
            let _queue = self.submission_queue.lock().await;
            self.submitter.submit(&request).await
        };

        match submitted {
            Ok(tx_hash) => {
                info!("{} sent: {}", request.function, shorten_hash(&tx_hash));
                TransactionOutcome::Succeeded {
                    tx_hashes: vec![tx_hash],
                }
            }
            Err(e) => {
                error!("{} failed: {}", request.function, e);
                TransactionOutcome::failed(e.to_string())
            }
        }
    }
}

#[async_trait]
impl<S> PoolInteractor for PoolInteractorImpl<S>
where
    S: TransactionSubmitter + 'static,
{
    async fn allow(&self, amount: &Amount) -> TransactionOutcome {
        // the whole sequence holds the queue so the second approval never
        // competes with another request for the next nonce
        let _queue = self.submission_queue.lock().await;

        let mut completed = Vec::with_capacity(2);
        for token in [&self.clk_token, &self.mir_token] {
            match self.approve_and_wait(token, amount).await {
                Ok(tx_hash) => completed.push(tx_hash),
                Err(ApprovalError::TimedOut(tx_hash)) => {
                    warn!(
                        "{} approval {} not confirmed within {:?}, releasing the queue",
                        token.symbol(),
                        shorten_hash(&tx_hash),
                        self.confirmation_timeout
                    );
                    return TransactionOutcome::Pending {
                        confirmed: completed,
                        pending: tx_hash,
                    };
                }
                Err(ApprovalError::Failed { tx_hash, error }) => {
                    error!(
                        "{} approval failed after {} confirmed step(s): {}",
                        token.symbol(),
                        completed.len(),
                        error
                    );
                    return TransactionOutcome::Failed {
                        completed,
                        broadcast: tx_hash,
                        reason: error.to_string(),
                    };
                }
            }
        }

        TransactionOutcome::Succeeded {
            tx_hashes: completed,
        }
    }

    async fn swap_forward(&self, amount: &Amount) -> TransactionOutcome {
        self.submit_single(self.pool.swap_b_to_a(amount)).await
    }

    async fn swap_backward(&self, amount: &Amount) -> TransactionOutcome {
        self.submit_single(self.pool.swap_a_to_b(amount)).await
    }

    async fn provide_liquidity(&self, amount: &Amount) -> TransactionOutcome {
        self.submit_single(self.pool.add_liquidity(amount, amount))
            .await
    }

    async fn remove_liquidity(&self, amount: &Amount) -> TransactionOutcome {
        self.submit_single(self.pool.remove_liquidity(amount)).await
    }
}
