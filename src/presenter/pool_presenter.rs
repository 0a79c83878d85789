use crate::classifier::IntentClassifier;
use crate::entity::{Amount, DispatchError, PoolResponse, TransactionOutcome};
use crate::interactor::PoolInteractor;
use crate::router::ActionRegistry;
use crate::utils::{extract_amount, format_tx_hash};
use crate::view::PoolView;
use async_trait::async_trait;
use log::{debug, info, warn};
use std::sync::Arc;
use uuid::Uuid;

/// Routes one chat message to a pool action and reports what happened.
#[async_trait]
pub trait PoolPresenter: Send + Sync {
    async fn process_message(&self, message: &str) -> Result<PoolResponse, DispatchError>;
}

pub struct PoolPresenterImpl<C, I, V> {
    classifier: Arc<C>,
    interactor: Arc<I>,
    view: Arc<V>,
    registry: ActionRegistry,
    default_allowance: Amount,
}

impl<C, I, V> PoolPresenterImpl<C, I, V>
where
    C: IntentClassifier,
    I: PoolInteractor,
    V: PoolView,
{
    pub fn new(
        classifier: Arc<C>,
        interactor: Arc<I>,
        view: Arc<V>,
        registry: ActionRegistry,
        default_allowance: Amount,
    ) -> Self {
        Self {
            classifier,
            interactor,
            view,
            registry,
            default_allowance,
        }
    }
}

#[async_trait]
impl<C, I, V> PoolPresenter for PoolPresenterImpl<C, I, V>
where
    C: IntentClassifier + 'static,
    I: PoolInteractor + 'static,
    V: PoolView + 'static,
{
    async fn process_message(&self, message: &str) -> Result<PoolResponse, DispatchError> {
        let message = message.trim();
        if message.is_empty() {
            return Err(DispatchError::EmptyMessage);
        }

        let request_id = Uuid::new_v4();

        // Classify
        let classification = self
            .classifier
            .classify(message, &self.registry.labels())
            .await
            .map_err(|e| DispatchError::ClassificationFailed(e.to_string()))?;

        let top = classification.top();
        info!(
            "[{}] classified as '{}' ({:.3})",
            request_id, top.label, top.score
        );

        let spec = self.registry.lookup(&top.label)?;

        // Extract arguments
        let amount = if spec.required_args == 0 {
            self.default_allowance.clone()
        } else {
            let literal = extract_amount(message).ok_or(DispatchError::NoAmountFound)?;
            Amount::parse(literal)?
        };
        debug!("[{}] {} with amount {}", request_id, spec.intent, amount);

        // Execute
        let outcome = (spec.handler)(&*self.interactor, &amount).await;
        match &outcome {
            TransactionOutcome::Succeeded { .. } => {
                info!("[{}] {} succeeded", request_id, spec.intent)
            }
            TransactionOutcome::Pending { .. } => {
                warn!("[{}] {} awaiting confirmation", request_id, spec.intent)
            }
            TransactionOutcome::Failed { .. } => {
                warn!("[{}] {} did not complete", request_id, spec.intent)
            }
        }

        Ok(PoolResponse {
            response_type: spec.response_type.to_string(),
            response: self.view.render(spec.intent, &outcome),
            success: !outcome.is_failure(),
            pending: outcome.is_pending(),
            transactions: outcome.tx_hashes().iter().map(format_tx_hash).collect(),
        })
    }
}
