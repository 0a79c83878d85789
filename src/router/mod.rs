use futures::future::BoxFuture;
use std::collections::HashMap;

use crate::entity::{Amount, DispatchError, Intent, TransactionOutcome};
use crate::interactor::PoolInteractor;

/// Entry point of one pool action on the interactor
pub type ActionHandler =
    for<'a> fn(&'a dyn PoolInteractor, &'a Amount) -> BoxFuture<'a, TransactionOutcome>;

/// Everything the dispatcher needs to run one intent
#[derive(Clone, Copy)]
pub struct ActionSpec {
    pub intent: Intent,
    pub handler: ActionHandler,
    /// Amounts that must be read from the message. Zero means the action
    /// runs with the configured default.
    pub required_args: usize,
    /// Tag echoed back as `type` in the response body
    pub response_type: &'static str,
}

impl std::fmt::Debug for ActionSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionSpec")
            .field("intent", &self.intent)
            .field("required_args", &self.required_args)
            .field("response_type", &self.response_type)
            .finish()
    }
}

fn allow<'a>(
    pool: &'a dyn PoolInteractor,
    amount: &'a Amount,
) -> BoxFuture<'a, TransactionOutcome> {
    pool.allow(amount)
}

fn swap_forward<'a>(
    pool: &'a dyn PoolInteractor,
    amount: &'a Amount,
) -> BoxFuture<'a, TransactionOutcome> {
    pool.swap_forward(amount)
}

fn swap_backward<'a>(
    pool: &'a dyn PoolInteractor,
    amount: &'a Amount,
) -> BoxFuture<'a, TransactionOutcome> {
    pool.swap_backward(amount)
}

fn provide_liquidity<'a>(
    pool: &'a dyn PoolInteractor,
    amount: &'a Amount,
) -> BoxFuture<'a, TransactionOutcome> {
    pool.provide_liquidity(amount)
}

fn remove_liquidity<'a>(
    pool: &'a dyn PoolInteractor,
    amount: &'a Amount,
) -> BoxFuture<'a, TransactionOutcome> {
    pool.remove_liquidity(amount)
}

fn spec_for(intent: Intent) -> ActionSpec {
    match intent {
        Intent::Allow => ActionSpec {
            intent,
            handler: allow,
            required_args: 0,
            response_type: "allow spender",
        },
        Intent::SwapForward => ActionSpec {
            intent,
            handler: swap_forward,
            required_args: 1,
            response_type: "swap mir",
        },
        Intent::SwapBackward => ActionSpec {
            intent,
            handler: swap_backward,
            required_args: 1,
            response_type: "swap clk",
        },
        Intent::ProvideLiquidity => ActionSpec {
            intent,
            handler: provide_liquidity,
            required_args: 1,
            response_type: "provide liquidity",
        },
        Intent::RemoveLiquidity => ActionSpec {
            intent,
            handler: remove_liquidity,
            required_args: 1,
            response_type: "remove liquidity",
        },
    }
}

/// Maps classifier labels to pool actions.
#[derive(Debug, Clone)]
pub struct ActionRegistry {
    actions: HashMap<&'static str, ActionSpec>,
}

impl ActionRegistry {
    pub fn new() -> Self {
        let actions = Intent::ALL
            .into_iter()
            .map(|intent| (intent.label(), spec_for(intent)))
            .collect();

        Self { actions }
    }

    /// Candidate labels in a stable order
    pub fn labels(&self) -> Vec<&'static str> {
        Intent::ALL.iter().map(Intent::label).collect()
    }

    pub fn lookup(&self, label: &str) -> Result<&ActionSpec, DispatchError> {
        self.actions
            .get(label)
            .ok_or_else(|| DispatchError::UnsupportedIntent(label.to_string()))
    }
}

impl Default for ActionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
