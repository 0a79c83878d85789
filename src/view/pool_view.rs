use crate::entity::{Intent, TransactionOutcome};
use crate::utils::format_tx_hash;
use ethers::types::H256;

/// Turns an action outcome into the text sent back to the chat user.
pub trait PoolView: Send + Sync {
    fn display_success(&self, intent: Intent, tx_hashes: &[String]) -> String;
    fn display_pending(&self, intent: Intent, confirmed: &[String], pending: &str) -> String;
    fn display_failure(&self, intent: Intent, completed: &[String], reason: &str) -> String;

    fn render(&self, intent: Intent, outcome: &TransactionOutcome) -> String {
        match outcome {
            TransactionOutcome::Succeeded { tx_hashes } => {
                self.display_success(intent, &format_all(tx_hashes))
            }
            TransactionOutcome::Pending { confirmed, pending } => {
                self.display_pending(intent, &format_all(confirmed), &format_tx_hash(pending))
            }
            TransactionOutcome::Failed {
                completed, reason, ..
            } => self.display_failure(intent, &format_all(completed), reason),
        }
    }
}

fn format_all(hashes: &[H256]) -> Vec<String> {
    hashes.iter().map(format_tx_hash).collect()
}

pub struct TextPoolView;

impl PoolView for TextPoolView {
    fn display_success(&self, intent: Intent, tx_hashes: &[String]) -> String {
        let first = tx_hashes.first().map(String::as_str).unwrap_or("unknown");
        match intent {
            Intent::Allow => format!(
                "CLK token transaction hash : {} and MIR token transaction hash : {}",
                first,
                tx_hashes.get(1).map(String::as_str).unwrap_or("unknown")
            ),
            Intent::SwapForward | Intent::SwapBackward => {
                format!("Swap transaction hash : {}", first)
            }
            Intent::ProvideLiquidity => format!("Add liquidity transaction hash : {}", first),
            Intent::RemoveLiquidity => format!("Remove liquidity transaction hash : {}", first),
        }
    }

    fn display_pending(&self, intent: Intent, confirmed: &[String], pending: &str) -> String {
        match (intent, confirmed.first()) {
            (Intent::Allow, None) => format!(
                "CLK token transaction hash : {} is pending, MIR token approval was not sent",
                pending
            ),
            (Intent::Allow, Some(clk_hash)) => format!(
                "CLK token transaction hash : {} and MIR token transaction hash : {} is pending",
                clk_hash, pending
            ),
            _ => format!("{} transaction hash : {} is pending", intent, pending),
        }
    }

    fn display_failure(&self, intent: Intent, completed: &[String], reason: &str) -> String {
        match intent {
            Intent::Allow => match completed.first() {
                // CLK went through, MIR did not
                Some(clk_hash) => format!(
                    "CLK token transaction hash : {} but MIR token approval failed: {}",
                    clk_hash, reason
                ),
                None => format!("unable to approve tokens error: {}", reason),
            },
            Intent::SwapForward | Intent::SwapBackward => {
                format!("unable to swap tokens error: {}", reason)
            }
            Intent::ProvideLiquidity => format!("unable to add liquidity error: {}", reason),
            Intent::RemoveLiquidity => format!("unable to remove liquidity error: {}", reason),
        }
    }
}
