use serde::{Deserialize, Serialize};

/// Body returned for every message that reached an action, whether or not
/// the transaction went through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoolResponse {
    #[serde(rename = "type")]
    pub response_type: String,
    pub response: String,
    /// `false` only when the action failed
    pub success: bool,
    /// Last transaction was broadcast but not yet confirmed
    #[serde(default)]
    pub pending: bool,
    pub transactions: Vec<String>,
}
