use anyhow::{Context, Result};
use ethers::types::Address;
use serde::Deserialize;
use std::str::FromStr;

use crate::entity::Amount;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Bind address of the HTTP server
    pub host: String,
    pub port: u16,

    /// JSON-RPC endpoint and EIP-155 chain id
    pub rpc_url: String,
    pub chain_id: u64,

    /// Hex private key of the managed wallet
    pub acc_private_key: String,

    /// Bearer token for the inference API
    pub hugging_face: String,
    pub classifier_url: String,
    pub classifier_model: String,
    pub classifier_timeout_secs: u64,

    /// Longest wait for one approval receipt before the queue is released
    pub confirmation_timeout_secs: u64,

    pub pool_address: String,
    pub clk_token_address: String,
    pub mir_token_address: String,

    /// Approval amount used when a message asks to allow the pool
    pub allow_default_amount: String,

    /// Comma separated; empty means any origin
    pub cors_allowed_origins: String,
}

/// Contract addresses after validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContractAddresses {
    pub pool: Address,
    pub clk_token: Address,
    pub mir_token: Address,
}

impl AppConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::load(config::Environment::default())
    }

    pub fn load(environment: config::Environment) -> Result<Self> {
        let settings = config::Config::builder()
            .set_default("host", "0.0.0.0")?
            .set_default("port", 3001_i64)?
            .set_default("rpc_url", "https://sepolia.base.org")?
            .set_default("chain_id", 84532_i64)?
            .set_default(
                "classifier_url",
                "https://api-inference.huggingface.co/models",
            )?
            .set_default("classifier_model", "facebook/bart-large-mnli")?
            .set_default("classifier_timeout_secs", 30_i64)?
            .set_default("confirmation_timeout_secs", 120_i64)?
            .set_default("allow_default_amount", "2")?
            .set_default("cors_allowed_origins", "")?
            .add_source(environment)
            .build()
            .context("Failed to read configuration")?;

        settings
            .try_deserialize()
            .context("Missing or invalid configuration value")
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn contract_addresses(&self) -> Result<ContractAddresses> {
        Ok(ContractAddresses {
            pool: parse_address("POOL_ADDRESS", &self.pool_address)?,
            clk_token: parse_address("CLK_TOKEN_ADDRESS", &self.clk_token_address)?,
            mir_token: parse_address("MIR_TOKEN_ADDRESS", &self.mir_token_address)?,
        })
    }

    pub fn default_allowance(&self) -> Result<Amount> {
        Amount::parse(&self.allow_default_amount)
            .with_context(|| format!("Invalid ALLOW_DEFAULT_AMOUNT '{}'", self.allow_default_amount))
    }

    pub fn allowed_origins(&self) -> Vec<String> {
        self.cors_allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(ToOwned::to_owned)
            .collect()
    }
}

fn parse_address(name: &str, value: &str) -> Result<Address> {
    Address::from_str(value.trim()).with_context(|| format!("Invalid {name} '{value}'"))
}
