//! Cluster and payment settings.
//!
//! Both configs default to the fixed devnet deployment. JSON overrides use
//! base58 strings for keys and the RPC names for commitment levels; any
//! omitted field keeps its default.

use crate::core::constants::{DEVNET_ENDPOINT, PAYMENT_LAMPORTS, PAYMENT_PROGRAM_ID, RECIPIENT};
use crate::error::{Result, WalletError};
use serde::Deserialize;
use solana_sdk::commitment_config::{CommitmentConfig, CommitmentLevel};
use solana_sdk::pubkey::Pubkey;
use std::str::FromStr;

/// Ledger endpoint and the commitment used for every query and confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterConfig {
    pub endpoint: String,
    pub commitment: CommitmentConfig,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self::devnet()
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawClusterConfig {
    endpoint: Option<String>,
    commitment: Option<String>,
}

impl ClusterConfig {
    pub fn devnet() -> Self {
        Self {
            endpoint: DEVNET_ENDPOINT.to_string(),
            commitment: CommitmentConfig::confirmed(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_commitment(mut self, commitment: CommitmentConfig) -> Self {
        self.commitment = commitment;
        self
    }

    /// Parse `{"endpoint": "...", "commitment": "confirmed"}`
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawClusterConfig =
            serde_json::from_str(json).map_err(|e| WalletError::Config(e.to_string()))?;
        let mut config = Self::devnet();
        if let Some(endpoint) = raw.endpoint {
            config.endpoint = endpoint;
        }
        if let Some(level) = raw.commitment {
            let commitment = CommitmentLevel::from_str(&level)
                .map_err(|_| WalletError::Config(format!("unknown commitment: {}", level)))?;
            config.commitment = CommitmentConfig { commitment };
        }
        Ok(config)
    }
}

/// Target program, payee and amount of the fixed payment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentConfig {
    pub program_id: Pubkey,
    pub recipient: Pubkey,
    pub lamports: u64,
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            program_id: PAYMENT_PROGRAM_ID,
            recipient: RECIPIENT,
            lamports: PAYMENT_LAMPORTS,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawPaymentConfig {
    program_id: Option<String>,
    recipient: Option<String>,
    lamports: Option<u64>,
}

fn parse_pubkey(field: &str, value: &str) -> Result<Pubkey> {
    Pubkey::from_str(value).map_err(|e| WalletError::Config(format!("{}: {}", field, e)))
}

impl PaymentConfig {
    /// Parse `{"programId": "...", "recipient": "...", "lamports": 1}`
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawPaymentConfig =
            serde_json::from_str(json).map_err(|e| WalletError::Config(e.to_string()))?;
        let mut config = Self::default();
        if let Some(program_id) = raw.program_id {
            config.program_id = parse_pubkey("programId", &program_id)?;
        }
        if let Some(recipient) = raw.recipient {
            config.recipient = parse_pubkey("recipient", &recipient)?;
        }
        if let Some(lamports) = raw.lamports {
            config.lamports = lamports;
        }
        Ok(config)
    }
}
