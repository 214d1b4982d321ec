//! JSON-RPC ledger client.
//!
//! Raw submission and transaction lookup go through `RpcClient::send` so the
//! wire bytes produced by the wallet reach the node untouched.

use crate::core::config::ClusterConfig;
use crate::core::connection::LedgerClient;
use crate::error::BoxError;
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::Deserialize;
use serde_json::json;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_client::rpc_request::RpcRequest;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::hash::Hash;
use solana_sdk::signature::Signature;
use std::str::FromStr;
use std::time::Duration;
use tracing::debug;

const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(500);
const DEFAULT_MAX_POLLS: usize = 60;

pub struct RpcLedgerClient {
    rpc: RpcClient,
    commitment: CommitmentConfig,
    poll_interval: Duration,
    max_polls: usize,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TransactionDetails {
    meta: Option<TransactionMeta>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TransactionMeta {
    log_messages: Option<Vec<String>>,
}

impl RpcLedgerClient {
    pub fn new(endpoint: impl Into<String>, commitment: CommitmentConfig) -> Self {
        Self::with_client(
            RpcClient::new_with_commitment(endpoint.into(), commitment),
            commitment,
        )
    }

    pub fn with_client(rpc: RpcClient, commitment: CommitmentConfig) -> Self {
        Self {
            rpc,
            commitment,
            poll_interval: DEFAULT_POLL_INTERVAL,
            max_polls: DEFAULT_MAX_POLLS,
        }
    }

    /// How often, and how many times, to ask for the signature status
    /// before giving up on confirmation.
    pub fn with_polling(mut self, poll_interval: Duration, max_polls: usize) -> Self {
        self.poll_interval = poll_interval;
        self.max_polls = max_polls;
        self
    }

    pub fn from_config(config: &ClusterConfig) -> Self {
        Self::new(config.endpoint.clone(), config.commitment)
    }

    pub fn url(&self) -> String {
        self.rpc.url()
    }

    pub fn commitment(&self) -> CommitmentConfig {
        self.commitment
    }
}

/// Params for `sendTransaction` with a base64 payload.
fn send_transaction_params(wire: &[u8], commitment: CommitmentConfig) -> serde_json::Value {
    json!([
        BASE64.encode(wire),
        {
            "encoding": "base64",
            "preflightCommitment": commitment.commitment.to_string(),
        }
    ])
}

/// Params for `getTransaction` accepting legacy and v0 transactions.
fn get_transaction_params(signature: &Signature, commitment: CommitmentConfig) -> serde_json::Value {
    json!([
        signature.to_string(),
        {
            "encoding": "json",
            "commitment": commitment.commitment.to_string(),
            "maxSupportedTransactionVersion": 0,
        }
    ])
}

fn logs_from_details(details: Option<TransactionDetails>) -> Option<Vec<String>> {
    details?.meta?.log_messages
}

#[async_trait]
impl LedgerClient for RpcLedgerClient {
    async fn get_latest_blockhash(&self) -> Result<Hash, BoxError> {
        Ok(self.rpc.get_latest_blockhash().await?)
    }

    async fn send_raw_transaction(&self, wire: &[u8]) -> Result<Signature, BoxError> {
        let signature: String = self
            .rpc
            .send(
                RpcRequest::SendTransaction,
                send_transaction_params(wire, self.commitment),
            )
            .await?;
        Ok(Signature::from_str(&signature)?)
    }

    async fn confirm_transaction(
        &self,
        signature: &Signature,
        commitment: CommitmentConfig,
    ) -> Result<(), BoxError> {
        for attempt in 0..self.max_polls {
            match self
                .rpc
                .get_signature_status_with_commitment(signature, commitment)
                .await?
            {
                Some(Ok(())) => return Ok(()),
                Some(Err(e)) => return Err(Box::new(e)),
                None => {
                    debug!(%signature, attempt, "signature not yet confirmed");
                    tokio::time::sleep(self.poll_interval).await;
                },
            }
        }
        Err(format!(
            "transaction {} not confirmed after {} status checks",
            signature, self.max_polls
        )
        .into())
    }

    async fn get_transaction_logs(
        &self,
        signature: &Signature,
    ) -> Result<Option<Vec<String>>, BoxError> {
        let details: Option<TransactionDetails> = self
            .rpc
            .send(
                RpcRequest::GetTransaction,
                get_transaction_params(signature, self.commitment),
            )
            .await?;
        Ok(logs_from_details(details))
    }
}
