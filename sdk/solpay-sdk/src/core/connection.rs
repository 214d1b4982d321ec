use crate::error::BoxError;
use async_trait::async_trait;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::hash::Hash;
use solana_sdk::signature::Signature;

/// Ledger operations used by the payment workflow.
#[async_trait]
pub trait LedgerClient: Send + Sync {
    async fn get_latest_blockhash(&self) -> Result<Hash, BoxError>;

    /// Submit an already signed, wire-encoded transaction.
    async fn send_raw_transaction(&self, wire: &[u8]) -> Result<Signature, BoxError>;

    /// Resolves once the signature reaches `commitment`; a failed
    /// transaction is reported as an error.
    async fn confirm_transaction(
        &self,
        signature: &Signature,
        commitment: CommitmentConfig,
    ) -> Result<(), BoxError>;

    /// `None` when the node has no details or no log messages for `signature`.
    async fn get_transaction_logs(
        &self,
        signature: &Signature,
    ) -> Result<Option<Vec<String>>, BoxError>;
}
