use crate::advanced::instructions;
use crate::core::config::PaymentConfig;
use crate::core::connection::LedgerClient;
use crate::error::{Result, WalletError};
use solana_sdk::message::Message;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::transaction::Transaction;

/// Builds the unsigned single-instruction payment transaction.
pub struct PaymentBuilder {
    payer: Option<Pubkey>,
    config: PaymentConfig,
}

impl PaymentBuilder {
    pub fn new() -> Self {
        Self {
            payer: None,
            config: PaymentConfig::default(),
        }
    }

    pub fn with_payer(mut self, payer: Pubkey) -> Self {
        self.payer = Some(payer);
        self
    }

    pub fn with_config(mut self, config: PaymentConfig) -> Self {
        self.config = config;
        self
    }

    /// Fetch a fresh blockhash and return the unsigned transaction, fee paid
    /// by the payer.
    pub async fn build_transaction(&self, connection: &impl LedgerClient) -> Result<Transaction> {
        let payer = self.payer.ok_or(WalletError::NotConnected)?;

        let ix = instructions::pay(
            &self.config.program_id,
            &payer,
            &self.config.recipient,
            self.config.lamports,
        );

        let recent_blockhash = connection
            .get_latest_blockhash()
            .await
            .map_err(|e| WalletError::NetworkFailure(e.to_string()))?;

        let mut message = Message::new(&[ix], Some(&payer));
        message.recent_blockhash = recent_blockhash;
        Ok(Transaction::new_unsigned(message))
    }
}

impl Default for PaymentBuilder {
    fn default() -> Self {
        Self::new()
    }
}
