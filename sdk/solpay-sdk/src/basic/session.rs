//! Wallet session controller.
//!
//! Owns the connect / disconnect / pay workflow. Every operation reports its
//! failure in three places: the returned `Result`, an `error!` log line and
//! a blocking message through the [`Notifier`].

use crate::basic::actions::PaymentBuilder;
use crate::core::config::{ClusterConfig, PaymentConfig};
use crate::core::connection::LedgerClient;
use crate::core::notifier::{LogNotifier, Notifier};
use crate::core::signer::WalletProvider;
use crate::error::{Result, WalletError};
use crate::types::{PaymentReceipt, Session};
use crate::utils::serialize_transaction;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, error, info};

pub struct WalletSessionController<L: LedgerClient> {
    provider: Option<Arc<dyn WalletProvider>>,
    ledger: L,
    notifier: Arc<dyn Notifier>,
    payment: PaymentConfig,
    commitment: CommitmentConfig,
    paying: AtomicBool,
}

/// Clears the in-flight flag when the payment future completes or is dropped.
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl<L: LedgerClient> WalletSessionController<L> {
    /// `provider` is `None` when no wallet extension was injected.
    pub fn new(provider: Option<Arc<dyn WalletProvider>>, ledger: L) -> Self {
        Self {
            provider,
            ledger,
            notifier: Arc::new(LogNotifier),
            payment: PaymentConfig::default(),
            commitment: ClusterConfig::default().commitment,
            paying: AtomicBool::new(false),
        }
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn with_payment_config(mut self, payment: PaymentConfig) -> Self {
        self.payment = payment;
        self
    }

    pub fn with_commitment(mut self, commitment: CommitmentConfig) -> Self {
        self.commitment = commitment;
        self
    }

    pub fn payment_config(&self) -> &PaymentConfig {
        &self.payment
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Connect the injected wallet and return the connected session.
    ///
    /// On failure the caller keeps its current session.
    pub async fn connect(&self, session: &Session) -> Result<Session> {
        match self.try_connect().await {
            Ok(public_key) => {
                info!(%public_key, "wallet connected");
                Ok(Session::connected(&public_key))
            },
            Err(e) => {
                error!(error = %e, connected = session.is_connected(), "failed to connect wallet");
                self.notifier
                    .notify(&format!("Failed to connect wallet: {}", e));
                Err(e)
            },
        }
    }

    /// Disconnect the wallet.
    ///
    /// The returned session is always the initial one, whether or not the
    /// provider call succeeded.
    pub async fn disconnect(&self, session: &Session) -> (Session, Result<()>) {
        let outcome = self.try_disconnect().await;
        match &outcome {
            Ok(()) => info!(public_key = ?session.public_key(), "wallet disconnected"),
            Err(e) => {
                error!(error = %e, "failed to disconnect wallet");
                self.notifier
                    .notify(&format!("Failed to disconnect wallet: {}", e));
            },
        }
        (Session::disconnected(), outcome)
    }

    /// Build, sign, submit and confirm the fixed payment.
    ///
    /// The session is not changed by a payment.
    pub async fn pay(&self, session: &Session) -> Result<PaymentReceipt> {
        let result = match self.paying.compare_exchange(
            false,
            true,
            Ordering::Acquire,
            Ordering::Relaxed,
        ) {
            Ok(_) => {
                let _guard = InFlight(&self.paying);
                self.try_pay(session).await
            },
            Err(_) => Err(WalletError::PaymentInFlight),
        };

        match &result {
            Ok(receipt) => {
                info!(logs = ?receipt.logs, "transaction logs");
                self.notifier.notify(&format!(
                    "Payment successful! Signature: {}",
                    receipt.signature
                ));
            },
            Err(e) => {
                error!(error = %e, "payment failed");
                self.notifier.notify(&format!("Payment failed: {}", e));
            },
        }
        result
    }

    fn phantom(&self) -> Result<&Arc<dyn WalletProvider>> {
        match &self.provider {
            Some(provider) if provider.is_phantom() => Ok(provider),
            _ => Err(WalletError::ProviderMissing),
        }
    }

    async fn try_connect(&self) -> Result<Pubkey> {
        let provider = self.phantom()?;
        provider
            .connect()
            .await
            .map_err(|e| WalletError::Provider(e.to_string()))
    }

    async fn try_disconnect(&self) -> Result<()> {
        let provider = self.provider.as_ref().ok_or(WalletError::ProviderMissing)?;
        provider
            .disconnect()
            .await
            .map_err(|e| WalletError::Provider(e.to_string()))
    }

    async fn try_pay(&self, session: &Session) -> Result<PaymentReceipt> {
        let provider = self.provider.as_ref().ok_or(WalletError::NotConnected)?;
        let public_key = match session.public_key() {
            Some(key) if session.is_connected() => key,
            _ => return Err(WalletError::NotConnected),
        };
        let payer = Pubkey::from_str(public_key)
            .map_err(|e| WalletError::InvalidPublicKey(format!("{}: {}", public_key, e)))?;

        let transaction = PaymentBuilder::new()
            .with_config(self.payment)
            .with_payer(payer)
            .build_transaction(&self.ledger)
            .await?;
        debug!(
            blockhash = %transaction.message.recent_blockhash,
            lamports = self.payment.lamports,
            "payment transaction built"
        );

        let signed = provider
            .sign_transaction(transaction)
            .await
            .map_err(|e| WalletError::Provider(e.to_string()))?;
        let wire = serialize_transaction(&signed)?;

        let signature = self
            .ledger
            .send_raw_transaction(&wire)
            .await
            .map_err(|e| WalletError::NetworkFailure(e.to_string()))?;
        debug!(%signature, "transaction submitted");

        self.ledger
            .confirm_transaction(&signature, self.commitment)
            .await
            .map_err(|e| WalletError::NetworkFailure(e.to_string()))?;
        info!(%signature, "transaction confirmed");

        let logs = self.fetch_logs(&signature).await?;
        Ok(PaymentReceipt { signature, logs })
    }

    /// A transaction without details or log messages yields no logs; a
    /// failing lookup fails the payment.
    async fn fetch_logs(&self, signature: &Signature) -> Result<Vec<String>> {
        let logs = self
            .ledger
            .get_transaction_logs(signature)
            .await
            .map_err(|e| WalletError::NetworkFailure(e.to_string()))?;
        if logs.is_none() {
            debug!(%signature, "no log messages returned");
        }
        Ok(logs.unwrap_or_default())
    }
}
