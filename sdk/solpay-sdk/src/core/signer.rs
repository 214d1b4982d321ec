use crate::error::BoxError;
use async_trait::async_trait;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signature, Signer};
use solana_sdk::transaction::Transaction;

/// Capability set of an injected wallet.
/// This allows the SDK to work with:
/// 1. Browser extensions (Phantom) bridged into Rust
/// 2. Local Keypairs (Backend/CLI/tests)
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Whether this provider identifies itself as Phantom
    fn is_phantom(&self) -> bool;

    /// Ask the user to approve the connection and return their public key.
    async fn connect(&self) -> Result<Pubkey, BoxError>;

    async fn disconnect(&self) -> Result<(), BoxError>;

    /// Sign `transaction` with the connected account and hand it back.
    async fn sign_transaction(&self, transaction: Transaction) -> Result<Transaction, BoxError>;

    /// Sign an arbitrary message.
    /// Not used by the payment flow.
    async fn sign_message(&self, message: &[u8]) -> Result<Signature, BoxError>;
}

/// Wallet backed by a local keypair. Reports itself as Phantom-compatible
/// so it can stand in for the extension.
pub struct KeypairWallet {
    keypair: Keypair,
}

impl KeypairWallet {
    pub fn new(keypair: Keypair) -> Self {
        Self { keypair }
    }

    pub fn pubkey(&self) -> Pubkey {
        self.keypair.pubkey()
    }
}

#[async_trait]
impl WalletProvider for KeypairWallet {
    fn is_phantom(&self) -> bool {
        true
    }

    async fn connect(&self) -> Result<Pubkey, BoxError> {
        Ok(self.keypair.pubkey())
    }

    async fn disconnect(&self) -> Result<(), BoxError> {
        Ok(())
    }

    async fn sign_transaction(
        &self,
        mut transaction: Transaction,
    ) -> Result<Transaction, BoxError> {
        let blockhash = transaction.message.recent_blockhash;
        transaction.try_sign(&[&self.keypair], blockhash)?;
        Ok(transaction)
    }

    async fn sign_message(&self, message: &[u8]) -> Result<Signature, BoxError> {
        Ok(self.keypair.sign_message(message))
    }
}
