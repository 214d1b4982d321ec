use thiserror::Error;

/// Errors surfaced by the wallet session workflow
#[derive(Debug, Error)]
pub enum WalletError {
    /// No compatible wallet extension was injected
    #[error("Phantom Wallet not found. Please install Phantom Wallet.")]
    ProviderMissing,

    /// Operation requires a connected session
    #[error("Wallet not connected")]
    NotConnected,

    /// Blockhash, submission, confirmation or RPC transport failure
    #[error("Network failure: {0}")]
    NetworkFailure(String),

    /// The wallet rejected or failed a request
    #[error("Wallet provider error: {0}")]
    Provider(String),

    /// Session key is not a valid base58 pubkey
    #[error("Invalid public key: {0}")]
    InvalidPublicKey(String),

    /// Transaction could not be encoded for submission
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Malformed configuration override
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Another payment has not finished yet
    #[error("A payment is already in progress")]
    PaymentInFlight,
}

impl From<bincode::Error> for WalletError {
    fn from(e: bincode::Error) -> Self {
        WalletError::Serialization(e.to_string())
    }
}

/// Result type alias for SDK operations
pub type Result<T> = std::result::Result<T, WalletError>;

/// Boxed error returned across the provider and ledger seams
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;
