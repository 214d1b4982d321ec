use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;

/// Wallet connection state owned by the UI.
///
/// `connected` is true exactly when a public key is held. Operations take a
/// session and hand back the replacement rather than mutating it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    connected: bool,
    public_key: Option<String>,
}

impl Session {
    /// Initial state: no wallet attached
    pub fn disconnected() -> Self {
        Self::default()
    }

    pub fn connected(public_key: &Pubkey) -> Self {
        Self {
            connected: true,
            public_key: Some(public_key.to_string()),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Base58 public key of the connected account
    pub fn public_key(&self) -> Option<&str> {
        self.public_key.as_deref()
    }
}

/// Result of a confirmed payment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentReceipt {
    pub signature: Signature,

    /// Program logs, empty when the ledger returned none
    pub logs: Vec<String>,
}
