pub mod advanced;
pub mod basic;
pub mod core;
pub mod error;
pub mod logging;
pub mod types;
pub mod utils;

pub use crate::basic::session::WalletSessionController;
pub use crate::basic::shell::{AppShell, WalletView};
pub use crate::core::config::{ClusterConfig, PaymentConfig};
pub use crate::core::connection::LedgerClient;
pub use crate::core::notifier::{LogNotifier, Notifier};
pub use crate::core::rpc::RpcLedgerClient;
pub use crate::core::signer::{KeypairWallet, WalletProvider};
pub use crate::error::{BoxError, Result, WalletError};
pub use crate::types::{PaymentReceipt, Session};
pub use crate::utils::{encode_amount, serialize_transaction};
