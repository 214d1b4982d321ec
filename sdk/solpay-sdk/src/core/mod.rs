pub mod config;
pub mod connection;
pub mod constants;
pub mod notifier;
pub mod rpc;
pub mod signer;
