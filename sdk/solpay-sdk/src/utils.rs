use crate::error::Result;
use solana_sdk::transaction::Transaction;

/// Encode a lamport amount the way the payment program reads it
pub fn encode_amount(lamports: u64) -> [u8; 8] {
    lamports.to_le_bytes()
}

/// Legacy wire encoding accepted by `sendTransaction`
pub fn serialize_transaction(transaction: &Transaction) -> Result<Vec<u8>> {
    Ok(bincode::serialize(transaction)?)
}
