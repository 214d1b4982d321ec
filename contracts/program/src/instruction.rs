//! SolPay Instruction Definitions

use borsh::{BorshDeserialize, BorshSerialize};

use crate::error::PaymentError;

/// Transfer `lamports` from the payer to the recipient.
///
/// Accounts:
/// 0. `[writable, signer]` Payer
/// 1. `[writable]` Recipient
/// 2. `[]` System program
///
/// Wire format: the amount alone, u64 little-endian (8 bytes).
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentInstruction {
    pub lamports: u64,
}

impl PaymentInstruction {
    pub const LEN: usize = 8;

    pub fn unpack(input: &[u8]) -> Result<Self, PaymentError> {
        if input.len() != Self::LEN {
            return Err(PaymentError::InvalidAmount);
        }
        borsh::from_slice(input).map_err(|_| PaymentError::InvalidAmount)
    }
}
