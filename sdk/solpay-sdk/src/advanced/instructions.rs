use crate::utils::encode_amount;
use solana_sdk::instruction::{AccountMeta, Instruction};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::system_program;

/// Pay `lamports` from `payer` to `recipient` through the payment program.
///
/// Accounts:
/// 0. `[writable, signer]` Payer
/// 1. `[writable]` Recipient
/// 2. `[]` System program
///
/// Data: amount as u64 little-endian.
pub fn pay(program_id: &Pubkey, payer: &Pubkey, recipient: &Pubkey, lamports: u64) -> Instruction {
    let accounts = vec![
        AccountMeta::new(*payer, true),
        AccountMeta::new(*recipient, false),
        AccountMeta::new_readonly(system_program::id(), false),
    ];

    Instruction {
        program_id: *program_id,
        accounts,
        data: encode_amount(lamports).to_vec(),
    }
}
