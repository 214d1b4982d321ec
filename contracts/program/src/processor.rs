//! Instruction Processor

use pinocchio::{account_info::AccountInfo, pubkey::Pubkey, ProgramResult};

use crate::actions;

/// The program has a single instruction, so the whole payload is the pay
/// instruction data.
pub fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    actions::process_pay(program_id, accounts, instruction_data)
}
