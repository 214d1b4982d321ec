//! SolPay Program - Main Entry Point
//!
//! Moves a caller-chosen amount of lamports from the signing payer to the
//! recipient through the system program.

pub mod actions;
pub mod error;
pub mod instruction;
pub mod processor;

use pinocchio::{account_info::AccountInfo, entrypoint, pubkey::Pubkey, ProgramResult};
use pinocchio_pubkey::declare_id;

declare_id!("EabynKLkw2Jb2N8AYzP5XuR3whVmz3hhoic5eSoBUk48");

entrypoint!(process_instruction);

fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    processor::process_instruction(program_id, accounts, instruction_data)
}
