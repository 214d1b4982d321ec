//! Pay instruction handler

use pinocchio::{account_info::AccountInfo, msg, pubkey::Pubkey, ProgramResult};
use pinocchio_system::instructions::Transfer;

use crate::error::PaymentError;
use crate::instruction::PaymentInstruction;

/// Accounts and signer are checked before the amount is decoded.
pub fn process_pay(
    _program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    let mut account_info_iter = accounts.iter();
    let payer = account_info_iter
        .next()
        .ok_or(PaymentError::MissingAccounts)?;
    let recipient = account_info_iter
        .next()
        .ok_or(PaymentError::MissingAccounts)?;

    if !payer.is_signer() {
        msg!("Pay: payer did not sign");
        return Err(PaymentError::PayerNotSigner.into());
    }

    let instruction = PaymentInstruction::unpack(instruction_data).map_err(|e| {
        msg!("Pay: amount must be 8 bytes");
        e
    })?;

    if let Some(system_program) = account_info_iter.next() {
        if system_program.key() != &pinocchio_system::ID {
            return Err(PaymentError::NotSystemProgram.into());
        }
    }

    Transfer {
        from: payer,
        to: recipient,
        lamports: instruction.lamports,
    }
    .invoke()?;

    msg!("Pay: transferred lamports");
    Ok(())
}
