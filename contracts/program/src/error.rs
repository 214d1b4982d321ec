//! SolPay Error Types

use pinocchio::program_error::ProgramError;
use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum PaymentError {
    #[error("Payer and recipient accounts are required")]
    MissingAccounts,

    #[error("Payer must sign")]
    PayerNotSigner,

    #[error("Instruction data must be an 8-byte amount")]
    InvalidAmount,

    #[error("Third account must be the system program")]
    NotSystemProgram,
}

impl From<PaymentError> for ProgramError {
    fn from(e: PaymentError) -> Self {
        match e {
            PaymentError::MissingAccounts => ProgramError::NotEnoughAccountKeys,
            PaymentError::PayerNotSigner => ProgramError::MissingRequiredSignature,
            PaymentError::InvalidAmount => ProgramError::InvalidInstructionData,
            PaymentError::NotSystemProgram => ProgramError::IncorrectProgramId,
        }
    }
}
