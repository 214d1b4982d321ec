#![allow(dead_code)]

use litesvm::LiteSVM;
use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    signature::Keypair,
    signer::Signer,
    system_program,
    transaction::Transaction,
};
use std::path::PathBuf;

pub const PAYMENT_LAMPORTS: u64 = 500_000_000;

pub struct TestContext {
    pub svm: LiteSVM,
    pub payer: Keypair,
    pub program_id: Pubkey,
}

pub fn setup_test() -> TestContext {
    let payer = Keypair::new();
    let mut svm = LiteSVM::new();

    svm.airdrop(&payer.pubkey(), 10_000_000_000)
        .expect("Failed to airdrop");

    let program_id = Pubkey::new_from_array(solpay_program::ID);
    svm.add_program_from_file(program_id, get_program_path())
        .expect("Failed to load program");

    TestContext {
        svm,
        payer,
        program_id,
    }
}

pub fn get_program_path() -> PathBuf {
    let root = std::env::current_dir().unwrap();
    let paths = [
        root.join("target/deploy/solpay_program.so"),
        root.join("../target/deploy/solpay_program.so"),
        root.join("../../target/deploy/solpay_program.so"),
    ];
    for path in paths {
        if path.exists() {
            return path;
        }
    }
    panic!("Could not find solpay_program.so");
}

/// Pay instruction with the account list the client sends.
pub fn pay_ix(
    program_id: &Pubkey,
    payer: &Pubkey,
    payer_signs: bool,
    recipient: &Pubkey,
    data: Vec<u8>,
) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*payer, payer_signs),
            AccountMeta::new(*recipient, false),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data,
    }
}

/// Sign and submit `ix` with the context payer as fee payer.
pub fn send(
    context: &mut TestContext,
    ix: Instruction,
) -> Result<(), solana_sdk::transaction::TransactionError> {
    let tx = Transaction::new_signed_with_payer(
        &[ix],
        Some(&context.payer.pubkey()),
        &[&context.payer],
        context.svm.latest_blockhash(),
    );
    context
        .svm
        .send_transaction(tx)
        .map(|_| ())
        .map_err(|failed| failed.err)
}
