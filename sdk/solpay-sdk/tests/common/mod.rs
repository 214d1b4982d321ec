#![allow(dead_code)]

use async_trait::async_trait;
use solana_sdk::{
    commitment_config::CommitmentConfig,
    hash::Hash,
    pubkey::Pubkey,
    signature::{Keypair, Signature, Signer},
    transaction::Transaction,
};
use solpay_sdk::{BoxError, LedgerClient, Notifier, WalletProvider, WalletSessionController};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// Wallet double that signs with a real keypair and records what it signed.
pub struct FakeWallet {
    pub keypair: Keypair,
    pub phantom: bool,
    pub fail_connect: bool,
    pub fail_disconnect: bool,
    pub reject_sign: bool,
    pub signed: Mutex<Vec<Transaction>>,
    pub disconnects: Mutex<usize>,
}

impl FakeWallet {
    pub fn new() -> Self {
        Self {
            keypair: Keypair::new(),
            phantom: true,
            fail_connect: false,
            fail_disconnect: false,
            reject_sign: false,
            signed: Mutex::new(Vec::new()),
            disconnects: Mutex::new(0),
        }
    }

    pub fn pubkey(&self) -> Pubkey {
        self.keypair.pubkey()
    }

    pub fn signed(&self) -> Vec<Transaction> {
        self.signed.lock().unwrap().clone()
    }
}

#[async_trait]
impl WalletProvider for FakeWallet {
    fn is_phantom(&self) -> bool {
        self.phantom
    }

    async fn connect(&self) -> Result<Pubkey, BoxError> {
        if self.fail_connect {
            return Err("User rejected the request.".into());
        }
        Ok(self.keypair.pubkey())
    }

    async fn disconnect(&self) -> Result<(), BoxError> {
        *self.disconnects.lock().unwrap() += 1;
        if self.fail_disconnect {
            return Err("extension unavailable".into());
        }
        Ok(())
    }

    async fn sign_transaction(
        &self,
        mut transaction: Transaction,
    ) -> Result<Transaction, BoxError> {
        if self.reject_sign {
            return Err("User rejected the request.".into());
        }
        let blockhash = transaction.message.recent_blockhash;
        transaction.try_sign(&[&self.keypair], blockhash)?;
        self.signed.lock().unwrap().push(transaction.clone());
        Ok(transaction)
    }

    async fn sign_message(&self, message: &[u8]) -> Result<Signature, BoxError> {
        Ok(self.keypair.sign_message(message))
    }
}

/// Which ledger step should fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailAt {
    Blockhash,
    Send,
    Confirm,
    Logs,
}

/// In-memory ledger that records every call in order.
pub struct FakeLedger {
    pub blockhash: Hash,
    pub fail_at: Option<FailAt>,
    pub logs: Option<Vec<String>>,
    pub calls: Mutex<Vec<&'static str>>,
    pub submitted: Mutex<Vec<Vec<u8>>>,
    pub confirmed_with: Mutex<Option<CommitmentConfig>>,
    /// When set, `confirm_transaction` signals `reached_confirm` and then
    /// waits on `release`.
    pub hold_confirm: bool,
    pub reached_confirm: Notify,
    pub release: Notify,
}

impl FakeLedger {
    pub fn new() -> Self {
        Self {
            blockhash: Hash::new_unique(),
            fail_at: None,
            logs: Some(vec![
                "Program EabynKLkw2Jb2N8AYzP5XuR3whVmz3hhoic5eSoBUk48 invoke [1]".to_string(),
                "Program EabynKLkw2Jb2N8AYzP5XuR3whVmz3hhoic5eSoBUk48 success".to_string(),
            ]),
            calls: Mutex::new(Vec::new()),
            submitted: Mutex::new(Vec::new()),
            confirmed_with: Mutex::new(None),
            hold_confirm: false,
            reached_confirm: Notify::new(),
            release: Notify::new(),
        }
    }

    pub fn failing_at(step: FailAt) -> Self {
        Self {
            fail_at: Some(step),
            ..Self::new()
        }
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    pub fn submitted(&self) -> Vec<Vec<u8>> {
        self.submitted.lock().unwrap().clone()
    }

    fn record(&self, call: &'static str, step: FailAt) -> Result<(), BoxError> {
        self.calls.lock().unwrap().push(call);
        if self.fail_at == Some(step) {
            return Err(format!("{} failed: connection refused", call).into());
        }
        Ok(())
    }
}

#[async_trait]
impl LedgerClient for FakeLedger {
    async fn get_latest_blockhash(&self) -> Result<Hash, BoxError> {
        self.record("get_latest_blockhash", FailAt::Blockhash)?;
        Ok(self.blockhash)
    }

    async fn send_raw_transaction(&self, wire: &[u8]) -> Result<Signature, BoxError> {
        self.record("send_raw_transaction", FailAt::Send)?;
        self.submitted.lock().unwrap().push(wire.to_vec());
        let tx: Transaction = bincode::deserialize(wire)?;
        let signature = tx.signatures.first().ok_or("No signature")?;
        Ok(*signature)
    }

    async fn confirm_transaction(
        &self,
        _signature: &Signature,
        commitment: CommitmentConfig,
    ) -> Result<(), BoxError> {
        if self.hold_confirm {
            self.reached_confirm.notify_one();
            self.release.notified().await;
        }
        self.record("confirm_transaction", FailAt::Confirm)?;
        *self.confirmed_with.lock().unwrap() = Some(commitment);
        Ok(())
    }

    async fn get_transaction_logs(
        &self,
        _signature: &Signature,
    ) -> Result<Option<Vec<String>>, BoxError> {
        self.record("get_transaction_logs", FailAt::Logs)?;
        Ok(self.logs.clone())
    }
}

/// Collects user-facing messages.
#[derive(Default)]
pub struct RecordingNotifier {
    pub messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

pub struct TestContext {
    pub wallet: Arc<FakeWallet>,
    pub notifier: Arc<RecordingNotifier>,
    pub controller: WalletSessionController<FakeLedger>,
}

impl TestContext {
    pub fn new(wallet: FakeWallet, ledger: FakeLedger) -> Self {
        let wallet = Arc::new(wallet);
        let notifier = Arc::new(RecordingNotifier::default());
        let controller = WalletSessionController::new(
            Some(wallet.clone() as Arc<dyn WalletProvider>),
            ledger,
        )
        .with_notifier(notifier.clone());
        Self {
            wallet,
            notifier,
            controller,
        }
    }

    pub fn ledger(&self) -> &FakeLedger {
        self.controller.ledger()
    }
}

pub fn setup_test_context() -> TestContext {
    TestContext::new(FakeWallet::new(), FakeLedger::new())
}
