// Example: paying through the session controller against devnet
//
// This example demonstrates how to:
// 1. Build an RPC ledger client from the cluster config
// 2. Stand in a local keypair for the browser wallet
// 3. Connect, pay and disconnect through the shell
//
// The generated keypair holds no SOL, so the payment is expected to fail
// at submission unless the account is funded first.

use solana_sdk::signature::Keypair;
use solpay_sdk::logging::init_logging;
use solpay_sdk::{
    AppShell, ClusterConfig, KeypairWallet, RpcLedgerClient, WalletProvider,
    WalletSessionController,
};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let ledger = RpcLedgerClient::from_config(&ClusterConfig::devnet());
    let wallet: Arc<dyn WalletProvider> = Arc::new(KeypairWallet::new(Keypair::new()));
    let mut shell = AppShell::new(WalletSessionController::new(Some(wallet), ledger));

    println!("{}", shell.title());
    shell.connect_clicked().await?;
    if let Some(line) = shell.view().status_line {
        println!("{}", line);
    }

    match shell.pay_clicked().await {
        Ok(receipt) => println!("Signature: {}", receipt.signature),
        Err(e) => println!("Payment did not go through: {}", e),
    }

    let _ = shell.disconnect_clicked().await;
    Ok(())
}
