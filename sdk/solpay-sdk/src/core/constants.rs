use solana_sdk::native_token::LAMPORTS_PER_SOL;
use solana_sdk::pubkey;
use solana_sdk::pubkey::Pubkey;

// Payment program deployed on devnet
pub const PAYMENT_PROGRAM_ID: Pubkey = pubkey!("EabynKLkw2Jb2N8AYzP5XuR3whVmz3hhoic5eSoBUk48");

// Fixed payee of every payment
pub const RECIPIENT: Pubkey = pubkey!("CQV3QSMYRF8P87ioHVmBHcvP94WaoV4JoB4NVn62KXjY");

pub const DEVNET_ENDPOINT: &str = "https://api.devnet.solana.com";

/// Half a SOL
pub const PAYMENT_LAMPORTS: u64 = LAMPORTS_PER_SOL / 2;

pub const APP_TITLE: &str = "Solana Wallet Auth";
