//! The demo scenario: fund three accounts and walk them through an escrow
//! trade.
//!
//! Strictly sequential smoke test, mirroring how the contract is meant to
//! be driven by hand: every mutating call is confirmed before any
//! dependent balance read, and any failure aborts the whole run. No
//! branching, no recovery.

use std::str::FromStr;
use std::sync::Arc;

use crate::account::{AccountAddress, LocalAccount};
use crate::clients::{CoinClient, EscrowClient};
use crate::config::DemoConfig;
use crate::error::ClientResult;
use crate::rest::{FaucetClient, RestClient};

/// Amount of ACoin minted to alice.
const ALICE_MINT: u64 = 5_000_000;

/// Amount of BCoin minted to bob.
const BOB_MINT: u64 = 6_000_000;

/// Explorer link for a transaction hash.
fn explorer(hash: &str, network: &str) -> String {
    format!("https://explorer.aptoslabs.com/txn/{}?network={}", hash, network)
}

fn print_step(step: &str) {
    println!("\n=== {} ===", step);
}

/// Run the full escrow demo against the configured network.
///
/// When `init_coins` is set, the two demo coin types are initialized first;
/// on a network where the admin already published them, leave it unset.
pub async fn run(config: &DemoConfig, init_coins: bool) -> ClientResult<()> {
    let admin = LocalAccount::from_env()?;
    let bob = LocalAccount::generate();
    let alice = LocalAccount::generate();

    println!("Admin account: {}", admin.address());
    println!("Bob account:   {}", bob.address());
    println!("Alice account: {}", alice.address());

    let rest = Arc::new(RestClient::new(&config.node_url, config.request_timeout_secs)?);
    let faucet = FaucetClient::new(&config.faucet_url, Arc::clone(&rest));

    let coin_client = CoinClient::new(Arc::clone(&rest), config.coin.clone());

    let module_address = match &config.escrow.module_address {
        Some(addr) => AccountAddress::from_str(addr)?,
        None => admin.address(),
    };
    let escrow_client = EscrowClient::new(
        Arc::clone(&rest),
        module_address,
        &config.escrow.module_name,
        admin.address(),
        &config.coin.module_name,
    );
    tracing::info!(module = %escrow_client.module_id(), "Using escrow module");

    print_step("Funding accounts");
    println!("Funding admin");
    faucet.fund(admin.address(), config.funding_amount).await?;
    println!("Funding bob");
    faucet.fund(bob.address(), config.funding_amount).await?;
    println!("Funding alice");
    faucet.fund(alice.address(), config.funding_amount).await?;

    if init_coins {
        print_step("Initializing coins");
        for symbol in ["A", "B"] {
            println!("Initializing {}Coin", symbol);
            let hash = coin_client.initialize(&admin, symbol).await?;
            println!("{}", explorer(&hash, &config.explorer_network));
            rest.wait_for_transaction(&hash).await?;
        }
    }

    print_step("Registering coins");
    println!("Registering ACoin for Alice");
    let hash = coin_client.register(admin.address(), &alice, "A").await?;
    println!("{}", explorer(&hash, &config.explorer_network));
    rest.wait_for_transaction(&hash).await?;

    println!("Registering BCoin for Bob");
    let hash = coin_client.register(admin.address(), &bob, "B").await?;
    println!("{}", explorer(&hash, &config.explorer_network));
    rest.wait_for_transaction(&hash).await?;

    print_step("Minting");
    println!("Minting ACoin to Alice");
    let hash = coin_client
        .mint(&admin, alice.address(), "A", ALICE_MINT)
        .await?;
    println!("{}", explorer(&hash, &config.explorer_network));
    rest.wait_for_transaction(&hash).await?;

    println!("Minting BCoin to Bob");
    let hash = coin_client
        .mint(&admin, bob.address(), "B", BOB_MINT)
        .await?;
    println!("{}", explorer(&hash, &config.explorer_network));
    rest.wait_for_transaction(&hash).await?;

    println!(
        "Bob's balance:   {}",
        coin_client
            .balance_of(admin.address(), bob.address(), "B")
            .await?
    );
    println!(
        "Alice's balance: {}",
        coin_client
            .balance_of(admin.address(), alice.address(), "A")
            .await?
    );

    print_step("Creating Alice's escrow");
    let hash = escrow_client.init_escrow(&alice).await?;
    println!("{}", explorer(&hash, &config.explorer_network));
    rest.wait_for_transaction(&hash).await?;

    println!(
        "Alice's balance: {}",
        coin_client
            .balance_of(admin.address(), alice.address(), "A")
            .await?
    );

    print_step("Adding Alice's offer");
    let hash = escrow_client.add_offer(&alice, "A", "B", 1, 5).await?;
    println!("{}", explorer(&hash, &config.explorer_network));
    rest.wait_for_transaction(&hash).await?;

    println!(
        "Alice's balance: {}",
        coin_client
            .balance_of(admin.address(), alice.address(), "A")
            .await?
    );

    print_step("Bob takes Alice's offer");
    let hash = escrow_client
        .take_offer(&bob, alice.address(), "A", "B")
        .await?;
    println!("{}", explorer(&hash, &config.explorer_network));
    rest.wait_for_transaction(&hash).await?;

    println!(
        "Alice's A: {}",
        coin_client
            .balance_of(admin.address(), alice.address(), "A")
            .await?
    );
    println!(
        "Alice's B: {}",
        coin_client
            .balance_of(admin.address(), alice.address(), "B")
            .await?
    );
    println!(
        "Bob's A:   {}",
        coin_client
            .balance_of(admin.address(), bob.address(), "A")
            .await?
    );
    println!(
        "Bob's B:   {}",
        coin_client
            .balance_of(admin.address(), bob.address(), "B")
            .await?
    );

    print_step("Adding Alice's second offer");
    let hash = escrow_client
        .add_offer(&alice, "A", "B", 4_312_345, 1)
        .await?;
    println!("{}", explorer(&hash, &config.explorer_network));
    rest.wait_for_transaction(&hash).await?;

    println!(
        "Alice's A: {}",
        coin_client
            .balance_of(admin.address(), alice.address(), "A")
            .await?
    );

    print_step("Alice cancels the offer");
    let hash = escrow_client.cancel_offer(&alice, "A", "B").await?;
    println!("{}", explorer(&hash, &config.explorer_network));
    rest.wait_for_transaction(&hash).await?;

    println!(
        "Alice's A: {}",
        coin_client
            .balance_of(admin.address(), alice.address(), "A")
            .await?
    );

    tracing::info!("Scenario complete");
    Ok(())
}
