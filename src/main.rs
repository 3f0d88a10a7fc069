//! Escrow demo binary.
//!
//! Funds three test accounts and walks them through an escrow trade:
//! register and mint two demo coins, publish an offer, take it from the
//! second party, then add and cancel a second offer. Strictly sequential;
//! any failure aborts the run.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use escrow_demo::config::{load_config, DemoConfig};

#[derive(Parser, Debug)]
#[command(name = "escrow-demo", about = "Run the escrow trade demo against a test network")]
struct Cli {
    /// Path to a TOML config file; defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Initialize the two demo coin types before running the trade.
    #[arg(long)]
    init_coins: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "escrow_demo=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => DemoConfig::default(),
    };

    tracing::info!(
        node_url = %config.node_url,
        faucet_url = %config.faucet_url,
        coin_module = %config.coin.module_name,
        "Configuration loaded"
    );

    escrow_demo::scenario::run(&config, cli.init_coins).await?;

    Ok(())
}
