//! Escrow demonstration client.
//!
//! Thin clients over an on-chain escrow contract and its demo coins: each
//! operation builds one entry-function payload, signs and submits it
//! through the node REST API, and returns the transaction hash. The
//! `scenario` module drives the whole flow end to end against a test
//! network.

pub mod account;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;
pub mod scenario;

pub use account::{AccountAddress, LocalAccount};
pub use clients::{CoinClient, EscrowClient};
pub use config::DemoConfig;
pub use error::{ClientError, ClientResult};
pub use rest::{FaucetClient, RestClient};
