//! Node REST transport: client, faucet, wire types.

pub mod client;
pub mod faucet;
pub mod types;

pub use client::RestClient;
pub use faucet::FaucetClient;
pub use types::EntryFunctionPayload;
