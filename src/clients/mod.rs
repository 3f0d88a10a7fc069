//! Entry-point clients for the coin and escrow contracts.

pub mod coin;
pub mod escrow;

pub use coin::CoinClient;
pub use escrow::EscrowClient;

use crate::account::AccountAddress;

/// Synthesize the fully qualified type tag of a demo coin:
/// `<owner>::<module>::<symbol>Coin`.
///
/// This naming convention is shared with the deployed contract and must be
/// preserved bit-for-bit.
pub fn coin_type_tag(owner: AccountAddress, module_name: &str, symbol: &str) -> String {
    format!("{}::{}::{}Coin", owner, module_name, symbol)
}
