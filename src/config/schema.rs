//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.
//! The admin private key is deliberately NOT part of the schema; it comes
//! from the environment only (see `account::PRIVATE_KEY_ENV_VAR`).

use serde::{Deserialize, Serialize};

/// Root configuration for the escrow demo.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Base URL of the node REST API.
    pub node_url: String,

    /// Base URL of the test-network faucet.
    pub faucet_url: String,

    /// Amount each demo account is funded with.
    pub funding_amount: u64,

    /// Per-request HTTP timeout in seconds.
    pub request_timeout_secs: u64,

    /// Network name used when printing explorer links.
    pub explorer_network: String,

    /// Coin type naming settings.
    pub coin: CoinConfig,

    /// Escrow contract module settings.
    pub escrow: EscrowConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            node_url: "https://fullnode.devnet.aptoslabs.com/v1".to_string(),
            faucet_url: "https://faucet.devnet.aptoslabs.com".to_string(),
            funding_amount: 1_000_000,
            request_timeout_secs: 10,
            explorer_network: "devnet".to_string(),
            coin: CoinConfig::default(),
            escrow: EscrowConfig::default(),
        }
    }
}

/// Settings controlling how coin type tags are synthesized.
///
/// A coin type tag is `<owner>::<module_name>::<symbol>Coin`; the defaults
/// match the deployed demo contract and must not change for wire
/// compatibility with it.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CoinConfig {
    /// Move module that owns the demo coin types.
    pub module_name: String,

    /// Decimal precision passed to coin initialization.
    pub decimals: u8,
}

impl Default for CoinConfig {
    fn default() -> Self {
        Self {
            module_name: "test_coins".to_string(),
            decimals: 6,
        }
    }
}

/// Escrow contract module settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct EscrowConfig {
    /// Address the escrow module is published under. When absent, the
    /// scenario falls back to the admin account's address.
    pub module_address: Option<String>,

    /// Name of the escrow Move module.
    pub module_name: String,
}

impl Default for EscrowConfig {
    fn default() -> Self {
        Self {
            module_address: None,
            module_name: "Escrow".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DemoConfig::default();
        assert_eq!(config.coin.module_name, "test_coins");
        assert_eq!(config.coin.decimals, 6);
        assert_eq!(config.escrow.module_name, "Escrow");
        assert!(config.escrow.module_address.is_none());
        assert_eq!(config.funding_amount, 1_000_000);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: DemoConfig = toml::from_str(
            r#"
            node_url = "http://localhost:8080/v1"

            [escrow]
            module_address = "0xcafe"
            "#,
        )
        .unwrap();

        assert_eq!(config.node_url, "http://localhost:8080/v1");
        assert_eq!(config.escrow.module_address.as_deref(), Some("0xcafe"));
        // Untouched sections keep their defaults
        assert_eq!(config.escrow.module_name, "Escrow");
        assert_eq!(config.coin.decimals, 6);
    }
}
