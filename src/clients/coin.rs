//! Managed-coin operations: initialize, register, mint, balance reads.
//!
//! Each mutating operation builds one entry-function payload against the
//! framework's `0x1::managed_coin` module and submits it; no validation or
//! bookkeeping happens client-side.

use std::sync::Arc;

use serde_json::{json, Value};

use crate::account::{AccountAddress, LocalAccount};
use crate::clients::coin_type_tag;
use crate::config::CoinConfig;
use crate::error::{ClientError, ClientResult};
use crate::rest::{EntryFunctionPayload, RestClient};

/// Framework module owning the coin entry functions.
const MANAGED_COIN_MODULE: &str = "0x1::managed_coin";

/// Resource type holding an account's balance of one coin type.
const COIN_STORE: &str = "0x1::coin::CoinStore";

/// Client for the demo coin entry points.
#[derive(Debug, Clone)]
pub struct CoinClient {
    rest: Arc<RestClient>,
    coin: CoinConfig,
}

impl CoinClient {
    pub fn new(rest: Arc<RestClient>, coin: CoinConfig) -> Self {
        Self { rest, coin }
    }

    /// Type tag of the coin `symbol` owned by `owner`.
    pub fn type_tag(&self, owner: AccountAddress, symbol: &str) -> String {
        coin_type_tag(owner, &self.coin.module_name, symbol)
    }

    /// Payload registering a new coin type owned by `sender`.
    pub fn initialize_payload(
        &self,
        sender: AccountAddress,
        symbol: &str,
    ) -> EntryFunctionPayload {
        EntryFunctionPayload::entry(
            MANAGED_COIN_MODULE,
            "initialize",
            vec![self.type_tag(sender, symbol)],
            vec![
                json!(format!("{}Coin", symbol)),
                json!(symbol),
                json!(self.coin.decimals),
                json!(false),
            ],
        )
    }

    /// Payload opting `registrant` in to hold the coin owned by `coin_owner`.
    pub fn register_payload(
        &self,
        coin_owner: AccountAddress,
        symbol: &str,
    ) -> EntryFunctionPayload {
        EntryFunctionPayload::entry(
            MANAGED_COIN_MODULE,
            "register",
            vec![self.type_tag(coin_owner, symbol)],
            vec![],
        )
    }

    /// Payload minting `amount` of the minter-owned coin to `recipient`.
    pub fn mint_payload(
        &self,
        minter: AccountAddress,
        recipient: AccountAddress,
        symbol: &str,
        amount: u64,
    ) -> EntryFunctionPayload {
        EntryFunctionPayload::entry(
            MANAGED_COIN_MODULE,
            "mint",
            vec![self.type_tag(minter, symbol)],
            vec![json!(recipient.to_string()), json!(amount.to_string())],
        )
    }

    /// Initialize a new coin type owned by `sender`.
    pub async fn initialize(&self, sender: &LocalAccount, symbol: &str) -> ClientResult<String> {
        let payload = self.initialize_payload(sender.address(), symbol);
        self.rest.submit_entry_function(sender, payload).await
    }

    /// Register `registrant` to receive transfers of the coin.
    pub async fn register(
        &self,
        coin_owner: AccountAddress,
        registrant: &LocalAccount,
        symbol: &str,
    ) -> ClientResult<String> {
        let payload = self.register_payload(coin_owner, symbol);
        self.rest.submit_entry_function(registrant, payload).await
    }

    /// Mint `amount` of the minter-owned coin to `recipient`.
    pub async fn mint(
        &self,
        minter: &LocalAccount,
        recipient: AccountAddress,
        symbol: &str,
        amount: u64,
    ) -> ClientResult<String> {
        let payload = self.mint_payload(minter.address(), recipient, symbol, amount);
        self.rest.submit_entry_function(minter, payload).await
    }

    /// The coin balance of `account`, as the node's decimal string.
    ///
    /// Fails with a not-found API error if the account never registered the
    /// coin type; it never reports zero in that case.
    pub async fn balance_of(
        &self,
        coin_owner: AccountAddress,
        account: AccountAddress,
        symbol: &str,
    ) -> ClientResult<String> {
        let resource_type = format!("{}<{}>", COIN_STORE, self.type_tag(coin_owner, symbol));
        let resource = self.rest.account_resource(account, &resource_type).await?;
        coin_store_value(&resource)
    }
}

/// Extract the balance string from a coin-store resource blob
/// (`data.coin.value`).
pub fn coin_store_value(resource: &Value) -> ClientResult<String> {
    resource
        .get("data")
        .and_then(|d| d.get("coin"))
        .and_then(|c| c.get("value"))
        .and_then(|v| v.as_str())
        .map(str::to_string)
        .ok_or_else(|| {
            ClientError::Encoding("coin store resource missing data.coin.value".to_string())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> CoinClient {
        let rest = Arc::new(RestClient::new("http://localhost:8080/v1", 10).unwrap());
        CoinClient::new(rest, CoinConfig::default())
    }

    fn owner() -> AccountAddress {
        "0xa550c18".parse().unwrap()
    }

    #[test]
    fn test_initialize_payload_shape() {
        let payload = test_client().initialize_payload(owner(), "A");

        assert_eq!(payload.function, "0x1::managed_coin::initialize");
        assert_eq!(
            payload.type_arguments,
            vec![format!("{}::test_coins::ACoin", owner())]
        );
        assert_eq!(
            payload.arguments,
            vec![json!("ACoin"), json!("A"), json!(6), json!(false)]
        );
    }

    #[test]
    fn test_initialize_respects_configured_precision() {
        let rest = Arc::new(RestClient::new("http://localhost:8080/v1", 10).unwrap());
        let client = CoinClient::new(
            rest,
            CoinConfig {
                module_name: "prod_coins".to_string(),
                decimals: 8,
            },
        );

        let payload = client.initialize_payload(owner(), "B");
        assert_eq!(
            payload.type_arguments,
            vec![format!("{}::prod_coins::BCoin", owner())]
        );
        assert_eq!(payload.arguments[2], json!(8));
    }

    #[test]
    fn test_register_payload_shape() {
        let payload = test_client().register_payload(owner(), "B");

        assert_eq!(payload.function, "0x1::managed_coin::register");
        assert_eq!(
            payload.type_arguments,
            vec![format!("{}::test_coins::BCoin", owner())]
        );
        assert!(payload.arguments.is_empty());
    }

    #[test]
    fn test_mint_payload_shape() {
        let recipient: AccountAddress = "0xb0b".parse().unwrap();
        let payload = test_client().mint_payload(owner(), recipient, "A", 5_000_000);

        assert_eq!(payload.function, "0x1::managed_coin::mint");
        assert_eq!(
            payload.type_arguments,
            vec![format!("{}::test_coins::ACoin", owner())]
        );
        // Addresses and u64 amounts travel as strings
        assert_eq!(
            payload.arguments,
            vec![json!(recipient.to_string()), json!("5000000")]
        );
    }

    #[test]
    fn test_coin_store_value_extraction() {
        let resource = json!({
            "type": "0x1::coin::CoinStore<0x1::test_coins::ACoin>",
            "data": { "coin": { "value": "5000000" }, "frozen": false }
        });
        assert_eq!(coin_store_value(&resource).unwrap(), "5000000");
    }

    #[test]
    fn test_coin_store_value_missing_path() {
        let resource = json!({"data": {"frozen": false}});
        let err = coin_store_value(&resource).unwrap_err();
        assert!(err.to_string().contains("data.coin.value"));
    }
}
