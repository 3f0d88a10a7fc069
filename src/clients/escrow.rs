//! Escrow contract operations: init, add, cancel and take offers.
//!
//! The offer bookkeeping, fund custody and take-exactly-once state machine
//! all live in the on-chain contract; this client only submits commands.
//! There is no client-side duplicate-offer or existence checking.

use std::sync::Arc;

use serde_json::json;

use crate::account::{AccountAddress, LocalAccount};
use crate::clients::coin_type_tag;
use crate::error::ClientResult;
use crate::rest::{EntryFunctionPayload, RestClient};

/// Client for the escrow contract entry points.
///
/// Offers are implicitly keyed on-chain by (offerer, pay coin, receive
/// coin). Coin type arguments are synthesized against `coin_owner`, the
/// account the demo coin types are published under.
#[derive(Debug, Clone)]
pub struct EscrowClient {
    rest: Arc<RestClient>,
    /// Fully qualified module id, e.g. `0x42::Escrow`.
    module_id: String,
    coin_owner: AccountAddress,
    coin_module: String,
}

impl EscrowClient {
    pub fn new(
        rest: Arc<RestClient>,
        module_address: AccountAddress,
        module_name: &str,
        coin_owner: AccountAddress,
        coin_module: &str,
    ) -> Self {
        Self {
            rest,
            module_id: format!("{}::{}", module_address, module_name),
            coin_owner,
            coin_module: coin_module.to_string(),
        }
    }

    /// The fully qualified escrow module id.
    pub fn module_id(&self) -> &str {
        &self.module_id
    }

    fn type_tag(&self, symbol: &str) -> String {
        coin_type_tag(self.coin_owner, &self.coin_module, symbol)
    }

    /// Payload enabling offer creation for an account.
    pub fn init_escrow_payload(&self) -> EntryFunctionPayload {
        EntryFunctionPayload::entry(&self.module_id, "init_escrow", vec![], vec![])
    }

    /// Payload publishing an offer of `pay_amount` pay-coin for
    /// `receive_amount` receive-coin.
    pub fn add_offer_payload(
        &self,
        pay_coin: &str,
        receive_coin: &str,
        pay_amount: u64,
        receive_amount: u64,
    ) -> EntryFunctionPayload {
        EntryFunctionPayload::entry(
            &self.module_id,
            "add_offer",
            vec![self.type_tag(pay_coin), self.type_tag(receive_coin)],
            vec![
                json!(pay_amount.to_string()),
                json!(receive_amount.to_string()),
            ],
        )
    }

    /// Payload withdrawing the signer's outstanding offer for a coin pair.
    pub fn cancel_offer_payload(&self, pay_coin: &str, receive_coin: &str) -> EntryFunctionPayload {
        EntryFunctionPayload::entry(
            &self.module_id,
            "cancel_offer",
            vec![self.type_tag(pay_coin), self.type_tag(receive_coin)],
            vec![],
        )
    }

    /// Payload executing the swap defined by `initiator`'s offer.
    pub fn take_offer_payload(
        &self,
        initiator: AccountAddress,
        pay_coin: &str,
        receive_coin: &str,
    ) -> EntryFunctionPayload {
        EntryFunctionPayload::entry(
            &self.module_id,
            "take_offer",
            vec![self.type_tag(pay_coin), self.type_tag(receive_coin)],
            vec![json!(initiator.to_string())],
        )
    }

    /// One-time per-account enablement of offer creation.
    pub async fn init_escrow(&self, account: &LocalAccount) -> ClientResult<String> {
        self.rest
            .submit_entry_function(account, self.init_escrow_payload())
            .await
    }

    /// Publish an offer anyone can take. Existence and duplicate checks are
    /// the contract's responsibility.
    pub async fn add_offer(
        &self,
        signer: &LocalAccount,
        pay_coin: &str,
        receive_coin: &str,
        pay_amount: u64,
        receive_amount: u64,
    ) -> ClientResult<String> {
        let payload = self.add_offer_payload(pay_coin, receive_coin, pay_amount, receive_amount);
        self.rest.submit_entry_function(signer, payload).await
    }

    /// Withdraw the signer's own outstanding offer for the coin pair.
    pub async fn cancel_offer(
        &self,
        signer: &LocalAccount,
        pay_coin: &str,
        receive_coin: &str,
    ) -> ClientResult<String> {
        let payload = self.cancel_offer_payload(pay_coin, receive_coin);
        self.rest.submit_entry_function(signer, payload).await
    }

    /// Atomically execute the swap defined by `initiator`'s offer.
    pub async fn take_offer(
        &self,
        signer: &LocalAccount,
        initiator: AccountAddress,
        pay_coin: &str,
        receive_coin: &str,
    ) -> ClientResult<String> {
        let payload = self.take_offer_payload(initiator, pay_coin, receive_coin);
        self.rest.submit_entry_function(signer, payload).await
    }
}
