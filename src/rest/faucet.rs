//! Test-network faucet client.

use std::sync::Arc;

use crate::account::AccountAddress;
use crate::error::{ClientError, ClientResult};
use crate::rest::client::RestClient;

/// Client for the test-network funding faucet.
///
/// Funding mints through one or more transactions; `fund` waits for all of
/// them so the balance is visible to any read that follows.
#[derive(Debug, Clone)]
pub struct FaucetClient {
    faucet_url: String,
    rest: Arc<RestClient>,
    http: reqwest::Client,
}

impl FaucetClient {
    pub fn new(faucet_url: &str, rest: Arc<RestClient>) -> Self {
        Self {
            faucet_url: faucet_url.trim_end_matches('/').to_string(),
            rest,
            http: reqwest::Client::new(),
        }
    }

    /// Credit `amount` to `address` and block until the mint is confirmed.
    pub async fn fund(&self, address: AccountAddress, amount: u64) -> ClientResult<()> {
        let url = format!(
            "{}/mint?address={}&amount={}",
            self.faucet_url, address, amount
        );
        let response = self.http.post(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Faucet(format!(
                "faucet returned {}: {}",
                status, body
            )));
        }

        let hashes: Vec<String> = response.json().await?;
        for hash in &hashes {
            self.rest.wait_for_transaction(hash).await?;
        }

        tracing::debug!(address = %address, amount, txns = hashes.len(), "Account funded");
        Ok(())
    }
}
