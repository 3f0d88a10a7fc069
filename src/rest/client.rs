//! Node REST client: sequence numbers, resource reads, transaction
//! submission and confirmation polling.
//!
//! # Responsibilities
//! - Fetch account state and on-chain resources
//! - Turn an entry-function payload into a signed, submitted transaction
//! - Block until a submitted transaction reaches finality
//!
//! Fail-fast by design: every transport or API error propagates unchanged
//! to the caller. There is no retry.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::de::DeserializeOwned;
use tokio::time::sleep;

use crate::account::{AccountAddress, LocalAccount};
use crate::error::{ClientError, ClientResult};
use crate::rest::types::{
    AccountData, ApiErrorBody, EntryFunctionPayload, PendingTransaction,
    SignedTransactionRequest, TransactionInfo, TransactionSignature, UserTransactionRequest,
};

/// Gas ceiling attached to every demo transaction.
const MAX_GAS_AMOUNT: u64 = 100_000;

/// Gas unit price attached to every demo transaction.
const GAS_UNIT_PRICE: u64 = 100;

/// Transactions expire this many seconds after submission.
const EXPIRATION_SECS: u64 = 600;

/// Confirmation polling interval and budget.
const POLL_INTERVAL: Duration = Duration::from_secs(1);
const MAX_POLL_SECS: u64 = 30;

/// Client for the node REST API.
#[derive(Clone)]
pub struct RestClient {
    base_url: String,
    http: reqwest::Client,
}

impl RestClient {
    /// Create a client for the given API base URL (e.g. `https://node/v1`).
    pub fn new(base_url: &str, request_timeout_secs: u64) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(request_timeout_secs))
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    /// The API base URL, without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Current sequence number of an on-chain account.
    pub async fn sequence_number(&self, address: AccountAddress) -> ClientResult<u64> {
        let url = format!("{}/accounts/{}", self.base_url, address);
        let account: AccountData = check(self.http.get(url).send().await?).await?;
        account
            .sequence_number
            .parse()
            .map_err(|e| ClientError::Encoding(format!("bad sequence number: {}", e)))
    }

    /// Read an on-chain resource by its fully qualified type string.
    ///
    /// Fails with a 404-style API error if the account does not hold the
    /// resource, e.g. a coin store for a never-registered coin type.
    pub async fn account_resource(
        &self,
        address: AccountAddress,
        resource_type: &str,
    ) -> ClientResult<serde_json::Value> {
        let url = format!(
            "{}/accounts/{}/resource/{}",
            self.base_url, address, resource_type
        );
        check(self.http.get(url).send().await?).await
    }

    /// Sign and submit an entry-function payload as a single-signer
    /// transaction, returning the transaction hash.
    ///
    /// The node's `encode_submission` endpoint supplies the exact signing
    /// message, so no transaction serialization happens locally.
    pub async fn submit_entry_function(
        &self,
        signer: &LocalAccount,
        payload: EntryFunctionPayload,
    ) -> ClientResult<String> {
        let sequence_number = self.sequence_number(signer.address()).await?;
        let expiration = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| ClientError::Encoding(format!("clock error: {}", e)))?
            .as_secs()
            + EXPIRATION_SECS;

        let request = UserTransactionRequest {
            sender: signer.address().to_string(),
            sequence_number: sequence_number.to_string(),
            max_gas_amount: MAX_GAS_AMOUNT.to_string(),
            gas_unit_price: GAS_UNIT_PRICE.to_string(),
            expiration_timestamp_secs: expiration.to_string(),
            payload,
        };

        let url = format!("{}/transactions/encode_submission", self.base_url);
        let signing_message: String =
            check(self.http.post(url).json(&request).send().await?).await?;
        let message_bytes = hex::decode(signing_message.trim_start_matches("0x"))
            .map_err(|e| ClientError::Encoding(format!("bad signing message: {}", e)))?;

        let signature = signer.sign(&message_bytes);
        let signed = SignedTransactionRequest {
            request,
            signature: TransactionSignature::ed25519(
                signer.public_key_hex(),
                format!("0x{}", hex::encode(signature)),
            ),
        };

        let url = format!("{}/transactions", self.base_url);
        let pending: PendingTransaction =
            check(self.http.post(url).json(&signed).send().await?).await?;

        tracing::debug!(
            sender = %signer.address(),
            function = %signed.request.payload.function,
            hash = %pending.hash,
            "Transaction submitted"
        );

        Ok(pending.hash)
    }

    /// Block until the transaction is executed, polling `by_hash`.
    ///
    /// Returns immediately on an already-confirmed hash. An on-chain abort
    /// surfaces as `TransactionFailed` with the VM status; exhausting the
    /// poll budget surfaces as `Timeout`.
    pub async fn wait_for_transaction(&self, hash: &str) -> ClientResult<()> {
        let url = format!("{}/transactions/by_hash/{}", self.base_url, hash);

        for _ in 0..MAX_POLL_SECS {
            let response = self.http.get(&url).send().await?;
            // 404 means the node has not seen the transaction yet
            if response.status().as_u16() != 404 {
                let info: TransactionInfo = check(response).await?;
                if !info.is_pending() {
                    return match info.success {
                        Some(true) => Ok(()),
                        _ => Err(ClientError::TransactionFailed {
                            hash: hash.to_string(),
                            vm_status: info
                                .vm_status
                                .unwrap_or_else(|| "unknown VM status".to_string()),
                        }),
                    };
                }
            }
            sleep(POLL_INTERVAL).await;
        }

        Err(ClientError::Timeout {
            hash: hash.to_string(),
            secs: MAX_POLL_SECS,
        })
    }
}

impl std::fmt::Debug for RestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Deserialize a successful response, or map a non-success status to an
/// API error carrying the node's message.
pub(crate) async fn check<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiErrorBody>(&body)
            .map(|e| e.message)
            .unwrap_or(body);
        return Err(ClientError::Api {
            status: status.as_u16(),
            message,
        });
    }
    Ok(response.json().await?)
}
