//! Wire types for the node REST API.
//!
//! Everything here mirrors the JSON shapes the node accepts and produces.
//! Amounts and sequence numbers travel as decimal strings, addresses and
//! byte blobs as `0x`-prefixed hex.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An entry-function transaction payload: target function plus ordered
/// type and value arguments. Constructed fresh per call, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryFunctionPayload {
    #[serde(rename = "type")]
    pub kind: String,
    /// Fully qualified function id, e.g. `0x1::managed_coin::mint`.
    pub function: String,
    /// Generic type arguments, as fully qualified type tags.
    pub type_arguments: Vec<String>,
    /// Value arguments, already JSON-encoded per the node's conventions.
    pub arguments: Vec<Value>,
}

impl EntryFunctionPayload {
    /// Build a payload for `module::function` with the given arguments.
    pub fn entry(
        module: &str,
        function: &str,
        type_arguments: Vec<String>,
        arguments: Vec<Value>,
    ) -> Self {
        Self {
            kind: "entry_function_payload".to_string(),
            function: format!("{}::{}", module, function),
            type_arguments,
            arguments,
        }
    }
}

/// The unsigned half of a transaction submission.
#[derive(Debug, Clone, Serialize)]
pub struct UserTransactionRequest {
    pub sender: String,
    pub sequence_number: String,
    pub max_gas_amount: String,
    pub gas_unit_price: String,
    pub expiration_timestamp_secs: String,
    pub payload: EntryFunctionPayload,
}

/// A transaction request with its ed25519 signature attached.
#[derive(Debug, Clone, Serialize)]
pub struct SignedTransactionRequest {
    #[serde(flatten)]
    pub request: UserTransactionRequest,
    pub signature: TransactionSignature,
}

/// Single-signer ed25519 transaction signature.
#[derive(Debug, Clone, Serialize)]
pub struct TransactionSignature {
    #[serde(rename = "type")]
    pub kind: String,
    pub public_key: String,
    pub signature: String,
}

impl TransactionSignature {
    pub fn ed25519(public_key: String, signature: String) -> Self {
        Self {
            kind: "ed25519_signature".to_string(),
            public_key,
            signature,
        }
    }
}

/// Account state returned by `GET /accounts/{address}`.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountData {
    pub sequence_number: String,
}

/// Response to a transaction submission.
#[derive(Debug, Clone, Deserialize)]
pub struct PendingTransaction {
    pub hash: String,
}

/// Transaction state returned by `GET /transactions/by_hash/{hash}`.
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionInfo {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub vm_status: Option<String>,
}

impl TransactionInfo {
    /// Still in the mempool, not yet executed.
    pub fn is_pending(&self) -> bool {
        self.kind == "pending_transaction"
    }
}

/// Error body the node attaches to non-success responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_entry_payload_wire_shape() {
        let payload = EntryFunctionPayload::entry(
            "0x1::managed_coin",
            "mint",
            vec!["0x1::test_coins::ACoin".to_string()],
            vec![json!("0xabc"), json!("5000000")],
        );

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "type": "entry_function_payload",
                "function": "0x1::managed_coin::mint",
                "type_arguments": ["0x1::test_coins::ACoin"],
                "arguments": ["0xabc", "5000000"],
            })
        );
    }

    #[test]
    fn test_signed_request_flattens() {
        let request = UserTransactionRequest {
            sender: "0x1".to_string(),
            sequence_number: "0".to_string(),
            max_gas_amount: "100000".to_string(),
            gas_unit_price: "100".to_string(),
            expiration_timestamp_secs: "9999".to_string(),
            payload: EntryFunctionPayload::entry("0x1::m", "f", vec![], vec![]),
        };
        let signed = SignedTransactionRequest {
            request,
            signature: TransactionSignature::ed25519("0xpk".to_string(), "0xsig".to_string()),
        };

        let value = serde_json::to_value(&signed).unwrap();
        // Request fields sit at the top level next to the signature
        assert_eq!(value["sender"], "0x1");
        assert_eq!(value["signature"]["type"], "ed25519_signature");
        assert_eq!(value["signature"]["public_key"], "0xpk");
    }

    #[test]
    fn test_transaction_info_pending() {
        let info: TransactionInfo =
            serde_json::from_value(json!({"type": "pending_transaction"})).unwrap();
        assert!(info.is_pending());
        assert!(info.success.is_none());

        let info: TransactionInfo = serde_json::from_value(json!({
            "type": "user_transaction",
            "success": true,
            "vm_status": "Executed successfully",
        }))
        .unwrap();
        assert!(!info.is_pending());
        assert_eq!(info.success, Some(true));
    }
}
