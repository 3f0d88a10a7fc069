//! Error definitions for the demo client.
//!
//! The transport layer is the only real failure source here: there is no
//! retry or recovery, every error propagates to the caller and aborts the
//! scenario.

use thiserror::Error;

/// Errors that can occur while talking to the node or faucet.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed before a response was produced.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The node answered with a non-success status.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The faucet rejected a funding request.
    #[error("Faucet error: {0}")]
    Faucet(String),

    /// The signing message from the node could not be decoded.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Invalid private key material or address string.
    #[error("Key error: {0}")]
    Key(String),

    /// Transaction executed on-chain but aborted.
    #[error("Transaction {hash} failed: {vm_status}")]
    TransactionFailed { hash: String, vm_status: String },

    /// Transaction was not confirmed within the poll budget.
    #[error("Transaction {hash} not confirmed after {secs} seconds")]
    Timeout { hash: String, secs: u64 },
}

impl ClientError {
    /// True when the node reported the requested entity as missing, e.g. a
    /// balance read for a coin type the account never registered.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::Api { status: 404, .. })
    }
}

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;
