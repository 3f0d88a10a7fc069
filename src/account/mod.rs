//! Account key management and address derivation.
//!
//! # Security
//! - Private keys are loaded ONLY from environment variables
//! - Keys are never logged or serialized

use std::fmt;
use std::str::FromStr;

use ed25519_dalek::{Signer, SigningKey, VerifyingKey};
use rand::rngs::OsRng;
use sha3::{Digest, Sha3_256};

use crate::error::{ClientError, ClientResult};

/// Environment variable name for the admin private key.
pub const PRIVATE_KEY_ENV_VAR: &str = "ESCROW_DEMO_PRIVATE_KEY";

/// Authentication scheme byte appended to the public key before hashing.
/// Single-signer ed25519 accounts use scheme 0.
const SINGLE_SIGNER_SCHEME: u8 = 0x00;

/// A 32-byte on-chain account address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccountAddress([u8; 32]);

impl AccountAddress {
    /// Derive the address of a single-signer account from its public key:
    /// SHA3-256 over the public key bytes followed by the scheme byte.
    pub fn from_public_key(public_key: &VerifyingKey) -> Self {
        let mut hasher = Sha3_256::new();
        hasher.update(public_key.as_bytes());
        hasher.update([SINGLE_SIGNER_SCHEME]);
        Self(hasher.finalize().into())
    }

    /// Raw address bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl From<[u8; 32]> for AccountAddress {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl FromStr for AccountAddress {
    type Err = ClientError;

    /// Parse a hex address, with or without `0x` prefix. Short addresses
    /// (e.g. `0x1`) are left-padded with zeros to 32 bytes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex_str = s.strip_prefix("0x").unwrap_or(s);
        if hex_str.is_empty() || hex_str.len() > 64 {
            return Err(ClientError::Key(format!("invalid address '{}'", s)));
        }
        let padded = format!("{:0>64}", hex_str);
        let bytes = hex::decode(&padded)
            .map_err(|e| ClientError::Key(format!("invalid address '{}': {}", s, e)))?;
        let mut out = [0u8; 32];
        out.copy_from_slice(&bytes);
        Ok(Self(out))
    }
}

/// A locally held ed25519 key pair with its derived address.
pub struct LocalAccount {
    signing_key: SigningKey,
    address: AccountAddress,
}

impl LocalAccount {
    /// Generate a fresh account with an OS-random key.
    pub fn generate() -> Self {
        let signing_key = SigningKey::generate(&mut OsRng);
        let address = AccountAddress::from_public_key(&signing_key.verifying_key());
        Self {
            signing_key,
            address,
        }
    }

    /// Create an account from a hex-encoded private key string.
    ///
    /// # Security
    /// The private key is parsed and stored in memory only. It is never
    /// logged.
    pub fn from_private_key(private_key_hex: &str) -> ClientResult<Self> {
        let key_hex = private_key_hex.strip_prefix("0x").unwrap_or(private_key_hex);
        let key_bytes: [u8; 32] = hex::decode(key_hex)
            .map_err(|e| ClientError::Key(format!("invalid private key hex: {}", e)))?
            .try_into()
            .map_err(|_| ClientError::Key("private key must be 32 bytes".to_string()))?;

        let signing_key = SigningKey::from_bytes(&key_bytes);
        let address = AccountAddress::from_public_key(&signing_key.verifying_key());

        tracing::info!(address = %address, "Account loaded");

        Ok(Self {
            signing_key,
            address,
        })
    }

    /// Load the admin account from `ESCROW_DEMO_PRIVATE_KEY`.
    pub fn from_env() -> ClientResult<Self> {
        let private_key = std::env::var(PRIVATE_KEY_ENV_VAR).map_err(|_| {
            ClientError::Key(format!(
                "Environment variable {} not set",
                PRIVATE_KEY_ENV_VAR
            ))
        })?;
        Self::from_private_key(&private_key)
    }

    /// The account's derived address.
    pub fn address(&self) -> AccountAddress {
        self.address
    }

    /// Hex-encoded public key with `0x` prefix, as the node expects it in
    /// transaction signatures.
    pub fn public_key_hex(&self) -> String {
        format!("0x{}", hex::encode(self.signing_key.verifying_key().as_bytes()))
    }

    /// Sign a message, returning the 64-byte signature.
    pub fn sign(&self, message: &[u8]) -> [u8; 64] {
        self.signing_key.sign(message).to_bytes()
    }
}

impl fmt::Debug for LocalAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalAccount")
            .field("address", &self.address.to_string())
            .finish()
    }
}
