//! Encrypted session token storage.
//!
//! The session token issued by the service is the only credential this
//! client persists. It is stored as a single record, encrypted with
//! ChaCha20-Poly1305; the encryption key lives in the OS keychain and is
//! generated on first use. The plaintext token never touches disk.

pub mod encrypted;
pub mod keystore;

pub use encrypted::EncryptedTokenStore;
pub use keystore::{KeyProvider, KeyringKeyProvider};

use thiserror::Error;

/// Failures of the credential store. All cryptographic and I/O problems
/// surface here as values; callers decide whether to retry or report.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No token record exists.
    #[error("no session token is stored")]
    Missing,

    /// The record exists but could not be decoded or its authentication
    /// tag did not verify (tampering, or a different key).
    #[error("stored session token could not be decrypted")]
    DecryptFailed,

    /// Encrypting the token failed.
    #[error("session token could not be encrypted")]
    EncryptFailed,

    /// The keychain entry holding the encryption key is malformed.
    #[error("stored encryption key is malformed")]
    InvalidKey,

    #[error("keystore error: {0}")]
    Keystore(#[from] keyring::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Persistence seam for the session token.
pub trait TokenStore {
    /// Encrypt and persist `token`, replacing any prior value. The previous
    /// record stays intact if this fails partway.
    fn save(&self, token: &str) -> Result<(), StoreError>;

    /// Decrypt and return the persisted token.
    fn load(&self) -> Result<String, StoreError>;

    /// Remove the persisted token. Clearing an empty store is not an error.
    fn clear(&self) -> Result<(), StoreError>;
}
