//! Encryption key management backed by the OS keychain.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chacha20poly1305::aead::OsRng;
use chacha20poly1305::{ChaCha20Poly1305, Key, KeyInit};
use keyring::Entry;
use tracing::debug;

use super::StoreError;

/// Keychain entry name under which the token encryption key is stored
const KEY_ENTRY_USER: &str = "token-encryption-key";

/// Source of the token encryption key. The store never persists the key
/// itself; implementations own where it lives.
pub trait KeyProvider {
    /// Return the encryption key, creating one if none exists yet.
    fn key(&self) -> Result<Key, StoreError>;
}

/// Key provider backed by the platform keychain via the `keyring` crate.
/// The 256-bit key is generated on first use and stored base64-encoded.
pub struct KeyringKeyProvider {
    entry: Entry,
}

impl KeyringKeyProvider {
    pub fn new(service: &str) -> Result<Self, StoreError> {
        let entry = Entry::new(service, KEY_ENTRY_USER)?;
        Ok(Self { entry })
    }
}

impl KeyProvider for KeyringKeyProvider {
    fn key(&self) -> Result<Key, StoreError> {
        match self.entry.get_password() {
            Ok(encoded) => {
                let bytes = BASE64.decode(encoded).map_err(|_| StoreError::InvalidKey)?;
                if bytes.len() != 32 {
                    return Err(StoreError::InvalidKey);
                }
                Ok(*Key::from_slice(&bytes))
            }
            Err(keyring::Error::NoEntry) => {
                debug!("No token encryption key in keychain, generating one");
                let key = ChaCha20Poly1305::generate_key(&mut OsRng);
                self.entry.set_password(&BASE64.encode(key.as_slice()))?;
                Ok(key)
            }
            Err(e) => Err(StoreError::Keystore(e)),
        }
    }
}
