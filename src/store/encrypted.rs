//! AEAD-encrypted single-slot token persistence.

use std::path::PathBuf;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chacha20poly1305::aead::{Aead, AeadCore, OsRng};
use chacha20poly1305::{ChaCha20Poly1305, KeyInit, Nonce};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::Config;

use super::keystore::{KeyProvider, KeyringKeyProvider};
use super::{StoreError, TokenStore};

/// ChaCha20-Poly1305 nonce length in bytes; the nonce is prepended to the
/// ciphertext inside the record.
const NONCE_LEN: usize = 12;

/// The persisted slot: base64 of `nonce || ciphertext`.
#[derive(Debug, Serialize, Deserialize)]
struct EncryptedTokenRecord {
    value: String,
}

/// Token store encrypting the session token before it reaches disk.
///
/// A fresh random nonce is used per save, and the record is written to a
/// temp file then renamed into place, so a reader observes either the old
/// record or the new one, never a partial write.
pub struct EncryptedTokenStore<K = KeyringKeyProvider> {
    keys: K,
    path: PathBuf,
}

impl EncryptedTokenStore<KeyringKeyProvider> {
    /// Build the production store: key in the OS keychain, record at the
    /// configured token path.
    pub fn from_config(config: &Config) -> Result<Self, StoreError> {
        Ok(Self {
            keys: KeyringKeyProvider::new(&config.keyring_service)?,
            path: config.token_path.clone(),
        })
    }
}

impl<K: KeyProvider> EncryptedTokenStore<K> {
    /// Build a store with an explicit key provider and record path.
    pub fn with_key_provider(keys: K, path: impl Into<PathBuf>) -> Self {
        Self {
            keys,
            path: path.into(),
        }
    }
}

impl<K: KeyProvider> TokenStore for EncryptedTokenStore<K> {
    fn save(&self, token: &str) -> Result<(), StoreError> {
        let key = self.keys.key()?;
        let cipher = ChaCha20Poly1305::new(&key);
        let nonce = ChaCha20Poly1305::generate_nonce(&mut OsRng);
        let ciphertext = cipher
            .encrypt(&nonce, token.as_bytes())
            .map_err(|_| StoreError::EncryptFailed)?;

        let mut blob = nonce.to_vec();
        blob.extend_from_slice(&ciphertext);
        let record = EncryptedTokenRecord {
            value: BASE64.encode(&blob),
        };
        let contents = serde_json::to_string(&record).map_err(std::io::Error::from)?;

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        // Write-then-rename keeps the previous record intact on failure.
        let tmp = self.path.with_extension("tmp");
        std::fs::write(&tmp, contents)?;
        std::fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), "Session token persisted");
        Ok(())
    }

    fn load(&self) -> Result<String, StoreError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Err(StoreError::Missing),
            Err(e) => return Err(StoreError::Io(e)),
        };

        let record: EncryptedTokenRecord =
            serde_json::from_str(&contents).map_err(|_| StoreError::DecryptFailed)?;
        let blob = BASE64
            .decode(record.value)
            .map_err(|_| StoreError::DecryptFailed)?;
        if blob.len() < NONCE_LEN {
            return Err(StoreError::DecryptFailed);
        }
        let (nonce, ciphertext) = blob.split_at(NONCE_LEN);

        let key = self.keys.key()?;
        let cipher = ChaCha20Poly1305::new(&key);
        let plaintext = cipher
            .decrypt(Nonce::from_slice(nonce), ciphertext)
            .map_err(|_| StoreError::DecryptFailed)?;

        String::from_utf8(plaintext).map_err(|_| StoreError::DecryptFailed)
    }

    fn clear(&self) -> Result<(), StoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::Io(e)),
        }
    }
}
