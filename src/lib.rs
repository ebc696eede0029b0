//! Authentication core for the habit tracker client.
//!
//! This crate provides:
//! - `LoginFlow` / `SignUpFlow`: orchestrators that take submitted
//!   credentials through validation, the remote auth service, and token
//!   persistence, returning a single tagged outcome per attempt
//! - `EncryptedTokenStore`: ChaCha20-Poly1305 encrypted storage of the
//!   session token, with the key held in the OS keychain
//! - `AuthClient`: the HTTP client for the login and sign-up endpoints
//!
//! The presentation layer is expected to wire the collaborators together
//! with [`Config`], invoke one flow per user action, and map the returned
//! outcome to field and alert state. The crate holds no mutable state
//! between invocations.

pub mod api;
pub mod config;
pub mod flow;
pub mod store;
pub mod timezone;
pub mod validation;

pub use api::{AuthApi, AuthClient, RemoteError};
pub use config::Config;
pub use flow::{LoginFlow, LoginOutcome, LoginStatus, SignUpFlow, SignUpOutcome, SignUpStatus};
pub use store::{EncryptedTokenStore, KeyProvider, KeyringKeyProvider, StoreError, TokenStore};
pub use timezone::{SystemTimezone, TimezoneError, TimezoneProvider};
pub use validation::ValidationResult;
