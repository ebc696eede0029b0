//! Remote auth service client.
//!
//! `AuthApi` is the seam the flow orchestrators depend on; `AuthClient` is
//! the reqwest-backed implementation talking to the habit tracker service.

pub mod client;
pub mod error;

pub use client::AuthClient;
pub use error::RemoteError;

use async_trait::async_trait;

/// Remote authentication operations. One network attempt per call; retry
/// policy, if any, belongs to the caller.
#[async_trait]
pub trait AuthApi {
    /// Log an existing user in, returning the session token.
    async fn login(&self, email: &str, password: &str) -> Result<String, RemoteError>;

    /// Register a new user, returning the session token. `timezone` is the
    /// client's IANA zone identifier.
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        timezone: &str,
    ) -> Result<String, RemoteError>;
}
