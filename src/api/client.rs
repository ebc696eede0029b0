//! HTTP client for the habit tracker auth endpoints.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{AuthApi, RemoteError};

/// HTTP request timeout in seconds.
/// 30s allows for slow service responses while failing fast enough for good UX.
const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct SignUpRequest<'a> {
    email: &'a str,
    password: &'a str,
    timezone: &'a str,
}

/// The token field is nullable in the service's schema; a null on an
/// otherwise successful response is reported as `RemoteError::NullToken`.
#[derive(Debug, Deserialize)]
struct AuthResponse {
    token: Option<String>,
}

/// Client for the auth endpoints.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct AuthClient {
    client: Client,
    base_url: String,
}

impl AuthClient {
    /// Create a client for the service at `base_url` (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Send one POST and map the response into the token or a `RemoteError`.
    async fn post_auth<B: Serialize>(&self, path: &str, body: &B) -> Result<String, RemoteError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, "Sending auth request");

        let response = self.client.post(&url).json(body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RemoteError::from_status(status, &body));
        }

        let auth: AuthResponse = response.json().await?;
        auth.token.ok_or(RemoteError::NullToken)
    }
}

#[async_trait]
impl AuthApi for AuthClient {
    async fn login(&self, email: &str, password: &str) -> Result<String, RemoteError> {
        self.post_auth("/api/login", &LoginRequest { email, password })
            .await
    }

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        timezone: &str,
    ) -> Result<String, RemoteError> {
        self.post_auth(
            "/api/signup",
            &SignUpRequest {
                email,
                password,
                timezone,
            },
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_login_returns_token_on_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/login"))
            .and(body_json(serde_json::json!({
                "email": "david.read@gmail.com",
                "password": "password123"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "token": "12345"
            })))
            .mount(&mock_server)
            .await;

        let client = AuthClient::new(mock_server.uri()).unwrap();
        let token = client.login("david.read@gmail.com", "password123").await;

        assert_eq!(token.unwrap(), "12345");
    }

    #[tokio::test]
    async fn test_login_maps_400_to_rejected() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/login"))
            .respond_with(ResponseTemplate::new(400))
            .mount(&mock_server)
            .await;

        let client = AuthClient::new(mock_server.uri()).unwrap();
        let result = client.login("david.read@gmail.com", "wrongpassword").await;

        assert!(matches!(result, Err(RemoteError::Rejected)));
    }

    #[tokio::test]
    async fn test_login_maps_null_token_to_contract_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "token": null
            })))
            .mount(&mock_server)
            .await;

        let client = AuthClient::new(mock_server.uri()).unwrap();
        let result = client.login("david.read@gmail.com", "password123").await;

        assert!(matches!(result, Err(RemoteError::NullToken)));
    }

    #[tokio::test]
    async fn test_login_maps_server_error_to_generic() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/login"))
            .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
            .mount(&mock_server)
            .await;

        let client = AuthClient::new(mock_server.uri()).unwrap();
        let result = client.login("david.read@gmail.com", "password123").await;

        match result {
            Err(RemoteError::Generic(msg)) => assert!(msg.contains("500")),
            other => panic!("expected Generic, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_sign_up_sends_timezone_and_returns_token() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/signup"))
            .and(body_json(serde_json::json!({
                "email": "david.read@gmail.com",
                "password": "password123",
                "timezone": "America/New_York"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "token": "67890"
            })))
            .mount(&mock_server)
            .await;

        let client = AuthClient::new(mock_server.uri()).unwrap();
        let token = client
            .sign_up("david.read@gmail.com", "password123", "America/New_York")
            .await;

        assert_eq!(token.unwrap(), "67890");
    }

    #[tokio::test]
    async fn test_sign_up_maps_400_to_rejected() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/signup"))
            .respond_with(ResponseTemplate::new(400).set_body_string("email already registered"))
            .mount(&mock_server)
            .await;

        let client = AuthClient::new(mock_server.uri()).unwrap();
        let result = client
            .sign_up("david.read@gmail.com", "password123", "America/New_York")
            .await;

        assert!(matches!(result, Err(RemoteError::Rejected)));
    }

    #[tokio::test]
    async fn test_client_makes_exactly_one_attempt() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/login"))
            .respond_with(ResponseTemplate::new(503))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = AuthClient::new(mock_server.uri()).unwrap();
        let result = client.login("david.read@gmail.com", "password123").await;

        assert!(matches!(result, Err(RemoteError::Generic(_))));
        // Mock expectation of exactly one request is verified on drop.
    }
}
