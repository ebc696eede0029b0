//! Login flow: validate -> remote login -> persist token.

use tracing::error;

use crate::api::{AuthApi, RemoteError};
use crate::store::TokenStore;
use crate::validation::{validate_email, validate_password, ValidationResult};

use super::{GENERIC_ERROR_MESSAGE, INCORRECT_CREDENTIALS_MESSAGE};

/// Terminal result of one login attempt. The field results are populated in
/// every case so the adapter can always re-render field state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoginOutcome {
    pub email: ValidationResult,
    pub password: ValidationResult,
    pub status: LoginStatus,
}

impl LoginOutcome {
    pub fn succeeded(&self) -> bool {
        self.status == LoginStatus::Success
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginStatus {
    /// Token obtained and persisted; the user is logged in.
    Success,
    /// At least one field failed validation; nothing left the device.
    InvalidFields,
    /// The service rejected the credentials.
    IncorrectCredentials,
    /// The service responded successfully but returned no token.
    NullToken,
    /// Network failure, timeout, or unexpected service error.
    ServiceError,
    /// The token was issued but could not be persisted; the user is not
    /// logged in.
    SaveTokenError,
}

impl LoginStatus {
    /// User-facing alert for this status, if one should be shown. Field
    /// validation feedback is rendered per-field, not as an alert.
    pub fn alert_message(&self) -> Option<&'static str> {
        match self {
            LoginStatus::Success | LoginStatus::InvalidFields => None,
            LoginStatus::IncorrectCredentials => Some(INCORRECT_CREDENTIALS_MESSAGE),
            LoginStatus::NullToken | LoginStatus::ServiceError | LoginStatus::SaveTokenError => {
                Some(GENERIC_ERROR_MESSAGE)
            }
        }
    }
}

/// Orchestrates one login attempt from submitted credentials to a terminal
/// outcome. Holds no state between invocations.
pub struct LoginFlow<A, S> {
    api: A,
    store: S,
}

impl<A: AuthApi, S: TokenStore> LoginFlow<A, S> {
    pub fn new(api: A, store: S) -> Self {
        Self { api, store }
    }

    pub async fn run(&self, email: &str, password: &str) -> LoginOutcome {
        let email_result = validate_email(email);
        let password_result = validate_password(password);

        // Validation strictly gates the remote stage.
        if !email_result.is_valid() || !password_result.is_valid() {
            return LoginOutcome {
                email: email_result,
                password: password_result,
                status: LoginStatus::InvalidFields,
            };
        }

        let status = match self.api.login(email, password).await {
            Ok(token) => match self.store.save(&token) {
                Ok(()) => LoginStatus::Success,
                Err(e) => {
                    error!(error = %e, "Failed to persist session token after login");
                    LoginStatus::SaveTokenError
                }
            },
            Err(RemoteError::Rejected) => LoginStatus::IncorrectCredentials,
            Err(RemoteError::NullToken) => {
                error!("Login response contained no token");
                LoginStatus::NullToken
            }
            Err(e) => {
                error!(error = %e, "Login request failed");
                LoginStatus::ServiceError
            }
        };

        LoginOutcome {
            email: email_result,
            password: password_result,
            status,
        }
    }
}
