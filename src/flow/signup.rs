//! Sign-up flow: validate -> resolve timezone -> remote sign-up -> persist
//! token.

use tracing::error;

use crate::api::{AuthApi, RemoteError};
use crate::store::TokenStore;
use crate::timezone::TimezoneProvider;
use crate::validation::{
    validate_confirm_password, validate_email, validate_password, ValidationResult,
};

use super::{EMAIL_ALREADY_USED_MESSAGE, GENERIC_ERROR_MESSAGE};

/// Terminal result of one sign-up attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignUpOutcome {
    pub email: ValidationResult,
    pub password: ValidationResult,
    pub confirm_password: ValidationResult,
    pub status: SignUpStatus,
}

impl SignUpOutcome {
    pub fn succeeded(&self) -> bool {
        self.status == SignUpStatus::Success
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignUpStatus {
    /// Account created, token persisted; the user is logged in.
    Success,
    /// At least one field failed validation; nothing left the device.
    InvalidFields,
    /// The local timezone identifier could not be resolved.
    TimezoneUnavailable,
    /// The service rejected the sign-up because the email is registered.
    EmailAlreadyUsed,
    /// The service responded successfully but returned no token.
    NullToken,
    /// Network failure, timeout, or unexpected service error.
    ServiceError,
    /// The token was issued but could not be persisted; the user is not
    /// logged in.
    SaveTokenError,
}

impl SignUpStatus {
    /// User-facing alert for this status, if one should be shown.
    pub fn alert_message(&self) -> Option<&'static str> {
        match self {
            SignUpStatus::Success | SignUpStatus::InvalidFields => None,
            SignUpStatus::EmailAlreadyUsed => Some(EMAIL_ALREADY_USED_MESSAGE),
            SignUpStatus::TimezoneUnavailable
            | SignUpStatus::NullToken
            | SignUpStatus::ServiceError
            | SignUpStatus::SaveTokenError => Some(GENERIC_ERROR_MESSAGE),
        }
    }
}

/// Orchestrates one sign-up attempt. Holds no state between invocations.
pub struct SignUpFlow<A, S, T> {
    api: A,
    store: S,
    timezone: T,
}

impl<A: AuthApi, S: TokenStore, T: TimezoneProvider> SignUpFlow<A, S, T> {
    pub fn new(api: A, store: S, timezone: T) -> Self {
        Self {
            api,
            store,
            timezone,
        }
    }

    pub async fn run(&self, email: &str, password: &str, confirm_password: &str) -> SignUpOutcome {
        let email_result = validate_email(email);
        let password_result = validate_password(password);
        let confirm_result = validate_confirm_password(password, confirm_password);

        // Validation strictly gates the remaining stages.
        if !email_result.is_valid() || !password_result.is_valid() || !confirm_result.is_valid() {
            return self.outcome(
                email_result,
                password_result,
                confirm_result,
                SignUpStatus::InvalidFields,
            );
        }

        // Sign-up requests carry the client's timezone so the service can
        // schedule reminders in local time.
        let timezone = match self.timezone.local_timezone() {
            Ok(timezone) => timezone,
            Err(e) => {
                error!(error = %e, "Could not resolve timezone for sign-up");
                return self.outcome(
                    email_result,
                    password_result,
                    confirm_result,
                    SignUpStatus::TimezoneUnavailable,
                );
            }
        };

        let status = match self.api.sign_up(email, password, &timezone).await {
            Ok(token) => match self.store.save(&token) {
                Ok(()) => SignUpStatus::Success,
                Err(e) => {
                    error!(error = %e, "Failed to persist session token after sign-up");
                    SignUpStatus::SaveTokenError
                }
            },
            Err(RemoteError::Rejected) => SignUpStatus::EmailAlreadyUsed,
            Err(RemoteError::NullToken) => {
                error!("Sign-up response contained no token");
                SignUpStatus::NullToken
            }
            Err(e) => {
                error!(error = %e, "Sign-up request failed");
                SignUpStatus::ServiceError
            }
        };

        self.outcome(email_result, password_result, confirm_result, status)
    }

    fn outcome(
        &self,
        email: ValidationResult,
        password: ValidationResult,
        confirm_password: ValidationResult,
        status: SignUpStatus,
    ) -> SignUpOutcome {
        SignUpOutcome {
            email,
            password,
            confirm_password,
            status,
        }
    }
}
