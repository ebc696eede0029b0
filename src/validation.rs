//! Field validators for submitted credentials.
//!
//! All validators are pure functions: no I/O, no side effects, and the same
//! input always yields the same result. Flows run every applicable validator
//! before touching the network so the caller can annotate each failing field
//! individually.

use std::sync::LazyLock;

use regex::Regex;

/// Minimum password length accepted by the service
const MIN_PASSWORD_LENGTH: usize = 8;

/// Email grammar: 1-256 local-part chars, then `@`, then dash-separated
/// domain labels with at least one dot-separated suffix label.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9+._%-]{1,256}@[A-Za-z0-9][A-Za-z0-9-]{0,64}(?:\.[A-Za-z0-9][A-Za-z0-9-]{0,25})+$")
        .expect("email pattern is valid")
});

/// Per-field validation verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid,
}

impl ValidationResult {
    pub fn is_valid(self) -> bool {
        matches!(self, ValidationResult::Valid)
    }
}

/// Validate an email address against the service's accepted grammar.
pub fn validate_email(email: &str) -> ValidationResult {
    if EMAIL_REGEX.is_match(email) {
        ValidationResult::Valid
    } else {
        ValidationResult::Invalid
    }
}

/// Validate a password. The service only requires a minimum length.
pub fn validate_password(password: &str) -> ValidationResult {
    if password.chars().count() >= MIN_PASSWORD_LENGTH {
        ValidationResult::Valid
    } else {
        ValidationResult::Invalid
    }
}

/// Validate the sign-up confirmation field against the password.
pub fn validate_confirm_password(password: &str, confirm_password: &str) -> ValidationResult {
    if password == confirm_password {
        ValidationResult::Valid
    } else {
        ValidationResult::Invalid
    }
}
