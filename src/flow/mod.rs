//! Flow orchestrators for login and sign-up.
//!
//! Each flow is a stateless pipeline invoked once per user action:
//! validation gates the remote call, the remote call gates persistence, and
//! every terminal outcome carries the per-field validation results so the
//! adapter can re-render field state no matter which stage failed.

pub mod login;
pub mod signup;

pub use login::{LoginFlow, LoginOutcome, LoginStatus};
pub use signup::{SignUpFlow, SignUpOutcome, SignUpStatus};

/// Alert shown when the login credentials are rejected by the service.
pub const INCORRECT_CREDENTIALS_MESSAGE: &str = "Incorrect email or password. Please try again.";

/// Alert shown when sign-up is rejected because the email is taken.
pub const EMAIL_ALREADY_USED_MESSAGE: &str =
    "This email address is already in use. Please try another one.";

/// Alert shown for every other non-validation failure.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred. Please try again later.";
