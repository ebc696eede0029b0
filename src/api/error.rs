use reqwest::StatusCode;
use thiserror::Error;

/// Failure taxonomy for one remote auth attempt.
///
/// `Rejected` is the business-level refusal (wrong credentials on login,
/// email already registered on sign-up); the service signals it with a 400.
/// `NullToken` is a service contract violation: a successful response whose
/// token field is null. Everything else collapses into `Generic`.
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("request rejected by the service")]
    Rejected,

    #[error("service response contained no token")]
    NullToken,

    #[error("auth service failure: {0}")]
    Generic(String),
}

/// Maximum length for error response bodies in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

impl RemoteError {
    /// Truncate a response body to avoid logging excessive data
    fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            return body.to_string();
        }
        // The cut must land on a char boundary or slicing panics on
        // multibyte bodies.
        let mut cut = MAX_ERROR_BODY_LENGTH;
        while !body.is_char_boundary(cut) {
            cut -= 1;
        }
        format!(
            "{}... (truncated, {} total bytes)",
            &body[..cut],
            body.len()
        )
    }

    pub(crate) fn from_status(status: StatusCode, body: &str) -> Self {
        match status {
            StatusCode::BAD_REQUEST => RemoteError::Rejected,
            _ => RemoteError::Generic(format!("status {}: {}", status, Self::truncate_body(body))),
        }
    }
}

impl From<reqwest::Error> for RemoteError {
    fn from(e: reqwest::Error) -> Self {
        RemoteError::Generic(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_maps_bad_request_to_rejected() {
        assert!(matches!(
            RemoteError::from_status(StatusCode::BAD_REQUEST, "email in use"),
            RemoteError::Rejected
        ));
    }

    #[test]
    fn test_from_status_maps_other_statuses_to_generic() {
        for status in [
            StatusCode::UNAUTHORIZED,
            StatusCode::NOT_FOUND,
            StatusCode::INTERNAL_SERVER_ERROR,
            StatusCode::BAD_GATEWAY,
        ] {
            assert!(matches!(
                RemoteError::from_status(status, "oops"),
                RemoteError::Generic(_)
            ));
        }
    }

    #[test]
    fn test_generic_error_truncates_long_bodies() {
        let body = "x".repeat(2000);
        let RemoteError::Generic(msg) =
            RemoteError::from_status(StatusCode::INTERNAL_SERVER_ERROR, &body)
        else {
            panic!("expected Generic");
        };
        assert!(msg.contains("truncated, 2000 total bytes"));
        assert!(msg.len() < 700);
    }

    #[test]
    fn test_truncation_respects_char_boundaries_in_multibyte_bodies() {
        // 200 euro signs = 600 bytes; the length cutoff lands mid-char.
        let body = "\u{20ac}".repeat(200);
        let RemoteError::Generic(msg) =
            RemoteError::from_status(StatusCode::INTERNAL_SERVER_ERROR, &body)
        else {
            panic!("expected Generic");
        };
        assert!(msg.contains("truncated, 600 total bytes"));
        assert!(msg.contains('\u{20ac}'));
    }
}
