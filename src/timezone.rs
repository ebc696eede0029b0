//! Local timezone resolution for sign-up requests.
//!
//! The sign-up endpoint requires the client's IANA zone identifier so the
//! service can schedule habit reminders in local time.

use thiserror::Error;

#[derive(Debug, Error)]
#[error("could not resolve local timezone: {0}")]
pub struct TimezoneError(pub String);

/// Source of the local timezone identifier. A trait so flows can be tested
/// without depending on the host environment.
pub trait TimezoneProvider {
    /// Resolve the local IANA timezone identifier, e.g. `America/New_York`.
    fn local_timezone(&self) -> Result<String, TimezoneError>;
}

/// Resolves the timezone from the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimezone;

impl TimezoneProvider for SystemTimezone {
    fn local_timezone(&self) -> Result<String, TimezoneError> {
        iana_time_zone::get_timezone().map_err(|e| TimezoneError(e.to_string()))
    }
}
