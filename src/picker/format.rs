//! The fixed display format for expiration values

use chrono::NaiveDateTime;
use thiserror::Error;

/// Display format used for expiration values: `DD-MM-YYYY, HH:MM:SS`.
///
/// Two-digit day and month, four-digit year, zero-padded 24-hour time with
/// seconds. This format is fixed; it is not exposed through configuration.
pub const DISPLAY_FORMAT: &str = "%d-%m-%Y, %H:%M:%S";

/// Error raised when a raw string does not match the display format.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("Expiration date has invalid format (expected: 'd-m-Y, H:M:S')")]
    InvalidFormat,
}

/// Render a value with the fixed display format.
pub fn format_value(value: NaiveDateTime) -> String {
    value.format(DISPLAY_FORMAT).to_string()
}

/// Parse a raw string against the fixed display format.
pub fn parse_value(raw: &str) -> Result<NaiveDateTime, FormatError> {
    NaiveDateTime::parse_from_str(raw.trim(), DISPLAY_FORMAT).map_err(|_| FormatError::InvalidFormat)
}
