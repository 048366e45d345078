//! Client-side field validation
//!
//! Validation mirrors what the picker already enforces interactively: the
//! expiration value must parse with the fixed display format and must not
//! already lie in the past when it is checked.

use chrono::NaiveDateTime;
use thiserror::Error;

use crate::clock::Clock;
use crate::picker::format::{parse_value, FormatError};

/// Minimum accepted secret length.
pub const SECRET_MINIMUM_LENGTH: usize = 8;

/// Maximum accepted content length.
pub const CONTENT_MAXIMUM_LENGTH: usize = 500;

/// A field-level validation failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Secret is too short (minimum length: 8)")]
    SecretTooShort,
    #[error("Secret contains invalid characters (only ASCII printable characters are allowed)")]
    SecretNotPrintable,
    #[error("Content is too long (maximum length: 500)")]
    ContentTooLong,
    #[error("Expiration date has invalid format (expected: 'd-m-Y, H:M:S')")]
    ExpirationInvalidFormat,
    #[error("Expiration date is already expired")]
    ExpirationExpired,
}

/// Whether `date` lies strictly before `current_date`.
///
/// Strict comparison: a date equal to the current second has not expired.
pub fn date_expired(date: NaiveDateTime, current_date: NaiveDateTime) -> bool {
    date < current_date
}

/// Validate the secret field: length and printability.
pub fn validate_secret(secret: &str) -> Result<(), ValidationError> {
    if secret.chars().count() < SECRET_MINIMUM_LENGTH {
        return Err(ValidationError::SecretTooShort);
    }

    if !secret.chars().all(|c| c.is_ascii_graphic() || c.is_ascii_whitespace()) {
        return Err(ValidationError::SecretNotPrintable);
    }

    Ok(())
}

/// Validate the content field: length only.
pub fn validate_content(content: &str) -> Result<(), ValidationError> {
    if content.chars().count() > CONTENT_MAXIMUM_LENGTH {
        return Err(ValidationError::ContentTooLong);
    }

    Ok(())
}

/// Validate the expiration field: format, then expiry against the clock's
/// reading at validation time.
pub fn validate_expiration(raw: &str, clock: &dyn Clock) -> Result<NaiveDateTime, ValidationError> {
    let value = parse_value(raw).map_err(|_: FormatError| ValidationError::ExpirationInvalidFormat)?;

    if date_expired(value, clock.now()) {
        return Err(ValidationError::ExpirationExpired);
    }

    Ok(value)
}
