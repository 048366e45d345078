//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// Field identifiers
pub const EXPIRATION_FIELD_ID: &str = "expiration_date";
pub const SECRET_FIELD_ID: &str = "secret";
pub const CONTENT_FIELD_ID: &str = "content";

// Field labels
pub const LABEL_SECRET: &str = "Secret";
pub const LABEL_CONTENT: &str = "Content";
pub const LABEL_EXPIRATION: &str = "Expire";

// Success Messages
pub const SUCCESS_NOTE_COMPOSED: &str = "✅ Note composed";

// Status Messages
pub const STATUS_CANDIDATE_UNAVAILABLE: &str = "⛔ in the past";

// Event loop timing
pub const TICK_INTERVAL_DEFAULT_MS: u64 = 100;
pub const TICK_INTERVAL_MIN_MS: u64 = 10;
pub const TICK_INTERVAL_MAX_MS: u64 = 1000;
