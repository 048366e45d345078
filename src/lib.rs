//! Termnote - a terminal composer for self-expiring notes
//!
//! This library provides a terminal-based form for writing a note that
//! carries an expiration date. The expiration field is bound to an inline
//! date-time picker that refuses any point in time that already lies in
//! the past, evaluated against the local wall clock each time a candidate
//! value is considered.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`binder`] - One-shot wiring of the picker onto the expiration field
//! * [`clock`] - Wall-clock access at second granularity
//! * [`config`] - Application configuration management
//! * [`form`] - Form element tree and client-side validation
//! * [`picker`] - Date-time picker configuration, classification and state
//! * [`ui`] - Terminal user interface components

/// One-shot binding of picker behavior onto the expiration field
pub mod binder;

/// Wall-clock access used by expiry checks
pub mod clock;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Form element tree and field validation
pub mod form;

/// File logging setup
pub mod logger;

/// Date-time picker behavior: configuration, format, predicates, state
pub mod picker;

/// Terminal user interface components and rendering
pub mod ui;

// Re-export the types most callers need
pub use binder::FieldBinder;
pub use clock::{Clock, SystemClock};
pub use picker::{PickerConfig, PickerInit, PickerState};
