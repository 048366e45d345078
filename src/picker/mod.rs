//! Date-time picker behavior for the expiration field
//!
//! The picker is split into the pieces a host can consume independently:
//!
//! - [`config`] - the option set a picker is initialized with
//! - [`format`] - the fixed display format for expiration values
//! - [`predicate`] - per-candidate disable hooks
//! - [`state`] - candidate classification and the committed selection

pub mod config;
pub mod format;
pub mod predicate;
pub mod state;

pub use config::PickerConfig;
pub use format::{format_value, parse_value, FormatError, DISPLAY_FORMAT};
pub use predicate::{past, DisablePredicate};
pub use state::{Classification, PickerError, PickerState, Segment};

/// Picker initialization seam consumed by the field binder.
///
/// A host implements this to materialize picker behavior for the field
/// matching `selector`. The binder only ever talks to this trait, so tests
/// can substitute a recording double.
pub trait PickerInit {
    /// Bind picker behavior to the field matching `selector`.
    fn init(&mut self, selector: &str, config: PickerConfig);
}
