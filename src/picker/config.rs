//! Picker configuration
//!
//! The option set mirrors what a host hands to [`crate::picker::PickerInit`]
//! when binding picker behavior to a field.

use std::fmt;
use std::sync::Arc;

use crate::clock::Clock;
use crate::picker::format::DISPLAY_FORMAT;
use crate::picker::predicate::{self, DisablePredicate};

/// Options a picker is initialized with.
pub struct PickerConfig {
    /// Render embedded in the form flow rather than as a popup.
    pub inline: bool,
    /// Display and enter the time portion in 24-hour format.
    pub time_24hr: bool,
    /// Allow picking a time of day, not just a date.
    pub enable_time: bool,
    /// Include seconds in the time granularity.
    pub enable_seconds: bool,
    /// strftime-style display format for the field value.
    pub date_format: &'static str,
    /// Per-candidate disable hooks; a candidate is disabled if any matches.
    pub disable: Vec<DisablePredicate>,
}

impl PickerConfig {
    /// The fixed configuration used for the expiration field: an inline
    /// 24-hour picker with seconds granularity that rejects past values.
    pub fn expiry(clock: Arc<dyn Clock>) -> Self {
        Self {
            inline: true,
            time_24hr: true,
            enable_time: true,
            enable_seconds: true,
            date_format: DISPLAY_FORMAT,
            disable: vec![predicate::past(clock)],
        }
    }

    /// Whether `candidate` is rejected by any configured disable hook.
    pub fn is_disabled(&self, candidate: chrono::NaiveDateTime) -> bool {
        self.disable.iter().any(|predicate| predicate(candidate))
    }
}

impl Default for PickerConfig {
    /// A date-only popup picker with no disable hooks.
    fn default() -> Self {
        Self {
            inline: false,
            time_24hr: false,
            enable_time: false,
            enable_seconds: false,
            date_format: "%d-%m-%Y",
            disable: Vec::new(),
        }
    }
}

impl fmt::Debug for PickerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PickerConfig")
            .field("inline", &self.inline)
            .field("time_24hr", &self.time_24hr)
            .field("enable_time", &self.enable_time)
            .field("enable_seconds", &self.enable_seconds)
            .field("date_format", &self.date_format)
            .field("disable", &format_args!("{} predicate(s)", self.disable.len()))
            .finish()
    }
}
