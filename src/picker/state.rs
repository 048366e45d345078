//! Picker state: the candidate cursor and the committed selection
//!
//! The state owns no rendering. It classifies candidates against the
//! configured disable hooks, steps the candidate cursor one calendar or
//! clock segment at a time, and guards the commit path so a selection can
//! never land on a disabled candidate.

use chrono::{Duration, Months, NaiveDateTime};
use thiserror::Error;

use crate::clock::Clock;
use crate::picker::config::PickerConfig;

/// Enabled/disabled classification of one candidate at one clock reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Selectable,
    Disabled,
}

/// The value segment the inline picker cursor is focused on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Day,
    Month,
    Year,
    Hour,
    Minute,
    Second,
}

impl Segment {
    /// Short label used by the UI when this segment has focus.
    pub fn label(self) -> &'static str {
        match self {
            Segment::Day => "day",
            Segment::Month => "month",
            Segment::Year => "year",
            Segment::Hour => "hour",
            Segment::Minute => "minute",
            Segment::Second => "second",
        }
    }
}

/// Error raised when a commit lands on a disabled candidate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PickerError {
    #[error("Expiration date is already expired")]
    AlreadyExpired,
}

/// Date-time picker state bound to a single field.
///
/// There is no default selection: a value only exists once the user commits
/// one, and commits are re-validated against the disable hooks at commit
/// time, not at bind time.
pub struct PickerState {
    field_id: String,
    config: PickerConfig,
    cursor: NaiveDateTime,
    segment: Segment,
    selection: Option<NaiveDateTime>,
}

impl PickerState {
    /// Attach picker behavior to the field named `field_id`.
    ///
    /// The candidate cursor starts at the clock's current reading; the
    /// selection starts empty.
    pub fn attach(field_id: &str, config: PickerConfig, clock: &dyn Clock) -> Self {
        Self {
            field_id: field_id.to_string(),
            cursor: clock.now(),
            segment: Segment::Day,
            selection: None,
            config,
        }
    }

    /// Identifier of the field this picker is bound to.
    pub fn field_id(&self) -> &str {
        &self.field_id
    }

    /// The configuration this picker was initialized with.
    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    /// Candidate currently under the cursor.
    pub fn cursor(&self) -> NaiveDateTime {
        self.cursor
    }

    /// Segment currently focused by the cursor.
    pub fn segment(&self) -> Segment {
        self.segment
    }

    /// The committed selection, if any.
    pub fn selection(&self) -> Option<NaiveDateTime> {
        self.selection
    }

    /// Whether `candidate` is rejected by any configured disable hook.
    ///
    /// Pure given the hooks' current view of the world; evaluating one
    /// candidate has no effect on any other.
    pub fn is_disabled(&self, candidate: NaiveDateTime) -> bool {
        self.config.is_disabled(candidate)
    }

    /// Classify `candidate` for rendering or validation.
    pub fn classify(&self, candidate: NaiveDateTime) -> Classification {
        if self.is_disabled(candidate) {
            Classification::Disabled
        } else {
            Classification::Selectable
        }
    }

    /// Move the cursor focus to the next segment, wrapping around.
    pub fn next_segment(&mut self) {
        let segments = self.segments();
        let index = segments.iter().position(|s| *s == self.segment).unwrap_or(0);
        self.segment = segments[(index + 1) % segments.len()];
    }

    /// Move the cursor focus to the previous segment, wrapping around.
    pub fn prev_segment(&mut self) {
        let segments = self.segments();
        let index = segments.iter().position(|s| *s == self.segment).unwrap_or(0);
        self.segment = segments[(index + segments.len() - 1) % segments.len()];
    }

    /// Increment the focused segment of the candidate cursor.
    pub fn step_up(&mut self) {
        self.cursor = step(self.cursor, self.segment, 1);
    }

    /// Decrement the focused segment of the candidate cursor.
    pub fn step_down(&mut self) {
        self.cursor = step(self.cursor, self.segment, -1);
    }

    /// Commit the candidate under the cursor as the selection.
    pub fn try_commit(&mut self) -> Result<NaiveDateTime, PickerError> {
        self.try_commit_candidate(self.cursor)
    }

    /// Commit an explicit candidate (e.g. a typed value) as the selection.
    ///
    /// The candidate is re-classified here, so a value that was selectable
    /// when first shown is still rejected if time has passed it by.
    pub fn try_commit_candidate(&mut self, candidate: NaiveDateTime) -> Result<NaiveDateTime, PickerError> {
        if self.is_disabled(candidate) {
            return Err(PickerError::AlreadyExpired);
        }

        self.selection = Some(candidate);
        Ok(candidate)
    }

    /// The committed selection rendered with the configured display format.
    pub fn formatted(&self) -> Option<String> {
        self.selection.map(|value| value.format(self.config.date_format).to_string())
    }

    /// The candidate cursor rendered with the configured display format.
    pub fn cursor_text(&self) -> String {
        self.cursor.format(self.config.date_format).to_string()
    }

    /// Segments reachable by the cursor under the current configuration.
    fn segments(&self) -> &'static [Segment] {
        match (self.config.enable_time, self.config.enable_seconds) {
            (false, _) => &[Segment::Day, Segment::Month, Segment::Year],
            (true, false) => &[
                Segment::Day,
                Segment::Month,
                Segment::Year,
                Segment::Hour,
                Segment::Minute,
            ],
            (true, true) => &[
                Segment::Day,
                Segment::Month,
                Segment::Year,
                Segment::Hour,
                Segment::Minute,
                Segment::Second,
            ],
        }
    }
}

/// Step one segment of `candidate` by `delta`, carrying through the
/// calendar. Month and year steps clamp the day to the target month's
/// length (Jan 31 stepped one month forward lands on Feb 28 or 29).
fn step(candidate: NaiveDateTime, segment: Segment, delta: i64) -> NaiveDateTime {
    let stepped = match segment {
        Segment::Day => candidate.checked_add_signed(Duration::days(delta)),
        Segment::Month => {
            if delta >= 0 {
                candidate.checked_add_months(Months::new(delta.unsigned_abs() as u32))
            } else {
                candidate.checked_sub_months(Months::new(delta.unsigned_abs() as u32))
            }
        }
        Segment::Year => {
            let months = Months::new(12 * delta.unsigned_abs() as u32);
            if delta >= 0 {
                candidate.checked_add_months(months)
            } else {
                candidate.checked_sub_months(months)
            }
        }
        Segment::Hour => candidate.checked_add_signed(Duration::hours(delta)),
        Segment::Minute => candidate.checked_add_signed(Duration::minutes(delta)),
        Segment::Second => candidate.checked_add_signed(Duration::seconds(delta)),
    };

    // Out-of-range arithmetic keeps the cursor where it was
    stepped.unwrap_or(candidate)
}
