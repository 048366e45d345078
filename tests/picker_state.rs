use std::sync::{Arc, Mutex};

use chrono::{Duration, NaiveDate, NaiveDateTime};
use termnote::clock::{Clock, FixedClock};
use termnote::picker::{Classification, PickerConfig, PickerError, PickerState, Segment};

fn datetime(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d).unwrap().and_hms_opt(h, mi, s).unwrap()
}

fn noon() -> NaiveDateTime {
    datetime(2026, 8, 6, 12, 0, 0)
}

fn expiry_picker(now: NaiveDateTime) -> PickerState {
    let clock = FixedClock(now);
    PickerState::attach("expiration_date", PickerConfig::expiry(Arc::new(clock)), &clock)
}

/// Clock whose reading can be moved forward mid-test.
struct AdjustableClock(Mutex<NaiveDateTime>);

impl Clock for AdjustableClock {
    fn now(&self) -> NaiveDateTime {
        *self.0.lock().unwrap()
    }
}

#[test]
fn test_attach_has_no_default_selection() {
    let picker = expiry_picker(noon());

    assert_eq!(picker.selection(), None);
    assert_eq!(picker.formatted(), None);
    assert_eq!(picker.cursor(), noon());
    assert_eq!(picker.field_id(), "expiration_date");
}

#[test]
fn test_classification_follows_the_clock() {
    let picker = expiry_picker(noon());

    assert_eq!(picker.classify(noon() - Duration::seconds(1)), Classification::Disabled);
    assert_eq!(picker.classify(noon()), Classification::Selectable);
    assert_eq!(picker.classify(noon() + Duration::seconds(1)), Classification::Selectable);
}

#[test]
fn test_commit_rejects_past_candidate() {
    let mut picker = expiry_picker(noon());

    let past = noon() - Duration::hours(1);
    let err = picker.try_commit_candidate(past).unwrap_err();

    assert_eq!(err, PickerError::AlreadyExpired);
    assert_eq!(err.to_string(), "Expiration date is already expired");
    assert_eq!(picker.selection(), None);
}

#[test]
fn test_commit_accepts_candidate_equal_to_now() {
    let mut picker = expiry_picker(noon());

    assert_eq!(picker.try_commit_candidate(noon()), Ok(noon()));
    assert_eq!(picker.selection(), Some(noon()));
}

#[test]
fn test_commit_revalidates_against_a_live_clock() {
    let clock = Arc::new(AdjustableClock(Mutex::new(noon())));
    let mut picker = PickerState::attach(
        "expiration_date",
        PickerConfig::expiry(clock.clone()),
        clock.as_ref(),
    );

    let candidate = noon() + Duration::seconds(30);
    assert_eq!(picker.classify(candidate), Classification::Selectable);

    // Time passes the candidate by before the user commits it
    *clock.0.lock().unwrap() = noon() + Duration::seconds(31);
    assert_eq!(picker.try_commit_candidate(candidate), Err(PickerError::AlreadyExpired));
}

#[test]
fn test_formatted_selection_uses_the_display_format() {
    let mut picker = expiry_picker(noon());

    picker.try_commit_candidate(datetime(2026, 12, 24, 18, 30, 5)).unwrap();

    assert_eq!(picker.formatted(), Some("24-12-2026, 18:30:05".to_string()));
}

#[test]
fn test_identically_configured_pickers_classify_identically() {
    let clock = Arc::new(FixedClock(noon()));
    let first = PickerState::attach("expiration_date", PickerConfig::expiry(clock.clone()), clock.as_ref());
    let second = PickerState::attach("expiration_date", PickerConfig::expiry(clock.clone()), clock.as_ref());

    let candidates = [
        noon() - Duration::days(1),
        noon() - Duration::seconds(1),
        noon(),
        noon() + Duration::seconds(1),
        noon() + Duration::days(365),
    ];

    for candidate in candidates {
        assert_eq!(first.classify(candidate), second.classify(candidate));
    }
}

#[test]
fn test_segment_cycle_with_seconds_enabled() {
    let mut picker = expiry_picker(noon());
    assert_eq!(picker.segment(), Segment::Day);

    let expected = [
        Segment::Month,
        Segment::Year,
        Segment::Hour,
        Segment::Minute,
        Segment::Second,
        Segment::Day,
    ];
    for segment in expected {
        picker.next_segment();
        assert_eq!(picker.segment(), segment);
    }

    picker.prev_segment();
    assert_eq!(picker.segment(), Segment::Second);
}

#[test]
fn test_date_only_config_skips_time_segments() {
    let clock = FixedClock(noon());
    let mut picker = PickerState::attach("expiration_date", PickerConfig::default(), &clock);

    picker.next_segment();
    picker.next_segment();
    picker.next_segment();
    assert_eq!(picker.segment(), Segment::Day);
}

#[test]
fn test_month_step_clamps_the_day() {
    let mut picker = expiry_picker(datetime(2025, 1, 31, 10, 0, 0));

    picker.next_segment(); // month
    picker.step_up();
    assert_eq!(picker.cursor(), datetime(2025, 2, 28, 10, 0, 0));
}

#[test]
fn test_month_step_clamps_to_leap_day() {
    let mut picker = expiry_picker(datetime(2024, 1, 31, 10, 0, 0));

    picker.next_segment(); // month
    picker.step_up();
    assert_eq!(picker.cursor(), datetime(2024, 2, 29, 10, 0, 0));
}

#[test]
fn test_year_step_clamps_leap_day() {
    let mut picker = expiry_picker(datetime(2024, 2, 29, 10, 0, 0));

    picker.next_segment(); // month
    picker.next_segment(); // year
    picker.step_up();
    assert_eq!(picker.cursor(), datetime(2025, 2, 28, 10, 0, 0));
}

#[test]
fn test_day_step_carries_into_the_next_month() {
    let mut picker = expiry_picker(datetime(2026, 8, 31, 10, 0, 0));

    picker.step_up();
    assert_eq!(picker.cursor(), datetime(2026, 9, 1, 10, 0, 0));
}

#[test]
fn test_second_step_carries_across_midnight() {
    let mut picker = expiry_picker(datetime(2026, 8, 6, 23, 59, 59));

    picker.next_segment(); // month
    picker.next_segment(); // year
    picker.next_segment(); // hour
    picker.next_segment(); // minute
    picker.next_segment(); // second
    picker.step_up();
    assert_eq!(picker.cursor(), datetime(2026, 8, 7, 0, 0, 0));
}

#[test]
fn test_step_down_reverses_step_up() {
    let mut picker = expiry_picker(noon());

    picker.step_up();
    picker.step_down();
    assert_eq!(picker.cursor(), noon());
}
