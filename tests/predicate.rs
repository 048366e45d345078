use std::sync::{Arc, Mutex};

use chrono::{Duration, NaiveDate, NaiveDateTime};
use termnote::clock::{Clock, FixedClock};
use termnote::picker::predicate;

fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 8, 6).unwrap().and_hms_opt(h, m, s).unwrap()
}

/// Clock whose reading can be moved forward mid-test.
struct AdjustableClock(Mutex<NaiveDateTime>);

impl AdjustableClock {
    fn new(start: NaiveDateTime) -> Self {
        Self(Mutex::new(start))
    }

    fn advance(&self, by: Duration) {
        let mut now = self.0.lock().unwrap();
        *now += by;
    }
}

impl Clock for AdjustableClock {
    fn now(&self) -> NaiveDateTime {
        *self.0.lock().unwrap()
    }
}

#[test]
fn test_candidate_before_now_is_disabled() {
    let disable = predicate::past(Arc::new(FixedClock(at(12, 0, 0))));

    assert!(disable(at(11, 59, 59)));
    assert!(disable(at(0, 0, 0)));
}

#[test]
fn test_candidate_after_now_is_selectable() {
    let disable = predicate::past(Arc::new(FixedClock(at(12, 0, 0))));

    assert!(!disable(at(12, 0, 1)));
    assert!(!disable(at(23, 59, 59)));
}

#[test]
fn test_candidate_equal_to_now_is_selectable() {
    let disable = predicate::past(Arc::new(FixedClock(at(12, 0, 0))));

    assert!(!disable(at(12, 0, 0)));
}

#[test]
fn test_subsecond_clock_readings_are_truncated() {
    // A clock reading of 12:00:00.750 still admits the 12:00:00 candidate
    let now = at(12, 0, 0) + Duration::milliseconds(750);
    let disable = predicate::past(Arc::new(FixedClock(now)));

    assert!(!disable(at(12, 0, 0)));
}

#[test]
fn test_now_is_reread_on_every_evaluation() {
    let clock = Arc::new(AdjustableClock::new(at(12, 0, 0)));
    let disable = predicate::past(clock.clone());

    let candidate = at(12, 0, 30);
    assert!(!disable(candidate));

    // The same candidate becomes disabled once time passes it by
    clock.advance(Duration::seconds(31));
    assert!(disable(candidate));
}

#[test]
fn test_evaluations_are_independent() {
    let disable = predicate::past(Arc::new(FixedClock(at(12, 0, 0))));

    // Evaluating one candidate has no effect on another
    assert!(disable(at(11, 0, 0)));
    assert!(!disable(at(13, 0, 0)));
    assert!(disable(at(11, 0, 0)));
}
