use chrono::{NaiveDate, NaiveDateTime};
use termnote::picker::{format_value, parse_value, FormatError, DISPLAY_FORMAT};

fn datetime(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d).unwrap().and_hms_opt(h, mi, s).unwrap()
}

#[test]
fn test_display_format_pattern() {
    assert_eq!(DISPLAY_FORMAT, "%d-%m-%Y, %H:%M:%S");
}

#[test]
fn test_format_value_is_zero_padded() {
    assert_eq!(format_value(datetime(2026, 3, 5, 7, 4, 9)), "05-03-2026, 07:04:09");
}

#[test]
fn test_format_value_uses_24_hour_time() {
    assert_eq!(format_value(datetime(2026, 3, 5, 18, 30, 0)), "05-03-2026, 18:30:00");
}

#[test]
fn test_parse_round_trip() {
    let value = datetime(2026, 12, 24, 23, 59, 59);
    assert_eq!(parse_value(&format_value(value)), Ok(value));
}

#[test]
fn test_parse_accepts_surrounding_whitespace() {
    assert_eq!(parse_value("  05-03-2026, 07:04:09 "), Ok(datetime(2026, 3, 5, 7, 4, 9)));
}

#[test]
fn test_parse_rejects_other_formats() {
    assert_eq!(parse_value("2026-03-05 07:04:09"), Err(FormatError::InvalidFormat));
    assert_eq!(parse_value("05-03-2026"), Err(FormatError::InvalidFormat));
    assert_eq!(parse_value(""), Err(FormatError::InvalidFormat));
    assert_eq!(parse_value("not a date"), Err(FormatError::InvalidFormat));
}

#[test]
fn test_parse_rejects_out_of_range_components() {
    assert_eq!(parse_value("32-01-2026, 00:00:00"), Err(FormatError::InvalidFormat));
    assert_eq!(parse_value("01-13-2026, 00:00:00"), Err(FormatError::InvalidFormat));
    assert_eq!(parse_value("01-01-2026, 24:00:00"), Err(FormatError::InvalidFormat));
}

#[test]
fn test_invalid_format_message() {
    assert_eq!(
        FormatError::InvalidFormat.to_string(),
        "Expiration date has invalid format (expected: 'd-m-Y, H:M:S')"
    );
}
