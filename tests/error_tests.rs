use sambat::{BsDate, BsDateTime, Error, FormatOptions, Pattern, UnknownCodePolicy};

#[test]
fn test_out_of_range_display() {
    let err = BsDate::new(2200, 1, 1).unwrap_err();
    let msg = format!("{}", err);
    assert!(msg.contains("2200"));
    assert!(msg.contains("1901..=2199"));
}

#[test]
fn test_invalid_date_display() {
    let err = BsDate::new(2080, 1, 31).unwrap_err();
    assert_eq!(
        err,
        Error::InvalidDate {
            year: 2080,
            month: 1,
            day: 31,
            max_day: 30
        }
    );
    assert_eq!(err.to_string(), "invalid date: 2080-01-31 (month has 30 days)");
}

#[test]
fn test_invalid_time_display() {
    let err = BsDateTime::new(2080, 1, 1, 10, 60, 0, 0).unwrap_err();
    assert_eq!(err.to_string(), "invalid time: minute 60 (max 59)");
}

#[test]
fn test_format_error_carries_position() {
    let err = Pattern::compile_with("%Y-%m-%v", UnknownCodePolicy::Reject).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("position 6"), "{msg}");
    assert!(msg.contains("%v"), "{msg}");
}

#[test]
fn test_parse_error_carries_position() {
    let err = BsDate::strptime("2080-1x-01", "%Y-%m-%d").unwrap_err();
    assert!(matches!(err, Error::Parse { position: 6, .. }));
    assert!(err.to_string().starts_with("parse error at position 6"));
}

#[test]
fn test_type_mismatch_display() {
    let naive = BsDateTime::new(2080, 1, 1, 0, 0, 0, 0).unwrap();
    let err = naive.try_cmp(&naive.with_timezone(sambat::UTC)).unwrap_err();
    assert!(err.to_string().contains("naive"));
}

#[test]
fn test_errors_compare_and_clone() {
    let opts = FormatOptions::default().with_unknown_codes(UnknownCodePolicy::Reject);
    let date = BsDate::new(2080, 1, 1).unwrap();
    let err = date.format_with("%q", &opts).unwrap_err();
    assert_eq!(err.clone(), err);
}
