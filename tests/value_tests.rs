use sambat::{BsDate, BsDateTime, Duration, Error, TimeZone, Value, Zone, NPT, UTC};

fn bs(y: i32, m: u8, d: u8) -> BsDate {
    BsDate::new(y, m, d).unwrap()
}

#[test]
fn test_date_day_arithmetic() {
    assert_eq!(bs(2080, 10, 24) + 1, bs(2080, 10, 25));
    assert_eq!(bs(2080, 10, 30) + 1, bs(2080, 11, 1));
    assert_eq!(bs(2080, 12, 31) + 1, bs(2081, 1, 1));
    assert_eq!(bs(2081, 1, 1) - 1, bs(2080, 12, 31));
    assert_eq!(bs(2081, 1, 1) - bs(2080, 1, 1), 365);
}

#[test]
#[should_panic]
fn test_date_add_past_span_panics() {
    let _ = bs(2199, 12, 30) + 1;
}

#[test]
fn test_checked_add_reports_out_of_range() {
    assert!(matches!(
        bs(2199, 12, 30).checked_add_days(1),
        Err(Error::OutOfRange { .. })
    ));
    assert_eq!(bs(2199, 12, 29).checked_add_days(1), Ok(bs(2199, 12, 30)));
}

#[test]
fn test_datetime_duration_arithmetic() {
    let start = BsDateTime::new(2080, 12, 31, 23, 59, 59, 999_999).unwrap();
    let next = start + Duration::from_micros(1);
    assert_eq!(next, BsDateTime::new(2081, 1, 1, 0, 0, 0, 0).unwrap());
    assert_eq!(next - start, Ok(Duration::from_micros(1)));

    let back = next - Duration::new(1, 3_600, 0);
    assert_eq!(back, BsDateTime::new(2080, 12, 30, 23, 0, 0, 0).unwrap());
}

#[test]
fn test_naive_aware_mismatch_both_directions() {
    let naive = BsDateTime::new(2080, 10, 24, 12, 0, 0, 0).unwrap();
    let aware = naive.with_timezone(NPT);
    assert_eq!(naive.try_cmp(&aware), Err(Error::TypeMismatch));
    assert_eq!(aware.try_cmp(&naive), Err(Error::TypeMismatch));
    assert_eq!(naive - aware, Err(Error::TypeMismatch));
    assert_eq!(aware - naive, Err(Error::TypeMismatch));
    assert!(naive.partial_cmp(&aware).is_none());
    assert!(!(naive < aware) && !(naive > aware) && naive != aware);
}

#[test]
fn test_aware_comparison_uses_instant() {
    let kathmandu = BsDateTime::new_aware(2080, 10, 24, 6, 0, 0, 0, NPT).unwrap();
    let utc = BsDateTime::new_aware(2080, 10, 24, 0, 15, 0, 0, UTC).unwrap();
    assert_eq!(kathmandu, utc);

    let later_utc = BsDateTime::new_aware(2080, 10, 24, 1, 0, 0, 0, UTC).unwrap();
    assert!(later_utc > kathmandu);
    assert_eq!(later_utc - kathmandu, Ok(Duration::from_minutes(45)));
}

#[test]
fn test_timezone_conversion_keeps_instant() {
    let minus_three = TimeZone::fixed(-180).unwrap();
    let dt = BsDateTime::new_aware(2080, 10, 24, 1, 0, 0, 0, NPT).unwrap();
    let moved = dt.to_timezone(minus_three).unwrap();
    assert_eq!(moved.date(), bs(2080, 10, 23));
    assert_eq!(moved.hour(), 16);
    assert_eq!(moved.minute(), 15);
    assert_eq!(moved, dt);
    assert_eq!(moved.zone(), Zone::Aware(minus_three));
}

#[test]
fn test_now_and_today() {
    let today = BsDate::today().unwrap();
    let now = BsDateTime::now_in(NPT).unwrap();
    assert!(now.is_aware());
    // The local date and the Kathmandu date never differ by more than a day.
    assert!((now.date() - today).abs() <= 1);
}

#[test]
fn test_value_conversions() {
    let date = bs(2080, 10, 24);
    assert_eq!(Value::from(date).date(), date);
    let dt = BsDateTime::from(date);
    assert_eq!(dt.time(), (0, 0, 0, 0));
    assert_eq!(Value::from(dt), Value::DateTime(dt));
}

#[test]
fn test_from_ad() {
    let dt = BsDateTime::from_ad(2024, 2, 6, 9, 30, 0, 0).unwrap();
    assert_eq!(dt.date(), bs(2080, 10, 24));
    assert_eq!(dt.date().to_ad(), (2024, 2, 6));
}

#[cfg(feature = "chrono")]
#[test]
fn test_chrono_datetime_round_trip() {
    let naive = chrono::NaiveDate::from_ymd_opt(2024, 2, 6)
        .unwrap()
        .and_hms_micro_opt(14, 30, 5, 123_456)
        .unwrap();
    let dt = BsDateTime::try_from(naive).unwrap();
    assert_eq!(dt.date(), bs(2080, 10, 24));
    assert_eq!(dt.time(), (14, 30, 5, 123_456));
    assert_eq!(dt.to_naive_datetime(), Ok(naive));
}
