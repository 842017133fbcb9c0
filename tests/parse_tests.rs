use sambat::{
    parse, parse_date, parse_datetime, BsDate, BsDateTime, Error, Matcher, Parsed, TimeZone,
    CANONICAL_PATTERNS, NPT, UTC,
};

fn date() -> BsDate {
    BsDate::new(2080, 10, 24).unwrap()
}

#[test]
fn test_format_then_parse_round_trips() {
    let patterns = ["%Y-%m-%d", "%K-%n-%D", "%B %d, %Y", "%d %N %K", "%y/%m/%d", "%Y %j"];
    let mut day = BsDate::new(2080, 1, 1).unwrap();
    for _ in 0..400 {
        for pattern in patterns {
            let text = day.strftime(pattern).unwrap();
            assert_eq!(BsDate::strptime(&text, pattern), Ok(day), "{pattern} {text}");
        }
        day = day + 1;
    }
}

#[test]
fn test_datetime_round_trip_with_zone() {
    let dt = BsDateTime::new_aware(2080, 10, 24, 21, 7, 3, 120, NPT).unwrap();
    let pattern = "%Y-%m-%d %H:%M:%S.%f %z";
    let text = dt.strftime(pattern).unwrap();
    assert_eq!(text, "2080-10-24 21:07:03.000120 +0545");
    let parsed = BsDateTime::strptime(&text, pattern).unwrap();
    assert_eq!(parsed, dt);
    assert_eq!(parsed.timezone().map(|tz| tz.utc_offset_minutes()), Some(345));
}

#[test]
fn test_unnamed_zone_round_trips_through_zone_name() {
    let pattern = "%Y-%m-%d %H:%M %Z";
    for (offset, name) in [(300, "UTC+05:00"), (-210, "UTC-03:30"), (0, "UTC+00:00")] {
        let tz = TimeZone::fixed(offset).unwrap();
        let dt = BsDateTime::new_aware(2080, 10, 24, 8, 0, 0, 0, tz).unwrap();
        let text = dt.strftime(pattern).unwrap();
        assert_eq!(text, format!("2080-10-24 08:00 {name}"));
        let parsed = BsDateTime::strptime(&text, pattern).unwrap();
        assert_eq!(parsed, dt, "{text}");
        assert_eq!(parsed.timezone().map(|tz| tz.utc_offset_minutes()), Some(offset));
    }

    let named = BsDateTime::strptime("2080-10-24 08:00 UTC", pattern).unwrap();
    assert_eq!(named.timezone(), Some(UTC));
    assert!(matches!(
        BsDateTime::strptime("2080-10-24 08:00 UTC+99:00", pattern),
        Err(Error::Parse { .. })
    ));
}

#[test]
fn test_auto_detect_short_year() {
    assert_eq!(parse_date("79-02-15"), BsDate::new(1979, 2, 15));
    assert_eq!(parse_date("12/01/05"), BsDate::new(2012, 1, 5));
    // strptime's %y keeps every two-digit year in the 2000s.
    assert_eq!(BsDate::strptime("79-02-15", "%y-%m-%d"), BsDate::new(2079, 2, 15));
}

#[test]
fn test_nepali_datetime_round_trip() {
    let dt = BsDateTime::new(2080, 10, 24, 21, 7, 0, 0).unwrap();
    let pattern = "%K/%n/%D %I:%i %P";
    let text = dt.strftime(pattern).unwrap();
    // %I is a strftime code, so its digits stay ASCII.
    assert_eq!(text, "२०८०/१०/२४ 09:०७ राति");
    assert_eq!(BsDateTime::strptime(&text, pattern), Ok(dt));
}

#[test]
fn test_names_are_case_insensitive() {
    assert_eq!(BsDate::strptime("MAGH 24 2080", "%B %d %Y"), Ok(date()));
    assert_eq!(BsDate::strptime("tue, 24 mag 2080", "%a, %d %b %Y"), Ok(date()));
}

#[test]
fn test_month_codes_accept_any_month_table() {
    for name in ["Magh", "Mag", "माघ"] {
        let text = format!("{name} 24, 2080");
        assert_eq!(BsDate::strptime(&text, "%B %d, %Y"), Ok(date()), "{name}");
    }
    let sanskrit = BsDate::strptime("ज्येष्ठ ५ २०८०", "%N %D %K").unwrap();
    assert_eq!(sanskrit, BsDate::new(2080, 2, 5).unwrap());
}

#[test]
fn test_short_year_is_this_century() {
    assert_eq!(BsDate::strptime("80-10-24", "%y-%m-%d"), Ok(date()));
    assert_eq!(BsDate::strptime("८०-१०-२४", "%k-%n-%D"), Ok(date()));
}

#[test]
fn test_digit_scripts_are_per_field() {
    assert_eq!(BsDate::strptime("२०८०-10-२४", "%Y-%m-%d"), Ok(date()));
    assert!(matches!(
        BsDate::strptime("20८0-10-24", "%Y-%m-%d"),
        Err(Error::Parse { position: 2, .. })
    ));
}

#[test]
fn test_parse_error_positions() {
    let err = BsDate::strptime("2080/10/24", "%Y-%m-%d").unwrap_err();
    assert!(matches!(err, Error::Parse { position: 4, .. }));

    let err = BsDate::strptime("2080-10-", "%Y-%m-%d").unwrap_err();
    assert!(matches!(err, Error::Parse { position: 8, .. }));
}

#[test]
fn test_validation_errors_surface() {
    assert!(matches!(
        BsDate::strptime("2080-01-31", "%Y-%m-%d"),
        Err(Error::InvalidDate { .. })
    ));
    assert!(matches!(
        BsDateTime::strptime("2080-01-01 25:00", "%Y-%m-%d %H:%M"),
        Err(Error::InvalidTime { field: "hour", .. })
    ));
}

#[test]
fn test_unparseable_pattern() {
    assert!(matches!(Matcher::compile("%Y %Q"), Err(Error::Format { .. })));
    assert!(matches!(
        BsDate::strptime("2080", "%Y %Q"),
        Err(Error::Format { .. })
    ));
}

#[test]
fn test_auto_detect() {
    assert_eq!(parse("2080-10-24"), Ok(Parsed::Date(date())));
    assert_eq!(parse_date("24 Magh, 2080"), Ok(date()));
    let dt = parse_datetime("2080-10-24 09:15 pm").unwrap();
    assert_eq!(dt.time(), (21, 15, 0, 0));
    assert!(matches!(parse("2080-10-24 10:00:00"), Ok(Parsed::DateTime(_))));
    assert!(matches!(parse("24-10-2080"), Err(Error::Parse { .. })));
    assert!(matches!(parse("2080-02-33"), Err(Error::InvalidDate { .. })));
}

#[test]
fn test_canonical_patterns_compile() {
    for pattern in CANONICAL_PATTERNS {
        assert!(Matcher::compile(pattern).is_ok(), "{pattern}");
    }
}
