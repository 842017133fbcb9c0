use sambat::{BsDate, BsDateTime, FormatOptions, MonthStyle, Numerals, Pattern, NPT};

fn date() -> BsDate {
    BsDate::new(2080, 10, 24).unwrap()
}

#[test]
fn test_format_date_ymd() {
    assert_eq!(date().strftime("%Y-%m-%d").unwrap(), "2080-10-24");
}

#[test]
fn test_format_date_nepali() {
    assert_eq!(date().strftime("%K-%n-%D").unwrap(), "२०८०-१०-२४");
    assert_eq!(date().strftime("%N %D, %K %G").unwrap(), "माघ २४, २०८० मंगलबार");
}

#[test]
fn test_format_month_name() {
    assert_eq!(date().strftime("%B %d, %Y").unwrap(), "Magh 24, 2080");
    assert_eq!(date().strftime("%a %b %d").unwrap(), "Tue Mag 24");
}

#[test]
fn test_format_time_ampm() {
    let dt = BsDateTime::new(2080, 10, 24, 0, 5, 0, 0).unwrap();
    assert_eq!(dt.strftime("%I:%M %p").unwrap(), "12:05 AM");
    let dt = BsDateTime::new(2080, 10, 24, 13, 5, 0, 0).unwrap();
    assert_eq!(dt.strftime("%I:%M %p").unwrap(), "01:05 PM");
}

#[test]
fn test_format_nepali_periods() {
    let cases = [(3, "राति"), (4, "बिहान"), (11, "बिहान"), (12, "दिउँसो"), (15, "दिउँसो"), (16, "बेलुका"), (19, "बेलुका"), (20, "राति")];
    for (hour, period) in cases {
        let dt = BsDateTime::new(2080, 10, 24, hour, 0, 0, 0).unwrap();
        assert_eq!(dt.strftime("%P").unwrap(), period, "hour {hour}");
    }
}

#[test]
fn test_format_zone_codes() {
    let naive = BsDateTime::new(2080, 10, 24, 10, 0, 0, 0).unwrap();
    assert_eq!(naive.strftime("[%z][%Z]").unwrap(), "[][]");
    let aware = naive.with_timezone(NPT);
    assert_eq!(aware.strftime("[%z][%Z]").unwrap(), "[+0545][Asia/Kathmandu]");
}

#[test]
fn test_format_percent_escape() {
    assert_eq!(date().strftime("100%% %Y").unwrap(), "100% 2080");
    assert_eq!(date().strftime("%Y%").unwrap(), "2080%");
}

#[test]
fn test_format_with_options() {
    let opts = FormatOptions {
        month_style: MonthStyle::Sanskrit,
        numerals: Numerals::Devanagari,
        ..FormatOptions::default()
    };
    assert_eq!(date().format_with("%N %Y-%m-%d", &opts).unwrap(), "माघ २०८०-१०-२४");
    let jestha = BsDate::new(2080, 2, 1).unwrap();
    assert_eq!(jestha.format_with("%N/%B", &opts).unwrap(), "ज्येष्ठ/Jestha");
}

#[test]
fn test_compiled_pattern_reuse() {
    let pattern = Pattern::compile("%d.%m.%Y").unwrap();
    let opts = FormatOptions::default();
    let rendered: Vec<String> = (0..3)
        .map(|i| pattern.format(date() + i, &opts).unwrap())
        .collect();
    assert_eq!(rendered, ["24.10.2080", "25.10.2080", "26.10.2080"]);
}

#[test]
fn test_display_forms() {
    assert_eq!(date().to_string(), "2080-10-24");
    let dt = BsDateTime::new_aware(2080, 10, 24, 7, 8, 9, 0, NPT).unwrap();
    assert_eq!(dt.to_string(), "2080-10-24 07:08:09+05:45");
}
