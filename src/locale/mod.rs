//! English and Nepali name tables and Devanagari digits.

mod builtin;
mod digits;
mod translate;

pub use builtin::{
    DAYS_ENGLISH, DAYS_ENGLISH_SHORT, DAYS_NEPALI, DAYS_NEPALI_SHORT, GREGORIAN_MONTHS_ENGLISH,
    GREGORIAN_MONTHS_NEPALI, MONTHS_ENGLISH, MONTHS_ENGLISH_SHORT, MONTHS_NEPALI,
    MONTHS_NEPALI_SANSKRIT, PERIODS_NEPALI,
};
pub use digits::{digit_value, from_devanagari, is_devanagari_digit, to_devanagari};
pub use translate::{to_nepali_text, TranslateOptions};

use crate::options::MonthStyle;

/// The script a name or number is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Script {
    /// English names, ASCII digits.
    #[default]
    Latin,
    /// Nepali names, Devanagari digits.
    Devanagari,
}

/// Returns the name of a BS month (1 = Baishakh).
///
/// `style` only affects Devanagari names.
pub fn month_name(month: u8, script: Script, style: MonthStyle) -> Option<&'static str> {
    let index = usize::from(month.checked_sub(1)?);
    match script {
        Script::Latin => MONTHS_ENGLISH.get(index).copied(),
        Script::Devanagari => match style {
            MonthStyle::Formal => MONTHS_NEPALI.get(index).copied(),
            MonthStyle::Sanskrit => MONTHS_NEPALI_SANSKRIT.get(index).copied(),
        },
    }
}

/// Returns the name of a Gregorian month (1 = January).
pub fn gregorian_month_name(month: u8, script: Script) -> Option<&'static str> {
    let index = usize::from(month.checked_sub(1)?);
    match script {
        Script::Latin => GREGORIAN_MONTHS_ENGLISH.get(index).copied(),
        Script::Devanagari => GREGORIAN_MONTHS_NEPALI.get(index).copied(),
    }
}

/// Returns the name of a weekday (0 = Sunday).
pub fn weekday_name(weekday: u8, script: Script, abbreviated: bool) -> Option<&'static str> {
    let table = match (script, abbreviated) {
        (Script::Latin, false) => &DAYS_ENGLISH,
        (Script::Latin, true) => &DAYS_ENGLISH_SHORT,
        (Script::Devanagari, false) => &DAYS_NEPALI,
        (Script::Devanagari, true) => &DAYS_NEPALI_SHORT,
    };
    table.get(usize::from(weekday)).copied()
}

/// Nepali period of the day for an hour: morning 4-11, afternoon 12-15,
/// evening 16-19, night otherwise.
pub fn period_of_day(hour: u8) -> &'static str {
    match hour {
        4..=11 => PERIODS_NEPALI[0],
        12..=15 => PERIODS_NEPALI[1],
        16..=19 => PERIODS_NEPALI[2],
        _ => PERIODS_NEPALI[3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_name_styles() {
        assert_eq!(
            month_name(2, Script::Devanagari, MonthStyle::Formal),
            Some("जेठ")
        );
        assert_eq!(
            month_name(2, Script::Devanagari, MonthStyle::Sanskrit),
            Some("ज्येष्ठ")
        );
        assert_eq!(
            month_name(2, Script::Latin, MonthStyle::Sanskrit),
            Some("Jestha")
        );
        assert_eq!(month_name(0, Script::Latin, MonthStyle::Formal), None);
        assert_eq!(month_name(13, Script::Latin, MonthStyle::Formal), None);
    }

    #[test]
    fn test_gregorian_month_name() {
        assert_eq!(gregorian_month_name(2, Script::Devanagari), Some("फेब्रुअरी"));
        assert_eq!(gregorian_month_name(12, Script::Latin), Some("December"));
        assert_eq!(gregorian_month_name(0, Script::Latin), None);
    }

    #[test]
    fn test_weekday_name() {
        assert_eq!(weekday_name(0, Script::Devanagari, false), Some("आइतबार"));
        assert_eq!(weekday_name(5, Script::Latin, true), Some("Fri"));
        assert_eq!(weekday_name(7, Script::Latin, false), None);
    }

    #[test]
    fn test_period_of_day() {
        assert_eq!(period_of_day(3), "राति");
        assert_eq!(period_of_day(4), "बिहान");
        assert_eq!(period_of_day(12), "दिउँसो");
        assert_eq!(period_of_day(16), "बेलुका");
        assert_eq!(period_of_day(20), "राति");
    }
}
