//! Parse engine: matching text against a compiled pattern.
//!
//! A [`Matcher`] is a flat list of directives (literal text, a whitespace
//! run, or a capture handled by the code table). Matching is a single
//! forward pass with no backtracking. Captured fields are assembled into a
//! value only after the whole input has been consumed.

mod detect;

pub use detect::{parse, parse_date, parse_datetime, Parsed, CANONICAL_PATTERNS};

use crate::cache;
use crate::codes::{self, CodeSpec};
use crate::date::BsDate;
use crate::datetime::BsDateTime;
use crate::error::{Error, Result};
use crate::locale::digit_value;
use crate::options::UnknownCodePolicy;
use crate::pattern::{FormatToken, Pattern};
use crate::tz::TimeZone;

/// A position in the input being parsed.
pub(crate) struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        Cursor { text, pos: 0 }
    }

    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    fn is_at_end(&self) -> bool {
        self.pos == self.text.len()
    }

    fn literal(&mut self, expected: &str) -> Result<()> {
        if self.rest().starts_with(expected) {
            self.pos += expected.len();
            Ok(())
        } else {
            Err(Error::parse(self.pos, format!("expected {expected:?}")))
        }
    }

    /// Consumes one or more whitespace characters.
    fn whitespace(&mut self) -> Result<()> {
        let rest = self.rest();
        let trimmed = rest.trim_start();
        if trimmed.len() == rest.len() {
            return Err(Error::parse(self.pos, "expected whitespace"));
        }
        self.pos += rest.len() - trimmed.len();
        Ok(())
    }

    /// Reads `min..=max` digits of a single script, ASCII or Devanagari.
    ///
    /// Returns the value and the number of digits read.
    pub(crate) fn digits(&mut self, min: usize, max: usize, what: &str) -> Result<(u32, usize)> {
        let start = self.pos;
        let mut value = 0u32;
        let mut count = 0;
        let mut consumed = 0;
        let mut ascii_script = None;

        for (offset, ch) in self.rest().char_indices() {
            if count == max {
                break;
            }
            let Some(digit) = digit_value(ch) else {
                break;
            };
            let is_ascii = ch.is_ascii_digit();
            if *ascii_script.get_or_insert(is_ascii) != is_ascii {
                return Err(Error::parse(
                    start + offset,
                    format!("mixed ASCII and Devanagari digits in {what}"),
                ));
            }
            value = value * 10 + digit;
            count += 1;
            consumed = offset + ch.len_utf8();
        }

        if count < min {
            let reason = if min == max {
                format!("expected {min} digits for {what}")
            } else {
                format!("expected {what}")
            };
            return Err(Error::parse(start, reason));
        }
        self.pos += consumed;
        Ok((value, count))
    }

    pub(crate) fn number(&mut self, min: usize, max: usize, what: &str) -> Result<u32> {
        Ok(self.digits(min, max, what)?.0)
    }

    /// Matches the longest name from any of `tables`, ignoring ASCII case.
    ///
    /// Returns the index of the name within its table.
    pub(crate) fn one_of(&mut self, tables: &[&[&str]], what: &str) -> Result<usize> {
        let rest = self.rest().as_bytes();
        let mut best: Option<(usize, usize)> = None;

        for table in tables {
            for (index, name) in table.iter().enumerate() {
                let name = name.as_bytes();
                let longer = best.map_or(true, |(len, _)| name.len() > len);
                if longer && rest.len() >= name.len() && rest[..name.len()].eq_ignore_ascii_case(name)
                {
                    best = Some((name.len(), index));
                }
            }
        }

        match best {
            Some((len, index)) => {
                self.pos += len;
                Ok(index)
            }
            None => Err(Error::parse(self.pos, format!("expected {what}"))),
        }
    }

    pub(crate) fn at_sign(&self) -> bool {
        self.rest().starts_with(['+', '-'])
    }

    /// Reads a UTC offset, `+HHMM` or `+HH:MM`.
    pub(crate) fn offset(&mut self) -> Result<TimeZone> {
        let start = self.pos;
        let sign = match self.rest().chars().next() {
            Some('+') => 1,
            Some('-') => -1,
            _ => return Err(Error::parse(start, "expected '+' or '-' in UTC offset")),
        };
        self.pos += 1;
        let hours = self.number(2, 2, "offset hours")?;
        if self.rest().starts_with(':') {
            self.pos += 1;
        }
        let minutes = self.number(2, 2, "offset minutes")?;
        if minutes > 59 {
            return Err(Error::parse(start, "offset minutes must be below 60"));
        }
        let total = sign * (hours * 60 + minutes) as i16;
        TimeZone::fixed(total).map_err(|_| Error::parse(start, "UTC offset out of range"))
    }
}

/// Fields collected while matching, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Captures {
    pub year: Option<i32>,
    pub month: Option<u8>,
    pub day: Option<u8>,
    pub day_of_year: Option<u16>,
    pub hour: Option<u8>,
    pub hour12: Option<u8>,
    pub minute: Option<u8>,
    pub second: Option<u8>,
    pub microsecond: Option<u32>,
    pub pm: Option<bool>,
    /// Index into the Nepali periods: morning, afternoon, evening, night.
    pub period: Option<usize>,
    pub weekday: Option<u8>,
    pub zone: Option<TimeZone>,
}

impl Captures {
    /// Builds the value. `end` is reported as the position of missing fields.
    fn assemble(&self, end: usize) -> Result<BsDateTime> {
        let year = self.year.ok_or_else(|| Error::parse(end, "missing year"))?;
        let date = match (self.month, self.day, self.day_of_year) {
            (Some(month), Some(day), _) => BsDate::new(year, month, day)?,
            (_, _, Some(day_of_year)) => BsDate::from_day_of_year(year, day_of_year)?,
            (None, _, None) => return Err(Error::parse(end, "missing month")),
            (Some(_), None, None) => return Err(Error::parse(end, "missing day")),
        };

        let hour = match (self.hour, self.hour12) {
            (Some(hour), _) => hour,
            (None, Some(hour12)) => self.hour_from_12(hour12)?,
            (None, None) => 0,
        };

        let dt = BsDateTime::combine(
            date,
            hour,
            self.minute.unwrap_or(0),
            self.second.unwrap_or(0),
            self.microsecond.unwrap_or(0),
        )?;
        Ok(match self.zone {
            Some(tz) => dt.with_timezone(tz),
            None => dt,
        })
    }

    /// Resolves a 12-hour clock reading using `%p` or `%P`. Without either
    /// the reading is taken as morning.
    fn hour_from_12(&self, hour12: u8) -> Result<u8> {
        if !(1..=12).contains(&hour12) {
            return Err(Error::InvalidTime {
                field: "hour",
                value: u32::from(hour12),
                max: 12,
            });
        }
        let h = hour12 % 12;
        Ok(match (self.pm, self.period) {
            (Some(true), _) => h + 12,
            (Some(false), _) | (None, None) => h,
            // बिहान
            (None, Some(0)) => h,
            // दिउँसो: 12 is noon, 1-3 are 13-15
            (None, Some(1)) => h + 12,
            // बेलुका
            (None, Some(2)) => h + 12,
            // राति: 8-11 are 20-23, 12-3 are 0-3
            (None, Some(_)) => {
                if (8..12).contains(&h) {
                    h + 12
                } else {
                    h
                }
            }
        })
    }
}

#[derive(Debug, Clone)]
enum Directive {
    Literal(String),
    Whitespace,
    Capture(&'static CodeSpec),
}

/// A pattern compiled for parsing.
///
/// ```
/// use sambat::{BsDate, Matcher};
///
/// let matcher = Matcher::compile("%d %B %Y").unwrap();
/// let date = matcher.parse_date("24 Magh 2080").unwrap();
/// assert_eq!(date, BsDate::new(2080, 10, 24).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct Matcher {
    source: String,
    directives: Vec<Directive>,
    has_time: bool,
}

impl Matcher {
    /// Compiles a pattern for parsing. Unknown codes are an
    /// [`Error::Format`].
    pub fn compile(pattern: &str) -> Result<Matcher> {
        let compiled = Pattern::compile_with(pattern, UnknownCodePolicy::Reject)?;
        let mut directives = Vec::new();

        for token in compiled.tokens() {
            match token {
                // A compiled pattern only holds codes the table knows.
                FormatToken::Code { code, .. } => {
                    directives.extend(codes::lookup(*code).map(Directive::Capture));
                }
                FormatToken::Literal(text) => split_literal(text, &mut directives),
            }
        }

        Ok(Matcher {
            source: pattern.to_string(),
            directives,
            has_time: compiled.has_time(),
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns true if the pattern captures a time of day or a zone.
    pub fn has_time(&self) -> bool {
        self.has_time
    }

    /// Runs the directives over the whole of `text`.
    pub(crate) fn captures(&self, text: &str) -> Result<Captures> {
        let mut cursor = Cursor::new(text);
        let mut captures = Captures::default();

        for directive in &self.directives {
            match directive {
                Directive::Literal(expected) => cursor.literal(expected)?,
                Directive::Whitespace => cursor.whitespace()?,
                Directive::Capture(spec) => (spec.parse)(&mut cursor, &mut captures)?,
            }
        }

        if !cursor.is_at_end() {
            return Err(Error::parse(cursor.position(), "unconverted data remains"));
        }
        Ok(captures)
    }

    /// Parses a date-time. `%z` or `%Z` makes the result aware.
    pub fn parse(&self, text: &str) -> Result<BsDateTime> {
        self.captures(text)?.assemble(text.len())
    }

    /// Parses and keeps only the date.
    pub fn parse_date(&self, text: &str) -> Result<BsDate> {
        Ok(self.parse(text)?.date())
    }
}

/// Splits literal text into exact runs and whitespace directives.
fn split_literal(text: &str, directives: &mut Vec<Directive>) {
    let mut run = String::new();
    for ch in text.chars() {
        if ch.is_whitespace() {
            if !run.is_empty() {
                directives.push(Directive::Literal(std::mem::take(&mut run)));
            }
            if !matches!(directives.last(), Some(Directive::Whitespace)) {
                directives.push(Directive::Whitespace);
            }
        } else {
            run.push(ch);
        }
    }
    if !run.is_empty() {
        directives.push(Directive::Literal(run));
    }
}

/// Returns the cached matcher for `pattern`.
pub(crate) fn cached(pattern: &str) -> Result<Matcher> {
    cache::MATCHERS.get_or_try_insert_with(pattern, || Matcher::compile(pattern))
}

pub(crate) fn strptime(text: &str, pattern: &str) -> Result<BsDateTime> {
    cached(pattern)?.parse(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tz::NPT;

    fn parse(text: &str, pattern: &str) -> Result<BsDateTime> {
        Matcher::compile(pattern)?.parse(text)
    }

    #[test]
    fn test_directives() {
        let matcher = Matcher::compile("%Y-%m  at %H").unwrap();
        let shape: Vec<String> = matcher
            .directives
            .iter()
            .map(|directive| match directive {
                Directive::Literal(text) => text.clone(),
                Directive::Whitespace => " ".to_string(),
                Directive::Capture(spec) => format!("%{}", spec.code),
            })
            .collect();
        assert_eq!(shape, ["%Y", "-", "%m", " ", "at", " ", "%H"]);
        assert!(matcher.has_time());
    }

    #[test]
    fn test_unknown_code_is_format_error() {
        assert!(matches!(
            Matcher::compile("%Y %q"),
            Err(Error::Format { position: 3, .. })
        ));
    }

    #[test]
    fn test_digits_autodetect_script() {
        let mut cursor = Cursor::new("२०८०x");
        assert_eq!(cursor.digits(4, 4, "year"), Ok((2080, 4)));
        assert_eq!(cursor.position(), "२०८०".len());

        let mut cursor = Cursor::new("7");
        assert_eq!(cursor.digits(1, 2, "day"), Ok((7, 1)));
    }

    #[test]
    fn test_digits_reject_mixed_scripts() {
        let mut cursor = Cursor::new("2०८०");
        assert!(matches!(
            cursor.digits(4, 4, "year"),
            Err(Error::Parse { position: 1, .. })
        ));
    }

    #[test]
    fn test_fixed_width_requires_all_digits() {
        let mut cursor = Cursor::new("208");
        assert!(cursor.digits(4, 4, "year").is_err());
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_longest_name_wins() {
        let mut cursor = Cursor::new("magh");
        let tables: [&[&str]; 2] = [&["Mag"], &["Magh"]];
        assert_eq!(cursor.one_of(&tables, "month"), Ok(0));
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_whitespace_matches_runs() {
        let dt = parse("2080-10-24 \t 14:05", "%Y-%m-%d %H:%M").unwrap();
        assert_eq!(dt.time(), (14, 5, 0, 0));
        assert!(parse("2080-10-2414:05", "%Y-%m-%d %H:%M").is_err());
    }

    #[test]
    fn test_twelve_hour_clock() {
        let pm = parse("2080-10-24 02:30 pm", "%Y-%m-%d %I:%M %p").unwrap();
        assert_eq!(pm.hour(), 14);
        let midnight = parse("2080-10-24 12:00 AM", "%Y-%m-%d %I:%M %p").unwrap();
        assert_eq!(midnight.hour(), 0);
        let noon = parse("2080-10-24 12:00 PM", "%Y-%m-%d %I:%M %p").unwrap();
        assert_eq!(noon.hour(), 12);
    }

    #[test]
    fn test_nepali_periods() {
        let cases = [
            ("०७:०० बिहान", 7),
            ("०२:०० दिउँसो", 14),
            ("१२:०० दिउँसो", 12),
            ("०६:०० बेलुका", 18),
            ("०९:०० राति", 21),
            ("०२:०० राति", 2),
        ];
        for (time, hour) in cases {
            let text = format!("२०८०-१०-२४ {time}");
            let dt = parse(&text, "%K-%n-%D %I:%i %P").unwrap();
            assert_eq!(dt.hour(), hour, "{time}");
        }
    }

    #[test]
    fn test_offset_and_zone_make_aware() {
        let dt = parse("2080-10-24 10:00 +05:45", "%Y-%m-%d %H:%M %z").unwrap();
        assert_eq!(dt.timezone().map(|tz| tz.utc_offset_minutes()), Some(345));

        let dt = parse("2080-10-24 10:00 NPT", "%Y-%m-%d %H:%M %Z").unwrap();
        assert_eq!(dt.timezone(), Some(NPT));

        assert!(parse("2080-10-24 +0575", "%Y-%m-%d %z").is_err());
    }

    #[test]
    fn test_day_of_year() {
        let dt = parse("2080 031", "%Y %j").unwrap();
        assert_eq!(dt.date(), BsDate::new(2080, 2, 1).unwrap());
        assert!(matches!(
            parse("2080 400", "%Y %j"),
            Err(Error::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_missing_fields() {
        assert!(matches!(
            parse("10-24", "%m-%d"),
            Err(Error::Parse { reason, .. }) if reason == "missing year"
        ));
        assert!(matches!(
            parse("2080-24", "%Y-%d"),
            Err(Error::Parse { reason, .. }) if reason == "missing month"
        ));
    }

    #[test]
    fn test_trailing_input_rejected() {
        assert!(matches!(
            parse("2080-10-24x", "%Y-%m-%d"),
            Err(Error::Parse { position: 10, .. })
        ));
    }

    #[test]
    fn test_microseconds_scale_by_width() {
        let dt = parse("2080-10-24 10:00:00.5", "%Y-%m-%d %H:%M:%S.%f").unwrap();
        assert_eq!(dt.microsecond(), 500_000);
    }

    #[test]
    fn test_weekday_is_not_cross_checked() {
        let dt = parse("Friday 2080-10-24", "%A %Y-%m-%d").unwrap();
        assert_eq!(dt.weekday(), 2);
    }
}
