//! Parsing without a caller-supplied pattern.

use super::cached;
use crate::date::BsDate;
use crate::datetime::BsDateTime;
use crate::error::{Error, Result};

/// Patterns tried by [`parse`], in order.
///
/// The two-digit year shapes at the end read `yy` below 50 as `20yy` and
/// the rest as `19yy`.
pub const CANONICAL_PATTERNS: [&str; 14] = [
    "%Y-%m-%d %H:%M:%S.%f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %I:%M %p",
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%K-%n-%D",
    "%K/%n/%D",
    "%B %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
    "%d %B, %Y",
    "%y-%m-%d",
    "%y/%m/%d",
];

/// Canonical patterns whose two-digit year pivots at 50.
const PIVOTED_SHORT_YEAR: [&str; 2] = ["%y-%m-%d", "%y/%m/%d"];

/// Maps a year captured as `2000 + yy` onto 1950..=2049.
fn pivot_short_year(year: i32) -> i32 {
    if year >= 2050 {
        year - 100
    } else {
        year
    }
}

/// The result of [`parse`]: a date unless the matching pattern had time
/// fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Parsed {
    Date(BsDate),
    DateTime(BsDateTime),
}

impl Parsed {
    pub fn date(&self) -> BsDate {
        match self {
            Parsed::Date(date) => *date,
            Parsed::DateTime(dt) => dt.date(),
        }
    }

    /// The parsed value as a date-time; dates become midnight.
    pub fn into_datetime(self) -> BsDateTime {
        match self {
            Parsed::Date(date) => date.into(),
            Parsed::DateTime(dt) => dt,
        }
    }
}

/// Parses text in any of the [`CANONICAL_PATTERNS`].
///
/// Surrounding whitespace is ignored. Text that matches a pattern but names
/// an impossible date reports the validation error rather than trying the
/// remaining patterns.
///
/// ```
/// use sambat::{parse, BsDate, Parsed};
///
/// let date = BsDate::new(2080, 10, 24).unwrap();
/// assert_eq!(parse("Magh 24, 2080").unwrap(), Parsed::Date(date));
/// assert_eq!(parse("२०८०-१०-२४").unwrap(), Parsed::Date(date));
/// assert!(matches!(parse("2080-10-24 14:30").unwrap(), Parsed::DateTime(_)));
/// ```
pub fn parse(text: &str) -> Result<Parsed> {
    let text = text.trim();
    for pattern in CANONICAL_PATTERNS {
        let matcher = cached(pattern)?;
        let mut captures = match matcher.captures(text) {
            Ok(captures) => captures,
            Err(Error::Parse { .. }) => continue,
            Err(err) => return Err(err),
        };
        if PIVOTED_SHORT_YEAR.contains(&pattern) {
            captures.year = captures.year.map(pivot_short_year);
        }
        let dt = captures.assemble(text.len())?;
        return Ok(if matcher.has_time() {
            Parsed::DateTime(dt)
        } else {
            Parsed::Date(dt.date())
        });
    }
    Err(Error::parse(
        0,
        format!("{text:?} matches no known date format"),
    ))
}

/// Parses text in any canonical format, keeping only the date.
pub fn parse_date(text: &str) -> Result<BsDate> {
    Ok(parse(text)?.date())
}

/// Parses text in any canonical format; bare dates become midnight.
pub fn parse_datetime(text: &str) -> Result<BsDateTime> {
    Ok(parse(text)?.into_datetime())
}
