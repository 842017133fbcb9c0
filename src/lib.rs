//! sambat - Bikram Sambat (Nepali) calendar conversion and formatting
//!
//! This crate converts dates between the Gregorian calendar (AD) and Bikram
//! Sambat (BS) for BS 1901 through 2199, and renders and parses them with
//! strftime-style patterns that understand Devanagari digits and Nepali
//! month and weekday names.
//!
//! ```
//! use sambat::{ad_to_bs, BsDate};
//!
//! assert_eq!(ad_to_bs(2024, 2, 6).unwrap(), (2080, 10, 24));
//!
//! let date = BsDate::new(2080, 10, 24).unwrap();
//! assert_eq!(date.strftime("%N %D, %K").unwrap(), "माघ २४, २०८०");
//! assert_eq!(BsDate::strptime("24 Magh 2080", "%d %B %Y").unwrap(), date);
//! ```
//!
//! # Features
//!
//! - `chrono` (default): conversions to and from `chrono` types and the
//!   local wall clock. Without it, "local" time is UTC.
//! - `log`: debug and trace records for table construction and cache
//!   activity.

pub mod calendar;
pub mod error;
pub mod grid;
pub mod locale;
pub mod numbers;
pub mod options;
pub mod ordinal;
pub mod pattern;
pub mod tz;
pub mod value;

mod cache;
mod clock;
mod codes;
mod convert;
mod date;
mod datetime;
mod duration;
mod formatter;
mod scanner;

pub use cache::{cache_stats, clear_caches, CacheStats};
pub use calendar::{days_in_month, days_in_year, is_valid_bs_date, BS_MAX_YEAR, BS_MIN_YEAR};
pub use convert::{ad_range, ad_to_bs, bs_range, bs_to_ad};
pub use date::BsDate;
pub use datetime::BsDateTime;
pub use duration::Duration;
pub use error::{Error, Result};
pub use grid::{month_calendar, year_calendar, GridOptions};
pub use locale::{from_devanagari, to_devanagari, to_nepali_text, Script, TranslateOptions};
pub use numbers::{
    format_number, from_nepali_ordinal, group_digits, nepali_ordinal_from_english,
    to_nepali_ordinal, to_nepali_words,
};
pub use options::{FormatOptions, MonthStyle, Numerals, Timespec, UnknownCodePolicy};
pub use pattern::{FormatToken, Pattern};
pub use scanner::{parse, parse_date, parse_datetime, Matcher, Parsed, CANONICAL_PATTERNS};
pub use tz::{TimeZone, Zone, NPT, UTC};
pub use value::Value;
