//! Fixed-offset time zones and the naive/aware tag.

use std::borrow::Cow;
use std::fmt;

use crate::error::{Error, Result};

/// Largest accepted offset magnitude, in minutes.
const MAX_OFFSET_MINUTES: i16 = 23 * 60 + 59;

/// A time zone with a constant UTC offset and no daylight saving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeZone {
    offset_minutes: i16,
    name: Option<&'static str>,
}

/// Nepal Time, UTC+05:45.
pub const NPT: TimeZone = TimeZone::with_name(5 * 60 + 45, "Asia/Kathmandu");

/// Coordinated Universal Time.
pub const UTC: TimeZone = TimeZone::with_name(0, "UTC");

impl TimeZone {
    /// Creates a named zone.
    ///
    /// # Panics
    ///
    /// Panics if the offset is 24 hours or more in either direction. In a
    /// `const` item this is a compile-time error.
    pub const fn with_name(offset_minutes: i16, name: &'static str) -> TimeZone {
        assert!(
            offset_minutes >= -MAX_OFFSET_MINUTES && offset_minutes <= MAX_OFFSET_MINUTES,
            "offset must be within +/-23:59"
        );
        TimeZone {
            offset_minutes,
            name: Some(name),
        }
    }

    /// Creates an unnamed zone.
    pub fn fixed(offset_minutes: i16) -> Result<TimeZone> {
        if !(-MAX_OFFSET_MINUTES..=MAX_OFFSET_MINUTES).contains(&offset_minutes) {
            return Err(Error::out_of_range(
                "UTC offset minutes",
                i64::from(offset_minutes),
                i64::from(-MAX_OFFSET_MINUTES),
                i64::from(MAX_OFFSET_MINUTES),
            ));
        }
        Ok(TimeZone {
            offset_minutes,
            name: None,
        })
    }

    /// Looks up a zone by one of its recognized names.
    pub fn from_name(name: &str) -> Option<TimeZone> {
        match name {
            "Asia/Kathmandu" | "NPT" => Some(NPT),
            "UTC" => Some(UTC),
            _ => None,
        }
    }

    pub fn utc_offset_minutes(&self) -> i16 {
        self.offset_minutes
    }

    /// Always zero; fixed offsets never observe daylight saving.
    pub fn dst(&self) -> i16 {
        0
    }

    /// The zone's name, or `UTC+HH:MM` when it has none.
    pub fn name(&self) -> Cow<'static, str> {
        match self.name {
            Some(name) => Cow::Borrowed(name),
            None => Cow::Owned(format!("UTC{}", self.offset_string(true))),
        }
    }

    /// Renders the offset as `+HHMM`, or `+HH:MM` with `colon`.
    pub fn offset_string(&self, colon: bool) -> String {
        let sign = if self.offset_minutes < 0 { '-' } else { '+' };
        let minutes = self.offset_minutes.unsigned_abs();
        let (h, m) = (minutes / 60, minutes % 60);
        if colon {
            format!("{sign}{h:02}:{m:02}")
        } else {
            format!("{sign}{h:02}{m:02}")
        }
    }
}

impl fmt::Display for TimeZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// Whether a date-time carries a time zone.
///
/// Naive and aware values never compare or combine with each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Zone {
    #[default]
    Naive,
    Aware(TimeZone),
}

impl Zone {
    pub fn is_aware(&self) -> bool {
        matches!(self, Zone::Aware(_))
    }

    pub fn timezone(&self) -> Option<TimeZone> {
        match self {
            Zone::Naive => None,
            Zone::Aware(tz) => Some(*tz),
        }
    }

    /// UTC offset in minutes; zero for naive values.
    pub(crate) fn offset_minutes(&self) -> i64 {
        self.timezone()
            .map_or(0, |tz| i64::from(tz.utc_offset_minutes()))
    }
}

impl From<TimeZone> for Zone {
    fn from(tz: TimeZone) -> Self {
        Zone::Aware(tz)
    }
}
