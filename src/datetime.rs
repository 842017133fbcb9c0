//! Bikram Sambat date-time, naive or with a fixed-offset zone.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Sub};

use crate::clock::{self, MICROS_PER_DAY};
use crate::date::BsDate;
use crate::duration::Duration;
use crate::error::{Error, Result};
use crate::formatter;
use crate::options::{FormatOptions, Timespec};
use crate::ordinal::UNIX_EPOCH_ORDINAL;
use crate::scanner;
use crate::tz::{TimeZone, Zone, NPT};

/// A BS date and wall-clock time with microsecond precision.
///
/// Values are either naive or aware ([`Zone`]). Aware values compare and
/// subtract on their UTC instant; naive values on their wall time. Mixing
/// the two is a [`Error::TypeMismatch`]: [`PartialOrd::partial_cmp`]
/// returns `None`, `==` returns `false` and [`BsDateTime::try_cmp`]
/// reports the error.
#[derive(Debug, Clone, Copy)]
pub struct BsDateTime {
    date: BsDate,
    hour: u8,
    minute: u8,
    second: u8,
    microsecond: u32,
    zone: Zone,
}

fn check_time(hour: u8, minute: u8, second: u8, microsecond: u32) -> Result<()> {
    let fields = [
        ("hour", u32::from(hour), 23),
        ("minute", u32::from(minute), 59),
        ("second", u32::from(second), 59),
        ("microsecond", microsecond, 999_999),
    ];
    for (field, value, max) in fields {
        if value > max {
            return Err(Error::InvalidTime { field, value, max });
        }
    }
    Ok(())
}

impl BsDateTime {
    /// Creates a naive date-time.
    pub fn new(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        microsecond: u32,
    ) -> Result<BsDateTime> {
        BsDateTime::combine(BsDate::new(year, month, day)?, hour, minute, second, microsecond)
    }

    /// Creates an aware date-time whose wall time is local to `tz`.
    #[allow(clippy::too_many_arguments)]
    pub fn new_aware(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        microsecond: u32,
        tz: TimeZone,
    ) -> Result<BsDateTime> {
        Ok(BsDateTime::new(year, month, day, hour, minute, second, microsecond)?.with_timezone(tz))
    }

    /// Joins a date with a wall-clock time.
    pub fn combine(
        date: BsDate,
        hour: u8,
        minute: u8,
        second: u8,
        microsecond: u32,
    ) -> Result<BsDateTime> {
        check_time(hour, minute, second, microsecond)?;
        Ok(BsDateTime {
            date,
            hour,
            minute,
            second,
            microsecond,
            zone: Zone::Naive,
        })
    }

    fn from_parts(ordinal: i64, micros: i64, zone: Zone) -> Result<BsDateTime> {
        let date = BsDate::from_ordinal(ordinal)?;
        let secs = micros / 1_000_000;
        Ok(BsDateTime {
            date,
            hour: (secs / 3_600) as u8,
            minute: (secs / 60 % 60) as u8,
            second: (secs % 60) as u8,
            microsecond: (micros % 1_000_000) as u32,
            zone,
        })
    }

    /// Converts a Gregorian date and time.
    pub fn from_ad(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        microsecond: u32,
    ) -> Result<BsDateTime> {
        BsDateTime::combine(BsDate::from_ad(year, month, day)?, hour, minute, second, microsecond)
    }

    /// The current time.
    ///
    /// With a zone, the result is aware and shows that zone's wall time.
    /// Without one it is naive local time (naive UTC when the `chrono`
    /// feature is disabled).
    pub fn now(tz: Option<TimeZone>) -> Result<BsDateTime> {
        match tz {
            Some(tz) => {
                let local = clock::shift_minutes(clock::utc_now(), i64::from(tz.utc_offset_minutes()));
                BsDateTime::from_parts(local.0, local.1, Zone::Aware(tz))
            }
            None => {
                let (ordinal, micros) = clock::local_now();
                BsDateTime::from_parts(ordinal, micros, Zone::Naive)
            }
        }
    }

    /// The wall time in `tz` at a Unix timestamp in seconds. Without a zone
    /// the result is in Nepal time.
    pub fn from_timestamp(seconds: i64, tz: Option<TimeZone>) -> Result<BsDateTime> {
        BsDateTime::from_unix_micros(i128::from(seconds) * 1_000_000, tz.unwrap_or(NPT))
    }

    /// Like [`from_timestamp`](Self::from_timestamp) with microsecond precision.
    pub fn from_timestamp_micros(micros: i64, tz: Option<TimeZone>) -> Result<BsDateTime> {
        BsDateTime::from_unix_micros(i128::from(micros), tz.unwrap_or(NPT))
    }

    fn from_unix_micros(micros: i128, tz: TimeZone) -> Result<BsDateTime> {
        let local = micros
            + i128::from(UNIX_EPOCH_ORDINAL * MICROS_PER_DAY)
            + i128::from(tz.utc_offset_minutes()) * 60_000_000;
        let local = i64::try_from(local).map_err(|_| {
            Error::out_of_range(
                "timestamp",
                i64::try_from(micros / 1_000_000).unwrap_or(i64::MAX),
                i64::MIN,
                i64::MAX,
            )
        })?;
        BsDateTime::from_parts(
            local.div_euclid(MICROS_PER_DAY),
            local.rem_euclid(MICROS_PER_DAY),
            Zone::Aware(tz),
        )
    }

    /// The current time in `tz`.
    pub fn now_in(tz: TimeZone) -> Result<BsDateTime> {
        BsDateTime::now(Some(tz))
    }

    /// Midnight today, naive local time.
    pub fn today() -> Result<BsDateTime> {
        BsDateTime::combine(BsDate::today()?, 0, 0, 0, 0)
    }

    pub fn date(&self) -> BsDate {
        self.date
    }

    /// `(hour, minute, second, microsecond)`.
    pub fn time(&self) -> (u8, u8, u8, u32) {
        (self.hour, self.minute, self.second, self.microsecond)
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn month(&self) -> u8 {
        self.date.month()
    }

    pub fn day(&self) -> u8 {
        self.date.day()
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn second(&self) -> u8 {
        self.second
    }

    pub fn microsecond(&self) -> u32 {
        self.microsecond
    }

    pub fn zone(&self) -> Zone {
        self.zone
    }

    pub fn timezone(&self) -> Option<TimeZone> {
        self.zone.timezone()
    }

    pub fn is_aware(&self) -> bool {
        self.zone.is_aware()
    }

    pub fn weekday(&self) -> u8 {
        self.date.weekday()
    }

    pub fn ordinal(&self) -> i64 {
        self.date.ordinal()
    }

    /// ISO day of the week, 1 = Monday through 7 = Sunday.
    pub fn isoweekday(&self) -> u8 {
        self.date.isoweekday()
    }

    /// Seconds since the Unix epoch, rounded down.
    ///
    /// Only aware values name an instant; naive ones fail with
    /// [`Error::TypeMismatch`].
    pub fn timestamp(&self) -> Result<i64> {
        Ok(self.timestamp_micros()?.div_euclid(1_000_000))
    }

    /// Microseconds since the Unix epoch.
    pub fn timestamp_micros(&self) -> Result<i64> {
        if !self.is_aware() {
            return Err(Error::TypeMismatch);
        }
        Ok(self.utc_micros() - UNIX_EPOCH_ORDINAL * MICROS_PER_DAY)
    }

    /// Replaces the date, keeping the time and zone.
    pub fn with_date(self, date: BsDate) -> BsDateTime {
        BsDateTime { date, ..self }
    }

    pub fn with_year(self, year: i32) -> Result<BsDateTime> {
        Ok(self.with_date(self.date.with_year(year)?))
    }

    pub fn with_month(self, month: u8) -> Result<BsDateTime> {
        Ok(self.with_date(self.date.with_month(month)?))
    }

    pub fn with_day(self, day: u8) -> Result<BsDateTime> {
        Ok(self.with_date(self.date.with_day(day)?))
    }

    pub fn with_hour(self, hour: u8) -> Result<BsDateTime> {
        self.with_time(hour, self.minute, self.second, self.microsecond)
    }

    pub fn with_minute(self, minute: u8) -> Result<BsDateTime> {
        self.with_time(self.hour, minute, self.second, self.microsecond)
    }

    pub fn with_second(self, second: u8) -> Result<BsDateTime> {
        self.with_time(self.hour, self.minute, second, self.microsecond)
    }

    pub fn with_microsecond(self, microsecond: u32) -> Result<BsDateTime> {
        self.with_time(self.hour, self.minute, self.second, microsecond)
    }

    /// Replaces the time of day, keeping the date and zone.
    pub fn with_time(
        self,
        hour: u8,
        minute: u8,
        second: u8,
        microsecond: u32,
    ) -> Result<BsDateTime> {
        check_time(hour, minute, second, microsecond)?;
        Ok(BsDateTime {
            hour,
            minute,
            second,
            microsecond,
            ..self
        })
    }

    /// ISO 8601 style text: `2080-10-24T14:30:00+05:45`.
    ///
    /// `sep` goes between the date and the time. Aware values end with
    /// their UTC offset.
    ///
    /// ```
    /// use sambat::{BsDateTime, Timespec, NPT};
    ///
    /// let dt = BsDateTime::new_aware(2080, 10, 24, 14, 30, 5, 250_000, NPT).unwrap();
    /// assert_eq!(dt.isoformat('T', Timespec::Auto), "2080-10-24T14:30:05.250000+05:45");
    /// assert_eq!(dt.isoformat(' ', Timespec::Minutes), "2080-10-24 14:30+05:45");
    /// ```
    pub fn isoformat(&self, sep: char, timespec: Timespec) -> String {
        let fields = match timespec {
            Timespec::Hours => 1,
            Timespec::Minutes => 2,
            Timespec::Seconds => 3,
            Timespec::Milliseconds => 4,
            Timespec::Microseconds => 5,
            Timespec::Auto if self.microsecond != 0 => 5,
            Timespec::Auto => 3,
        };

        let mut out = format!("{}{sep}{:02}", self.date, self.hour);
        if fields >= 2 {
            out.push_str(&format!(":{:02}", self.minute));
        }
        if fields >= 3 {
            out.push_str(&format!(":{:02}", self.second));
        }
        match fields {
            4 => out.push_str(&format!(".{:03}", self.microsecond / 1_000)),
            5 => out.push_str(&format!(".{:06}", self.microsecond)),
            _ => {}
        }
        if let Some(tz) = self.timezone() {
            out.push_str(&tz.offset_string(true));
        }
        out
    }

    /// Attaches a zone without changing the wall time.
    pub fn with_timezone(self, tz: TimeZone) -> BsDateTime {
        BsDateTime {
            zone: Zone::Aware(tz),
            ..self
        }
    }

    /// Drops the zone, keeping the wall time.
    pub fn naive(self) -> BsDateTime {
        BsDateTime {
            zone: Zone::Naive,
            ..self
        }
    }

    /// Re-expresses an aware value in another zone; the instant is unchanged.
    pub fn to_timezone(self, tz: TimeZone) -> Result<BsDateTime> {
        if !self.is_aware() {
            return Err(Error::TypeMismatch);
        }
        let utc = self.utc_micros();
        let local = utc + i64::from(tz.utc_offset_minutes()) * 60_000_000;
        BsDateTime::from_parts(
            local.div_euclid(MICROS_PER_DAY),
            local.rem_euclid(MICROS_PER_DAY),
            Zone::Aware(tz),
        )
    }

    fn micros_of_day(&self) -> i64 {
        ((i64::from(self.hour) * 60 + i64::from(self.minute)) * 60 + i64::from(self.second))
            * 1_000_000
            + i64::from(self.microsecond)
    }

    /// Wall time in microseconds since the start of ordinal day 0.
    fn wall_micros(&self) -> i64 {
        self.date.ordinal() * MICROS_PER_DAY + self.micros_of_day()
    }

    /// The comparison key: wall time for naive values, UTC for aware ones.
    fn utc_micros(&self) -> i64 {
        self.wall_micros() - self.zone.offset_minutes() * 60_000_000
    }

    fn same_kind(&self, other: &BsDateTime) -> Result<()> {
        if self.is_aware() == other.is_aware() {
            Ok(())
        } else {
            Err(Error::TypeMismatch)
        }
    }

    /// Compares two values of the same kind.
    pub fn try_cmp(&self, other: &BsDateTime) -> Result<Ordering> {
        self.same_kind(other)?;
        Ok(self.utc_micros().cmp(&other.utc_micros()))
    }

    pub fn checked_add(self, duration: Duration) -> Result<BsDateTime> {
        let total = i128::from(self.wall_micros()) + duration.total_microseconds();
        let total = i64::try_from(total)
            .map_err(|_| Error::out_of_range("microseconds", i64::MAX, i64::MIN, i64::MAX))?;
        BsDateTime::from_parts(
            total.div_euclid(MICROS_PER_DAY),
            total.rem_euclid(MICROS_PER_DAY),
            self.zone,
        )
    }

    pub fn checked_sub(self, duration: Duration) -> Result<BsDateTime> {
        self.checked_add(-duration)
    }

    /// Elapsed time from `other` to `self`.
    pub fn signed_duration_since(&self, other: &BsDateTime) -> Result<Duration> {
        self.same_kind(other)?;
        Duration::from_total_micros(i128::from(self.utc_micros()) - i128::from(other.utc_micros()))
    }

    /// Formats with default options.
    ///
    /// ```
    /// use sambat::{BsDateTime, NPT};
    ///
    /// let dt = BsDateTime::new_aware(2080, 10, 24, 14, 30, 0, 0, NPT).unwrap();
    /// assert_eq!(dt.strftime("%H:%M %z").unwrap(), "14:30 +0545");
    /// assert_eq!(dt.strftime("%h:%i %P").unwrap(), "१४:३० दिउँसो");
    /// ```
    pub fn strftime(&self, pattern: &str) -> Result<String> {
        formatter::format_pattern(pattern, (*self).into(), &FormatOptions::default())
    }

    pub fn format_with(&self, pattern: &str, opts: &FormatOptions) -> Result<String> {
        formatter::format_pattern(pattern, (*self).into(), opts)
    }

    /// Parses a date-time; `%z` or `%Z` in the pattern makes it aware.
    pub fn strptime(text: &str, pattern: &str) -> Result<BsDateTime> {
        scanner::strptime(text, pattern)
    }
}

impl PartialEq for BsDateTime {
    fn eq(&self, other: &Self) -> bool {
        matches!(self.try_cmp(other), Ok(Ordering::Equal))
    }
}

impl Eq for BsDateTime {}

impl Hash for BsDateTime {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.is_aware().hash(state);
        self.utc_micros().hash(state);
    }
}

impl PartialOrd for BsDateTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.try_cmp(other).ok()
    }
}

/// # Panics
///
/// Panics if the result leaves the supported span.
impl Add<Duration> for BsDateTime {
    type Output = BsDateTime;

    fn add(self, rhs: Duration) -> BsDateTime {
        match self.checked_add(rhs) {
            Ok(dt) => dt,
            Err(err) => panic!("{err}"),
        }
    }
}

/// # Panics
///
/// Panics if the result leaves the supported span.
impl Sub<Duration> for BsDateTime {
    type Output = BsDateTime;

    fn sub(self, rhs: Duration) -> BsDateTime {
        match self.checked_sub(rhs) {
            Ok(dt) => dt,
            Err(err) => panic!("{err}"),
        }
    }
}

/// Fails with [`Error::TypeMismatch`] when mixing naive and aware values.
impl Sub for BsDateTime {
    type Output = Result<Duration>;

    fn sub(self, rhs: BsDateTime) -> Result<Duration> {
        self.signed_duration_since(&rhs)
    }
}

impl fmt::Display for BsDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.isoformat(' ', Timespec::Auto))
    }
}

impl From<BsDate> for BsDateTime {
    fn from(date: BsDate) -> Self {
        BsDateTime {
            date,
            hour: 0,
            minute: 0,
            second: 0,
            microsecond: 0,
            zone: Zone::Naive,
        }
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<chrono::NaiveDateTime> for BsDateTime {
    type Error = Error;

    fn try_from(dt: chrono::NaiveDateTime) -> Result<BsDateTime> {
        use chrono::Timelike;

        BsDateTime::combine(
            BsDate::try_from(dt.date())?,
            dt.hour() as u8,
            dt.minute() as u8,
            dt.second() as u8,
            (dt.nanosecond() / 1_000).min(999_999),
        )
    }
}

#[cfg(feature = "chrono")]
impl BsDateTime {
    /// The Gregorian wall time as a [`chrono::NaiveDateTime`]. The zone, if
    /// any, is dropped.
    pub fn to_naive_datetime(&self) -> Result<chrono::NaiveDateTime> {
        let time = chrono::NaiveTime::from_hms_micro_opt(
            u32::from(self.hour),
            u32::from(self.minute),
            u32::from(self.second),
            self.microsecond,
        )
        .ok_or(Error::InvalidTime {
            field: "microsecond",
            value: self.microsecond,
            max: 999_999,
        })?;
        Ok(self.date.to_naive_date()?.and_time(time))
    }
}
