//! Signed elapsed time with microsecond resolution.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::error::{Error, Result};

const SECONDS_PER_DAY: i128 = 86_400;
const MICROS_PER_SECOND: i128 = 1_000_000;
const MICROS_PER_DAY: i128 = SECONDS_PER_DAY * MICROS_PER_SECOND;

/// A span of time as `(days, seconds, microseconds)`.
///
/// The representation is normalized: `seconds` is in `0..86_400`,
/// `microseconds` in `0..1_000_000` and the sign lives in `days`. So one
/// microsecond before zero is `(-1, 86_399, 999_999)`.
///
/// Ordering follows the represented length of time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Duration {
    days: i64,
    seconds: u32,
    microseconds: u32,
}

impl Duration {
    pub const ZERO: Duration = Duration {
        days: 0,
        seconds: 0,
        microseconds: 0,
    };

    /// Builds a normalized duration from unnormalized parts.
    ///
    /// # Panics
    ///
    /// Panics if the total does not fit; see [`Duration::try_new`].
    pub fn new(days: i64, seconds: i64, microseconds: i64) -> Duration {
        match Self::try_new(days, seconds, microseconds) {
            Ok(duration) => duration,
            Err(err) => panic!("{err}"),
        }
    }

    /// Builds a normalized duration, failing if the day count overflows.
    pub fn try_new(days: i64, seconds: i64, microseconds: i64) -> Result<Duration> {
        let total = i128::from(days) * MICROS_PER_DAY
            + i128::from(seconds) * MICROS_PER_SECOND
            + i128::from(microseconds);
        Self::from_total_micros(total)
    }

    pub(crate) fn from_total_micros(total: i128) -> Result<Duration> {
        let days = i64::try_from(total.div_euclid(MICROS_PER_DAY))
            .map_err(|_| Error::out_of_range("duration days", i64::MAX, i64::MIN, i64::MAX))?;
        let rest = total.rem_euclid(MICROS_PER_DAY);
        Ok(Duration {
            days,
            seconds: (rest / MICROS_PER_SECOND) as u32,
            microseconds: (rest % MICROS_PER_SECOND) as u32,
        })
    }

    pub fn from_weeks(weeks: i64) -> Duration {
        Duration::new(weeks.saturating_mul(7), 0, 0)
    }

    pub fn from_days(days: i64) -> Duration {
        Duration::new(days, 0, 0)
    }

    pub fn from_hours(hours: i64) -> Duration {
        Duration::new(hours.div_euclid(24), hours.rem_euclid(24) * 3_600, 0)
    }

    pub fn from_minutes(minutes: i64) -> Duration {
        Duration::new(minutes.div_euclid(1_440), minutes.rem_euclid(1_440) * 60, 0)
    }

    pub fn from_seconds(seconds: i64) -> Duration {
        Duration::new(0, seconds, 0)
    }

    pub fn from_micros(microseconds: i64) -> Duration {
        Duration::new(0, 0, microseconds)
    }

    pub fn days(&self) -> i64 {
        self.days
    }

    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    pub fn microseconds(&self) -> u32 {
        self.microseconds
    }

    /// The whole span in microseconds.
    pub fn total_microseconds(&self) -> i128 {
        i128::from(self.days) * MICROS_PER_DAY
            + i128::from(self.seconds) * MICROS_PER_SECOND
            + i128::from(self.microseconds)
    }

    /// The whole span in seconds, as a float.
    pub fn total_seconds(&self) -> f64 {
        self.total_microseconds() as f64 / 1e6
    }

    pub fn is_negative(&self) -> bool {
        self.days < 0
    }

    pub fn is_zero(&self) -> bool {
        *self == Duration::ZERO
    }

    pub fn abs(&self) -> Duration {
        if self.is_negative() {
            -*self
        } else {
            *self
        }
    }

    pub fn checked_add(self, rhs: Duration) -> Result<Duration> {
        Duration::from_total_micros(self.total_microseconds() + rhs.total_microseconds())
    }

    pub fn checked_sub(self, rhs: Duration) -> Result<Duration> {
        Duration::from_total_micros(self.total_microseconds() - rhs.total_microseconds())
    }
}

/// # Panics
///
/// Panics on overflow.
impl Add for Duration {
    type Output = Duration;

    fn add(self, rhs: Duration) -> Duration {
        match self.checked_add(rhs) {
            Ok(duration) => duration,
            Err(err) => panic!("{err}"),
        }
    }
}

/// # Panics
///
/// Panics on overflow.
impl Sub for Duration {
    type Output = Duration;

    fn sub(self, rhs: Duration) -> Duration {
        match self.checked_sub(rhs) {
            Ok(duration) => duration,
            Err(err) => panic!("{err}"),
        }
    }
}

impl Neg for Duration {
    type Output = Duration;

    fn neg(self) -> Duration {
        Duration::ZERO - self
    }
}

/// # Panics
///
/// Panics on overflow.
impl Mul<i64> for Duration {
    type Output = Duration;

    fn mul(self, rhs: i64) -> Duration {
        let total = self.total_microseconds().checked_mul(i128::from(rhs));
        match total.map(Duration::from_total_micros) {
            Some(Ok(duration)) => duration,
            _ => panic!("duration multiplication overflowed"),
        }
    }
}

/// `[-]D day[s], H:MM:SS[.ffffff]`, with the day part omitted when zero.
impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.days != 0 {
            let plural = if self.days.abs() == 1 { "" } else { "s" };
            write!(f, "{} day{plural}, ", self.days)?;
        }
        let (h, rest) = (self.seconds / 3_600, self.seconds % 3_600);
        write!(f, "{h}:{:02}:{:02}", rest / 60, rest % 60)?;
        if self.microseconds != 0 {
            write!(f, ".{:06}", self.microseconds)?;
        }
        Ok(())
    }
}
