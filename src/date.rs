//! The Bikram Sambat calendar date.

use std::fmt;
use std::ops::{Add, Sub};

use crate::calendar::{days_in_month, CalendarTable};
use crate::clock;
use crate::convert::ad_to_bs;
use crate::error::{Error, Result};
use crate::formatter;
use crate::options::FormatOptions;
use crate::ordinal::{bs_to_ordinal, ordinal_to_ad, ordinal_to_bs, weekday_of_ordinal};
use crate::scanner;

/// A valid date in the Bikram Sambat calendar, BS 1901-01-01 through
/// 2199-12-30.
///
/// Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BsDate {
    year: i32,
    month: u8,
    day: u8,
    ordinal: i64,
}

impl BsDate {
    /// Creates a date, validating it against the calendar table.
    ///
    /// ```
    /// use sambat::BsDate;
    ///
    /// let date = BsDate::new(2080, 10, 24).unwrap();
    /// assert_eq!(date.to_ad(), (2024, 2, 6));
    /// assert!(BsDate::new(2080, 1, 32).is_err());
    /// ```
    pub fn new(year: i32, month: u8, day: u8) -> Result<BsDate> {
        let ordinal = bs_to_ordinal(year, month, day)?;
        Ok(BsDate {
            year,
            month,
            day,
            ordinal,
        })
    }

    /// Creates the date falling on an ordinal (0001-01-01 AD = 1).
    pub fn from_ordinal(ordinal: i64) -> Result<BsDate> {
        let (year, month, day) = ordinal_to_bs(ordinal)?;
        Ok(BsDate {
            year,
            month,
            day,
            ordinal,
        })
    }

    /// Creates the date on a 1-based day of a BS year.
    pub fn from_day_of_year(year: i32, day_of_year: u16) -> Result<BsDate> {
        let entry = CalendarTable::get().year(year)?;
        if !(1..=entry.days()).contains(&day_of_year) {
            return Err(Error::out_of_range(
                "day of year",
                i64::from(day_of_year),
                1,
                i64::from(entry.days()),
            ));
        }
        BsDate::from_ordinal(entry.start_ordinal + i64::from(day_of_year) - 1)
    }

    /// Converts a Gregorian date.
    pub fn from_ad(year: i32, month: u8, day: u8) -> Result<BsDate> {
        let (y, m, d) = ad_to_bs(year, month, day)?;
        BsDate::new(y, m, d)
    }

    /// Today in local time.
    pub fn today() -> Result<BsDate> {
        let (ordinal, _) = clock::local_now();
        BsDate::from_ordinal(ordinal)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    /// Position on the shared day axis, 0001-01-01 AD = 1.
    pub fn ordinal(&self) -> i64 {
        self.ordinal
    }

    /// Day of the week, 0 = Sunday.
    pub fn weekday(&self) -> u8 {
        weekday_of_ordinal(self.ordinal)
    }

    /// ISO day of the week, 1 = Monday through 7 = Sunday.
    pub fn isoweekday(&self) -> u8 {
        match self.weekday() {
            0 => 7,
            weekday => weekday,
        }
    }

    /// Day of the year, 1 = Baishakh 1.
    pub fn day_of_year(&self) -> u16 {
        let start = CalendarTable::get()
            .year_start_ordinal(self.year)
            .unwrap_or(self.ordinal);
        (self.ordinal - start) as u16 + 1
    }

    /// Length of this date's month.
    pub fn days_in_month(&self) -> u8 {
        days_in_month(self.year, self.month).unwrap_or(self.day)
    }

    /// The same month and day in another year.
    pub fn with_year(self, year: i32) -> Result<BsDate> {
        BsDate::new(year, self.month, self.day)
    }

    pub fn with_month(self, month: u8) -> Result<BsDate> {
        BsDate::new(self.year, month, self.day)
    }

    pub fn with_day(self, day: u8) -> Result<BsDate> {
        BsDate::new(self.year, self.month, day)
    }

    /// The Gregorian `(year, month, day)`.
    pub fn to_ad(&self) -> (i32, u8, u8) {
        ordinal_to_ad(self.ordinal)
    }

    /// Moves by a signed number of days.
    pub fn checked_add_days(self, days: i64) -> Result<BsDate> {
        let ordinal = self.ordinal.checked_add(days).ok_or_else(|| {
            let table = CalendarTable::get();
            Error::out_of_range("ordinal", days, table.min_ordinal(), table.max_ordinal())
        })?;
        BsDate::from_ordinal(ordinal)
    }

    pub fn checked_sub_days(self, days: i64) -> Result<BsDate> {
        match days.checked_neg() {
            Some(back) => self.checked_add_days(back),
            None => Err(Error::out_of_range("days", days, -i64::MAX, i64::MAX)),
        }
    }

    /// The next day, if it is in range.
    pub fn succ(self) -> Option<BsDate> {
        self.checked_add_days(1).ok()
    }

    /// The previous day, if it is in range.
    pub fn pred(self) -> Option<BsDate> {
        self.checked_add_days(-1).ok()
    }

    /// Formats with default options.
    ///
    /// Time codes render as midnight; zone codes render empty.
    ///
    /// ```
    /// let date = sambat::BsDate::new(2080, 10, 24).unwrap();
    /// assert_eq!(date.strftime("%d %B %Y").unwrap(), "24 Magh 2080");
    /// assert_eq!(date.strftime("%K/%n/%D").unwrap(), "२०८०/१०/२४");
    /// ```
    pub fn strftime(&self, pattern: &str) -> Result<String> {
        formatter::format_pattern(pattern, (*self).into(), &FormatOptions::default())
    }

    pub fn format_with(&self, pattern: &str, opts: &FormatOptions) -> Result<String> {
        formatter::format_pattern(pattern, (*self).into(), opts)
    }

    /// Parses a date. Time fields in the pattern are matched and dropped.
    pub fn strptime(text: &str, pattern: &str) -> Result<BsDate> {
        Ok(scanner::strptime(text, pattern)?.date())
    }
}

/// # Panics
///
/// Panics if the result leaves the supported span; see
/// [`BsDate::checked_add_days`].
impl Add<i64> for BsDate {
    type Output = BsDate;

    fn add(self, days: i64) -> BsDate {
        match self.checked_add_days(days) {
            Ok(date) => date,
            Err(err) => panic!("{err}"),
        }
    }
}

/// # Panics
///
/// Panics if the result leaves the supported span.
impl Sub<i64> for BsDate {
    type Output = BsDate;

    fn sub(self, days: i64) -> BsDate {
        match self.checked_sub_days(days) {
            Ok(date) => date,
            Err(err) => panic!("{err}"),
        }
    }
}

/// Signed number of days between two dates.
impl Sub for BsDate {
    type Output = i64;

    fn sub(self, rhs: BsDate) -> i64 {
        self.ordinal - rhs.ordinal
    }
}

impl fmt::Display for BsDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<chrono::NaiveDate> for BsDate {
    type Error = Error;

    fn try_from(date: chrono::NaiveDate) -> Result<BsDate> {
        use chrono::Datelike;

        BsDate::from_ordinal(i64::from(date.num_days_from_ce()))
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<BsDate> for chrono::NaiveDate {
    type Error = Error;

    fn try_from(date: BsDate) -> Result<chrono::NaiveDate> {
        date.to_naive_date()
    }
}

#[cfg(feature = "chrono")]
impl BsDate {
    /// The Gregorian date as a [`chrono::NaiveDate`].
    pub fn to_naive_date(&self) -> Result<chrono::NaiveDate> {
        i32::try_from(self.ordinal)
            .ok()
            .and_then(chrono::NaiveDate::from_num_days_from_ce_opt)
            .ok_or_else(|| {
                Error::out_of_range("ordinal", self.ordinal, 1, i64::from(i32::MAX))
            })
    }
}
