//! Precomputed Bikram Sambat calendar table.
//!
//! The table holds, for every supported BS year, the length of each month,
//! the number of days elapsed before each month and the ordinal of the
//! first day of the year. It is built once on first use and is read-only
//! afterwards, so concurrent readers need no locking.
//!
//! Ordinals count days on the proleptic Gregorian axis with 0001-01-01 AD
//! as day 1. The table is tied to that axis by a single anchor:
//! BS 1901-01-01 falls on AD 1844-04-13.
//!
//! # Data accuracy
//!
//! The month lengths are generated rather than copied from an official
//! panchanga. They reproduce 2000-01-01 = 1943-04-14, 2076-09-17 =
//! 2020-01-01, 2080-10-24 = 2024-02-06, 2081-01-01 = 2024-04-13 and
//! 2199-12-30 = 2143-04-14, but other years follow repeating cycles and may
//! differ from published calendars by a day or more.

mod data;

use std::sync::OnceLock;

use crate::error::{Error, Result};
use crate::ordinal::civil_to_ordinal;

pub use data::{FIRST_YEAR as BS_MIN_YEAR, LAST_YEAR as BS_MAX_YEAR};

/// Gregorian date of BS 1901-01-01.
pub(crate) const ANCHOR_AD: (i32, u8, u8) = (1844, 4, 13);

static TABLE: OnceLock<CalendarTable> = OnceLock::new();

/// Calendar data for a single BS year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearEntry {
    pub year: i32,
    pub month_lengths: [u8; 12],
    /// Days elapsed within the year before each month.
    pub month_offsets: [u16; 12],
    pub start_ordinal: i64,
}

impl YearEntry {
    pub fn days(&self) -> u16 {
        self.month_offsets[11] + u16::from(self.month_lengths[11])
    }
}

/// The immutable BS year table.
#[derive(Debug)]
pub struct CalendarTable {
    years: Box<[YearEntry]>,
    /// Ordinal one past the last supported day.
    end_ordinal: i64,
}

impl CalendarTable {
    /// Returns the process-wide table, building it on first use.
    pub fn get() -> &'static CalendarTable {
        TABLE.get_or_init(CalendarTable::build)
    }

    fn build() -> CalendarTable {
        let (y, m, d) = ANCHOR_AD;
        let mut ordinal = civil_to_ordinal(y, m, d);
        let mut years = Vec::with_capacity(data::MONTH_LENGTHS.len());

        for (index, lengths) in data::MONTH_LENGTHS.iter().enumerate() {
            let mut month_offsets = [0u16; 12];
            let mut elapsed = 0u16;
            for (offset, &len) in month_offsets.iter_mut().zip(lengths.iter()) {
                *offset = elapsed;
                elapsed += u16::from(len);
            }
            years.push(YearEntry {
                year: BS_MIN_YEAR + index as i32,
                month_lengths: *lengths,
                month_offsets,
                start_ordinal: ordinal,
            });
            ordinal += i64::from(elapsed);
        }

        #[cfg(feature = "log")]
        log::debug!(
            "built BS calendar table: {} years, ordinals {}..{}",
            years.len(),
            years.first().map_or(0, |e| e.start_ordinal),
            ordinal
        );

        CalendarTable {
            years: years.into_boxed_slice(),
            end_ordinal: ordinal,
        }
    }

    /// Returns the entry for `year`.
    pub fn year(&self, year: i32) -> Result<&YearEntry> {
        if !(BS_MIN_YEAR..=BS_MAX_YEAR).contains(&year) {
            return Err(Error::out_of_range(
                "BS year",
                i64::from(year),
                i64::from(BS_MIN_YEAR),
                i64::from(BS_MAX_YEAR),
            ));
        }
        Ok(&self.years[(year - BS_MIN_YEAR) as usize])
    }

    /// Number of days in a BS month.
    pub fn month_length(&self, year: i32, month: u8) -> Result<u8> {
        let entry = self.year(year)?;
        check_month(month)?;
        Ok(entry.month_lengths[usize::from(month - 1)])
    }

    /// Ordinal of the first day of a BS year.
    pub fn year_start_ordinal(&self, year: i32) -> Result<i64> {
        Ok(self.year(year)?.start_ordinal)
    }

    /// All entries, in year order.
    pub fn entries(&self) -> &[YearEntry] {
        &self.years
    }

    /// Ordinal of BS 1901-01-01.
    pub fn min_ordinal(&self) -> i64 {
        self.years[0].start_ordinal
    }

    /// Ordinal of BS 2199-12-30.
    pub fn max_ordinal(&self) -> i64 {
        self.end_ordinal - 1
    }
}

pub(crate) fn check_month(month: u8) -> Result<()> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        Err(Error::out_of_range("month", i64::from(month), 1, 12))
    }
}

/// Number of days in a BS month.
pub fn days_in_month(year: i32, month: u8) -> Result<u8> {
    CalendarTable::get().month_length(year, month)
}

/// Number of days in a BS year.
pub fn days_in_year(year: i32) -> Result<u16> {
    Ok(CalendarTable::get().year(year)?.days())
}

/// Returns true if the BS date exists in the supported span.
pub fn is_valid_bs_date(year: i32, month: u8, day: u8) -> bool {
    days_in_month(year, month).is_ok_and(|len| (1..=len).contains(&day))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_covers_span() {
        let table = CalendarTable::get();
        assert_eq!(table.entries().len(), 299);
        assert_eq!(table.entries()[0].year, 1901);
        assert_eq!(table.entries()[298].year, 2199);
    }

    #[test]
    fn test_year_starts_are_contiguous() {
        let entries = CalendarTable::get().entries();
        for pair in entries.windows(2) {
            assert_eq!(
                pair[0].start_ordinal + i64::from(pair[0].days()),
                pair[1].start_ordinal
            );
        }
    }

    #[test]
    fn test_month_offsets_accumulate() {
        let entry = CalendarTable::get().year(2080).unwrap();
        assert_eq!(entry.month_offsets[0], 0);
        for m in 1..12 {
            assert_eq!(
                entry.month_offsets[m],
                entry.month_offsets[m - 1] + u16::from(entry.month_lengths[m - 1])
            );
        }
    }

    #[test]
    fn test_month_lengths_are_plausible() {
        for entry in CalendarTable::get().entries() {
            assert!(entry.month_lengths.iter().all(|&d| (29..=32).contains(&d)));
            assert!(matches!(entry.days(), 365 | 366), "year {}", entry.year);
        }
    }

    #[test]
    fn test_month_length_range_errors() {
        let table = CalendarTable::get();
        assert!(matches!(
            table.month_length(1900, 1),
            Err(Error::OutOfRange { .. })
        ));
        assert!(matches!(
            table.month_length(2200, 1),
            Err(Error::OutOfRange { .. })
        ));
        assert!(matches!(
            table.month_length(2080, 0),
            Err(Error::OutOfRange { .. })
        ));
        assert!(matches!(
            table.month_length(2080, 13),
            Err(Error::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_is_valid_bs_date() {
        assert!(is_valid_bs_date(2080, 10, 24));
        assert!(!is_valid_bs_date(2080, 13, 1));
        assert!(!is_valid_bs_date(2080, 1, 0));
        assert!(!is_valid_bs_date(2080, 1, 33));
        assert!(!is_valid_bs_date(1899, 1, 1));
    }
}
