//! Ordinal day arithmetic shared by both calendars.
//!
//! An ordinal is a signed day count on the proleptic Gregorian axis where
//! 0001-01-01 AD is day 1. Every BS and AD date in the supported span maps
//! to exactly one ordinal, and consecutive days differ by exactly one.
//!
//! - AD dates convert in closed form (no table, no range limit).
//! - BS dates convert through [`CalendarTable`]: year start plus the
//!   precomputed month offset plus the day.

use crate::calendar::{check_month, CalendarTable};
use crate::error::{Error, Result};

/// Days in each Gregorian month for non-leap years
const DAYS_IN_MONTH: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Ordinal of 1970-01-01.
pub const UNIX_EPOCH_ORDINAL: i64 = 719_163;

/// 0001-01-07 was a Sunday.
const REFERENCE_SUNDAY: i64 = 7;

/// Returns true if the given Gregorian year is a leap year
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Returns the number of days in a Gregorian month.
pub fn days_in_ad_month(year: i32, month: u8) -> Result<u8> {
    check_month(month)?;
    if month == 2 && is_leap_year(year) {
        Ok(29)
    } else {
        Ok(DAYS_IN_MONTH[usize::from(month - 1)])
    }
}

/// Converts a Gregorian date to an ordinal without validating it.
///
/// Algorithm from Howard Hinnant: <http://howardhinnant.github.io/date_algorithms.html>
pub(crate) fn civil_to_ordinal(year: i32, month: u8, day: u8) -> i64 {
    let m = i64::from(month);
    let y = i64::from(year) - i64::from(m <= 2);
    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = y - era * 400; // [0, 399]
    let doy = (153 * (if m > 2 { m - 3 } else { m + 9 }) + 2) / 5 + i64::from(day) - 1; // [0, 365]
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy; // [0, 146096]
    era * 146_097 + doe - 719_468 + UNIX_EPOCH_ORDINAL
}

/// Converts a Gregorian date to an ordinal.
///
/// Fails with [`Error::InvalidDate`] for dates that do not exist, such as
/// February 30.
pub fn ad_to_ordinal(year: i32, month: u8, day: u8) -> Result<i64> {
    let max_day = days_in_ad_month(year, month)?;
    if day == 0 || day > max_day {
        return Err(Error::InvalidDate {
            year,
            month,
            day,
            max_day,
        });
    }
    Ok(civil_to_ordinal(year, month, day))
}

/// Converts an ordinal to a Gregorian `(year, month, day)`.
pub fn ordinal_to_ad(ordinal: i64) -> (i32, u8, u8) {
    let z = ordinal - UNIX_EPOCH_ORDINAL + 719_468;
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = z - era * 146_097; // [0, 146096]
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365; // [0, 399]
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // [0, 365]
    let mp = (5 * doy + 2) / 153; // [0, 11]
    let d = doy - (153 * mp + 2) / 5 + 1; // [1, 31]
    let m = if mp < 10 { mp + 3 } else { mp - 9 }; // [1, 12]
    let year = if m <= 2 { y + 1 } else { y };
    (year as i32, m as u8, d as u8)
}

/// Converts a BS date to an ordinal.
pub fn bs_to_ordinal(year: i32, month: u8, day: u8) -> Result<i64> {
    let entry = CalendarTable::get().year(year)?;
    check_month(month)?;
    let index = usize::from(month - 1);
    let max_day = entry.month_lengths[index];
    if day == 0 || day > max_day {
        return Err(Error::InvalidDate {
            year,
            month,
            day,
            max_day,
        });
    }
    Ok(entry.start_ordinal + i64::from(entry.month_offsets[index]) + i64::from(day - 1))
}

/// Converts an ordinal to a BS `(year, month, day)`.
///
/// The owning year is estimated from the mean year length and then
/// corrected by at most a step or two.
pub fn ordinal_to_bs(ordinal: i64) -> Result<(i32, u8, u8)> {
    let table = CalendarTable::get();
    let (min, max) = (table.min_ordinal(), table.max_ordinal());
    if ordinal < min || ordinal > max {
        return Err(Error::out_of_range("ordinal", ordinal, min, max));
    }

    let entries = table.entries();
    let last = entries.len() - 1;
    let span = max + 1 - min;
    let mut index = (((ordinal - min) * entries.len() as i64) / span) as usize;
    index = index.min(last);
    while index > 0 && entries[index].start_ordinal > ordinal {
        index -= 1;
    }
    while index < last && entries[index + 1].start_ordinal <= ordinal {
        index += 1;
    }

    let entry = &entries[index];
    let day_of_year = (ordinal - entry.start_ordinal) as u16;
    let month_index = entry
        .month_offsets
        .partition_point(|&offset| offset <= day_of_year)
        - 1;
    let day = day_of_year - entry.month_offsets[month_index] + 1;
    Ok((entry.year, month_index as u8 + 1, day as u8))
}

/// Day of the week for an ordinal: 0 = Sunday ... 6 = Saturday.
pub fn weekday_of_ordinal(ordinal: i64) -> u8 {
    (ordinal - REFERENCE_SUNDAY).rem_euclid(7) as u8
}
