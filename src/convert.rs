//! AD <-> BS date conversion.
//!
//! Both directions go through the shared ordinal axis and memoize their
//! results in the process-wide date cache.

use crate::cache;
use crate::calendar::{CalendarTable, BS_MAX_YEAR, BS_MIN_YEAR};
use crate::error::Result;
use crate::ordinal::{ad_to_ordinal, bs_to_ordinal, ordinal_to_ad, ordinal_to_bs};

/// Conversion direction, part of the date cache key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Direction {
    AdToBs,
    BsToAd,
}

/// Converts a Gregorian date to Bikram Sambat.
///
/// ```
/// assert_eq!(sambat::ad_to_bs(2024, 2, 6), Ok((2080, 10, 24)));
/// ```
///
/// Fails with [`Error::InvalidDate`](crate::Error::InvalidDate) for dates
/// that do not exist and [`Error::OutOfRange`](crate::Error::OutOfRange) for
/// dates outside AD 1844-04-13 ..= 2143-04-14.
pub fn ad_to_bs(year: i32, month: u8, day: u8) -> Result<(i32, u8, u8)> {
    cache::DATES.get_or_try_insert_with(&(Direction::AdToBs, year, month, day), || {
        ordinal_to_bs(ad_to_ordinal(year, month, day)?)
    })
}

/// Converts a Bikram Sambat date to Gregorian.
///
/// ```
/// assert_eq!(sambat::bs_to_ad(2080, 10, 24), Ok((2024, 2, 6)));
/// ```
pub fn bs_to_ad(year: i32, month: u8, day: u8) -> Result<(i32, u8, u8)> {
    cache::DATES.get_or_try_insert_with(&(Direction::BsToAd, year, month, day), || {
        Ok(ordinal_to_ad(bs_to_ordinal(year, month, day)?))
    })
}

/// First and last supported Gregorian dates.
pub fn ad_range() -> ((i32, u8, u8), (i32, u8, u8)) {
    let table = CalendarTable::get();
    (
        ordinal_to_ad(table.min_ordinal()),
        ordinal_to_ad(table.max_ordinal()),
    )
}

/// First and last supported BS dates.
pub fn bs_range() -> ((i32, u8, u8), (i32, u8, u8)) {
    let last = CalendarTable::get()
        .entries()
        .last()
        .map_or(30, |entry| entry.month_lengths[11]);
    ((BS_MIN_YEAR, 1, 1), (BS_MAX_YEAR, 12, last))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_known_pairs() {
        assert_eq!(ad_to_bs(2024, 2, 6), Ok((2080, 10, 24)));
        assert_eq!(bs_to_ad(2080, 10, 24), Ok((2024, 2, 6)));
        assert_eq!(ad_to_bs(2024, 4, 13), Ok((2081, 1, 1)));
        assert_eq!(ad_to_bs(1943, 4, 14), Ok((2000, 1, 1)));
    }

    #[test]
    fn test_span_edges() {
        assert_eq!(ad_to_bs(1844, 4, 13), Ok((1901, 1, 1)));
        assert_eq!(bs_to_ad(2199, 12, 30), Ok((2143, 4, 14)));
        assert!(matches!(ad_to_bs(1844, 4, 12), Err(Error::OutOfRange { .. })));
        assert!(matches!(ad_to_bs(2143, 4, 15), Err(Error::OutOfRange { .. })));
        assert_eq!(ad_range(), ((1844, 4, 13), (2143, 4, 14)));
        assert_eq!(bs_range(), ((1901, 1, 1), (2199, 12, 30)));
    }

    #[test]
    fn test_errors_are_not_cached_as_values() {
        assert!(bs_to_ad(2080, 1, 40).is_err());
        assert!(bs_to_ad(2080, 1, 40).is_err());
        assert!(matches!(
            ad_to_bs(2023, 2, 29),
            Err(Error::InvalidDate { .. })
        ));
    }
}
