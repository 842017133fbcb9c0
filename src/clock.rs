//! Wall clock access.
//!
//! Readings are `(ordinal, microsecond of day)` pairs on the ordinal axis
//! used throughout the crate.

pub(crate) const MICROS_PER_DAY: i64 = 86_400_000_000;

/// Current UTC time.
#[cfg(feature = "chrono")]
pub(crate) fn utc_now() -> (i64, i64) {
    split(chrono::Utc::now().naive_utc())
}

/// Current local wall time.
#[cfg(feature = "chrono")]
pub(crate) fn local_now() -> (i64, i64) {
    split(chrono::Local::now().naive_local())
}

#[cfg(feature = "chrono")]
fn split(now: chrono::NaiveDateTime) -> (i64, i64) {
    use chrono::{Datelike, Timelike};

    let ordinal = i64::from(now.date().num_days_from_ce());
    // Leap seconds report nanosecond >= 1e9; clamp into the last microsecond.
    let micros = i64::from(now.num_seconds_from_midnight()) * 1_000_000
        + i64::from((now.nanosecond() / 1_000).min(999_999));
    (ordinal, micros)
}

#[cfg(not(feature = "chrono"))]
pub(crate) fn utc_now() -> (i64, i64) {
    use std::time::{SystemTime, UNIX_EPOCH};

    use crate::ordinal::UNIX_EPOCH_ORDINAL;

    let micros = match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(elapsed) => elapsed.as_micros() as i64,
        Err(before) => -(before.duration().as_micros() as i64),
    };
    (
        UNIX_EPOCH_ORDINAL + micros.div_euclid(MICROS_PER_DAY),
        micros.rem_euclid(MICROS_PER_DAY),
    )
}

/// Without chrono there is no local zone database; local time is UTC.
#[cfg(not(feature = "chrono"))]
pub(crate) fn local_now() -> (i64, i64) {
    utc_now()
}

/// Shifts a reading by a number of minutes, carrying across midnight.
pub(crate) fn shift_minutes((ordinal, micros): (i64, i64), minutes: i64) -> (i64, i64) {
    let total = micros + minutes * 60_000_000;
    (
        ordinal + total.div_euclid(MICROS_PER_DAY),
        total.rem_euclid(MICROS_PER_DAY),
    )
}
