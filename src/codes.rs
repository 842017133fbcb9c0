//! The format code table.
//!
//! Each code pairs a renderer, used by the formatter, with a capture
//! routine used by the scanner. Codes fall in two families: the strftime
//! set (`%Y`, `%m`, `%B`, ...) with ASCII digits and English names, and the
//! Nepali set (`%K`, `%n`, `%N`, ...) with Devanagari digits and Nepali
//! names.

use std::fmt;

use crate::error::{Error, Result};
use crate::locale::{
    month_name, period_of_day, to_devanagari, weekday_name, Script, DAYS_ENGLISH,
    DAYS_ENGLISH_SHORT, DAYS_NEPALI, DAYS_NEPALI_SHORT, MONTHS_ENGLISH, MONTHS_ENGLISH_SHORT,
    MONTHS_NEPALI, MONTHS_NEPALI_SANSKRIT, PERIODS_NEPALI,
};
use crate::options::{FormatOptions, MonthStyle, Numerals};
use crate::scanner::{Captures, Cursor};
use crate::tz::TimeZone;
use crate::value::Fields;

pub(crate) type RenderFn = fn(&Fields, &FormatOptions, &mut String);
pub(crate) type ParseFn = fn(&mut Cursor<'_>, &mut Captures) -> Result<()>;

pub(crate) struct CodeSpec {
    pub code: char,
    /// Reads the time of day or the zone.
    pub is_time: bool,
    pub render: RenderFn,
    pub parse: ParseFn,
}

impl fmt::Debug for CodeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodeSpec")
            .field("code", &self.code)
            .field("is_time", &self.is_time)
            .finish_non_exhaustive()
    }
}

const MONTH_TABLES: [&[&str]; 4] = [
    &MONTHS_ENGLISH,
    &MONTHS_ENGLISH_SHORT,
    &MONTHS_NEPALI,
    &MONTHS_NEPALI_SANSKRIT,
];

const WEEKDAY_TABLES: [&[&str]; 4] = [
    &DAYS_ENGLISH,
    &DAYS_ENGLISH_SHORT,
    &DAYS_NEPALI,
    &DAYS_NEPALI_SHORT,
];

const AM_PM: [&str; 2] = ["AM", "PM"];

const ZONE_NAMES: [&str; 3] = ["Asia/Kathmandu", "NPT", "UTC"];

macro_rules! code {
    ($code:literal, $is_time:literal, $render:expr, $parse:expr) => {
        CodeSpec {
            code: $code,
            is_time: $is_time,
            render: $render,
            parse: $parse,
        }
    };
}

static CODES: &[CodeSpec] = &[
    // strftime family
    code!('Y', false, |f, o, out| ascii_number(out, o, f.year, 4), parse_year),
    code!('y', false, |f, o, out| ascii_number(out, o, f.year % 100, 2), parse_short_year),
    code!('m', false, |f, o, out| ascii_number(out, o, f.month, 2), parse_month),
    code!('d', false, |f, o, out| ascii_number(out, o, f.day, 2), parse_day),
    code!('B', false, |f, _, out| push_month(out, f.month, Script::Latin, MonthStyle::Formal), parse_month_name),
    code!('b', false, |f, _, out| push_from(out, &MONTHS_ENGLISH_SHORT, f.month - 1), parse_month_name),
    code!('A', false, |f, _, out| push_weekday(out, f.weekday, Script::Latin, false), parse_weekday_name),
    code!('a', false, |f, _, out| push_weekday(out, f.weekday, Script::Latin, true), parse_weekday_name),
    code!('w', false, |f, o, out| ascii_number(out, o, f.weekday, 1), parse_weekday_number),
    code!('j', false, |f, o, out| ascii_number(out, o, f.day_of_year, 3), parse_day_of_year),
    code!('H', true, |f, o, out| ascii_number(out, o, f.hour, 2), parse_hour),
    code!('I', true, |f, o, out| ascii_number(out, o, to_12_hour(f.hour), 2), parse_hour12),
    code!('M', true, |f, o, out| ascii_number(out, o, f.minute, 2), parse_minute),
    code!('S', true, |f, o, out| ascii_number(out, o, f.second, 2), parse_second),
    code!('f', true, |f, o, out| ascii_number(out, o, f.microsecond, 6), parse_microsecond),
    code!('p', true, |f, _, out| out.push_str(AM_PM[usize::from(f.hour >= 12)]), parse_am_pm),
    code!('z', true, render_offset, parse_offset),
    code!('Z', true, render_zone_name, parse_zone_name),
    // Nepali family
    code!('K', false, |f, _, out| devanagari_number(out, f.year, 4), parse_year),
    code!('k', false, |f, _, out| devanagari_number(out, f.year % 100, 2), parse_short_year),
    code!('n', false, |f, _, out| devanagari_number(out, f.month, 2), parse_month),
    code!('D', false, |f, _, out| devanagari_number(out, f.day, 2), parse_day),
    code!('N', false, |f, o, out| push_month(out, f.month, Script::Devanagari, o.month_style), parse_month_name),
    code!('G', false, |f, _, out| push_weekday(out, f.weekday, Script::Devanagari, false), parse_weekday_name),
    code!('g', false, |f, _, out| push_weekday(out, f.weekday, Script::Devanagari, true), parse_weekday_name),
    code!('h', true, |f, _, out| devanagari_number(out, f.hour, 2), parse_hour),
    code!('i', true, |f, _, out| devanagari_number(out, f.minute, 2), parse_minute),
    code!('s', true, |f, _, out| devanagari_number(out, f.second, 2), parse_second),
    code!('P', true, |f, _, out| out.push_str(period_of_day(f.hour)), parse_period),
];

/// Finds the table entry for a code character.
pub(crate) fn lookup(code: char) -> Option<&'static CodeSpec> {
    CODES.iter().find(|spec| spec.code == code)
}

/// Convert 24-hour time to 12-hour format.
/// 0 -> 12, 1-12 -> 1-12, 13-23 -> 1-11
pub(crate) fn to_12_hour(hour: u8) -> u8 {
    match hour {
        0 => 12,
        1..=12 => hour,
        _ => hour - 12,
    }
}

fn push_digits(out: &mut String, value: impl Into<i64>, width: usize, devanagari: bool) {
    let text = format!("{:0width$}", value.into());
    if devanagari {
        out.push_str(&to_devanagari(&text));
    } else {
        out.push_str(&text);
    }
}

/// A strftime-family number; Devanagari only when the options ask for it.
fn ascii_number(out: &mut String, opts: &FormatOptions, value: impl Into<i64>, width: usize) {
    push_digits(out, value, width, opts.numerals == Numerals::Devanagari);
}

fn devanagari_number(out: &mut String, value: impl Into<i64>, width: usize) {
    push_digits(out, value, width, true);
}

fn push_from(out: &mut String, table: &[&str], index: u8) {
    if let Some(name) = table.get(usize::from(index)) {
        out.push_str(name);
    }
}

fn push_month(out: &mut String, month: u8, script: Script, style: MonthStyle) {
    if let Some(name) = month_name(month, script, style) {
        out.push_str(name);
    }
}

fn push_weekday(out: &mut String, weekday: u8, script: Script, abbreviated: bool) {
    if let Some(name) = weekday_name(weekday, script, abbreviated) {
        out.push_str(name);
    }
}

fn render_offset(fields: &Fields, _: &FormatOptions, out: &mut String) {
    if let Some(tz) = fields.zone.timezone() {
        out.push_str(&tz.offset_string(false));
    }
}

fn render_zone_name(fields: &Fields, _: &FormatOptions, out: &mut String) {
    if let Some(tz) = fields.zone.timezone() {
        out.push_str(&tz.name());
    }
}

fn parse_year(cursor: &mut Cursor<'_>, captures: &mut Captures) -> Result<()> {
    captures.year = Some(cursor.number(4, 4, "year")? as i32);
    Ok(())
}

fn parse_short_year(cursor: &mut Cursor<'_>, captures: &mut Captures) -> Result<()> {
    captures.year = Some(2000 + cursor.number(2, 2, "year")? as i32);
    Ok(())
}

fn parse_month(cursor: &mut Cursor<'_>, captures: &mut Captures) -> Result<()> {
    captures.month = Some(cursor.number(1, 2, "month")? as u8);
    Ok(())
}

fn parse_day(cursor: &mut Cursor<'_>, captures: &mut Captures) -> Result<()> {
    captures.day = Some(cursor.number(1, 2, "day")? as u8);
    Ok(())
}

fn parse_day_of_year(cursor: &mut Cursor<'_>, captures: &mut Captures) -> Result<()> {
    captures.day_of_year = Some(cursor.number(3, 3, "day of year")? as u16);
    Ok(())
}

fn parse_month_name(cursor: &mut Cursor<'_>, captures: &mut Captures) -> Result<()> {
    let index = cursor.one_of(&MONTH_TABLES, "month name")?;
    captures.month = Some(index as u8 + 1);
    Ok(())
}

fn parse_weekday_name(cursor: &mut Cursor<'_>, captures: &mut Captures) -> Result<()> {
    captures.weekday = Some(cursor.one_of(&WEEKDAY_TABLES, "weekday name")? as u8);
    Ok(())
}

fn parse_weekday_number(cursor: &mut Cursor<'_>, captures: &mut Captures) -> Result<()> {
    let start = cursor.position();
    let weekday = cursor.number(1, 1, "weekday")?;
    if weekday > 6 {
        return Err(Error::parse(start, "weekday must be 0-6"));
    }
    captures.weekday = Some(weekday as u8);
    Ok(())
}

fn parse_hour(cursor: &mut Cursor<'_>, captures: &mut Captures) -> Result<()> {
    captures.hour = Some(cursor.number(1, 2, "hour")? as u8);
    Ok(())
}

fn parse_hour12(cursor: &mut Cursor<'_>, captures: &mut Captures) -> Result<()> {
    captures.hour12 = Some(cursor.number(1, 2, "hour")? as u8);
    Ok(())
}

fn parse_minute(cursor: &mut Cursor<'_>, captures: &mut Captures) -> Result<()> {
    captures.minute = Some(cursor.number(1, 2, "minute")? as u8);
    Ok(())
}

fn parse_second(cursor: &mut Cursor<'_>, captures: &mut Captures) -> Result<()> {
    captures.second = Some(cursor.number(1, 2, "second")? as u8);
    Ok(())
}

/// `%f` reads a fraction of a second: "5" is 500000 microseconds.
fn parse_microsecond(cursor: &mut Cursor<'_>, captures: &mut Captures) -> Result<()> {
    let (value, width) = cursor.digits(1, 6, "microseconds")?;
    captures.microsecond = Some(value * 10u32.pow((6 - width) as u32));
    Ok(())
}

fn parse_am_pm(cursor: &mut Cursor<'_>, captures: &mut Captures) -> Result<()> {
    captures.pm = Some(cursor.one_of(&[&AM_PM], "AM or PM")? == 1);
    Ok(())
}

fn parse_period(cursor: &mut Cursor<'_>, captures: &mut Captures) -> Result<()> {
    captures.period = Some(cursor.one_of(&[&PERIODS_NEPALI], "period of day")?);
    Ok(())
}

fn parse_offset(cursor: &mut Cursor<'_>, captures: &mut Captures) -> Result<()> {
    captures.zone = Some(cursor.offset()?);
    Ok(())
}

fn parse_zone_name(cursor: &mut Cursor<'_>, captures: &mut Captures) -> Result<()> {
    let start = cursor.position();
    let index = cursor.one_of(&[&ZONE_NAMES], "time zone name")?;
    // Unnamed fixed zones render as `UTC+HH:MM`.
    if ZONE_NAMES[index] == "UTC" && cursor.at_sign() {
        captures.zone = Some(cursor.offset()?);
        return Ok(());
    }
    let tz = TimeZone::from_name(ZONE_NAMES[index])
        .ok_or_else(|| Error::parse(start, "unknown time zone"))?;
    captures.zone = Some(tz);
    Ok(())
}
