//! Plain-text month and year calendars.

use crate::calendar::{days_in_month, BS_MAX_YEAR, BS_MIN_YEAR};
use crate::date::BsDate;
use crate::error::{Error, Result};
use crate::locale::{month_name, to_devanagari, weekday_name, Script};
use crate::options::MonthStyle;

/// Width of one month block: seven four-character cells. A plain day is
/// right-aligned in the first three; a highlighted day fills all four.
const MONTH_WIDTH: usize = 7 * 4;

/// Layout options for [`month_calendar`] and [`year_calendar`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridOptions {
    /// English names and ASCII digits, or Nepali names and Devanagari digits.
    pub script: Script,
    /// Weekday shown in the first column, 0 = Sunday.
    pub first_weekday: u8,
    /// A date to mark as `[d]`, typically today.
    pub highlight: Option<BsDate>,
    /// Months per row in a year calendar.
    pub columns: usize,
}

impl Default for GridOptions {
    fn default() -> Self {
        GridOptions {
            script: Script::Latin,
            first_weekday: 0,
            highlight: None,
            columns: 3,
        }
    }
}

fn number(value: impl ToString, script: Script) -> String {
    match script {
        Script::Latin => value.to_string(),
        Script::Devanagari => to_devanagari(&value.to_string()),
    }
}

/// Renders one BS month as a grid of weeks.
///
/// ```
/// use sambat::{month_calendar, GridOptions};
///
/// let grid = month_calendar(2080, 10, &GridOptions::default()).unwrap();
/// assert_eq!(grid.lines().nth(1), Some("Sun Mon Tue Wed Thu Fri Sat"));
/// ```
pub fn month_calendar(year: i32, month: u8, opts: &GridOptions) -> Result<String> {
    let length = days_in_month(year, month)?;
    if opts.first_weekday > 6 {
        return Err(Error::out_of_range(
            "first weekday",
            i64::from(opts.first_weekday),
            0,
            6,
        ));
    }
    let first = BsDate::new(year, month, 1)?;

    let name = month_name(month, opts.script, MonthStyle::Formal).unwrap_or_default();
    let header = format!("{name} {}", number(year, opts.script));
    let mut lines = vec![format!("{header:^MONTH_WIDTH$}").trim_end().to_string()];

    let day_names: Vec<String> = (0..7)
        .map(|i| {
            let weekday = (opts.first_weekday + i) % 7;
            let name = weekday_name(weekday, opts.script, true).unwrap_or_default();
            format!("{name:<3} ")
        })
        .collect();
    lines.push(day_names.concat().trim_end().to_string());

    let lead = usize::from((7 + first.weekday() - opts.first_weekday) % 7);
    let mut week: Vec<String> = vec!["    ".to_string(); lead];
    for day in 1..=length {
        let text = number(day, opts.script);
        let highlighted = opts
            .highlight
            .is_some_and(|d| (d.year(), d.month(), d.day()) == (year, month, day));
        week.push(if highlighted {
            format!("{:>4}", format!("[{text}]"))
        } else {
            format!("{text:>3} ")
        });
        if week.len() == 7 {
            lines.push(week.concat().trim_end().to_string());
            week.clear();
        }
    }
    if !week.is_empty() {
        lines.push(week.concat().trim_end().to_string());
    }

    Ok(lines.join("\n"))
}

/// Renders all twelve months of a BS year, `opts.columns` per row.
pub fn year_calendar(year: i32, opts: &GridOptions) -> Result<String> {
    if !(BS_MIN_YEAR..=BS_MAX_YEAR).contains(&year) {
        return Err(Error::out_of_range(
            "BS year",
            i64::from(year),
            i64::from(BS_MIN_YEAR),
            i64::from(BS_MAX_YEAR),
        ));
    }
    if !(1..=12).contains(&opts.columns) {
        return Err(Error::out_of_range("columns", opts.columns as i64, 1, 12));
    }

    let months = (1..=12)
        .map(|month| month_calendar(year, month, opts))
        .collect::<Result<Vec<_>>>()?;

    let rule = "=".repeat(20);
    let mut lines = vec![format!("{rule} {} {rule}", number(year, opts.script)), String::new()];

    for row in months.chunks(opts.columns) {
        let blocks: Vec<Vec<&str>> = row.iter().map(|m| m.lines().collect()).collect();
        let height = blocks.iter().map(Vec::len).max().unwrap_or(0);
        for i in 0..height {
            let cells: Vec<String> = blocks
                .iter()
                .map(|block| format!("{:<MONTH_WIDTH$}", block.get(i).copied().unwrap_or("")))
                .collect();
            lines.push(cells.join("   ").trim_end().to_string());
        }
        lines.push(String::new());
    }

    Ok(lines.join("\n"))
}
