//! Formatting options and configuration.

/// Which set of Nepali month names `%N` renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MonthStyle {
    /// Colloquial names: बैशाख, जेठ, असार, ...
    #[default]
    Formal,
    /// Traditional names: वैशाख, ज्येष्ठ, आषाढ, ...
    Sanskrit,
}

/// Which digits the numeric codes render with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Numerals {
    /// Each code decides: `%Y` and friends are ASCII, `%K` and friends are
    /// Devanagari.
    #[default]
    PerCode,
    /// Every numeric code renders Devanagari digits.
    Devanagari,
}

/// What to do with a `%x` sequence that names no known code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UnknownCodePolicy {
    /// Copy the sequence to the output unchanged.
    #[default]
    Literal,
    /// Fail with [`Error::Format`](crate::Error::Format).
    Reject,
}

/// Precision of the time part in [`BsDateTime::isoformat`](crate::BsDateTime::isoformat).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Timespec {
    /// Seconds, or microseconds when they are non-zero.
    #[default]
    Auto,
    Hours,
    Minutes,
    Seconds,
    Milliseconds,
    Microseconds,
}

/// Options for formatting values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormatOptions {
    /// Nepali month name table. Has no effect on English names.
    pub month_style: MonthStyle,
    /// Digit script for numeric codes. Independent of `month_style`.
    pub numerals: Numerals,
    /// Handling of unrecognized codes.
    pub unknown_codes: UnknownCodePolicy,
}

impl FormatOptions {
    pub fn with_month_style(mut self, month_style: MonthStyle) -> Self {
        self.month_style = month_style;
        self
    }

    pub fn with_numerals(mut self, numerals: Numerals) -> Self {
        self.numerals = numerals;
        self
    }

    pub fn with_unknown_codes(mut self, policy: UnknownCodePolicy) -> Self {
        self.unknown_codes = policy;
        self
    }
}
