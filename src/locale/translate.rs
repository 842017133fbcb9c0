//! Word-level English to Nepali substitution for free text.

use super::builtin::{
    DAYS_ENGLISH, DAYS_NEPALI, GREGORIAN_MONTHS_ENGLISH, GREGORIAN_MONTHS_NEPALI, MONTHS_ENGLISH,
    MONTHS_NEPALI,
};
use super::digits::to_devanagari;

/// Which parts of a text [`to_nepali_text`] converts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslateOptions {
    /// ASCII digits become Devanagari.
    pub digits: bool,
    /// English weekday names (`Sunday`) become Nepali.
    pub weekdays: bool,
    /// English BS month names (`Magh`) become Nepali.
    pub bs_months: bool,
    /// Gregorian month names (`January`) become their Nepali spelling.
    pub gregorian_months: bool,
}

impl Default for TranslateOptions {
    fn default() -> Self {
        TranslateOptions {
            digits: true,
            weekdays: true,
            bs_months: true,
            gregorian_months: true,
        }
    }
}

impl TranslateOptions {
    pub fn with_digits(mut self, digits: bool) -> Self {
        self.digits = digits;
        self
    }

    pub fn with_weekdays(mut self, weekdays: bool) -> Self {
        self.weekdays = weekdays;
        self
    }

    pub fn with_bs_months(mut self, bs_months: bool) -> Self {
        self.bs_months = bs_months;
        self
    }

    pub fn with_gregorian_months(mut self, gregorian_months: bool) -> Self {
        self.gregorian_months = gregorian_months;
        self
    }
}

/// Converts the English date words and digits of `text` to Nepali.
///
/// Only whole words are replaced, ignoring ASCII case. Digits are
/// converted after the words, so `Magh2080` stays one untouched word
/// apart from its digits.
///
/// ```
/// use sambat::{to_nepali_text, TranslateOptions};
///
/// let opts = TranslateOptions::default();
/// assert_eq!(to_nepali_text("15 Magh 2080", &opts), "१५ माघ २०८०");
/// assert_eq!(to_nepali_text("Sunday, January 15", &opts), "आइतबार, जनवरी १५");
/// ```
pub fn to_nepali_text(text: &str, opts: &TranslateOptions) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    let mut rest = text;

    while let Some(start) = rest.find(is_word_char) {
        out.push_str(&rest[..start]);
        rest = &rest[start..];
        let end = rest.find(|ch: char| !is_word_char(ch)).unwrap_or(rest.len());
        let word = &rest[..end];
        out.push_str(translate_word(word, opts).unwrap_or(word));
        rest = &rest[end..];
    }
    out.push_str(rest);

    if opts.digits {
        to_devanagari(&out)
    } else {
        out
    }
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

fn translate_word(word: &str, opts: &TranslateOptions) -> Option<&'static str> {
    let tables: [(bool, &[&str], &[&'static str]); 3] = [
        (opts.weekdays, &DAYS_ENGLISH, &DAYS_NEPALI),
        (opts.bs_months, &MONTHS_ENGLISH, &MONTHS_NEPALI),
        (
            opts.gregorian_months,
            &GREGORIAN_MONTHS_ENGLISH,
            &GREGORIAN_MONTHS_NEPALI,
        ),
    ];
    tables
        .into_iter()
        .filter(|(enabled, _, _)| *enabled)
        .find_map(|(_, english, nepali)| {
            let index = english.iter().position(|name| name.eq_ignore_ascii_case(word))?;
            Some(nepali[index])
        })
}
