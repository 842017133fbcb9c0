//! Nepali/Indian digit grouping, number words and ordinals.
//!
//! The last three integer digits form one group and every two digits
//! before that form another: `1234567` becomes `12,34,567`.

mod ordinals;
mod words;

pub use ordinals::{from_nepali_ordinal, nepali_ordinal_from_english, to_nepali_ordinal};
pub use words::{to_nepali_words, MAX_WORDS_VALUE};

use crate::error::{Error, Result};
use crate::locale::{from_devanagari, to_devanagari};
use crate::options::Numerals;

/// Groups the digits of a decimal number.
///
/// Existing commas are dropped first, so Western-grouped input regroups.
/// Input may use ASCII or Devanagari digits. The sign and any fractional
/// part are kept as they are.
///
/// ```
/// use sambat::{format_number, Numerals};
///
/// assert_eq!(format_number("1234567", Numerals::PerCode, ',').unwrap(), "12,34,567");
/// assert_eq!(format_number("2,553,871", Numerals::PerCode, ',').unwrap(), "25,53,871");
/// assert_eq!(format_number("-1234567.89", Numerals::Devanagari, ',').unwrap(), "-१२,३४,५६७.८९");
/// ```
pub fn format_number(value: &str, numerals: Numerals, delimiter: char) -> Result<String> {
    let cleaned: String = from_devanagari(value.trim())
        .chars()
        .filter(|&ch| ch != ',')
        .collect();

    let (negative, unsigned) = match cleaned.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, cleaned.as_str()),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    if integer.is_empty() {
        return Err(Error::format(0, format!("{value:?} has no integer digits")));
    }
    let digits_only = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if !digits_only(integer) || !fraction.map_or(true, digits_only) {
        return Err(Error::format(0, format!("{value:?} is not a decimal number")));
    }

    let mut out = String::with_capacity(cleaned.len() + integer.len() / 2);
    if negative {
        out.push('-');
    }
    out.push_str(&group(integer, delimiter));
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }

    Ok(match numerals {
        Numerals::PerCode => out,
        Numerals::Devanagari => to_devanagari(&out),
    })
}

/// Groups an integer with commas.
pub fn group_digits(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let grouped = group(&digits, ',');
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Groups a run of ASCII digits 3-2-2 from the right.
fn group(digits: &str, delimiter: char) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let lead = head.len() % 2;

    let mut out = String::with_capacity(digits.len() * 3 / 2);
    for (i, ch) in head.chars().enumerate() {
        if i > 0 && (i + 2 - lead) % 2 == 0 {
            out.push(delimiter);
        }
        out.push(ch);
    }
    out.push(delimiter);
    out.push_str(tail);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group() {
        assert_eq!(group("1", ','), "1");
        assert_eq!(group("123", ','), "123");
        assert_eq!(group("1234", ','), "1,234");
        assert_eq!(group("12345", ','), "12,345");
        assert_eq!(group("123456", ','), "1,23,456");
        assert_eq!(group("1234567890", ','), "1,23,45,67,890");
        assert_eq!(group("1234567", ' '), "12 34 567");
    }

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits(0), "0");
        assert_eq!(group_digits(-100000), "-1,00,000");
        assert_eq!(group_digits(i64::MIN), "-92,23,37,20,36,85,47,75,808");
    }

    #[test]
    fn test_devanagari_input() {
        assert_eq!(
            format_number("१२३४५६७", Numerals::PerCode, ',').unwrap(),
            "12,34,567"
        );
    }

    #[test]
    fn test_rejects_non_numbers() {
        assert!(matches!(
            format_number("12a4", Numerals::PerCode, ','),
            Err(Error::Format { .. })
        ));
        assert!(format_number("", Numerals::PerCode, ',').is_err());
        assert!(format_number("-", Numerals::PerCode, ',').is_err());
        assert!(format_number("1.2.3", Numerals::PerCode, ',').is_err());
    }
}
