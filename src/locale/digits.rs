//! ASCII <-> Devanagari digit transliteration.
//!
//! The mapping is one-to-one: `0`..`9` <-> `०`..`९` (U+0966..U+096F).
//! Every other character passes through unchanged.

const DEVANAGARI_ZERO: u32 = 0x0966;

/// Returns true for `०`..`९`.
pub fn is_devanagari_digit(ch: char) -> bool {
    ('०'..='९').contains(&ch)
}

/// Numeric value of an ASCII or Devanagari digit.
pub fn digit_value(ch: char) -> Option<u32> {
    if ch.is_ascii_digit() {
        Some(ch as u32 - '0' as u32)
    } else if is_devanagari_digit(ch) {
        Some(ch as u32 - DEVANAGARI_ZERO)
    } else {
        None
    }
}

fn ascii_to_devanagari(ch: char) -> char {
    if ch.is_ascii_digit() {
        char::from_u32(DEVANAGARI_ZERO + (ch as u32 - '0' as u32)).unwrap_or(ch)
    } else {
        ch
    }
}

fn devanagari_to_ascii(ch: char) -> char {
    if is_devanagari_digit(ch) {
        char::from_u32('0' as u32 + (ch as u32 - DEVANAGARI_ZERO)).unwrap_or(ch)
    } else {
        ch
    }
}

/// Replaces ASCII digits with Devanagari digits.
///
/// ```
/// assert_eq!(sambat::to_devanagari("2024"), "२०२४");
/// assert_eq!(sambat::to_devanagari("Rs. 1,500"), "Rs. १,५००");
/// ```
pub fn to_devanagari(text: &str) -> String {
    text.chars().map(ascii_to_devanagari).collect()
}

/// Replaces Devanagari digits with ASCII digits.
pub fn from_devanagari(text: &str) -> String {
    text.chars().map(devanagari_to_ascii).collect()
}
