//! Numbers spelled out in Nepali words.

use crate::error::{Error, Result};

/// Words for 0 through 99; zero on its own is [`ZERO`].
const ONES: [&str; 100] = [
    "", "एक", "दुई", "तीन", "चार",
    "पाँच", "छ", "सात", "आठ", "नौ",
    "दश", "एघार", "बाह्र", "तेह्र", "चौध",
    "पन्ध्र", "सोह्र", "सत्र", "अठार", "उन्नाइस",
    "बीस", "एक्काइस", "बाइस", "तेइस", "चौबीस",
    "पच्चीस", "छब्बीस", "सत्ताइस", "अठ्ठाइस", "उनन्तीस",
    "तीस", "एकतीस", "बत्तीस", "तेत्तीस", "चौँतीस",
    "पैँतीस", "छत्तीस", "सैँतीस", "अठतीस", "उनन्चालीस",
    "चालीस", "एकचालीस", "बयालीस", "त्रिचालीस", "चवालीस",
    "पैँतालीस", "छयालीस", "सत्चालीस", "अठचालीस", "उनन्पचास",
    "पचास", "एकाउन्न", "बाउन्न", "त्रिपन्न", "चउन्न",
    "पचपन्न", "छपन्न", "सन्ताउन्न", "अन्ठाउन्न", "उनन्साठी",
    "साठी", "एकसट्ठी", "बयसट्ठी", "त्रिसट्ठी", "चौंसट्ठी",
    "पैंसट्ठी", "छयसट्ठी", "सतसट्ठी", "अठसट्ठी", "उनन्सत्तरी",
    "सत्तरी", "एकहत्तर", "बहत्तर", "त्रिहत्तर", "चौहत्तर",
    "पचहत्तर", "छयहत्तर", "सतहत्तर", "अठहत्तर", "उनासी",
    "असी", "एकासी", "बयासी", "त्रियासी", "चौरासी",
    "पचासी", "छयासी", "सतासी", "अठासी", "उनान्नब्बे",
    "नब्बे", "एकानब्बे", "बयानब्बे", "त्रियानब्बे", "चौरानब्बे",
    "पंचानब्बे", "छयानब्बे", "सन्तानब्बे", "अन्ठानब्बे", "उनान्सय",
];

const ZERO: &str = "शुन्य";
const HUNDRED: &str = "सय";

/// Place values of the Nepali scale words, largest first.
const SCALES: [(u64, &str); 5] = [
    (100_000_000_000, "खर्ब"),
    (1_000_000_000, "अर्ब"),
    (10_000_000, "करोड"),
    (100_000, "लाख"),
    (1_000, "हजार"),
];

/// Largest value [`to_nepali_words`] accepts: 99 खर्ब and the rest.
pub const MAX_WORDS_VALUE: u64 = 9_999_999_999_999;

/// Spells out a number in Nepali using the lakh/crore scale.
///
/// ```
/// use sambat::to_nepali_words;
///
/// assert_eq!(to_nepali_words(1234).unwrap(), "एक हजार दुई सय चौँतीस");
/// assert_eq!(to_nepali_words(100_000).unwrap(), "एक लाख");
/// ```
pub fn to_nepali_words(value: u64) -> Result<String> {
    if value > MAX_WORDS_VALUE {
        return Err(Error::out_of_range(
            "number",
            i64::try_from(value).unwrap_or(i64::MAX),
            0,
            MAX_WORDS_VALUE as i64,
        ));
    }
    if value == 0 {
        return Ok(ZERO.to_string());
    }

    let mut parts = Vec::new();
    let mut rest = value;
    for (place, word) in SCALES {
        if rest >= place {
            parts.push(ONES[(rest / place) as usize]);
            parts.push(word);
            rest %= place;
        }
    }
    if rest >= 100 {
        parts.push(ONES[(rest / 100) as usize]);
        parts.push(HUNDRED);
        rest %= 100;
    }
    if rest > 0 {
        parts.push(ONES[rest as usize]);
    }
    Ok(parts.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_numbers() {
        assert_eq!(to_nepali_words(0).unwrap(), "शुन्य");
        assert_eq!(to_nepali_words(5).unwrap(), "पाँच");
        assert_eq!(to_nepali_words(15).unwrap(), "पन्ध्र");
        assert_eq!(to_nepali_words(99).unwrap(), "उनान्सय");
        assert_eq!(to_nepali_words(100).unwrap(), "एक सय");
        assert_eq!(to_nepali_words(250).unwrap(), "दुई सय पचास");
    }

    #[test]
    fn test_scale_words() {
        let cases = [
            (1_000, "एक हजार"),
            (100_000, "एक लाख"),
            (10_000_000, "एक करोड"),
            (1_000_000_000, "एक अर्ब"),
            (100_000_000_000, "एक खर्ब"),
            (2_50_00_305, "दुई करोड पचास लाख तीन सय पाँच"),
        ];
        for (value, expected) in cases {
            assert_eq!(to_nepali_words(value).unwrap(), expected, "{value}");
        }
    }

    #[test]
    fn test_upper_bound() {
        assert!(to_nepali_words(MAX_WORDS_VALUE).unwrap().starts_with("उनान्सय खर्ब"));
        assert!(matches!(
            to_nepali_words(MAX_WORDS_VALUE + 1),
            Err(Error::OutOfRange { .. })
        ));
    }
}
