//! Nepali ordinal numbers (पहिलो, दोस्रो, ...) for 1 through 100.

use crate::error::{Error, Result};
use crate::locale::from_devanagari;

/// Nepali ordinals, index 0 = first.
const ORDINALS_NEPALI: [&str; 100] = [
    "पहिलो",
    "दोस्रो",
    "तेस्रो",
    "चौथो",
    "पाँचौं",
    "छैठौं",
    "सातौं",
    "आठौं",
    "नवौं",
    "दशौं",
    "एघारौं",
    "बाह्रौं",
    "तेह्रौं",
    "चौधौं",
    "पन्ध्रौं",
    "सोह्रौं",
    "सत्रौं",
    "अठारौं",
    "उन्नाइसौं",
    "बीसौं",
    "एक्काइसौं",
    "बाइसौं",
    "तेइसौं",
    "चौबीसौं",
    "पच्चीसौं",
    "छब्बीसौं",
    "सत्ताइसौं",
    "अठ्ठाइसौं",
    "उनन्तीसौं",
    "तीसौं",
    "एकतीसौं",
    "बत्तीसौं",
    "तेत्तीसौं",
    "चौँतीसौं",
    "पैँतीसौं",
    "छत्तीसौं",
    "सैँतीसौं",
    "अठतीसौं",
    "उनन्चालीसौं",
    "चालीसौं",
    "एकचालीसौं",
    "बयालीसौं",
    "त्रिचालीसौं",
    "चवालीसौं",
    "पैँतालीसौं",
    "छयालीसौं",
    "सत्चालीसौं",
    "अठचालीसौं",
    "उनन्पचासौं",
    "पचासौं",
    "एकाउन्नौं",
    "बाउन्नौं",
    "त्रिपन्नौं",
    "चउन्नौं",
    "पचपन्नौं",
    "छपन्नौं",
    "सन्ताउन्नौं",
    "अन्ठाउन्नौं",
    "उनन्साठीऔं",
    "साठीऔं",
    "एकसट्ठीऔं",
    "बयसट्ठीऔं",
    "त्रिसट्ठीऔं",
    "चौंसट्ठीऔं",
    "पैंसट्ठीऔं",
    "छयसट्ठीऔं",
    "सतसट्ठीऔं",
    "अठसट्ठीऔं",
    "उनन्सत्तरीऔं",
    "सत्तरीऔं",
    "एकहत्तरौं",
    "बहत्तरौं",
    "त्रिहत्तरौं",
    "चौहत्तरौं",
    "पचहत्तरौं",
    "छयहत्तरौं",
    "सतहत्तरौं",
    "अठहत्तरौं",
    "उनासीऔं",
    "असीऔं",
    "एकासीऔं",
    "बयासीऔं",
    "त्रियासीऔं",
    "चौरासीऔं",
    "पचासीऔं",
    "छयासीऔं",
    "सतासीऔं",
    "अठासीऔं",
    "उनान्नब्बेऔं",
    "नब्बेऔं",
    "एकानब्बेऔं",
    "बयानब्बेऔं",
    "त्रियानब्बेऔं",
    "चौरानब्बेऔं",
    "पंचानब्बेऔं",
    "छयानब्बेऔं",
    "सन्तानब्बेऔं",
    "अन्ठानब्बेऔं",
    "उनान्सयौं",
    "सयौं",
];

/// English ordinal words and abbreviations with their values.
const ORDINALS_ENGLISH: [(&str, u32); 72] = [
    ("first", 1),
    ("second", 2),
    ("third", 3),
    ("fourth", 4),
    ("fifth", 5),
    ("sixth", 6),
    ("seventh", 7),
    ("eighth", 8),
    ("ninth", 9),
    ("tenth", 10),
    ("eleventh", 11),
    ("twelfth", 12),
    ("thirteenth", 13),
    ("fourteenth", 14),
    ("fifteenth", 15),
    ("sixteenth", 16),
    ("seventeenth", 17),
    ("eighteenth", 18),
    ("nineteenth", 19),
    ("twentieth", 20),
    ("twenty-first", 21),
    ("twenty-second", 22),
    ("twenty-third", 23),
    ("twenty-fourth", 24),
    ("twenty-fifth", 25),
    ("thirtieth", 30),
    ("fortieth", 40),
    ("fiftieth", 50),
    ("sixtieth", 60),
    ("seventieth", 70),
    ("eightieth", 80),
    ("ninetieth", 90),
    ("hundredth", 100),
    ("1st", 1),
    ("2nd", 2),
    ("3rd", 3),
    ("4th", 4),
    ("5th", 5),
    ("6th", 6),
    ("7th", 7),
    ("8th", 8),
    ("9th", 9),
    ("10th", 10),
    ("11th", 11),
    ("12th", 12),
    ("13th", 13),
    ("14th", 14),
    ("15th", 15),
    ("16th", 16),
    ("17th", 17),
    ("18th", 18),
    ("19th", 19),
    ("20th", 20),
    ("21st", 21),
    ("22nd", 22),
    ("23rd", 23),
    ("24th", 24),
    ("25th", 25),
    ("26th", 26),
    ("27th", 27),
    ("28th", 28),
    ("29th", 29),
    ("30th", 30),
    ("31st", 31),
    ("32nd", 32),
    ("40th", 40),
    ("50th", 50),
    ("60th", 60),
    ("70th", 70),
    ("80th", 80),
    ("90th", 90),
    ("100th", 100),
];

/// Returns the Nepali ordinal for `n` in `1..=100`.
///
/// ```
/// use sambat::to_nepali_ordinal;
///
/// assert_eq!(to_nepali_ordinal(1).unwrap(), "पहिलो");
/// assert_eq!(to_nepali_ordinal(10).unwrap(), "दशौं");
/// ```
pub fn to_nepali_ordinal(n: u32) -> Result<&'static str> {
    usize::try_from(n)
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|index| ORDINALS_NEPALI.get(index).copied())
        .ok_or_else(|| {
            Error::out_of_range("ordinal", i64::from(n), 1, ORDINALS_NEPALI.len() as i64)
        })
}

/// Converts an English ordinal (`"third"`, `"3rd"`) or a plain number to
/// its Nepali ordinal. Case and surrounding whitespace are ignored.
pub fn nepali_ordinal_from_english(text: &str) -> Result<&'static str> {
    let text = text.trim();
    if let Some((_, n)) = ORDINALS_ENGLISH
        .iter()
        .find(|(word, _)| word.eq_ignore_ascii_case(text))
    {
        return to_nepali_ordinal(*n);
    }
    match from_devanagari(text).parse::<u32>() {
        Ok(n) => to_nepali_ordinal(n),
        Err(_) => Err(Error::parse(
            0,
            format!("{text:?} is not an ordinal word, abbreviation or number"),
        )),
    }
}

/// Returns the value of a Nepali ordinal, the inverse of
/// [`to_nepali_ordinal`].
pub fn from_nepali_ordinal(text: &str) -> Result<u32> {
    let text = text.trim();
    ORDINALS_NEPALI
        .iter()
        .position(|&ordinal| ordinal == text)
        .map(|index| index as u32 + 1)
        .ok_or_else(|| Error::parse(0, format!("unrecognized Nepali ordinal {text:?}")))
}
