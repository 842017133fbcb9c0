//! Built-in locale data.

/// BS month names in English transliteration (1 = Baishakh).
pub const MONTHS_ENGLISH: [&str; 12] = [
    "Baishakh", "Jestha", "Asar", "Shrawan", "Bhadau", "Asoj", "Kartik", "Mangsir", "Poush",
    "Magh", "Falgun", "Chaitra",
];

pub const MONTHS_ENGLISH_SHORT: [&str; 12] = [
    "Bai", "Jes", "Asa", "Shr", "Bha", "Ash", "Kar", "Man", "Pou", "Mag", "Fal", "Cha",
];

/// Colloquial Nepali month names.
pub const MONTHS_NEPALI: [&str; 12] = [
    "बैशाख",
    "जेठ",
    "असार",
    "साउन",
    "भदौ",
    "असोज",
    "कार्तिक",
    "मंसिर",
    "पुष",
    "माघ",
    "फागुन",
    "चैत",
];

/// Traditional (Sanskrit) Nepali month names.
pub const MONTHS_NEPALI_SANSKRIT: [&str; 12] = [
    "वैशाख",
    "ज्येष्ठ",
    "आषाढ",
    "श्रावण",
    "भाद्र",
    "आश्विन",
    "कार्तिक",
    "मार्ग",
    "पौष",
    "माघ",
    "फाल्गुन",
    "चैत्र",
];

/// Weekday names, 0 = Sunday.
pub const DAYS_ENGLISH: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

pub const DAYS_ENGLISH_SHORT: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub const DAYS_NEPALI: [&str; 7] = [
    "आइतबार",
    "सोमबार",
    "मंगलबार",
    "बुधबार",
    "बिहिबार",
    "शुक्रबार",
    "शनिबार",
];

pub const DAYS_NEPALI_SHORT: [&str; 7] = ["आइत", "सोम", "मंगल", "बुध", "बिहि", "शुक्र", "शनि"];

/// Morning, afternoon, evening, night.
pub const PERIODS_NEPALI: [&str; 4] = ["बिहान", "दिउँसो", "बेलुका", "राति"];

/// Gregorian month names, 0 = January.
pub const GREGORIAN_MONTHS_ENGLISH: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub const GREGORIAN_MONTHS_NEPALI: [&str; 12] = [
    "जनवरी",
    "फेब्रुअरी",
    "मार्च",
    "अप्रिल",
    "मे",
    "जुन",
    "जुलाई",
    "अगस्ट",
    "सेप्टेम्बर",
    "अक्टोबर",
    "नोभेम्बर",
    "डिसेम्बर",
];
