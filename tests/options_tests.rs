use sambat::{FormatOptions, MonthStyle, Numerals, UnknownCodePolicy};

#[test]
fn test_default_options() {
    let opts = FormatOptions::default();
    assert_eq!(opts.month_style, MonthStyle::Formal);
    assert_eq!(opts.numerals, Numerals::PerCode);
    assert_eq!(opts.unknown_codes, UnknownCodePolicy::Literal);
}

#[test]
fn test_builder_methods() {
    let opts = FormatOptions::default()
        .with_month_style(MonthStyle::Sanskrit)
        .with_numerals(Numerals::Devanagari)
        .with_unknown_codes(UnknownCodePolicy::Reject);
    assert_eq!(
        opts,
        FormatOptions {
            month_style: MonthStyle::Sanskrit,
            numerals: Numerals::Devanagari,
            unknown_codes: UnknownCodePolicy::Reject,
        }
    );
}
