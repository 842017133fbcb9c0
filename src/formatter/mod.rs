//! Format engine.

use crate::cache;
use crate::codes;
use crate::error::Result;
use crate::options::FormatOptions;
use crate::pattern::{FormatToken, Pattern};
use crate::value::Value;

impl Pattern {
    /// Renders a date or date-time.
    ///
    /// Fails only when `opts` rejects unknown codes and the pattern has one.
    pub fn format(&self, value: impl Into<Value>, opts: &FormatOptions) -> Result<String> {
        self.check(opts.unknown_codes)?;
        let fields = value.into().fields();
        let mut out = String::with_capacity(self.source().len() + 16);

        for token in self.tokens() {
            match token {
                FormatToken::Literal(text) => out.push_str(text),
                FormatToken::Code { code, .. } => {
                    if let Some(spec) = codes::lookup(*code) {
                        (spec.render)(&fields, opts, &mut out);
                    }
                }
            }
        }

        Ok(out)
    }
}

/// Formats through the process-wide pattern cache.
pub(crate) fn format_pattern(pattern: &str, value: Value, opts: &FormatOptions) -> Result<String> {
    let compiled = cache::PATTERNS.get_or_try_insert_with(pattern, || Pattern::compile(pattern))?;
    compiled.format(value, opts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::BsDate;
    use crate::datetime::BsDateTime;
    use crate::error::Error;
    use crate::options::{MonthStyle, Numerals, UnknownCodePolicy};
    use crate::tz::NPT;

    fn date() -> BsDate {
        BsDate::new(2080, 10, 24).unwrap()
    }

    fn render(pattern: &str, value: impl Into<Value>) -> String {
        Pattern::compile(pattern)
            .unwrap()
            .format(value, &FormatOptions::default())
            .unwrap()
    }

    #[test]
    fn test_ascii_codes() {
        assert_eq!(render("%Y-%m-%d", date()), "2080-10-24");
        assert_eq!(render("%y %j %w", date()), "80 299 2");
        assert_eq!(render("%B %b %A %a", date()), "Magh Mag Tuesday Tue");
    }

    #[test]
    fn test_nepali_codes() {
        assert_eq!(render("%K-%n-%D", date()), "२०८०-१०-२४");
        assert_eq!(render("%k %N %G %g", date()), "८० माघ मंगलबार मंगल");
    }

    #[test]
    fn test_date_renders_midnight_and_no_zone() {
        assert_eq!(render("%H:%M:%S.%f %I %p [%z%Z]", date()), "00:00:00.000000 12 AM []");
        assert_eq!(render("%P", date()), "राति");
    }

    #[test]
    fn test_time_codes() {
        let dt = BsDateTime::new_aware(2080, 10, 24, 16, 7, 3, 42, NPT).unwrap();
        assert_eq!(render("%H:%M:%S.%f", dt), "16:07:03.000042");
        assert_eq!(render("%I %p", dt), "04 PM");
        assert_eq!(render("%h:%i:%s %P", dt), "१६:०७:०३ बेलुका");
        assert_eq!(render("%z %Z", dt), "+0545 Asia/Kathmandu");
    }

    #[test]
    fn test_options_are_independent() {
        let d = BsDate::new(2080, 2, 5).unwrap();
        let sanskrit = FormatOptions::default().with_month_style(MonthStyle::Sanskrit);
        let pattern = Pattern::compile("%N %B %d").unwrap();
        assert_eq!(pattern.format(d, &sanskrit).unwrap(), "ज्येष्ठ Jestha 05");

        let devanagari = FormatOptions::default().with_numerals(Numerals::Devanagari);
        assert_eq!(pattern.format(d, &devanagari).unwrap(), "जेठ Jestha ०५");
    }

    #[test]
    fn test_unknown_code_policy() {
        let pattern = Pattern::compile("%Y %q%").unwrap();
        assert_eq!(
            pattern.format(date(), &FormatOptions::default()).unwrap(),
            "2080 %q%"
        );
        let strict = FormatOptions::default().with_unknown_codes(UnknownCodePolicy::Reject);
        assert!(matches!(
            pattern.format(date(), &strict),
            Err(Error::Format { position: 3, .. })
        ));
    }

    #[test]
    fn test_cached_formatting_reuses_patterns() {
        let opts = FormatOptions::default();
        let first = format_pattern("%d/%m", date().into(), &opts).unwrap();
        let second = format_pattern("%d/%m", (date() + 1).into(), &opts).unwrap();
        assert_eq!((first.as_str(), second.as_str()), ("24/10", "25/10"));
    }
}
