//! Pattern compiler.
//!
//! A pattern compiles once into literal runs and code references, and the
//! compiled form is shared by the formatter and the scanner.

pub mod lexer;
pub mod tokens;

use crate::codes;
use crate::error::{Error, Result};
use crate::options::UnknownCodePolicy;
use lexer::Lexer;
use tokens::Token;

/// A compiled piece of a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatToken {
    /// Text copied verbatim.
    Literal(String),
    /// A known format code and the byte offset of its `%`.
    Code { code: char, position: usize },
}

/// A compiled strftime-style pattern.
///
/// ```
/// use sambat::{BsDate, FormatOptions, Pattern};
///
/// let pattern = Pattern::compile("%Y/%m/%d").unwrap();
/// let date = BsDate::new(2080, 10, 24).unwrap();
/// assert_eq!(pattern.format(date, &FormatOptions::default()).unwrap(), "2080/10/24");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    source: String,
    tokens: Vec<FormatToken>,
    /// First sequence that names no code, kept for [`UnknownCodePolicy::Reject`].
    unknown: Option<(usize, String)>,
}

impl Pattern {
    /// Compiles with the default policy, passing unknown codes through.
    pub fn compile(pattern: &str) -> Result<Pattern> {
        Pattern::compile_with(pattern, UnknownCodePolicy::default())
    }

    /// Compiles a pattern, failing on unknown codes under
    /// [`UnknownCodePolicy::Reject`].
    pub fn compile_with(pattern: &str, policy: UnknownCodePolicy) -> Result<Pattern> {
        let mut tokens: Vec<FormatToken> = Vec::new();
        let mut unknown = None;

        for spanned in Lexer::new(pattern).tokenize() {
            let literal = match spanned.token {
                Token::Eof => break,
                Token::Text(text) => text,
                Token::Directive('%') => "%".to_string(),
                Token::Directive(code) if codes::lookup(code).is_some() => {
                    tokens.push(FormatToken::Code {
                        code,
                        position: spanned.start,
                    });
                    continue;
                }
                Token::Directive(_) | Token::Dangling => {
                    let text = pattern[spanned.start..spanned.end].to_string();
                    if unknown.is_none() {
                        unknown = Some((spanned.start, text.clone()));
                    }
                    text
                }
            };
            match tokens.last_mut() {
                Some(FormatToken::Literal(run)) => run.push_str(&literal),
                _ => tokens.push(FormatToken::Literal(literal)),
            }
        }

        let compiled = Pattern {
            source: pattern.to_string(),
            tokens,
            unknown,
        };
        compiled.check(policy)?;
        Ok(compiled)
    }

    /// Fails if the pattern contains unknown codes and `policy` rejects them.
    pub fn check(&self, policy: UnknownCodePolicy) -> Result<()> {
        match (&self.unknown, policy) {
            (Some((position, text)), UnknownCodePolicy::Reject) => Err(Error::format(
                *position,
                format!("unknown format code {text:?}"),
            )),
            _ => Ok(()),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn tokens(&self) -> &[FormatToken] {
        &self.tokens
    }

    /// Returns true if any code reads the time of day or the zone.
    pub fn has_time(&self) -> bool {
        self.tokens.iter().any(|token| match token {
            FormatToken::Code { code, .. } => codes::lookup(*code).is_some_and(|spec| spec.is_time),
            FormatToken::Literal(_) => false,
        })
    }
}
