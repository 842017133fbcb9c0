//! Lexer for strftime-style pattern strings.
//!
//! The only special character is `%`. Everything between directives is
//! returned as a single text run.

use super::tokens::{SpannedToken, Token};

const ESCAPE: char = '%';

/// A lexer for pattern strings.
pub struct Lexer<'a> {
    input: &'a str,
    position: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    fn remaining(&self) -> &'a str {
        &self.input[self.position..]
    }

    /// Returns the next token from the input.
    pub fn next_token(&mut self) -> SpannedToken {
        let start = self.position;
        let rest = self.remaining();
        let mut chars = rest.chars();

        let token = match chars.next() {
            None => Token::Eof,
            Some(ESCAPE) => match chars.next() {
                Some(code) => {
                    self.position += ESCAPE.len_utf8() + code.len_utf8();
                    Token::Directive(code)
                }
                None => {
                    self.position += ESCAPE.len_utf8();
                    Token::Dangling
                }
            },
            Some(_) => {
                let len = rest.find(ESCAPE).unwrap_or(rest.len());
                self.position += len;
                Token::Text(rest[..len].to_string())
            }
        };

        SpannedToken {
            token,
            start,
            end: self.position,
        }
    }

    /// Returns all remaining tokens, ending with [`Token::Eof`].
    pub fn tokenize(mut self) -> Vec<SpannedToken> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let is_eof = token.token == Token::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<Token> {
        Lexer::new(input)
            .tokenize()
            .into_iter()
            .map(|t| t.token)
            .collect()
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(kinds(""), vec![Token::Eof]);
    }

    #[test]
    fn test_text_and_directives() {
        assert_eq!(
            kinds("%Y-%m"),
            vec![
                Token::Directive('Y'),
                Token::Text("-".into()),
                Token::Directive('m'),
                Token::Eof
            ]
        );
    }

    #[test]
    fn test_escaped_percent_and_dangling() {
        assert_eq!(
            kinds("100%% %"),
            vec![
                Token::Text("100".into()),
                Token::Directive('%'),
                Token::Text(" ".into()),
                Token::Dangling,
                Token::Eof
            ]
        );
    }

    #[test]
    fn test_spans_are_byte_offsets() {
        let tokens = Lexer::new("साल %K").tokenize();
        assert_eq!(tokens[0].end, "साल ".len());
        assert_eq!((tokens[1].start, tokens[1].end), ("साल ".len(), "साल %K".len()));
    }

    #[test]
    fn test_multibyte_directive() {
        assert_eq!(kinds("%क"), vec![Token::Directive('क'), Token::Eof]);
    }
}
