//! Token types for the pattern lexer.

/// A lexical token in a pattern string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A run of text containing no `%`.
    Text(String),
    /// `%` followed by a character. `%%` arrives as `Directive('%')`.
    Directive(char),
    /// A `%` at the very end of the pattern.
    Dangling,
    /// End of input.
    Eof,
}

/// A token with its byte range in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpannedToken {
    pub token: Token,
    pub start: usize,
    pub end: usize,
}
