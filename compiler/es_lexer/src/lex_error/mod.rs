//! Lexer error types.

use std::fmt;

use es_ir::Span;

/// A lexer error: WHERE (`span`) and WHAT (`kind`).
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexError {
    pub span: Span,
    pub kind: LexErrorKind,
}

/// What went wrong.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    /// No token rule matches at this character.
    UnexpectedChar(char),
    /// End of input inside a quoted string.
    UnterminatedString,
    /// The consumed number text does not denote a number (`1+2`, `0x`, `1.2.3`).
    InvalidNumber(String),
}

impl LexError {
    pub fn new(span: Span, kind: LexErrorKind) -> Self {
        LexError { span, kind }
    }
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexErrorKind::UnexpectedChar(c) => write!(f, "unexpected character {c:?}"),
            LexErrorKind::UnterminatedString => f.write_str("unterminated string literal"),
            LexErrorKind::InvalidNumber(text) => write!(f, "invalid number literal `{text}`"),
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.kind, self.span)
    }
}

impl std::error::Error for LexError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_span() {
        let err = LexError::new(Span::new(4, 5), LexErrorKind::UnexpectedChar('@'));
        assert_eq!(err.to_string(), "unexpected character '@' at 4..5");
    }

    #[test]
    fn invalid_number_quotes_text() {
        let kind = LexErrorKind::InvalidNumber("1+2".to_string());
        assert_eq!(kind.to_string(), "invalid number literal `1+2`");
    }
}
