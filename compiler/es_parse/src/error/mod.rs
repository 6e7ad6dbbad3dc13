//! Parse error types.
//!
//! A [`ParseError`] says WHERE (`span`), WHAT (`kind`) and, for context,
//! AFTER which construct it happened: the textual form of the most recently
//! completed term, taken from the parser's last-good stack.

use std::fmt;

use es_ir::{Span, TokenKind};
use es_lexer::LexError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub span: Span,
    pub kind: ParseErrorKind,
    /// Most recently completed term, if any was completed.
    pub after: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The lexer failed while the parser asked for a token.
    Lex(LexError),
    /// This token cannot begin an expression.
    NoHead(TokenKind),
    /// This token cannot continue the expression to its left.
    NoTail(TokenKind),
    /// `(` or `(|` closed by something other than its partner.
    UnclosedDelimiter {
        open: Span,
        expected: TokenKind,
        found: TokenKind,
    },
    /// `=` after something that is not a method call.
    InvalidAssignmentTarget,
    /// `:=` or `->` after something that is not a method call.
    InvalidDefinitionTarget,
    /// A parameter that is not a bare identifier.
    InvalidParameter(String),
}

impl ParseError {
    pub fn new(span: Span, kind: ParseErrorKind) -> Self {
        ParseError {
            span,
            kind,
            after: None,
        }
    }
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        ParseError::new(err.span, ParseErrorKind::Lex(err))
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::Lex(err) => write!(f, "{}", err.kind),
            ParseErrorKind::NoHead(token) => write!(f, "`{token}` cannot start an expression"),
            ParseErrorKind::NoTail(token) => {
                write!(f, "`{token}` cannot follow an expression here")
            }
            ParseErrorKind::UnclosedDelimiter {
                expected, found, ..
            } => write!(f, "expected `{expected}`, found `{found}`"),
            ParseErrorKind::InvalidAssignmentTarget => {
                f.write_str("only a method call can be assigned to")
            }
            ParseErrorKind::InvalidDefinitionTarget => {
                f.write_str("only a method call can name a definition")
            }
            ParseErrorKind::InvalidParameter(text) => {
                write!(f, "parameter `{text}` is not a plain name")
            }
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(after) = &self.after {
            write!(f, " (after `{after}`)")?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;
    use es_ir::Name;

    #[test]
    fn display_with_context() {
        let mut err = ParseError::new(Span::new(3, 4), ParseErrorKind::NoHead(TokenKind::CloseGroup));
        assert_eq!(err.to_string(), "`)` cannot start an expression");
        err.after = Some("f(x)".to_string());
        assert_eq!(err.to_string(), "`)` cannot start an expression (after `f(x)`)");
    }

    #[test]
    fn display_unclosed() {
        let err = ParseErrorKind::UnclosedDelimiter {
            open: Span::new(0, 1),
            expected: TokenKind::CloseGroup,
            found: TokenKind::Identifier(Name::from("y")),
        };
        assert_eq!(err.to_string(), "expected `)`, found `y`");
    }
}
