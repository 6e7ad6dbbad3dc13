//! Lex errors.

use es_diagnostic::{Diagnostic, ErrorCode};
use es_lexer::{LexError, LexErrorKind};

#[cold]
pub fn render_lex_error(err: &LexError) -> Diagnostic {
    let span = err.span;
    match &err.kind {
        LexErrorKind::UnterminatedString => Diagnostic::error(ErrorCode::E0001)
            .with_message("unterminated string literal")
            .with_label(span, "string not closed")
            .with_note("strings end at the next `\"`; there are no escape sequences"),

        LexErrorKind::UnexpectedChar(c) => Diagnostic::error(ErrorCode::E0002)
            .with_message(format!("unexpected character {c:?}"))
            .with_label(span, "not part of any token"),

        LexErrorKind::InvalidNumber(text) => Diagnostic::error(ErrorCode::E0003)
            .with_message(format!("invalid number literal `{text}`"))
            .with_label(span, "not a number"),
    }
}
