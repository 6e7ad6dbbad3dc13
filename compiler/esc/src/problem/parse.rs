//! Parse errors.

use es_diagnostic::{Diagnostic, ErrorCode};
use es_parse::{ParseError, ParseErrorKind};

use super::render_lex_error;

#[cold]
pub fn render_parse_error(err: &ParseError) -> Diagnostic {
    let span = err.span;
    let diag = match &err.kind {
        ParseErrorKind::Lex(lex) => return render_lex_error(lex),

        ParseErrorKind::NoTail(token) => Diagnostic::error(ErrorCode::E1001)
            .with_message(format!("unexpected `{token}`"))
            .with_label(span, "cannot continue the expression before it"),

        ParseErrorKind::NoHead(token) => Diagnostic::error(ErrorCode::E1002)
            .with_message(format!("expected an expression, found `{token}`"))
            .with_label(span, "cannot start an expression"),

        ParseErrorKind::UnclosedDelimiter {
            open,
            expected,
            found,
        } => Diagnostic::error(ErrorCode::E1003)
            .with_message(format!("expected `{expected}`, found `{found}`"))
            .with_label(span, format!("expected `{expected}`"))
            .with_secondary_label(*open, "unclosed delimiter opened here"),

        ParseErrorKind::InvalidAssignmentTarget => Diagnostic::error(ErrorCode::E1004)
            .with_message("invalid assignment target")
            .with_label(span, "only a method call can be assigned to"),

        ParseErrorKind::InvalidDefinitionTarget => Diagnostic::error(ErrorCode::E1005)
            .with_message("invalid definition target")
            .with_label(span, "only a method call can name a definition"),

        ParseErrorKind::InvalidParameter(text) => Diagnostic::error(ErrorCode::E1006)
            .with_message(format!("invalid parameter `{text}`"))
            .with_label(span, "parameters must be plain names"),
    };
    match &err.after {
        Some(after) => diag.with_note(format!("after `{after}`")),
        None => diag,
    }
}
