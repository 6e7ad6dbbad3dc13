//! Runtime errors.
//!
//! The machine reports the textual form of the failing term rather than a
//! source span, so these diagnostics carry no labels.

use es_diagnostic::{Diagnostic, ErrorCode};
use es_eval::{EvalError, Lookup, RuntimeError};

fn error_code(error: &RuntimeError) -> ErrorCode {
    match error {
        RuntimeError::MethodNotFound {
            lookup: Lookup::Lexical,
            ..
        } => ErrorCode::E6001,
        RuntimeError::MethodNotFound {
            lookup: Lookup::Receiver,
            ..
        } => ErrorCode::E6002,
        RuntimeError::InvalidTupleValue { .. } => ErrorCode::E6003,
        RuntimeError::UnexpectedValueKind { .. } => ErrorCode::E6004,
        RuntimeError::ArityMismatch { .. } => ErrorCode::E6005,
        RuntimeError::Host(_) => ErrorCode::E6006,
    }
}

#[cold]
pub fn render_eval_error(err: &EvalError) -> Diagnostic {
    let diag = Diagnostic::error(error_code(&err.error)).with_message(err.error.to_string());
    match &err.location {
        Some(location) => diag.with_note(format!("in `{location}`")),
        None => diag,
    }
}
