//! Diagnostic system for error reporting.
//!
//! Every failure the pipeline can produce (lexing, parsing, evaluation) is
//! turned into a [`Diagnostic`] by the driver:
//! - an [`ErrorCode`] for searchability and `es explain`
//! - a message saying what went wrong
//! - labels pointing at where it went wrong, when a span is known
//! - notes carrying extra context (the last parsed term, the active term)

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod errors;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::{ErrorCode, UnknownErrorCode};
pub use errors::ErrorDocs;
