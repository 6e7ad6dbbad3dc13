//! Diagnostic emitters.
//!
//! Only a terminal emitter exists; the trait keeps the driver independent of
//! the output format.

mod terminal;

pub use terminal::{ColorMode, TerminalEmitter};

use crate::Diagnostic;

/// Trait for emitting diagnostics.
pub trait DiagnosticEmitter {
    fn emit(&mut self, diagnostic: &Diagnostic);

    fn flush(&mut self);

    /// Emit a one-line summary of errors/warnings.
    fn emit_summary(&mut self, error_count: usize, warning_count: usize);
}
