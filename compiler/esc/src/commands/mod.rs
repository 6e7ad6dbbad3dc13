//! Command handlers for the `es` CLI.
//!
//! Each submodule implements one command. Shared helpers like `read_file`
//! live here in the module root.

use std::io::IsTerminal;

use es_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use es_diagnostic::Diagnostic;

mod debug;
mod explain;
mod run;

pub use debug::{lex_file, parse_file};
pub use explain::explain_error;
pub use run::{drive, execute, parse_run_options, run_file, RunOptions};

/// Read a file from disk, exiting with a user-friendly error message on failure.
pub(crate) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("cannot read '{path}': {e}"),
            };
            eprintln!("error: {msg}");
            std::process::exit(1);
        }
    }
}

/// Render `diagnostic` against `source` on stderr and exit with status 1.
pub(crate) fn report_and_exit(path: &str, source: &str, diagnostic: &Diagnostic) -> ! {
    let is_tty = std::io::stderr().is_terminal();
    let mut emitter =
        TerminalEmitter::stderr(ColorMode::Auto, is_tty).with_source(path, source);
    emitter.emit(diagnostic);
    emitter.flush();
    std::process::exit(1);
}

#[cfg(test)]
mod tests;
