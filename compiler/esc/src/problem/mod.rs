//! Rendering of front-end and runtime failures as [`Diagnostic`]s.
//!
//! Each phase's error type keeps its own structure; this module owns the
//! mapping to error codes, messages and labels.

mod eval;
mod lex;
mod parse;

pub use eval::render_eval_error;
pub use lex::render_lex_error;
pub use parse::render_parse_error;
