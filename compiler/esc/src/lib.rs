//! EScript driver library.
//!
//! The `es` binary is a thin argument dispatcher over [`commands`]; the
//! pieces that tests and embedders need (option parsing, the tick loop,
//! error rendering) live here.

pub mod commands;
pub mod problem;
pub mod tracing_setup;

pub use commands::{execute, RunOptions};
