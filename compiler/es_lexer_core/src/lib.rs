//! Low-level reader over EScript source text.
//!
//! This crate only does index arithmetic over a `&str`: peek at and consume
//! the next few characters, slice consumed text back out. It knows nothing
//! about tokens, which keeps it usable from tools that want to scan source
//! without the compiler.

mod reader;

pub use reader::Reader;
