//! EScript IR - the data shared between the front end and the machine.
//!
//! - [`Span`]: byte ranges into source text
//! - [`Name`]: cheaply clonable identifier/operator/method names
//! - [`Token`]/[`TokenKind`]: lexer output, each kind with a fixed
//!   [`Precedence`] and the [`Capabilities`] the parser may invoke on it
//! - [`Term`]: the immutable syntax tree the machine steps through
//!
//! Terms are built once by the parser and shared through [`TermRef`]; the
//! same term may be mid-evaluation in several frames at once, so nothing in
//! this crate carries evaluation state.

/// Compile-time assertion that a type has a specific size.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod ast;
mod name;
mod number;
mod span;
mod token;

pub use ast::{Literal, Term, TermRef};
pub use name::Name;
pub use number::format_number;
pub use span::{Span, SpanError};
pub use token::{Capabilities, Precedence, Token, TokenKind};
