//! Runtime errors.
//!
//! Any runtime error halts the machine: there is no recovery construct in
//! the language. The machine pairs the error with the textual form of the
//! term that was being stepped, giving an [`EvalError`].

use std::fmt;

use es_ir::Name;

/// Which dispatch failed to find a method.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Lookup {
    /// Unqualified call: the whole owner chain was searched.
    Lexical,
    /// Call with an explicit receiver: only the receiver was searched.
    Receiver,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuntimeError {
    MethodNotFound { name: Name, lookup: Lookup },
    /// A tuple of `len` elements where one value was required.
    InvalidTupleValue { len: usize },
    UnexpectedValueKind {
        expected: &'static str,
        found: String,
    },
    /// Only raised when strict arity checking is enabled.
    ArityMismatch {
        method: Name,
        expected: usize,
        got: usize,
    },
    /// Failure reported by a host primitive.
    Host(String),
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeError::MethodNotFound {
                name,
                lookup: Lookup::Lexical,
            } => write!(f, "no function in scope: {name}"),
            RuntimeError::MethodNotFound {
                name,
                lookup: Lookup::Receiver,
            } => write!(
                f,
                "no method in scope: {name} (note: semicolons are mandatory)"
            ),
            RuntimeError::InvalidTupleValue { len } => {
                write!(f, "cannot use a tuple of {len} values in this position")
            }
            RuntimeError::UnexpectedValueKind { expected, found } => {
                write!(f, "expected {expected}, found {found}")
            }
            RuntimeError::ArityMismatch {
                method,
                expected,
                got,
            } => {
                let s = if *expected == 1 { "" } else { "s" };
                let verb = if *got == 1 { "was" } else { "were" };
                write!(
                    f,
                    "`{method}` takes {expected} argument{s} but {got} {verb} given"
                )
            }
            RuntimeError::Host(message) => f.write_str(message),
        }
    }
}

impl std::error::Error for RuntimeError {}

/// A runtime error together with where it happened.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    pub error: RuntimeError,
    /// Textual form of the term being stepped when the error was raised.
    pub location: Option<String>,
}

impl EvalError {
    pub fn new(error: RuntimeError, location: Option<String>) -> Self {
        EvalError { error, location }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;
        if let Some(location) = &self.location {
            write!(f, "\n\tin `{location}`")?;
        }
        Ok(())
    }
}

impl std::error::Error for EvalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}
