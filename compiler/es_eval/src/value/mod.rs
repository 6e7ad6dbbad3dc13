//! Runtime values.
//!
//! Values stay unboxed until a method is dispatched on them: numbers,
//! strings and booleans carry no method table of their own. Dispatch on a
//! scalar consults the fixed per-kind table in [`crate::ScalarOp`];
//! [`Value::boxed`] materializes the full object form when the object
//! itself is needed (delegation).

use std::fmt;

use es_ir::{format_number, Literal, Name};

use crate::scalar::box_scalar;
use crate::ObjectRef;

/// An unboxed primitive value.
#[derive(Clone, Debug, PartialEq)]
pub enum Scalar {
    Number(f64),
    Str(Name),
    Bool(bool),
}

impl Scalar {
    pub fn kind(&self) -> &'static str {
        match self {
            Scalar::Number(_) => "number",
            Scalar::Str(_) => "string",
            Scalar::Bool(_) => "boolean",
        }
    }

    #[inline]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Scalar::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Number(n) => f.write_str(&format_number(*n)),
            Scalar::Str(text) => f.write_str(text),
            Scalar::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// A value flowing between frames.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Number(f64),
    Str(Name),
    Bool(bool),
    Object(ObjectRef),
}

impl Value {
    pub fn string(text: impl Into<Name>) -> Value {
        Value::Str(text.into())
    }

    pub fn from_literal(literal: &Literal) -> Value {
        match literal {
            Literal::Number(bits) => Value::Number(f64::from_bits(*bits)),
            Literal::String(text) => Value::Str(text.clone()),
        }
    }

    pub fn from_scalar(scalar: Scalar) -> Value {
        match scalar {
            Scalar::Number(n) => Value::Number(n),
            Scalar::Str(text) => Value::Str(text),
            Scalar::Bool(b) => Value::Bool(b),
        }
    }

    /// The scalar this value carries: its own, or the one an object took
    /// over through delegation.
    pub fn scalar(&self) -> Option<Scalar> {
        match self {
            Value::Null => None,
            Value::Number(n) => Some(Scalar::Number(*n)),
            Value::Str(text) => Some(Scalar::Str(text.clone())),
            Value::Bool(b) => Some(Scalar::Bool(*b)),
            Value::Object(object) => object.scalar(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::Bool(_) => "boolean",
            Value::Object(_) => "object",
        }
    }

    /// Exactly `false`. Boolean operators treat everything else as true.
    pub fn is_false(&self) -> bool {
        matches!(self.scalar(), Some(Scalar::Bool(false)))
    }

    /// The object form of this value.
    ///
    /// Scalars box into a fresh object every time; null boxes into an
    /// object with no methods at all.
    pub fn boxed(&self) -> ObjectRef {
        match self {
            Value::Object(object) => object.clone(),
            Value::Null => ObjectRef::root(),
            Value::Number(_) | Value::Str(_) | Value::Bool(_) => match self.scalar() {
                Some(scalar) => box_scalar(scalar),
                None => ObjectRef::root(),
            },
        }
    }
}

impl From<Scalar> for Value {
    fn from(scalar: Scalar) -> Self {
        Value::from_scalar(scalar)
    }
}

/// Text used by `basicPrint` and string concatenation.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.scalar() {
            Some(scalar) => write!(f, "{scalar}"),
            None if matches!(self, Value::Null) => f.write_str("null"),
            None => f.write_str("(| |)"),
        }
    }
}
