//! Method tables of boxed scalars.
//!
//! Each scalar kind has a fixed table of primitive methods. Every entry
//! closes over the scalar it was boxed from, so a table copied into another
//! object by delegation keeps operating on the original value.

use std::f64::consts::PI;

use es_ir::{format_number, Name};

use crate::{Callable, ObjectRef, Primitive, RuntimeError, Scalar, Value};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ScalarOp {
    // number
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    DegToRad,
    RadToDeg,
    Abs,
    Negated,
    Sin,
    Cos,
    Tan,
    Lt,
    Gt,
    Le,
    Ge,
    // string
    Concat,
    At,
    // boolean
    Test,
    And,
    Or,
    // shared
    Eq,
    AsString,
}

const NUMBER_METHODS: &[(&str, ScalarOp)] = &[
    ("+", ScalarOp::Add),
    ("-", ScalarOp::Sub),
    ("*", ScalarOp::Mul),
    ("/", ScalarOp::Div),
    ("%", ScalarOp::Rem),
    ("degToRad", ScalarOp::DegToRad),
    ("radToDeg", ScalarOp::RadToDeg),
    ("abs", ScalarOp::Abs),
    ("negated", ScalarOp::Negated),
    ("sin", ScalarOp::Sin),
    ("cos", ScalarOp::Cos),
    ("tan", ScalarOp::Tan),
    ("<", ScalarOp::Lt),
    ("==", ScalarOp::Eq),
    (">", ScalarOp::Gt),
    ("<=", ScalarOp::Le),
    (">=", ScalarOp::Ge),
    ("asString", ScalarOp::AsString),
];

const STRING_METHODS: &[(&str, ScalarOp)] = &[
    ("++", ScalarOp::Concat),
    ("at", ScalarOp::At),
    ("==", ScalarOp::Eq),
    ("asString", ScalarOp::AsString),
];

const BOOL_METHODS: &[(&str, ScalarOp)] = &[
    ("test", ScalarOp::Test),
    ("&", ScalarOp::And),
    ("|", ScalarOp::Or),
    ("asString", ScalarOp::AsString),
];

impl ScalarOp {
    /// The method table of a scalar kind.
    pub fn table(scalar: &Scalar) -> &'static [(&'static str, ScalarOp)] {
        match scalar {
            Scalar::Number(_) => NUMBER_METHODS,
            Scalar::Str(_) => STRING_METHODS,
            Scalar::Bool(_) => BOOL_METHODS,
        }
    }

    pub fn lookup(scalar: &Scalar, name: &str) -> Option<ScalarOp> {
        Self::table(scalar)
            .iter()
            .find(|(method, _)| *method == name)
            .map(|(_, op)| *op)
    }
}

/// Box a scalar: a fresh owner-less object holding the scalar and its
/// kind's full method table.
pub fn box_scalar(scalar: Scalar) -> ObjectRef {
    let object = ObjectRef::root();
    for (name, op) in ScalarOp::table(&scalar) {
        object.define_method(
            Name::from(*name),
            Callable::Primitive(Primitive::Scalar(scalar.clone(), *op)),
        );
    }
    object.set_scalar(scalar);
    object
}

/// Outcome of a scalar primitive.
#[derive(Debug, PartialEq)]
pub(crate) enum Reply {
    Value(Value),
    /// Dispatch `method` on `target` with no arguments; its result is the
    /// primitive's result.
    Send { target: Value, method: &'static str },
}

fn operand(args: &[Value]) -> Value {
    args.first().cloned().unwrap_or(Value::Null)
}

fn number_operand(args: &[Value]) -> Result<f64, RuntimeError> {
    let value = operand(args);
    value
        .scalar()
        .and_then(|scalar| scalar.as_number())
        .ok_or_else(|| RuntimeError::UnexpectedValueKind {
            expected: "number",
            found: value.kind().to_string(),
        })
}

/// Run `op` on `scalar` with already-evaluated `args`.
pub(crate) fn apply(scalar: &Scalar, op: ScalarOp, args: &[Value]) -> Result<Reply, RuntimeError> {
    let value = match (scalar, op) {
        (_, ScalarOp::Eq) => Value::Bool(operand(args).scalar().as_ref() == Some(scalar)),
        (Scalar::Str(_), ScalarOp::AsString) => Value::from_scalar(scalar.clone()),
        (_, ScalarOp::AsString) => Value::string(scalar.to_string()),

        (Scalar::Number(n), op) => number(*n, op, args)?,

        (Scalar::Str(text), ScalarOp::Concat) => {
            let mut joined = text.to_string();
            joined.push_str(&operand(args).to_string());
            Value::string(joined)
        }
        (Scalar::Str(text), ScalarOp::At) => char_at(text, number_operand(args)?)?,

        (Scalar::Bool(b), ScalarOp::Test) => {
            let target = if *b { args.first() } else { args.get(1) };
            return Ok(Reply::Send {
                target: target.cloned().unwrap_or(Value::Null),
                method: "call",
            });
        }
        (Scalar::Bool(b), ScalarOp::And) => Value::Bool(*b && !operand(args).is_false()),
        (Scalar::Bool(b), ScalarOp::Or) => Value::Bool(*b || !operand(args).is_false()),

        (scalar, op) => {
            return Err(RuntimeError::UnexpectedValueKind {
                expected: op_kind(op),
                found: scalar.kind().to_string(),
            })
        }
    };
    Ok(Reply::Value(value))
}

fn number(n: f64, op: ScalarOp, args: &[Value]) -> Result<Value, RuntimeError> {
    let result = match op {
        ScalarOp::DegToRad => n * PI / 180.0,
        ScalarOp::RadToDeg => n * 180.0 / PI,
        ScalarOp::Abs => n.abs(),
        ScalarOp::Negated => -n,
        ScalarOp::Sin => n.sin(),
        ScalarOp::Cos => n.cos(),
        ScalarOp::Tan => n.tan(),
        _ => {
            let other = number_operand(args)?;
            match op {
                ScalarOp::Add => n + other,
                ScalarOp::Sub => n - other,
                ScalarOp::Mul => n * other,
                ScalarOp::Div => n / other,
                // The result takes the sign of a positive modulus.
                ScalarOp::Rem => {
                    let rem = n % other;
                    if rem < 0.0 {
                        rem + other.abs()
                    } else {
                        rem
                    }
                }
                ScalarOp::Lt => return Ok(Value::Bool(n < other)),
                ScalarOp::Gt => return Ok(Value::Bool(n > other)),
                ScalarOp::Le => return Ok(Value::Bool(n <= other)),
                ScalarOp::Ge => return Ok(Value::Bool(n >= other)),
                _ => {
                    return Err(RuntimeError::UnexpectedValueKind {
                        expected: op_kind(op),
                        found: "number".to_string(),
                    })
                }
            }
        }
    };
    Ok(Value::Number(result))
}

/// Character at `index`; negative indices count from the end.
fn char_at(text: &str, index: f64) -> Result<Value, RuntimeError> {
    let len = text.chars().count();
    let index = index.trunc();
    let resolved = if index < 0.0 {
        (len as f64) + index
    } else {
        index
    };
    if !(0.0..len as f64).contains(&resolved) {
        return Err(RuntimeError::UnexpectedValueKind {
            expected: "index within the string",
            found: format!("index {}", format_number(index)),
        });
    }
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "checked to lie in 0..len above"
    )]
    let position = resolved as usize;
    Ok(text
        .chars()
        .nth(position)
        .map_or(Value::Null, |c| Value::string(c.to_string())))
}

/// The scalar kind whose table holds `op`.
fn op_kind(op: ScalarOp) -> &'static str {
    match op {
        ScalarOp::Concat | ScalarOp::At => "string",
        ScalarOp::Test | ScalarOp::And | ScalarOp::Or => "boolean",
        ScalarOp::Eq | ScalarOp::AsString => "scalar",
        _ => "number",
    }
}
