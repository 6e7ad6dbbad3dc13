//! What a method table entry can be.

use std::fmt;
use std::rc::Rc;

use es_ir::{Name, TermRef};

use crate::{FrameRef, Machine, ObjectRef, RuntimeError, Scalar, ScalarOp, Value};

/// A user method: `name(params) -> body`.
///
/// Invocation evaluates `body` in a fresh activation object owned by
/// `receiver`, with each parameter bound as a property.
pub struct MethodDef {
    pub name: Name,
    pub receiver: ObjectRef,
    pub params: Vec<Name>,
    pub body: TermRef,
}

/// A closure: like [`MethodDef`], plus the exit frame that was active
/// where the lambda literal was evaluated. A `^` in the body returns from
/// that frame's method, wherever the lambda is later called from.
pub struct LambdaDef {
    pub receiver: ObjectRef,
    pub params: Vec<Name>,
    pub body: TermRef,
    pub exit: Option<FrameRef>,
}

pub type HostFnImpl = dyn Fn(&mut Machine, &[Value]) -> Result<Value, RuntimeError>;

/// A host-supplied primitive. It receives the evaluated arguments and
/// produces its result synchronously; it may suspend the machine through
/// [`Machine::wait`] before returning.
#[derive(Clone)]
pub struct HostFn {
    pub name: Name,
    pub func: Rc<HostFnImpl>,
}

#[derive(Clone)]
pub enum Primitive {
    Host(HostFn),
    /// An entry of a boxed scalar's method table, bound to that scalar.
    Scalar(Scalar, ScalarOp),
}

#[derive(Clone)]
pub enum Callable {
    Method(Rc<MethodDef>),
    Lambda(Rc<LambdaDef>),
    Primitive(Primitive),
    /// Reads `target`'s field.
    Getter { target: ObjectRef, field: Name },
    /// Writes `target`'s field and yields the written value.
    Setter { target: ObjectRef, field: Name },
}

impl Callable {
    pub fn host(
        name: impl Into<Name>,
        func: impl Fn(&mut Machine, &[Value]) -> Result<Value, RuntimeError> + 'static,
    ) -> Callable {
        Callable::Primitive(Primitive::Host(HostFn {
            name: name.into(),
            func: Rc::new(func),
        }))
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Callable::Method(_) => "method",
            Callable::Lambda(_) => "lambda",
            Callable::Primitive(_) => "primitive",
            Callable::Getter { .. } => "getter",
            Callable::Setter { .. } => "setter",
        }
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Callable::Method(def) => write!(f, "Method({}/{})", def.name, def.params.len()),
            Callable::Lambda(def) => write!(f, "Lambda({})", def.params.len()),
            Callable::Primitive(Primitive::Host(host)) => write!(f, "Primitive({})", host.name),
            Callable::Primitive(Primitive::Scalar(scalar, op)) => {
                write!(f, "Primitive({}::{op:?})", scalar.kind())
            }
            Callable::Getter { field, .. } => write!(f, "Getter({field})"),
            Callable::Setter { field, .. } => write!(f, "Setter({field})"),
        }
    }
}
