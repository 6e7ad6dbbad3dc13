//! The term tree.
//!
//! Terms are immutable once the parser has built them and are shared through
//! [`TermRef`]. Evaluation-transient state (partially evaluated arguments,
//! the object under construction, ...) lives in the machine's frames, which
//! is what lets one term be active in several frames during recursion.

mod display;

use std::rc::Rc;

use crate::{format_number, Name};

/// Shared handle to a term.
pub type TermRef = Rc<Term>;

/// A literal value as written in source.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Literal {
    /// Number literal, stored as `f64` bits so the type stays `Eq + Hash`.
    Number(u64),
    String(Name),
}

impl Literal {
    #[inline]
    pub fn number(value: f64) -> Self {
        Literal::Number(value.to_bits())
    }

    #[inline]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Literal::Number(bits) => Some(f64::from_bits(*bits)),
            Literal::String(_) => None,
        }
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Literal::Number(bits) => f.write_str(&format_number(f64::from_bits(*bits))),
            Literal::String(text) => write!(f, "\"{text}\""),
        }
    }
}

/// A node of the syntax tree.
#[derive(Debug, PartialEq)]
pub enum Term {
    /// A literal; evaluates to its boxed value.
    Literal(Literal),
    /// `method(args)` without a receiver: lexical dispatch along the owner chain.
    SelfCall { method: Name, args: Vec<TermRef> },
    /// `receiver method(args)`: dispatch on the receiver's own methods only.
    Call {
        receiver: TermRef,
        method: Name,
        args: Vec<TermRef>,
    },
    /// `signature := value`; `name` is the signature's method name.
    PropertyDefine {
        name: Name,
        signature: TermRef,
        value: TermRef,
    },
    /// `signature -> body`; `params` are the signature's argument names.
    MethodDefine {
        name: Name,
        params: Vec<Name>,
        signature: TermRef,
        body: TermRef,
    },
    /// `(| body |)`
    ObjectLiteral(TermRef),
    /// `:= source` at the head of an expression: mix `source`'s methods in.
    Delegate(TermRef),
    /// `(params) -> body` or `-> body`.
    Lambda { params: Vec<Name>, body: TermRef },
    /// `first; rest`. A trailing `;` produces no node.
    Sequence { first: TermRef, rest: TermRef },
    /// `(a, b, ...)`: only meaningful as an argument or parameter list.
    Tuple(Vec<TermRef>),
    /// `^ value`
    Return(TermRef),
}

impl Term {
    /// Method name and arguments of a call-shaped term.
    pub fn call_shape(&self) -> Option<(&Name, &[TermRef])> {
        match self {
            Term::SelfCall { method, args } | Term::Call { method, args, .. } => {
                Some((method, args))
            }
            _ => None,
        }
    }

    /// The name of a bare identifier (a `SelfCall` without arguments).
    pub fn as_bare_name(&self) -> Option<&Name> {
        match self {
            Term::SelfCall { method, args } if args.is_empty() => Some(method),
            _ => None,
        }
    }

    pub fn as_tuple(&self) -> Option<&[TermRef]> {
        match self {
            Term::Tuple(items) => Some(items),
            _ => None,
        }
    }

    /// A term with no child terms.
    fn is_leaf(&self) -> bool {
        match self {
            Term::Literal(_) => true,
            Term::SelfCall { args, .. } | Term::Tuple(args) => args.is_empty(),
            _ => false,
        }
    }

    /// Short label of the node kind, used in logs.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Term::Literal(_) => "literal",
            Term::SelfCall { .. } => "self-call",
            Term::Call { .. } => "call",
            Term::PropertyDefine { .. } => "property-define",
            Term::MethodDefine { .. } => "method-define",
            Term::ObjectLiteral(_) => "object-literal",
            Term::Delegate(_) => "delegate",
            Term::Lambda { .. } => "lambda",
            Term::Sequence { .. } => "sequence",
            Term::Tuple(_) => "tuple",
            Term::Return(_) => "return",
        }
    }
}

impl Drop for Term {
    /// Unlink children through a worklist. Long `;` chains and left-nested
    /// operator chains are deep trees, and the default drop glue would walk
    /// them on the host stack.
    fn drop(&mut self) {
        let mut pending = Vec::new();
        detach_children(self, &mut pending);
        while let Some(mut term) = pending.pop() {
            detach_children(&mut term, &mut pending);
        }
    }
}

/// Move every uniquely owned child that still has children of its own into
/// `pending`, leaving an empty tuple in its place.
fn detach_children(term: &mut Term, pending: &mut Vec<Term>) {
    let mut detach = |child: &mut TermRef| {
        if let Some(inner) = Rc::get_mut(child) {
            if !inner.is_leaf() {
                pending.push(std::mem::replace(inner, Term::Tuple(Vec::new())));
            }
        }
    };
    match term {
        Term::Literal(_) => {}
        Term::SelfCall { args, .. } | Term::Tuple(args) => args.iter_mut().for_each(detach),
        Term::Call { receiver, args, .. } => {
            detach(receiver);
            args.iter_mut().for_each(detach);
        }
        Term::PropertyDefine {
            signature, value, ..
        } => {
            detach(signature);
            detach(value);
        }
        Term::MethodDefine {
            signature, body, ..
        } => {
            detach(signature);
            detach(body);
        }
        Term::ObjectLiteral(inner) | Term::Delegate(inner) | Term::Return(inner) => detach(inner),
        Term::Lambda { body, .. } => detach(body),
        Term::Sequence { first, rest } => {
            detach(first);
            detach(rest);
        }
    }
}
