//! Textual form of terms, used by `es parse` and as location context in
//! parse and runtime diagnostics.

use std::fmt;

use es_stack::with_stack_headroom;

use super::{Term, TermRef};

fn write_list(f: &mut fmt::Formatter<'_>, items: &[TermRef]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        with_stack_headroom(|| match self {
            Term::Literal(literal) => write!(f, "{literal}"),
            Term::SelfCall { method, args } => {
                if args.is_empty() {
                    return write!(f, "{method}");
                }
                write!(f, "{method}(")?;
                write_list(f, args)?;
                f.write_str(")")
            }
            Term::Call {
                receiver,
                method,
                args,
            } => {
                write!(f, "{receiver} {method}(")?;
                write_list(f, args)?;
                f.write_str(")")
            }
            Term::PropertyDefine {
                signature, value, ..
            } => write!(f, "{signature} := {value}"),
            Term::MethodDefine {
                signature, body, ..
            } => write!(f, "{signature} -> {body}"),
            Term::ObjectLiteral(body) => write!(f, "(| {body} |)"),
            Term::Delegate(source) => write!(f, ":={source}"),
            Term::Lambda { params, body } => {
                f.write_str("\\(")?;
                for (i, param) in params.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{param}")?;
                }
                write!(f, ") -> ({body})")
            }
            Term::Sequence { first, rest } => write!(f, "{first}; {rest}"),
            Term::Tuple(items) => {
                f.write_str("(")?;
                write_list(f, items)?;
                f.write_str(")")
            }
            Term::Return(value) => write!(f, "^ {value}"),
        })
    }
}
