//! The non-graphical host environment.
//!
//! [`root_environment`] builds the object every program starts in: the
//! printing and waiting primitives plus the `true`, `false` and `null`
//! properties. [`PRELUDE`] is EScript source for the control structures
//! and the `Point` value type, evaluated ahead of the user's program by
//! [`load`].

use std::rc::Rc;

use es_ir::{Name, Term, TermRef};
use es_parse::ParseError;
use tracing::debug;

use crate::{Callable, ObjectRef, RuntimeError, SharedPrintHandler, Value};

/// Library code run before every program loaded with the prelude.
pub const PRELUDE: &str = r#"
forever(body) -> (
  body call;
  wait;
  forever(body);
);
if(cond, body) -> (
  cond test (-> (| else := body call; elseif := else; |), -> (| else(body) -> body call; elseif(cond, body) -> if(cond, body) |));
);
not(cond) -> if (cond, -> false) else (-> true);

print(str) -> basicPrint(str asString);

Point(x, y) -> (|
  x := x;
  y := y;

  + other -> Point(x + other x, y + other y);
  - other -> Point(x - other x, y - other y);
  * scalar -> Point(x * scalar, y * scalar);
  / scalar -> Point(x / scalar, y / scalar);

  < other -> x < other x & y < other y;
  <= other -> x <= other x & y <= other y;
  == other -> x == other x & y == other y;
  >= other -> x >= other x & y >= other y;
  > other -> x > other x & y > other y;

  asString -> "Point(" ++ x asString ++ ", " ++ y asString ++ ")";
|);
"#;

/// The root object with the host primitives installed.
///
/// - `basicPrint(value)` writes the value's text and a newline to `print`.
/// - `wait(seconds)` suspends the machine; no argument or null means zero
///   seconds, which still ends the current tick.
pub fn root_environment(print: SharedPrintHandler) -> ObjectRef {
    let root = ObjectRef::root();

    root.define_method(
        Name::from("basicPrint"),
        Callable::host("basicPrint", move |_, args| {
            let text = args.first().map_or_else(String::new, Value::to_string);
            print.println(&text);
            Ok(Value::Null)
        }),
    );

    root.define_method(
        Name::from("wait"),
        Callable::host("wait", |machine, args| {
            let seconds = match args.first() {
                None | Some(Value::Null) => 0.0,
                Some(Value::Number(seconds)) => *seconds,
                Some(other) => {
                    return Err(RuntimeError::UnexpectedValueKind {
                        expected: "number",
                        found: other.kind().to_owned(),
                    })
                }
            };
            machine.wait(seconds);
            Ok(Value::Null)
        }),
    );

    root.define_property(Name::from("true"), Value::Bool(true));
    root.define_property(Name::from("false"), Value::Bool(false));
    root.define_property(Name::from("null"), Value::Null);
    root
}

/// Parse `source`, optionally preceded by [`PRELUDE`].
///
/// The two are parsed separately so error spans point into `source`.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len(), with_prelude = with_prelude))]
pub fn load(source: &str, with_prelude: bool) -> Result<TermRef, ParseError> {
    let program = es_parse::parse(source)?;
    if !with_prelude {
        return Ok(program);
    }
    let prelude = es_parse::parse(PRELUDE)?;
    debug!("prelude loaded");
    Ok(Rc::new(Term::Sequence {
        first: prelude,
        rest: program,
    }))
}

#[cfg(test)]
mod tests;
