#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use pretty_assertions::assert_eq;

use super::*;
use crate::{buffer_handler, Machine, Status};

#[test]
fn test_prelude_parses() {
    let prelude = es_parse::parse(PRELUDE).unwrap();
    assert!(matches!(*prelude, Term::Sequence { .. }));
}

#[test]
fn test_root_environment_contents() {
    let root = root_environment(buffer_handler());
    assert!(root.has_method("basicPrint"));
    assert!(root.has_method("wait"));
    assert_eq!(root.field("true"), Some(Value::Bool(true)));
    assert_eq!(root.field("false"), Some(Value::Bool(false)));
    assert_eq!(root.field("null"), Some(Value::Null));
    assert!(root.has_method("null="));
}

#[test]
fn test_load_without_prelude_is_the_program() {
    let program = load("x := 1", false).unwrap();
    assert_eq!(program.to_string(), "x := 1");
}

#[test]
fn test_load_with_prelude_runs_prelude_first() {
    let program = load("print(1)", true).unwrap();
    let Term::Sequence { rest, .. } = &*program else {
        panic!("expected prelude sequence, got {program}");
    };
    assert_eq!(rest.to_string(), "print(1)");
}

#[test]
fn test_load_reports_program_errors() {
    let err = load("f(x) )", true).unwrap_err();
    assert_eq!(err.span.to_range(), 5..6);
}

#[test]
fn test_basic_print_writes_value_text() {
    let output = buffer_handler();
    let root = root_environment(output.clone());
    let program = load(r#"basicPrint(1.5); basicPrint("s"); basicPrint(null); basicPrint(true)"#, false).unwrap();
    let mut machine = Machine::new(program, root);
    assert_eq!(machine.run_to_end(10), Status::Finished);
    assert_eq!(output.get_output(), "1.5\ns\nnull\ntrue\n");
}

#[test]
fn test_print_without_prelude_is_unknown() {
    let root = root_environment(buffer_handler());
    let mut machine = Machine::new(load("print(1)", false).unwrap(), root);
    assert_eq!(machine.run_to_end(10), Status::Failed);
}
