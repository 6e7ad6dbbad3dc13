//! Parser tests.

#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use es_ir::{Literal, Name, Term, TokenKind};
use pretty_assertions::assert_eq;

use crate::{parse, ParseError, ParseErrorKind};

fn show(source: &str) -> String {
    parse(source).unwrap().to_string()
}

fn fail(source: &str) -> ParseError {
    parse(source).unwrap_err()
}

#[test]
fn test_literal() {
    let term = parse("42").unwrap();
    assert_eq!(*term, Term::Literal(Literal::number(42.0)));
    let term = parse("\"hi\"").unwrap();
    assert_eq!(*term, Term::Literal(Literal::String(Name::from("hi"))));
}

#[test]
fn test_operator_precedence() {
    assert_eq!(show("1 + 2 * 3"), "1 +(2 *(3))");
    assert_eq!(show("1 * 2 + 3"), "1 *(2) +(3)");
    assert_eq!(show("a < b + 1 & c"), "a <(b +(1)) &(c)");
}

#[test]
fn test_same_precedence_is_left_associative() {
    assert_eq!(show("1 - 2 - 3"), "1 -(2) -(3)");
}

#[test]
fn test_unary_operator() {
    assert_eq!(show("-x"), "-(x)");
    assert_eq!(show("-x * y"), "-(x *(y))");
}

#[test]
fn test_method_binds_tighter_than_operators() {
    assert_eq!(show("a + b size"), "a +(b size())");
    assert_eq!(show("p x max(3)"), "p x() max(3)");
}

#[test]
fn test_call_arguments() {
    let term = parse("f(1, 2, 3)").unwrap();
    let (name, args) = term.call_shape().unwrap();
    assert_eq!(name.as_str(), "f");
    assert_eq!(args.len(), 3);
    assert_eq!(show("f(g(1), 2)"), "f(g(1), 2)");
}

#[test]
fn test_empty_parens_mean_no_arguments() {
    let term = parse("f()").unwrap();
    assert_eq!(term.call_shape().unwrap().1.len(), 0);
    assert_eq!(*parse("()").unwrap(), Term::Tuple(Vec::new()));
}

#[test]
fn test_object_as_argument() {
    let term = parse("wrap(| x := 1 |)").unwrap();
    let (_, args) = term.call_shape().unwrap();
    assert_eq!(args.len(), 1);
    assert!(matches!(*args[0], Term::ObjectLiteral(_)));
}

#[test]
fn test_trailing_comma_is_dropped() {
    assert_eq!(show("f(1, 2,)"), "f(1, 2)");
}

#[test]
fn test_tuple_flattens() {
    let term = parse("(1, 2, 3)").unwrap();
    assert_eq!(term.as_tuple().unwrap().len(), 3);
}

#[test]
fn test_single_group_is_a_tuple() {
    let term = parse("(1 + 2)").unwrap();
    assert_eq!(term.as_tuple().unwrap().len(), 1);
}

#[test]
fn test_assignment_rewrites_to_setter() {
    let term = parse("x = 1").unwrap();
    assert_eq!(
        term.call_shape().map(|(name, args)| (name.as_str(), args.len())),
        Some(("x=", 1))
    );
    assert_eq!(show("p x = 3 + 4"), "p x=(3 +(4))");
    assert_eq!(show("at(1) = 2"), "at=(1, 2)");
}

#[test]
fn test_assignment_with_group_value() {
    assert_eq!(show("x = (1, 2); y"), "x=((1, 2)); y");
}

#[test]
fn test_property_define() {
    let term = parse("x := 5").unwrap();
    let Term::PropertyDefine { name, value, .. } = &*term else {
        panic!("expected a property definition, got {term:?}");
    };
    assert_eq!(name.as_str(), "x");
    assert_eq!(**value, Term::Literal(Literal::number(5.0)));
}

#[test]
fn test_method_define() {
    let term = parse("add(a, b) -> a + b").unwrap();
    let Term::MethodDefine { name, params, .. } = &*term else {
        panic!("expected a method definition, got {term:?}");
    };
    assert_eq!(name.as_str(), "add");
    assert_eq!(params, &vec![Name::from("a"), Name::from("b")]);
    assert_eq!(term.to_string(), "add(a, b) -> a +(b)");
}

#[test]
fn test_definition_is_right_associative() {
    let term = parse("a -> b -> c").unwrap();
    let Term::MethodDefine { body, .. } = &*term else {
        panic!("expected a method definition, got {term:?}");
    };
    assert!(matches!(**body, Term::MethodDefine { .. }));
    assert_eq!(term.to_string(), "a -> b -> c");
}

#[test]
fn test_definition_with_call_signatures_is_right_associative() {
    let term = parse("a() -> b() -> c").unwrap();
    let Term::MethodDefine { name, body, .. } = &*term else {
        panic!("expected a method definition, got {term:?}");
    };
    assert_eq!(name.as_str(), "a");
    let Term::MethodDefine { name, body, .. } = &**body else {
        panic!("expected a nested method definition, got {body:?}");
    };
    assert_eq!(name.as_str(), "b");
    assert_eq!(body.as_bare_name().map(Name::as_str), Some("c"));
}

#[test]
fn test_definition_body_stops_at_sequence() {
    let term = parse("f -> 1; g").unwrap();
    let Term::Sequence { first, rest } = &*term else {
        panic!("expected a sequence, got {term:?}");
    };
    assert!(matches!(**first, Term::MethodDefine { .. }));
    assert_eq!(rest.as_bare_name().map(Name::as_str), Some("g"));
}

#[test]
fn test_definition_body_may_be_a_group() {
    assert_eq!(show("f -> (a; b)"), "f -> (a; b)");
}

#[test]
fn test_lambda_with_params() {
    let term = parse("(x, y) -> x * y").unwrap();
    let Term::Lambda { params, body } = &*term else {
        panic!("expected a lambda, got {term:?}");
    };
    assert_eq!(params.len(), 2);
    assert_eq!(body.to_string(), "x *(y)");
}

#[test]
fn test_lambda_without_params() {
    assert_eq!(show("-> print(1)"), "\\() -> (print(1))");
    assert_eq!(show("forever(-> x = x + 1)"), "forever(\\() -> (x=(x +(1))))");
}

#[test]
fn test_lambda_body_stops_at_comma() {
    let term = parse("if(c, -> 1, -> 2)").unwrap();
    let (_, args) = term.call_shape().unwrap();
    assert_eq!(args.len(), 3);
    assert!(matches!(*args[1], Term::Lambda { .. }));
    assert!(matches!(*args[2], Term::Lambda { .. }));
}

#[test]
fn test_empty_lambda_body() {
    let term = parse("f(->)").unwrap();
    let (_, args) = term.call_shape().unwrap();
    let Term::Lambda { body, .. } = &*args[0] else {
        panic!("expected a lambda");
    };
    assert_eq!(**body, Term::Tuple(Vec::new()));
}

#[test]
fn test_object_literal_and_delegate() {
    assert_eq!(show("(| :=base; x := 1 |)"), "(| :=base; x := 1 |)");
    assert_eq!(show("(||)"), "(| () |)");
    assert_eq!(show("(| |)"), "(| () |)");
}

#[test]
fn test_sequence_and_trailing_semicolon() {
    let term = parse("a; b;").unwrap();
    let Term::Sequence { rest, .. } = &*term else {
        panic!("expected a sequence");
    };
    assert_eq!(rest.as_bare_name().map(Name::as_str), Some("b"));
    assert_eq!(term.to_string(), "a; b");
    assert_eq!(show("(f(x);)"), "(f(x))");
    assert_eq!(show("a;"), "a");
}

#[test]
fn test_return() {
    assert_eq!(show("^ x + 1"), "^ x +(1)");
    assert_eq!(show("f -> (^ 1; 2)"), "f -> (^ 1; 2)");
    assert_eq!(show("^;"), "^ ()");
}

#[test]
fn test_comments_are_ignored() {
    assert_eq!(show("# leading\nx := 1 # trailing\n"), "x := 1");
}

#[test]
fn test_no_head() {
    let err = fail(")");
    assert_eq!(err.kind, ParseErrorKind::NoHead(TokenKind::CloseGroup));
    assert_eq!(err.after, None);
}

#[test]
fn test_error_reports_last_good_term() {
    let err = fail("f(x) )");
    assert_eq!(err.kind, ParseErrorKind::NoTail(TokenKind::CloseGroup));
    assert_eq!(err.after.as_deref(), Some("f(x)"));
    assert_eq!(err.span.to_range(), 5..6);
}

#[test]
fn test_unclosed_group() {
    let err = fail("(1, 2");
    let ParseErrorKind::UnclosedDelimiter {
        open,
        expected,
        found,
    } = err.kind
    else {
        panic!("expected an unclosed delimiter, got {:?}", err.kind);
    };
    assert_eq!(open.to_range(), 0..1);
    assert_eq!(expected, TokenKind::CloseGroup);
    assert_eq!(found, TokenKind::EndOfInput);
}

#[test]
fn test_mismatched_closer() {
    let err = fail("(| x )");
    assert!(matches!(
        err.kind,
        ParseErrorKind::UnclosedDelimiter {
            expected: TokenKind::CloseObject,
            found: TokenKind::CloseGroup,
            ..
        }
    ));
}

#[test]
fn test_invalid_assignment_target() {
    assert_eq!(fail("1 = 2").kind, ParseErrorKind::InvalidAssignmentTarget);
}

#[test]
fn test_invalid_definition_target() {
    assert_eq!(fail("1 := 2").kind, ParseErrorKind::InvalidDefinitionTarget);
    assert_eq!(fail("\"s\" -> 2").kind, ParseErrorKind::InvalidDefinitionTarget);
}

#[test]
fn test_invalid_parameter() {
    assert_eq!(
        fail("f(1) -> 2").kind,
        ParseErrorKind::InvalidParameter("1".to_string())
    );
    assert_eq!(
        fail("(a b) -> 2").kind,
        ParseErrorKind::InvalidParameter("a b()".to_string())
    );
}

#[test]
fn test_lex_error_surfaces() {
    let err = fail("x := \"open");
    assert!(matches!(err.kind, ParseErrorKind::Lex(_)));
    assert_eq!(err.after.as_deref(), Some("x"));
}

#[test]
fn test_long_sequence() {
    let source = "x := 1;\n".repeat(20_000);
    let term = parse(&source).unwrap();
    assert!(matches!(*term, Term::Sequence { .. }));
}

#[test]
fn test_deep_nesting() {
    let depth = 500;
    let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    let term = parse(&source).unwrap();
    assert!(term.as_tuple().is_some());
}

#[test]
fn test_long_operator_chain_parses_and_drops() {
    let source = format!("x := 1{}", " + 1".repeat(200_000));
    let term = parse(&source).unwrap();
    assert!(matches!(*term, Term::PropertyDefine { .. }));
    drop(term);
}
