//! Lexer tests.

#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use es_ir::{Literal, Name, Span, TokenKind};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use crate::{lex, LexErrorKind, Lexer};

fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source).unwrap().into_iter().map(|t| t.kind).collect()
}

fn ident(name: &str) -> TokenKind {
    TokenKind::Identifier(Name::from(name))
}

fn op(name: &str) -> TokenKind {
    TokenKind::Operator(Name::from(name))
}

fn num(value: f64) -> TokenKind {
    TokenKind::Literal(Literal::number(value))
}

fn string(text: &str) -> TokenKind {
    TokenKind::Literal(Literal::String(Name::from(text)))
}

#[test]
fn test_punctuation() {
    assert_eq!(
        kinds("; (| |) ( ) , ^ = := ->"),
        vec![
            TokenKind::Sequence,
            TokenKind::OpenObject,
            TokenKind::CloseObject,
            TokenKind::OpenGroup,
            TokenKind::CloseGroup,
            TokenKind::ArgSeparator,
            TokenKind::ReturnMarker,
            TokenKind::Assignment,
            TokenKind::PropertyDefine,
            TokenKind::MethodDefine,
            TokenKind::EndOfInput,
        ]
    );
}

#[test]
fn test_equals_inside_operator_run() {
    assert_eq!(
        kinds("a == b <= c = d"),
        vec![
            ident("a"),
            op("=="),
            ident("b"),
            op("<="),
            ident("c"),
            TokenKind::Assignment,
            ident("d"),
            TokenKind::EndOfInput,
        ]
    );
}

#[test]
fn test_comments_and_whitespace_are_skipped() {
    assert_eq!(
        kinds("# heading\n  x # trailing\n\t;\n# last"),
        vec![ident("x"), TokenKind::Sequence, TokenKind::EndOfInput]
    );
}

#[test]
fn test_numbers() {
    assert_eq!(
        kinds("42 3.5 .5 -7 1e3 0x10"),
        vec![
            num(42.0),
            num(3.5),
            num(0.5),
            num(-7.0),
            num(1000.0),
            num(16.0),
            TokenKind::EndOfInput,
        ]
    );
}

#[test]
fn test_minus_before_digit_is_a_number_but_spaced_minus_is_an_operator() {
    assert_eq!(
        kinds("n - 1"),
        vec![ident("n"), op("-"), num(1.0), TokenKind::EndOfInput]
    );
    assert_eq!(
        kinds("n -1"),
        vec![ident("n"), num(-1.0), TokenKind::EndOfInput]
    );
}

#[test]
fn test_malformed_number_is_an_error() {
    let err = lex("x := 1+2").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::InvalidNumber("1+2".to_string()));
    assert_eq!(err.span, Span::new(5, 8));

    let err = lex("1.2.3").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::InvalidNumber("1.2.3".to_string()));
}

#[test]
fn test_hex_letters_end_a_number() {
    let err = lex("0xff").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::InvalidNumber("0x".to_string()));

    assert_eq!(
        kinds("0x1f"),
        vec![num(1.0), ident("f"), TokenKind::EndOfInput]
    );
}

#[test]
fn test_strings_and_escapes() {
    assert_eq!(
        kinds(r#""hi" 'there' "a\"b" 'c\nd'"#),
        vec![
            string("hi"),
            string("there"),
            string("a\"b"),
            string("cnd"),
            TokenKind::EndOfInput,
        ]
    );
}

#[test]
fn test_unterminated_string() {
    let err = lex("print(\"oops").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::UnterminatedString);
    assert_eq!(err.span, Span::new(6, 11));
}

#[test]
fn test_operator_runs_are_maximal() {
    assert_eq!(
        kinds("a ++ b&c"),
        vec![ident("a"), op("++"), ident("b"), op("&"), ident("c"), TokenKind::EndOfInput]
    );
}

#[test]
fn test_identifiers() {
    assert_eq!(
        kinds("_pos turnLeft x2"),
        vec![ident("_pos"), ident("turnLeft"), ident("x2"), TokenKind::EndOfInput]
    );
}

#[test]
fn test_unexpected_character() {
    let err = lex("x @ y").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::UnexpectedChar('@'));
    assert_eq!(err.span, Span::new(2, 3));
}

#[test]
fn test_peek_is_memoized_until_read() {
    let mut lexer = Lexer::new("a b");
    assert_eq!(lexer.peek().unwrap().kind, ident("a"));
    assert_eq!(lexer.peek().unwrap().kind, ident("a"));
    assert_eq!(lexer.read().unwrap().kind, ident("a"));
    assert_eq!(lexer.peek().unwrap().kind, ident("b"));
}

#[test]
fn test_read_past_end_keeps_yielding_end() {
    let mut lexer = Lexer::new("");
    assert_eq!(lexer.read().unwrap().kind, TokenKind::EndOfInput);
    assert_eq!(lexer.read().unwrap().kind, TokenKind::EndOfInput);
}

#[test]
fn test_restart() {
    let mut lexer = Lexer::new("a; b");
    let first: Vec<_> = lexer.by_ref().map(|t| t.unwrap().kind).collect();
    lexer.restart();
    let second: Vec<_> = lexer.map(|t| t.unwrap().kind).collect();
    assert_eq!(first, second);
    assert_eq!(first.len(), 4);
}

#[test]
fn test_spans() {
    let tokens = lex("ab := 1").unwrap();
    let spans: Vec<_> = tokens.iter().map(|t| t.span).collect();
    assert_eq!(
        spans,
        vec![Span::new(0, 2), Span::new(3, 5), Span::new(6, 7), Span::new(7, 7)]
    );
}

proptest! {
    #[test]
    fn lexing_terminates_on_arbitrary_input(source in "\\PC{0,64}") {
        let count = Lexer::new(&source).count();
        prop_assert!(count >= 1);
        prop_assert!(count <= source.chars().count() + 1);
    }

    #[test]
    fn identifier_runs_lex_to_identifiers(words in proptest::collection::vec("[a-z_][a-z0-9_]{0,6}", 1..6)) {
        let source = words.join(" ");
        let tokens = lex(&source).unwrap();
        prop_assert_eq!(tokens.len(), words.len() + 1);
        for (token, word) in tokens.iter().zip(&words) {
            prop_assert_eq!(&token.kind, &ident(word));
        }
    }
}
