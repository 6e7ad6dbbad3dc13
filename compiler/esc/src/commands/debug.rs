//! Debug commands: `parse` and `lex` for inspecting the front end.

use es_lexer::Lexer;

use super::{read_file, report_and_exit};
use crate::problem::{render_lex_error, render_parse_error};

/// Parse a file and print the term tree in its textual form.
pub fn parse_file(path: &str) {
    let content = read_file(path);
    match es_parse::parse(&content) {
        Ok(term) => println!("{term}"),
        Err(err) => report_and_exit(path, &content, &render_parse_error(&err)),
    }
}

/// Lex a file and print one token per line: span, kind and precedence.
pub fn lex_file(path: &str) {
    let content = read_file(path);
    for token in Lexer::new(&content) {
        match token {
            Ok(token) => println!(
                "{:>10}  {:<3} {}",
                token.span.to_string(),
                token.precedence().level(),
                token.kind
            ),
            Err(err) => report_and_exit(path, &content, &render_lex_error(&err)),
        }
    }
}
