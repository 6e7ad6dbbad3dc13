//! Head and tail behaviours of each token kind.
//!
//! `head` turns a token that begins an expression into a term; `tail`
//! combines the term built so far with a token that extends it. A token
//! lacking the behaviour the parser needs is a parse error.

mod head;
mod tail;

use std::rc::Rc;

use es_ir::{Name, Precedence, Span, Term, TermRef, TokenKind};

use crate::{ParseError, ParseErrorKind, Parser};

impl Parser<'_> {
    /// Arguments following a method name: one bracketed expression whose
    /// tuple elements (or the single non-tuple value) become the argument
    /// list. No bracket means no arguments.
    fn parse_call_args(&mut self) -> Result<Vec<TermRef>, ParseError> {
        if !matches!(
            self.peek()?.kind,
            TokenKind::OpenGroup | TokenKind::OpenObject
        ) {
            return Ok(Vec::new());
        }
        let arg = self.parse_expr(Precedence::HEAD_ONLY)?;
        Ok(match arg.as_tuple() {
            Some(items) => items.to_vec(),
            None => vec![arg],
        })
    }

    /// Body of a lambda: everything up to the next `,` or closer, or an
    /// empty tuple when nothing follows.
    fn parse_lambda_body(&mut self) -> Result<TermRef, ParseError> {
        if self.peek_precedence()? < Precedence::SEQUENCE {
            return Ok(empty_tuple());
        }
        self.parse_expr(Precedence::SEQUENCE.weaker())
    }
}

fn empty_tuple() -> TermRef {
    Rc::new(Term::Tuple(Vec::new()))
}

/// Parameter names from a signature's arguments or a lambda's tuple.
fn param_names(items: &[TermRef], span: Span) -> Result<Vec<Name>, ParseError> {
    items
        .iter()
        .map(|item| {
            item.as_bare_name().cloned().ok_or_else(|| {
                ParseError::new(span, ParseErrorKind::InvalidParameter(item.to_string()))
            })
        })
        .collect()
}
