//! Parser for EScript.
//!
//! A precedence-climbing ("Pratt") parser: [`Parser::parse_expr`] reads one
//! token and lets it begin an expression (its *head* behaviour), then keeps
//! handing the expression built so far to each following token whose
//! precedence is strictly above the current threshold (its *tail*
//! behaviour). The per-token behaviours live in [`grammar`].
//!
//! The parser keeps a stack of the last successfully completed term at each
//! active nesting level; the top of that stack is reported with any error.

mod error;
mod grammar;

use es_ir::{Precedence, TermRef, Token};
use es_lexer::Lexer;
use es_stack::with_stack_headroom;
use tracing::debug;

pub use error::{ParseError, ParseErrorKind};

/// Parser state over one source text.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    /// Most recently completed term per active `parse_expr` level.
    last_good: Vec<TermRef>,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str) -> Self {
        Parser {
            lexer: Lexer::new(source),
            last_good: Vec::new(),
        }
    }

    /// Parse the whole input as one expression.
    ///
    /// On failure the error carries the textual form of the last term the
    /// parser completed before giving up.
    pub fn parse_program(&mut self) -> Result<TermRef, ParseError> {
        self.last_good.clear();
        self.parse_expr(Precedence::END).map_err(|mut err| {
            if err.after.is_none() {
                err.after = self.last_good.last().map(ToString::to_string);
            }
            err
        })
    }

    pub(crate) fn peek(&mut self) -> Result<&Token, ParseError> {
        Ok(self.lexer.peek()?)
    }

    pub(crate) fn read(&mut self) -> Result<Token, ParseError> {
        Ok(self.lexer.read()?)
    }

    #[inline]
    pub(crate) fn peek_precedence(&mut self) -> Result<Precedence, ParseError> {
        Ok(self.peek()?.precedence())
    }

    /// Parse an expression, extending it while the next token binds
    /// strictly tighter than `min`.
    pub fn parse_expr(&mut self, min: Precedence) -> Result<TermRef, ParseError> {
        with_stack_headroom(|| {
            let token = self.read()?;
            let mut term = self.head(token)?;
            self.last_good.push(term.clone());

            while self.peek_precedence()? > min {
                let token = self.read()?;
                term = self.tail(token, term)?;
                if let Some(top) = self.last_good.last_mut() {
                    *top = term.clone();
                }
            }

            self.last_good.pop();
            Ok(term)
        })
    }
}

/// Parse a source text into a term tree.
///
/// Either the whole text parses or nothing does: there is no partial result.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn parse(source: &str) -> Result<TermRef, ParseError> {
    let term = Parser::new(source).parse_program()?;
    debug!(root = term.kind_name(), "parsed");
    Ok(term)
}

#[cfg(test)]
mod tests;
