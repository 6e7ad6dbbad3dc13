//! Head behaviours: tokens that begin an expression.

use std::rc::Rc;

use es_ir::{Precedence, Span, Term, TermRef, Token, TokenKind};

use super::empty_tuple;
use crate::{ParseError, ParseErrorKind, Parser};

impl Parser<'_> {
    pub(crate) fn head(&mut self, token: Token) -> Result<TermRef, ParseError> {
        let term = match token.kind {
            TokenKind::Literal(literal) => Term::Literal(literal),
            TokenKind::Identifier(method) => Term::SelfCall {
                method,
                args: self.parse_call_args()?,
            },
            // Unary use: one operand at the operator's own precedence.
            TokenKind::Operator(method) => {
                let operand = self.parse_expr(Precedence::of_operator(&method))?;
                Term::SelfCall {
                    method,
                    args: vec![operand],
                }
            }
            TokenKind::PropertyDefine => Term::Delegate(self.parse_expr(Precedence::SEQUENCE)?),
            TokenKind::MethodDefine => Term::Lambda {
                params: Vec::new(),
                body: self.parse_lambda_body()?,
            },
            TokenKind::OpenGroup => return self.parse_group(token.span),
            TokenKind::OpenObject => return self.parse_object(token.span),
            TokenKind::ReturnMarker => {
                if self.peek_precedence()? <= Precedence::SEQUENCE {
                    Term::Return(empty_tuple())
                } else {
                    Term::Return(self.parse_expr(Precedence::SEQUENCE)?)
                }
            }
            kind => return Err(ParseError::new(token.span, ParseErrorKind::NoHead(kind))),
        };
        Ok(Rc::new(term))
    }

    /// `( ... )`: always a tuple, so argument lists and tuple literals
    /// share one shape.
    fn parse_group(&mut self, open: Span) -> Result<TermRef, ParseError> {
        if self.peek_precedence()? <= Precedence::CLOSE {
            self.expect_close(open, &TokenKind::CloseGroup)?;
            return Ok(empty_tuple());
        }
        let term = self.parse_expr(Precedence::CLOSE)?;
        self.expect_close(open, &TokenKind::CloseGroup)?;
        if term.as_tuple().is_some() {
            return Ok(term);
        }
        Ok(Rc::new(Term::Tuple(vec![term])))
    }

    /// `(| ... |)`
    fn parse_object(&mut self, open: Span) -> Result<TermRef, ParseError> {
        if self.peek_precedence()? <= Precedence::CLOSE {
            self.expect_close(open, &TokenKind::CloseObject)?;
            return Ok(Rc::new(Term::ObjectLiteral(empty_tuple())));
        }
        let body = self.parse_expr(Precedence::CLOSE)?;
        self.expect_close(open, &TokenKind::CloseObject)?;
        Ok(Rc::new(Term::ObjectLiteral(body)))
    }

    fn expect_close(&mut self, open: Span, expected: &TokenKind) -> Result<(), ParseError> {
        let token = self.read()?;
        if token.kind == *expected {
            return Ok(());
        }
        Err(ParseError::new(
            token.span,
            ParseErrorKind::UnclosedDelimiter {
                open,
                expected: expected.clone(),
                found: token.kind,
            },
        ))
    }
}
