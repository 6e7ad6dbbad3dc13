//! Tail behaviours: tokens that extend the expression to their left.

use std::rc::Rc;

use es_ir::{Precedence, Term, TermRef, Token, TokenKind};
use tracing::trace;

use super::param_names;
use crate::{ParseError, ParseErrorKind, Parser};

impl Parser<'_> {
    pub(crate) fn tail(&mut self, token: Token, left: TermRef) -> Result<TermRef, ParseError> {
        let term = match token.kind {
            // Explicit-receiver method call.
            TokenKind::Identifier(method) => Term::Call {
                receiver: left,
                method,
                args: self.parse_call_args()?,
            },
            // Binary use of an operator.
            TokenKind::Operator(method) => {
                let right = self.parse_expr(Precedence::of_operator(&method))?;
                Term::Call {
                    receiver: left,
                    method,
                    args: vec![right],
                }
            }
            TokenKind::Assignment => return self.assignment(&token, &left),
            TokenKind::PropertyDefine => {
                let Some((name, _)) = left.call_shape() else {
                    return Err(ParseError::new(
                        token.span,
                        ParseErrorKind::InvalidDefinitionTarget,
                    ));
                };
                let name = name.clone();
                let value = self.parse_expr(Precedence::DEFINITION.weaker())?;
                Term::PropertyDefine {
                    name,
                    signature: left,
                    value,
                }
            }
            TokenKind::MethodDefine => {
                // A parenthesized parameter list makes a lambda.
                if let Some(items) = left.as_tuple() {
                    let params = param_names(items, token.span)?;
                    let body = self.parse_lambda_body()?;
                    Term::Lambda { params, body }
                } else {
                    let Some((name, args)) = left.call_shape() else {
                        return Err(ParseError::new(
                            token.span,
                            ParseErrorKind::InvalidDefinitionTarget,
                        ));
                    };
                    let name = name.clone();
                    let params = param_names(args, token.span)?;
                    let body = self.parse_expr(Precedence::DEFINITION.weaker())?;
                    trace!(%name, arity = params.len(), "method definition");
                    Term::MethodDefine {
                        name,
                        params,
                        signature: left,
                        body,
                    }
                }
            }
            TokenKind::ArgSeparator => {
                if !self.peek()?.kind.can_head() {
                    return Ok(left);
                }
                let rest = self.parse_expr(Precedence::ARG_SEPARATOR.weaker())?;
                let mut items = vec![left];
                match rest.as_tuple() {
                    Some(tail) => items.extend(tail.iter().cloned()),
                    None => items.push(rest),
                }
                Term::Tuple(items)
            }
            TokenKind::Sequence => {
                // A trailing `;` leaves `left` in tail position.
                if !self.peek()?.kind.can_head() {
                    return Ok(left);
                }
                let rest = self.parse_expr(Precedence::SEQUENCE.weaker())?;
                Term::Sequence { first: left, rest }
            }
            kind => return Err(ParseError::new(token.span, ParseErrorKind::NoTail(kind))),
        };
        Ok(Rc::new(term))
    }

    /// `target = value`: rewrite the call `target` to its setter (`name=`)
    /// with `value` appended to the arguments.
    fn assignment(&mut self, token: &Token, left: &TermRef) -> Result<TermRef, ParseError> {
        if left.call_shape().is_none() {
            return Err(ParseError::new(
                token.span,
                ParseErrorKind::InvalidAssignmentTarget,
            ));
        }
        let value = if self.peek()?.kind == TokenKind::OpenGroup {
            self.parse_expr(Precedence::SEQUENCE)?
        } else {
            self.parse_expr(Precedence::ASSIGNMENT.weaker())?
        };
        let term = match &**left {
            Term::SelfCall { method, args } => Term::SelfCall {
                method: method.setter(),
                args: with_arg(args, value),
            },
            Term::Call {
                receiver,
                method,
                args,
            } => Term::Call {
                receiver: receiver.clone(),
                method: method.setter(),
                args: with_arg(args, value),
            },
            _ => {
                return Err(ParseError::new(
                    token.span,
                    ParseErrorKind::InvalidAssignmentTarget,
                ))
            }
        };
        Ok(Rc::new(term))
    }
}

fn with_arg(args: &[TermRef], value: TermRef) -> Vec<TermRef> {
    let mut out = Vec::with_capacity(args.len() + 1);
    out.extend(args.iter().cloned());
    out.push(value);
    out
}
