//! Tokens produced by the lexer.
//!
//! Every token kind carries a fixed binding [`Precedence`] and a set of
//! [`Capabilities`]: whether it can begin an expression (`HEAD`) and/or
//! extend the expression to its left (`TAIL`). The parser consults both and
//! never inspects token text directly.

use std::fmt;

use crate::{Literal, Name, Span};

/// Binding strength of a token, from [`Precedence::END`] (weakest) to
/// [`Precedence::HEAD_ONLY`] (strongest).
///
/// The parser keeps extending an expression while the next token's
/// precedence is strictly greater than the current threshold.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Precedence(u8);

impl Precedence {
    /// End of input.
    pub const END: Precedence = Precedence(0);
    /// `)` and `|)`.
    pub const CLOSE: Precedence = Precedence(1);
    /// `,`
    pub const ARG_SEPARATOR: Precedence = Precedence(2);
    /// `;`
    pub const SEQUENCE: Precedence = Precedence(3);
    /// `:=` and `->` (right-associative).
    pub const DEFINITION: Precedence = Precedence(4);
    /// `=`
    pub const ASSIGNMENT: Precedence = Precedence(5);
    /// Operators starting with `&` or `|`.
    pub const JUNCTION: Precedence = Precedence(6);
    /// Operators starting with `<`, `=` or `>`.
    pub const COMPARISON: Precedence = Precedence(7);
    /// Operators starting with `+` or `-`.
    pub const SUM: Precedence = Precedence(8);
    /// Any other operator (`*`, `/`, `%`).
    pub const PRODUCT: Precedence = Precedence(9);
    /// Identifiers: explicit-receiver method calls bind tightest.
    pub const METHOD: Precedence = Precedence(10);
    /// Literals, groups, object literals and `^`.
    pub const HEAD_ONLY: Precedence = Precedence(11);

    /// The threshold one step weaker; used to parse right-associative bodies.
    #[inline]
    #[must_use]
    pub const fn weaker(self) -> Precedence {
        Precedence(self.0.saturating_sub(1))
    }

    /// Numeric binding strength; higher binds tighter.
    #[inline]
    pub const fn level(self) -> u8 {
        self.0
    }

    /// Precedence of an operator run, decided by its first character.
    pub fn of_operator(name: &str) -> Precedence {
        match name.chars().next() {
            Some('&' | '|') => Precedence::JUNCTION,
            Some('<' | '=' | '>') => Precedence::COMPARISON,
            Some('+' | '-') => Precedence::SUM,
            _ => Precedence::PRODUCT,
        }
    }
}

bitflags::bitflags! {
    /// Which parser behaviours a token kind supports.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct Capabilities: u8 {
        /// May begin an expression.
        const HEAD = 1 << 0;
        /// May extend the expression to its left.
        const TAIL = 1 << 1;
    }
}

/// Token kinds.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    EndOfInput,
    /// `;`
    Sequence,
    /// `(|`
    OpenObject,
    /// `|)`
    CloseObject,
    /// `(`
    OpenGroup,
    /// `)`
    CloseGroup,
    /// `,`
    ArgSeparator,
    /// `^`
    ReturnMarker,
    /// `=` on its own.
    Assignment,
    /// `:=`
    PropertyDefine,
    /// `->`
    MethodDefine,
    /// Number or string literal.
    Literal(Literal),
    Identifier(Name),
    /// A maximal run of `+-*/%<=>&|`.
    Operator(Name),
}

impl TokenKind {
    pub fn precedence(&self) -> Precedence {
        match self {
            TokenKind::EndOfInput => Precedence::END,
            TokenKind::CloseGroup | TokenKind::CloseObject => Precedence::CLOSE,
            TokenKind::ArgSeparator => Precedence::ARG_SEPARATOR,
            TokenKind::Sequence => Precedence::SEQUENCE,
            TokenKind::PropertyDefine | TokenKind::MethodDefine => Precedence::DEFINITION,
            TokenKind::Assignment => Precedence::ASSIGNMENT,
            TokenKind::Operator(name) => Precedence::of_operator(name),
            TokenKind::Identifier(_) => Precedence::METHOD,
            TokenKind::Literal(_)
            | TokenKind::OpenGroup
            | TokenKind::OpenObject
            | TokenKind::ReturnMarker => Precedence::HEAD_ONLY,
        }
    }

    pub fn capabilities(&self) -> Capabilities {
        match self {
            TokenKind::EndOfInput | TokenKind::CloseGroup | TokenKind::CloseObject => {
                Capabilities::empty()
            }
            TokenKind::Sequence | TokenKind::ArgSeparator | TokenKind::Assignment => {
                Capabilities::TAIL
            }
            TokenKind::OpenGroup
            | TokenKind::OpenObject
            | TokenKind::ReturnMarker
            | TokenKind::Literal(_) => Capabilities::HEAD,
            TokenKind::PropertyDefine
            | TokenKind::MethodDefine
            | TokenKind::Identifier(_)
            | TokenKind::Operator(_) => Capabilities::HEAD | Capabilities::TAIL,
        }
    }

    #[inline]
    pub fn can_head(&self) -> bool {
        self.capabilities().contains(Capabilities::HEAD)
    }

    #[inline]
    pub fn can_tail(&self) -> bool {
        self.capabilities().contains(Capabilities::TAIL)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::EndOfInput => f.write_str("end of input"),
            TokenKind::Sequence => f.write_str(";"),
            TokenKind::OpenObject => f.write_str("(|"),
            TokenKind::CloseObject => f.write_str("|)"),
            TokenKind::OpenGroup => f.write_str("("),
            TokenKind::CloseGroup => f.write_str(")"),
            TokenKind::ArgSeparator => f.write_str(","),
            TokenKind::ReturnMarker => f.write_str("^"),
            TokenKind::Assignment => f.write_str("="),
            TokenKind::PropertyDefine => f.write_str(":="),
            TokenKind::MethodDefine => f.write_str("->"),
            TokenKind::Literal(literal) => write!(f, "{literal}"),
            TokenKind::Identifier(name) | TokenKind::Operator(name) => write!(f, "{name}"),
        }
    }
}

/// A token with its location.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }

    #[inline]
    pub fn precedence(&self) -> Precedence {
        self.kind.precedence()
    }
}
