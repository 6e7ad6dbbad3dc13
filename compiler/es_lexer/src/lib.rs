//! Lexer for EScript.
//!
//! [`Lexer`] turns source text into [`Token`]s on demand. Whitespace and
//! `#` line comments are skipped before every token. The parser drives it
//! through [`Lexer::peek`] (memoized until consumed) and [`Lexer::read`];
//! [`lex`] collects a whole token list for tools.
//!
//! Recognition order, first match wins: end of input, `;`, `(|`, `|)`,
//! `(`, `)`, `,`, `^`, a lone `=`, `:=`, `->`, a quoted string, a number,
//! an operator run, an identifier.

mod lex_error;

use es_ir::{Literal, Name, Span, Token, TokenKind};
use es_lexer_core::Reader;
use tracing::trace;

pub use lex_error::{LexError, LexErrorKind};

/// Characters that make up operator runs.
const OPERATOR_CHARS: &str = "+-*/%<=>&|";

/// Characters a number literal may continue with after its first character.
const NUMBER_CHARS: &str = "0123456789e+x.";

#[inline]
fn is_operator_char(c: char) -> bool {
    OPERATOR_CHARS.contains(c)
}

#[inline]
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

#[inline]
fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Lazy, restartable token source over one source text.
pub struct Lexer<'a> {
    reader: Reader<'a>,
    peeked: Option<Token>,
    finished: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Lexer {
            reader: Reader::new(source),
            peeked: None,
            finished: false,
        }
    }

    /// The next token, without consuming it.
    ///
    /// The token is scanned once and memoized until [`Lexer::read`].
    pub fn peek(&mut self) -> Result<&Token, LexError> {
        let token = match self.peeked.take() {
            Some(token) => token,
            None => self.scan()?,
        };
        Ok(self.peeked.insert(token))
    }

    /// Consume and return the next token.
    ///
    /// Reading past the end keeps yielding `EndOfInput`.
    pub fn read(&mut self) -> Result<Token, LexError> {
        match self.peeked.take() {
            Some(token) => Ok(token),
            None => self.scan(),
        }
    }

    /// Start over from the beginning of the source.
    pub fn restart(&mut self) {
        self.reader.reset_to(0);
        self.peeked = None;
        self.finished = false;
    }

    fn skip_trivia(&mut self) {
        loop {
            match self.reader.peek() {
                Some('#') => self.reader.eat_until_newline(),
                Some(c) if c.is_whitespace() => self.reader.eat_while(char::is_whitespace),
                _ => return,
            }
        }
    }

    fn span_from(&self, start: usize) -> Span {
        Span::saturating_from_range(start..self.reader.pos())
    }

    /// Consume `len` characters and produce a punctuation token.
    fn punct(&mut self, start: usize, len: usize, kind: TokenKind) -> Token {
        self.reader.read_str(len);
        Token::new(kind, self.span_from(start))
    }

    fn scan(&mut self) -> Result<Token, LexError> {
        self.skip_trivia();
        let start = self.reader.pos();
        let Some(c) = self.reader.peek() else {
            return Ok(Token::new(TokenKind::EndOfInput, self.span_from(start)));
        };
        let next = self.reader.peek_nth(1);

        let token = match c {
            ';' => self.punct(start, 1, TokenKind::Sequence),
            '(' if next == Some('|') => self.punct(start, 2, TokenKind::OpenObject),
            '|' if next == Some(')') => self.punct(start, 2, TokenKind::CloseObject),
            '(' => self.punct(start, 1, TokenKind::OpenGroup),
            ')' => self.punct(start, 1, TokenKind::CloseGroup),
            ',' => self.punct(start, 1, TokenKind::ArgSeparator),
            '^' => self.punct(start, 1, TokenKind::ReturnMarker),
            '=' if !next.is_some_and(is_operator_char) => {
                self.punct(start, 1, TokenKind::Assignment)
            }
            ':' if next == Some('=') => self.punct(start, 2, TokenKind::PropertyDefine),
            '-' if next == Some('>') => self.punct(start, 2, TokenKind::MethodDefine),
            '"' | '\'' => self.lex_string(start, c)?,
            _ if c.is_ascii_digit()
                || (matches!(c, '-' | '.') && next.is_some_and(|n| n.is_ascii_digit())) =>
            {
                self.lex_number(start)?
            }
            _ if is_operator_char(c) => {
                self.reader.eat_while(is_operator_char);
                let name = Name::from(self.reader.slice_from(start));
                Token::new(TokenKind::Operator(name), self.span_from(start))
            }
            _ if is_ident_start(c) => {
                self.reader.eat_while(is_ident_continue);
                let name = Name::from(self.reader.slice_from(start));
                Token::new(TokenKind::Identifier(name), self.span_from(start))
            }
            _ => {
                let span = Span::saturating_from_range(start..start + c.len_utf8());
                return Err(LexError::new(span, LexErrorKind::UnexpectedChar(c)));
            }
        };

        trace!(kind = ?token.kind, span = %token.span, "token");
        Ok(token)
    }

    /// A quoted string. A backslash takes the following character verbatim.
    fn lex_string(&mut self, start: usize, quote: char) -> Result<Token, LexError> {
        self.reader.read();
        let mut value = String::new();
        loop {
            match self.reader.read() {
                None => {
                    return Err(LexError::new(
                        self.span_from(start),
                        LexErrorKind::UnterminatedString,
                    ))
                }
                Some(c) if c == quote => break,
                Some('\\') => match self.reader.read() {
                    Some(escaped) => value.push(escaped),
                    None => {
                        return Err(LexError::new(
                            self.span_from(start),
                            LexErrorKind::UnterminatedString,
                        ))
                    }
                },
                Some(c) => value.push(c),
            }
        }
        let literal = Literal::String(Name::from(value));
        Ok(Token::new(TokenKind::Literal(literal), self.span_from(start)))
    }

    /// A number: the first character, then any run of digits, `e`, `+`, `x`
    /// and `.`. The run is permissive; its text must still denote a number.
    fn lex_number(&mut self, start: usize) -> Result<Token, LexError> {
        self.reader.read();
        self.reader.eat_while(|c| NUMBER_CHARS.contains(c));
        let text = self.reader.slice_from(start);
        let span = self.span_from(start);
        match parse_number(text) {
            Some(value) => Ok(Token::new(TokenKind::Literal(Literal::number(value)), span)),
            None => Err(LexError::new(
                span,
                LexErrorKind::InvalidNumber(text.to_string()),
            )),
        }
    }
}

/// Value of a number literal's text: an optional `-`, then either `0x` and
/// digits read as hex, or a decimal/exponent form. Only `0`-`9` can follow
/// `0x` since the letters are not number characters.
#[allow(
    clippy::cast_precision_loss,
    reason = "hex literals beyond 2^53 round like any other number"
)]
fn parse_number(text: &str) -> Option<f64> {
    let (negative, body) = match text.strip_prefix('-') {
        Some(body) => (true, body),
        None => (false, text),
    };
    let magnitude = match body.strip_prefix("0x") {
        Some(hex) => u64::from_str_radix(hex, 16).ok()? as f64,
        None => body.parse::<f64>().ok()?,
    };
    Some(if negative { -magnitude } else { magnitude })
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    /// Yields every token up to and including `EndOfInput`, or the first
    /// error, then stops.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let item = self.read();
        if matches!(&item, Err(_) | Ok(Token { kind: TokenKind::EndOfInput, .. })) {
            self.finished = true;
        }
        Some(item)
    }
}

/// Lex a whole source text. The list always ends with `EndOfInput`.
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).collect()
}

#[cfg(test)]
mod tests;
