//! Character cursor over source text.
//!
//! Positions are byte offsets into the source, but every movement is by
//! whole characters, so a position always lies on a `char` boundary and
//! [`Reader::slice`] can never split a code point.

/// Cursor over a source string.
///
/// The reader is [`Copy`], so callers can snapshot a position and scan ahead
/// speculatively.
#[derive(Clone, Copy, Debug)]
pub struct Reader<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Reader<'a> {
    pub fn new(source: &'a str) -> Self {
        Reader { source, pos: 0 }
    }

    /// Byte offset of the next unread character.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn source(&self) -> &'a str {
        self.source
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    #[inline]
    fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    /// The next character, without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// The character `n` positions ahead (`peek_nth(0) == peek()`).
    #[inline]
    pub fn peek_nth(&self, n: usize) -> Option<char> {
        self.rest().chars().nth(n)
    }

    /// Up to `n` upcoming characters, without consuming them.
    ///
    /// Shorter than `n` characters only at the end of input.
    pub fn peek_str(&self, n: usize) -> &'a str {
        let rest = self.rest();
        let end = rest
            .char_indices()
            .nth(n)
            .map_or(rest.len(), |(offset, _)| offset);
        &rest[..end]
    }

    /// Whether the upcoming text starts with `prefix`.
    #[inline]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.rest().starts_with(prefix)
    }

    /// Consume and return the next character.
    #[inline]
    pub fn read(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Consume up to `n` characters and return them.
    pub fn read_str(&mut self, n: usize) -> &'a str {
        let text = self.peek_str(n);
        self.pos += text.len();
        text
    }

    /// Consume characters while `pred` holds.
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        let rest = self.rest();
        let end = rest
            .char_indices()
            .find(|&(_, c)| !pred(c))
            .map_or(rest.len(), |(offset, _)| offset);
        self.pos += end;
    }

    /// Advance to the next `\n` (not consumed) or to the end of input.
    pub fn eat_until_newline(&mut self) {
        match memchr::memchr(b'\n', self.rest().as_bytes()) {
            Some(offset) => self.pos += offset,
            None => self.pos = self.source.len(),
        }
    }

    /// Source text between two byte offsets previously returned by
    /// [`Reader::pos`].
    #[inline]
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.source[start..end]
    }

    /// Source text from `start` up to the current position.
    #[inline]
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Move back to a position previously returned by [`Reader::pos`].
    #[inline]
    pub fn reset_to(&mut self, pos: usize) {
        debug_assert!(self.source.is_char_boundary(pos));
        self.pos = pos;
    }
}
