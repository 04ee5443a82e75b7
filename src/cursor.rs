//! Module with the rune cursor contract and its implementation over a string slice.
use crate::{Position, Span, Token, TokenKind};

/// A saved cursor state that can be restored with [`RuneSource::reset`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CursorMark(usize);

/// The interface a tokenizer engine exposes to matchers.
///
/// Matchers look ahead with [`RuneSource::peek`], mint tokens for the runes they accept and
/// commit them with [`RuneSource::consume`].
pub trait RuneSource {
    /// Look ahead `offset` runes from the cursor without consuming.
    /// Returns `None` past the end of the input.
    fn peek(&self, offset: usize) -> Option<char>;

    /// Advance the cursor by `count` runes. The cursor stops at the end of the input.
    fn consume(&mut self, count: usize);

    /// Mint a token of the given kind spanning `len` runes from the cursor.
    /// The raw matched text becomes the token text.
    fn new_token(&self, len: usize, kind: TokenKind) -> Token;

    /// Mint a token like [`RuneSource::new_token`] that carries a precomputed literal value.
    fn new_token_literal(&self, len: usize, kind: TokenKind, literal: String) -> Token {
        self.new_token(len, kind).with_literal(literal)
    }

    /// The rune offset of the cursor from the start of the input.
    fn offset(&self) -> usize;

    /// The line and column of the cursor.
    fn position(&self) -> Position;

    /// Returns true if no runes are left.
    fn is_at_end(&self) -> bool {
        self.peek(0).is_none()
    }

    /// Save the current cursor state.
    fn mark(&self) -> CursorMark {
        CursorMark(self.offset())
    }

    /// Restore a cursor state saved with [`RuneSource::mark`].
    fn reset(&mut self, mark: CursorMark);
}

/// A [`RuneSource`] over a string slice.
///
/// * `'h` represents the lifetime of the haystack being scanned.
#[derive(Debug, Clone)]
pub struct RuneCursor<'h> {
    input: &'h str,
    // Byte offset and character of every rune in the input.
    runes: Vec<(usize, char)>,
    // Rune offsets at which the lines start. The first line starts at offset 0.
    line_starts: Vec<usize>,
    // The current rune offset.
    offset: usize,
}

impl<'h> RuneCursor<'h> {
    /// Create a new cursor at the start of the input.
    pub fn new(input: &'h str) -> Self {
        let runes: Vec<(usize, char)> = input.char_indices().collect();
        let line_starts = std::iter::once(0)
            .chain(
                runes
                    .iter()
                    .enumerate()
                    .filter(|(_, (_, c))| *c == '\n')
                    .map(|(i, _)| i + 1),
            )
            .collect();
        Self {
            input,
            runes,
            line_starts,
            offset: 0,
        }
    }

    /// The number of runes in the input.
    #[inline]
    pub fn len(&self) -> usize {
        self.runes.len()
    }

    /// Returns true if the input is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.runes.is_empty()
    }

    /// The whole input.
    #[inline]
    pub fn input(&self) -> &'h str {
        self.input
    }

    /// The position of the given rune offset.
    /// Offsets beyond the input are reported relative to the last line.
    pub fn position_of(&self, offset: usize) -> Position {
        let offset = offset.min(self.runes.len());
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(line) => line - 1,
        };
        Position::new(line + 1, offset - self.line_starts[line] + 1)
    }

    /// The text covered by the given rune span. The span is clamped to the input.
    pub fn text(&self, span: Span) -> &'h str {
        let start = self.byte_offset(span.start);
        let end = self.byte_offset(span.end.max(span.start));
        &self.input[start..end]
    }

    fn byte_offset(&self, offset: usize) -> usize {
        self.runes
            .get(offset)
            .map_or(self.input.len(), |(byte, _)| *byte)
    }
}

impl RuneSource for RuneCursor<'_> {
    #[inline]
    fn peek(&self, offset: usize) -> Option<char> {
        self.runes.get(self.offset + offset).map(|(_, c)| *c)
    }

    #[inline]
    fn consume(&mut self, count: usize) {
        self.offset = (self.offset + count).min(self.runes.len());
    }

    fn new_token(&self, len: usize, kind: TokenKind) -> Token {
        let end = (self.offset + len).min(self.runes.len());
        let span = Span::new(self.offset, end);
        Token::new(
            kind,
            span,
            self.position_of(self.offset),
            self.text(span).to_string(),
        )
    }

    #[inline]
    fn offset(&self) -> usize {
        self.offset
    }

    fn position(&self) -> Position {
        self.position_of(self.offset)
    }

    fn reset(&mut self, mark: CursorMark) {
        self.offset = mark.0.min(self.runes.len());
    }
}
