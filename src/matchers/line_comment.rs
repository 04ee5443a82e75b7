use crate::{PredicateMatcher, TokenKind};

/// Matcher for C style line comments: `//` up to the end of the line.
/// The line ending is not part of the comment.
#[derive(Debug, Clone, Copy, Default)]
pub struct CLineComment;

impl PredicateMatcher for CLineComment {
    fn token_kind(&self) -> TokenKind {
        TokenKind::C_LINE_COMMENT
    }

    fn match_rune(&mut self, index: usize, rune: char) -> bool {
        match index {
            0 | 1 => rune == '/',
            _ => rune != '\r' && rune != '\n',
        }
    }

    fn min_len(&self) -> usize {
        2
    }
}

/// Matcher for Unix style line comments: `#` up to the end of the line.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnixLineComment;

impl PredicateMatcher for UnixLineComment {
    fn token_kind(&self) -> TokenKind {
        TokenKind::UNIX_LINE_COMMENT
    }

    fn match_rune(&mut self, index: usize, rune: char) -> bool {
        match index {
            0 => rune == '#',
            _ => rune != '\r' && rune != '\n',
        }
    }
}
