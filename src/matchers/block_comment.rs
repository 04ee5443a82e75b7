use crate::{PredicateMatcher, TokenKind};

/// Matcher for C style block comments: `/* ... */`.
///
/// The matcher tracks the closing `*/` across calls, so each scan attempt needs its own value
/// created with [`CBlockComment::new`]. A comment that is never closed extends to the end of the
/// input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CBlockComment {
    // Index of the last `*` that may start the closing `*/`
    end_star_index: Option<usize>,
    // The closing `/` has been accepted
    block_end: bool,
}

impl CBlockComment {
    /// Create a matcher for a new scan attempt.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PredicateMatcher for CBlockComment {
    fn token_kind(&self) -> TokenKind {
        TokenKind::C_BLOCK_COMMENT
    }

    fn match_rune(&mut self, index: usize, rune: char) -> bool {
        if self.block_end {
            return false;
        }
        match (index, rune) {
            (0, r) => r == '/',
            (1, r) => r == '*',
            (_, '*') => {
                self.end_star_index = Some(index);
                true
            }
            (_, '/') if self.end_star_index.is_some_and(|star| star + 1 == index) => {
                // The closing slash still belongs to the comment.
                self.block_end = true;
                true
            }
            _ => {
                self.end_star_index = None;
                true
            }
        }
    }

    fn min_len(&self) -> usize {
        2
    }
}
