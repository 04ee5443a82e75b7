use log::trace;
use rustc_hash::FxHashSet;

use crate::{
    Matcher, Position, Result, RuneCursor, RuneSource, RunelexError, RunelexErrorKind, Token,
    TokenKind,
};

/// The policy a [`Tokenizer`] uses to choose among its matchers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchPolicy {
    /// The matchers are tried in the order they were added, the first success wins.
    #[default]
    FirstMatch,
    /// All matchers are tried, the longest token wins.
    /// On equal lengths the matcher added first wins.
    LongestMatch,
}

/// A tokenizer that tries a list of matchers at each position of the input.
///
/// Use the [`crate::TokenizerBuilder`] to create a tokenizer.
/// The tokenizer holds no per-input state and can be shared between threads.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    pub(crate) matchers: Vec<Matcher>,
    pub(crate) policy: MatchPolicy,
    pub(crate) skip_whitespace: bool,
    pub(crate) skip_kinds: FxHashSet<TokenKind>,
}

impl Tokenizer {
    /// Returns an iterator over the tokens of the input.
    pub fn tokenize<'t, 'h>(&'t self, input: &'h str) -> Tokens<'t, 'h> {
        Tokens {
            tokenizer: self,
            cursor: RuneCursor::new(input),
        }
    }

    /// The policy used to choose among the matchers.
    #[inline]
    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }

    /// The matchers in priority order.
    #[inline]
    pub fn matchers(&self) -> &[Matcher] {
        &self.matchers
    }

    /// Returns the next token at the cursor.
    ///
    /// Whitespace and tokens of skipped kinds are consumed silently.
    /// Returns `None` at the end of the input.
    ///
    /// If no matcher recognizes the input, an [`RunelexErrorKind::UnexpectedRune`] error is
    /// returned and the offending rune is consumed, so that scanning can resume after it.
    pub fn next_token(&self, cursor: &mut dyn RuneSource) -> Option<Result<Token>> {
        loop {
            if self.skip_whitespace {
                while cursor.peek(0).is_some_and(char::is_whitespace) {
                    cursor.consume(1);
                }
            }
            let rune = cursor.peek(0)?;
            match self.scan(cursor) {
                Some(token) if self.skip_kinds.contains(token.kind()) => {
                    trace!("Skip {} at {}", token.kind(), token.span());
                }
                Some(token) => return Some(Ok(token)),
                None => {
                    let position = cursor.position();
                    trace!("No matcher for {:?} at {}", rune, position);
                    cursor.consume(1);
                    return Some(Err(Self::unexpected(rune, position)));
                }
            }
        }
    }

    fn unexpected(rune: char, position: Position) -> RunelexError {
        RunelexError::new(RunelexErrorKind::UnexpectedRune { rune, position })
    }

    // Runs the matchers at the cursor according to the policy.
    fn scan(&self, cursor: &mut dyn RuneSource) -> Option<Token> {
        match self.policy {
            MatchPolicy::FirstMatch => self.matchers.iter().find_map(|m| m.scan(cursor)),
            MatchPolicy::LongestMatch => {
                let mark = cursor.mark();
                let mut longest: Option<Token> = None;
                for matcher in &self.matchers {
                    if let Some(token) = matcher.scan(cursor) {
                        cursor.reset(mark);
                        if longest.as_ref().map_or(true, |l| token.len() > l.len()) {
                            longest = Some(token);
                        }
                    }
                }
                if let Some(token) = &longest {
                    trace!("Longest match {} at {}", token.kind(), token.span());
                    cursor.consume(token.len());
                }
                longest
            }
        }
    }
}

/// An iterator over the tokens of an input.
///
/// * `'t` represents the lifetime of the tokenizer.
/// * `'h` represents the lifetime of the haystack being scanned.
///
/// This iterator can be created with the [`Tokenizer::tokenize`] method.
#[derive(Debug)]
pub struct Tokens<'t, 'h> {
    tokenizer: &'t Tokenizer,
    cursor: RuneCursor<'h>,
}

impl Tokens<'_, '_> {
    /// The rune offset of the next token candidate.
    #[inline]
    pub fn offset(&self) -> usize {
        self.cursor.offset()
    }

    /// The line and column of the next token candidate.
    pub fn position(&self) -> Position {
        self.cursor.position()
    }
}

impl Iterator for Tokens<'_, '_> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        self.tokenizer.next_token(&mut self.cursor)
    }
}
