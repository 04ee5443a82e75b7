use log::trace;

use crate::{ReadMatcher, RuneSource, Token, TokenKind};
#[cfg(feature = "serde")]
use crate::{Result, RunelexError, RunelexErrorKind};

/// Matcher for a fixed sequence of runes, e.g. a keyword or a punctuation.
///
/// The matcher only succeeds if the complete sequence follows at the cursor.
/// A matcher for the empty text never matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contain {
    literal: Vec<char>,
}

impl Contain {
    /// Create a matcher for the given text.
    pub fn new(literal: &str) -> Self {
        Self {
            literal: literal.chars().collect(),
        }
    }

    /// Create a matcher for a single character.
    pub fn from_char(literal: char) -> Self {
        Self {
            literal: vec![literal],
        }
    }

    /// The runes this matcher recognizes.
    #[inline]
    pub fn literal(&self) -> &[char] {
        &self.literal
    }
}

impl From<&str> for Contain {
    fn from(literal: &str) -> Self {
        Contain::new(literal)
    }
}

impl From<char> for Contain {
    fn from(literal: char) -> Self {
        Contain::from_char(literal)
    }
}

#[cfg(feature = "serde")]
impl TryFrom<&serde_json::Value> for Contain {
    type Error = RunelexError;

    /// Create a matcher from a configuration value.
    /// Fails with [`RunelexErrorKind::InvalidContain`] for anything but a string.
    fn try_from(value: &serde_json::Value) -> Result<Self> {
        match value {
            serde_json::Value::String(literal) => Ok(Contain::new(literal)),
            other => Err(RunelexError::new(RunelexErrorKind::InvalidContain(
                format!("expected a string, found {}", other),
            ))),
        }
    }
}

impl ReadMatcher for Contain {
    fn token_kind(&self) -> TokenKind {
        TokenKind::LITERAL
    }

    fn read(&self, cursor: &mut dyn RuneSource) -> Option<Token> {
        if self.literal.is_empty() {
            return None;
        }
        let matched = self
            .literal
            .iter()
            .enumerate()
            .all(|(i, c)| cursor.peek(i) == Some(*c));
        if !matched {
            return None;
        }

        let count = self.literal.len();
        let token = cursor.new_token(count, self.token_kind());
        trace!("Literal {:?} at {}", token.text(), token.span());
        cursor.consume(count);
        Some(token)
    }
}
