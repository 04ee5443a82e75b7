use log::trace;
use seshat::unicode::{props::Gc, Ucd};

use crate::{ReadMatcher, RuneSource, Token, TokenKind};

/// Matcher for identifiers: a letter or `_` followed by letters, digits or `_`.
///
/// Letters are the runes of the Unicode general categories `L*`, digits are the runes of the
/// general category `Nd`. Other numerics like `²`, `½` or `Ⅻ` are not part of an identifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identifier;

impl Identifier {
    #[inline]
    fn is_start(c: char) -> bool {
        c == '_' || matches!(c.gc(), Gc::Lu | Gc::Ll | Gc::Lt | Gc::Lm | Gc::Lo)
    }

    #[inline]
    fn is_continue(c: char) -> bool {
        Self::is_start(c) || c.gc() == Gc::Nd
    }
}

impl ReadMatcher for Identifier {
    fn token_kind(&self) -> TokenKind {
        TokenKind::IDENTIFIER
    }

    fn read(&self, cursor: &mut dyn RuneSource) -> Option<Token> {
        let mut count = 0;
        while let Some(c) = cursor.peek(count) {
            let accepted = if count == 0 {
                Self::is_start(c)
            } else {
                Self::is_continue(c)
            };
            if !accepted {
                break;
            }
            count += 1;
        }

        if count == 0 {
            return None;
        }

        let token = cursor.new_token(count, self.token_kind());
        trace!("Identifier {:?} at {}", token.text(), token.span());
        cursor.consume(count);
        Some(token)
    }
}
