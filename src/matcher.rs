//! Module with the matcher protocol.
//!
//! Matchers come in two calling conventions:
//! * [`PredicateMatcher`]s decide rune by rune whether the token continues. The driver feeds them
//!   the runes at the cursor starting with index 0 and stops at the first rejected rune.
//! * [`ReadMatcher`]s drive the cursor themselves and directly produce a token.
//!
//! The [`Matcher`] type unifies both conventions so that a driver can call every matcher the same
//! way.
use std::sync::Arc;

use log::trace;

use crate::{
    matchers::{CBlockComment, CLineComment, Contain, Identifier, StringLiteral, UnixLineComment},
    RuneSource, Token, TokenKind,
};

/// A matcher that decides per rune index whether the token continues.
///
/// A predicate matcher may carry state between the calls of one scan attempt. Such state must
/// never outlive the scan, therefore the [`Matcher`] type only stores a factory for predicate
/// matchers and asks it for a new value on every scan attempt.
pub trait PredicateMatcher: Send {
    /// The kind of the tokens this matcher produces.
    fn token_kind(&self) -> TokenKind;

    /// Returns true if the rune at `index` of the current scan belongs to the token.
    fn match_rune(&mut self, index: usize, rune: char) -> bool;

    /// The number of leading runes that must be accepted before a span counts as a match.
    fn min_len(&self) -> usize {
        1
    }
}

/// A matcher that performs its own lookahead on the cursor.
///
/// Read matchers hold no mutable state and can be shared by any number of scans.
pub trait ReadMatcher: Send + Sync {
    /// The kind of the tokens this matcher produces.
    fn token_kind(&self) -> TokenKind;

    /// Try to recognize a token at the cursor.
    ///
    /// On success the matcher consumes exactly the runes of the returned token. If no token
    /// starts at the cursor it returns `None` and leaves the cursor untouched.
    fn read(&self, cursor: &mut dyn RuneSource) -> Option<Token>;
}

/// A factory for predicate matchers.
pub type PredicateFactory = fn() -> Box<dyn PredicateMatcher>;

/// A matcher as it is held by a driver.
#[derive(Clone)]
pub enum Matcher {
    /// A predicate matcher. The factory is called once per scan attempt.
    Predicate(PredicateFactory),
    /// A read matcher shared by all scans.
    Reader(Arc<dyn ReadMatcher>),
}

impl Matcher {
    /// Matcher for `// ...` comments.
    pub fn c_line_comment() -> Self {
        Matcher::Predicate(|| Box::new(CLineComment))
    }

    /// Matcher for `# ...` comments.
    pub fn unix_line_comment() -> Self {
        Matcher::Predicate(|| Box::new(UnixLineComment))
    }

    /// Matcher for `/* ... */` comments.
    pub fn c_block_comment() -> Self {
        Matcher::Predicate(|| Box::new(CBlockComment::new()))
    }

    /// Matcher for identifiers.
    pub fn identifier() -> Self {
        Matcher::reader(Identifier)
    }

    /// Matcher for single or double quoted strings.
    pub fn string() -> Self {
        Matcher::reader(StringLiteral)
    }

    /// Matcher for the exact text `literal`.
    pub fn contain(literal: &str) -> Self {
        Matcher::reader(Contain::new(literal))
    }

    /// Matcher for the single character `literal`.
    pub fn contain_char(literal: char) -> Self {
        Matcher::reader(Contain::from_char(literal))
    }

    /// Wrap a read matcher.
    pub fn reader<M: ReadMatcher + 'static>(matcher: M) -> Self {
        Matcher::Reader(Arc::new(matcher))
    }

    /// The kind of the tokens this matcher produces.
    pub fn token_kind(&self) -> TokenKind {
        match self {
            Matcher::Predicate(factory) => factory().token_kind(),
            Matcher::Reader(matcher) => matcher.token_kind(),
        }
    }

    /// Try to recognize a token at the cursor.
    /// On success the token's runes are consumed, otherwise the cursor is left untouched.
    pub fn scan(&self, cursor: &mut dyn RuneSource) -> Option<Token> {
        match self {
            Matcher::Predicate(factory) => scan_predicate(cursor, factory().as_mut()),
            Matcher::Reader(matcher) => matcher.read(cursor),
        }
    }
}

impl std::fmt::Debug for Matcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Matcher::Predicate(_) => write!(f, "Predicate({})", self.token_kind()),
            Matcher::Reader(_) => write!(f, "Reader({})", self.token_kind()),
        }
    }
}

/// Drive a predicate matcher over the runes at the cursor.
///
/// Feeds the runes starting with index 0 until the matcher rejects one or the input ends.
/// The accepted runes form the token. If fewer than [`PredicateMatcher::min_len`] runes were
/// accepted, `None` is returned and nothing is consumed.
pub fn scan_predicate(
    cursor: &mut dyn RuneSource,
    matcher: &mut dyn PredicateMatcher,
) -> Option<Token> {
    let mut count = 0;
    while let Some(rune) = cursor.peek(count) {
        if !matcher.match_rune(count, rune) {
            break;
        }
        count += 1;
    }
    if count < matcher.min_len().max(1) {
        trace!("{}: no match at {}", matcher.token_kind(), cursor.offset());
        return None;
    }
    let token = cursor.new_token(count, matcher.token_kind());
    cursor.consume(count);
    Some(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RuneCursor;

    // Accepts runs of 'a'.
    struct As;

    impl PredicateMatcher for As {
        fn token_kind(&self) -> TokenKind {
            TokenKind::from_static("As")
        }

        fn match_rune(&mut self, _index: usize, rune: char) -> bool {
            rune == 'a'
        }
    }

    #[test]
    fn test_scan_predicate() {
        let mut cursor = RuneCursor::new("aab");
        let token = scan_predicate(&mut cursor, &mut As).unwrap();
        assert_eq!(token.text(), "aa");
        assert_eq!(token.kind().as_str(), "As");
        assert_eq!(cursor.offset(), 2);
        assert!(scan_predicate(&mut cursor, &mut As).is_none());
        assert_eq!(cursor.offset(), 2);
    }

    #[test]
    fn test_scan_predicate_at_end() {
        let mut cursor = RuneCursor::new("");
        assert!(scan_predicate(&mut cursor, &mut As).is_none());
        let mut cursor = RuneCursor::new("aaa");
        assert_eq!(scan_predicate(&mut cursor, &mut As).unwrap().len(), 3);
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_matcher_kinds() {
        assert_eq!(Matcher::c_line_comment().token_kind(), "CLineComment");
        assert_eq!(Matcher::unix_line_comment().token_kind(), "UnixLineComment");
        assert_eq!(Matcher::c_block_comment().token_kind(), "CBlockComment");
        assert_eq!(Matcher::identifier().token_kind(), "Identifier");
        assert_eq!(Matcher::string().token_kind(), "String");
        assert_eq!(Matcher::contain_char(';').token_kind(), "Literal");
        assert_eq!(Matcher::contain("==").token_kind(), "Literal");
    }

    #[test]
    fn test_matcher_scan_dispatch() {
        let block = Matcher::c_block_comment();
        let mut cursor = RuneCursor::new("/* a */ /* b */");
        assert_eq!(block.scan(&mut cursor).unwrap().text(), "/* a */");
        cursor.consume(1);
        // A new scan state is used, the closed state of the first scan does not leak.
        assert_eq!(block.scan(&mut cursor).unwrap().text(), "/* b */");

        let identifier = Matcher::identifier();
        let mut cursor = RuneCursor::new("abc def");
        assert_eq!(identifier.scan(&mut cursor).unwrap().text(), "abc");
        assert!(identifier.scan(&mut cursor).is_none());
        assert_eq!(format!("{:?}", identifier), "Reader(Identifier)");

        let empty = Matcher::contain("");
        let mut cursor = RuneCursor::new("==");
        assert!(empty.scan(&mut cursor).is_none());
        assert_eq!(cursor.offset(), 0);
    }
}
