use std::borrow::Cow;

use crate::{Position, Span};

/// The kind tag of a token.
///
/// Every matcher carries a fixed kind that downstream consumers use to classify its tokens.
/// The built-in kinds are available as associated constants.
#[derive(Clone, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TokenKind(Cow<'static, str>);

impl TokenKind {
    /// `// ...` comments.
    pub const C_LINE_COMMENT: TokenKind = TokenKind::from_static("CLineComment");
    /// `# ...` comments.
    pub const UNIX_LINE_COMMENT: TokenKind = TokenKind::from_static("UnixLineComment");
    /// `/* ... */` comments.
    pub const C_BLOCK_COMMENT: TokenKind = TokenKind::from_static("CBlockComment");
    /// Identifiers.
    pub const IDENTIFIER: TokenKind = TokenKind::from_static("Identifier");
    /// Fixed literals recognized by a contain matcher.
    pub const LITERAL: TokenKind = TokenKind::from_static("Literal");
    /// Quoted strings.
    pub const STRING: TokenKind = TokenKind::from_static("String");

    /// Create a token kind from a static string.
    pub const fn from_static(name: &'static str) -> Self {
        TokenKind(Cow::Borrowed(name))
    }

    /// Create a token kind from any string.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        TokenKind(name.into())
    }

    /// Get the name of the kind.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq<str> for TokenKind {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for TokenKind {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

/// A token recognized by a matcher.
///
/// Tokens only exist for successful matches. A matcher that recognizes nothing returns `None`
/// instead of an empty token.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    /// The kind of the matcher that produced the token.
    kind: TokenKind,
    /// The rune span of the token in the input.
    span: Span,
    /// The position of the first rune of the token.
    position: Position,
    /// The raw matched text.
    text: String,
    /// The decoded value if it differs from the raw text, e.g. unescaped string content.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none", default))]
    literal: Option<String>,
}

impl Token {
    /// Create a new token.
    pub fn new(kind: TokenKind, span: Span, position: Position, text: String) -> Self {
        Self {
            kind,
            span,
            position,
            text,
            literal: None,
        }
    }

    /// Attach a decoded literal value to the token.
    pub fn with_literal(self, literal: String) -> Self {
        Self {
            literal: Some(literal),
            ..self
        }
    }

    /// Get the kind of the token.
    #[inline]
    pub fn kind(&self) -> &TokenKind {
        &self.kind
    }

    /// Get the span of the token.
    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    /// Get the start offset of the token.
    #[inline]
    pub fn start(&self) -> usize {
        self.span.start
    }

    /// Get the end offset of the token.
    #[inline]
    pub fn end(&self) -> usize {
        self.span.end
    }

    /// Get the number of runes the token spans.
    #[inline]
    pub fn len(&self) -> usize {
        self.span.len()
    }

    /// Check if the token spans no runes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }

    /// Get the position of the first rune of the token.
    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Get the raw matched text.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the decoded literal value, if the matcher produced one.
    #[inline]
    pub fn literal(&self) -> Option<&str> {
        self.literal.as_deref()
    }

    /// Get the semantic value of the token: the literal value if present, otherwise the raw
    /// text.
    #[inline]
    pub fn value(&self) -> &str {
        self.literal.as_deref().unwrap_or(&self.text)
    }
}
