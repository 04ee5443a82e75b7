#![forbid(missing_docs)]
//! # `runelex`
//! The `runelex` crate provides small, composable matchers for hand-written tokenizers.
//! Each matcher decides whether a token of its kind starts at the current position of a rune
//! stream, how many runes it spans and which decoded value it carries.
//!
//! Matchers come in two calling conventions:
//! * Predicate matchers ([`PredicateMatcher`]) are asked rune by rune whether the token
//!   continues. The comment matchers are predicate matchers.
//! * Read matchers ([`ReadMatcher`]) drive the [`RuneSource`] themselves. Identifiers, literals
//!   and strings are read matchers.
//!
//! Both are wrapped by the [`Matcher`] type, which a [`Tokenizer`] tries in priority order.
//!
//! # Example
//! ```rust
//! use runelex::{Matcher, TokenizerBuilder};
//!
//! const INPUT: &str = r#"greeting = "hi\n" // say hi"#;
//!
//! fn main() {
//!     let tokenizer = TokenizerBuilder::new()
//!         .add_matcher(Matcher::c_line_comment())
//!         .add_matcher(Matcher::identifier())
//!         .add_matcher(Matcher::contain_char('='))
//!         .add_matcher(Matcher::string())
//!         .skip_whitespace(true)
//!         .build()
//!         .expect("TokenizerBuilder error");
//!     for token in tokenizer.tokenize(INPUT) {
//!         let token = token.expect("Lexical error");
//!         println!("{}: {:?}", token.kind(), token.value());
//!     }
//! }
//! ```
//! The output of the example is:
//! ```text
//! Identifier: "greeting"
//! Literal: "="
//! String: "hi\n"
//! CLineComment: "// say hi"
//! ```
//!
//! # Crate features
//! - `serde`: Enabled by default. Makes tokens serializable and provides the
//!   [`TokenizerConfig`] type to create tokenizers from JSON.

/// Module with the tokenizer configuration
#[cfg(feature = "serde")]
mod config;
#[cfg(feature = "serde")]
pub use config::{MatcherConfig, TokenizerConfig};

/// Module with the rune cursor
mod cursor;
pub use cursor::{CursorMark, RuneCursor, RuneSource};

/// Module with error definitions
mod errors;
pub use errors::{Result, RunelexError, RunelexErrorKind};

/// Module with the matcher protocol
mod matcher;
pub use matcher::{scan_predicate, Matcher, PredicateFactory, PredicateMatcher, ReadMatcher};

/// Module with the built-in matchers
mod matchers;
pub use matchers::{
    CBlockComment, CLineComment, Contain, Identifier, StringLiteral, UnixLineComment,
};

/// Module that provides a position type
mod position;
pub use position::Position;

/// Module that provides a Span type
mod span;
pub use span::Span;

/// Module that provides the Token type
mod token;
pub use token::{Token, TokenKind};

/// The module with the tokenizer.
mod tokenizer;
pub use tokenizer::{MatchPolicy, Tokenizer, Tokens};

/// The module with the tokenizer builder.
mod tokenizer_builder;
pub use tokenizer_builder::TokenizerBuilder;
