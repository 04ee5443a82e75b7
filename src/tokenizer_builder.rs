use log::debug;
use rustc_hash::FxHashSet;

use crate::{
    MatchPolicy, Matcher, Result, RunelexError, RunelexErrorKind, TokenKind, Tokenizer,
};

/// A builder for creating a tokenizer.
#[derive(Debug, Clone, Default)]
pub struct TokenizerBuilder {
    matchers: Vec<Matcher>,
    policy: MatchPolicy,
    skip_whitespace: bool,
    skip_kinds: FxHashSet<TokenKind>,
}

impl TokenizerBuilder {
    /// Creates a new tokenizer builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a matcher. Matchers added earlier have higher priority.
    pub fn add_matcher(mut self, matcher: Matcher) -> Self {
        self.matchers.push(matcher);
        self
    }

    /// Adds multiple matchers.
    pub fn add_matchers(mut self, matchers: &[Matcher]) -> Self {
        self.matchers.extend_from_slice(matchers);
        self
    }

    /// Sets the policy used to choose among the matchers.
    pub fn policy(mut self, policy: MatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// If set, whitespace between tokens is skipped instead of being reported as an error.
    pub fn skip_whitespace(mut self, skip: bool) -> Self {
        self.skip_whitespace = skip;
        self
    }

    /// Tokens of the given kind are recognized but not returned, e.g. comments.
    pub fn skip_kind(mut self, kind: TokenKind) -> Self {
        self.skip_kinds.insert(kind);
        self
    }

    /// Builds the tokenizer from the tokenizer builder.
    pub fn build(self) -> Result<Tokenizer> {
        if self.matchers.is_empty() {
            return Err(RunelexError::new(RunelexErrorKind::NoMatchers));
        }
        debug!(
            "Build tokenizer with {} matchers, policy {:?}",
            self.matchers.len(),
            self.policy
        );
        Ok(Tokenizer {
            matchers: self.matchers,
            policy: self.policy,
            skip_whitespace: self.skip_whitespace,
            skip_kinds: self.skip_kinds,
        })
    }
}
