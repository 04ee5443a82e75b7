//! Module with the serializable tokenizer configuration.
//!
//! A configuration lists the matchers of a tokenizer in priority order, e.g.
//! ```json
//! {
//!   "policy": "LongestMatch",
//!   "skip_whitespace": true,
//!   "skip_kinds": ["CLineComment"],
//!   "matchers": [
//!     { "type": "CLineComment" },
//!     { "type": "Contain", "literal": "==" },
//!     { "type": "Identifier" }
//!   ]
//! }
//! ```
use std::{fs::File, io::BufReader, io::Read, path::Path};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{Contain, MatchPolicy, Matcher, Result, TokenKind, Tokenizer, TokenizerBuilder};

/// The configuration of a single matcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MatcherConfig {
    /// `// ...` comments.
    CLineComment,
    /// `# ...` comments.
    UnixLineComment,
    /// `/* ... */` comments.
    CBlockComment,
    /// Identifiers.
    Identifier,
    /// Single or double quoted strings.
    #[serde(rename = "String")]
    StringLiteral,
    /// A fixed literal. The value must be a string, an empty string never matches.
    Contain {
        /// The literal to recognize.
        literal: serde_json::Value,
    },
}

impl TryFrom<&MatcherConfig> for Matcher {
    type Error = crate::RunelexError;

    fn try_from(config: &MatcherConfig) -> Result<Self> {
        Ok(match config {
            MatcherConfig::CLineComment => Matcher::c_line_comment(),
            MatcherConfig::UnixLineComment => Matcher::unix_line_comment(),
            MatcherConfig::CBlockComment => Matcher::c_block_comment(),
            MatcherConfig::Identifier => Matcher::identifier(),
            MatcherConfig::StringLiteral => Matcher::string(),
            MatcherConfig::Contain { literal } => Matcher::reader(Contain::try_from(literal)?),
        })
    }
}

/// The configuration of a tokenizer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenizerConfig {
    /// The policy used to choose among the matchers.
    #[serde(default)]
    pub policy: MatchPolicy,
    /// Skip whitespace between tokens.
    #[serde(default)]
    pub skip_whitespace: bool,
    /// Kinds of tokens that are recognized but not returned.
    #[serde(default)]
    pub skip_kinds: Vec<TokenKind>,
    /// The matchers in priority order.
    pub matchers: Vec<MatcherConfig>,
}

impl TokenizerConfig {
    /// Reads a configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a configuration from a JSON reader, e.g. a file.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Reads a configuration from a JSON file.
    /// Fails with [`crate::RunelexErrorKind::IoError`] if the file cannot be opened.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        debug!("Read tokenizer configuration from {}", path.as_ref().display());
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Builds the configured tokenizer.
    /// Fails if a matcher is misconfigured or no matcher is given.
    pub fn build(&self) -> Result<Tokenizer> {
        debug!("Build tokenizer from configuration");
        let matchers = self
            .matchers
            .iter()
            .map(Matcher::try_from)
            .collect::<Result<Vec<_>>>()?;
        self.skip_kinds
            .iter()
            .fold(TokenizerBuilder::new(), |builder, kind| {
                builder.skip_kind(kind.clone())
            })
            .add_matchers(&matchers)
            .policy(self.policy)
            .skip_whitespace(self.skip_whitespace)
            .build()
    }
}
