use thiserror::Error;

use crate::Position;

/// The result type for the `runelex` crate.
pub type Result<T> = std::result::Result<T, RunelexError>;

/// The error type for the `runelex` crate.
#[derive(Error, Debug)]
pub struct RunelexError {
    /// The source of the error.
    pub source: Box<RunelexErrorKind>,
}

impl RunelexError {
    /// Create a new `RunelexError`.
    pub fn new(kind: RunelexErrorKind) -> Self {
        RunelexError {
            source: Box::new(kind),
        }
    }

    /// Returns the kind of the error.
    #[inline]
    pub fn kind(&self) -> &RunelexErrorKind {
        &self.source
    }
}

impl std::fmt::Display for RunelexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.source)
    }
}

/// The error kind type.
#[derive(Error, Debug)]
pub enum RunelexErrorKind {
    /// A contain matcher was configured with a value that is not a string.
    #[error("invalid contain: {0}")]
    InvalidContain(String),

    /// No matcher recognized the input at the given position.
    #[error("unexpected character {rune:?} at {position}")]
    UnexpectedRune {
        /// The character no matcher accepted.
        rune: char,
        /// The position of the character.
        position: Position,
    },

    /// A tokenizer was built without any matcher.
    #[error("the tokenizer needs at least one matcher")]
    NoMatchers,

    /// A std::io error occurred, e.g. while reading a configuration file.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    /// The tokenizer configuration could not be deserialized.
    #[cfg(feature = "serde")]
    #[error(transparent)]
    ConfigError(#[from] serde_json::Error),
}

impl From<std::io::Error> for RunelexError {
    fn from(error: std::io::Error) -> Self {
        RunelexError::new(RunelexErrorKind::IoError(error))
    }
}

#[cfg(feature = "serde")]
impl From<serde_json::Error> for RunelexError {
    fn from(error: serde_json::Error) -> Self {
        RunelexError::new(RunelexErrorKind::ConfigError(error))
    }
}

impl From<RunelexErrorKind> for RunelexError {
    fn from(kind: RunelexErrorKind) -> Self {
        RunelexError::new(kind)
    }
}
