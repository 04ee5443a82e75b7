/// Module with the line comment matchers.
mod line_comment;
pub use line_comment::{CLineComment, UnixLineComment};

/// Module with the block comment matcher.
mod block_comment;
pub use block_comment::CBlockComment;

/// Module with the identifier matcher.
mod identifier;
pub use identifier::Identifier;

/// Module with the matcher for fixed literals.
mod contain;
pub use contain::Contain;

/// Module with the string matcher.
mod string;
pub use string::StringLiteral;
