use log::trace;

use crate::{ReadMatcher, RuneSource, Token, TokenKind};

/// Matcher for string literals enclosed in `"` or `'`.
///
/// The delimiter is the quote that opens the string. The token text is the raw source text, the
/// escape-decoded content is available as the token's literal value.
///
/// Supported escapes are `\n`, `\r`, `\"` and `\'`. Any other escaped rune is kept together with
/// its backslash.
///
/// A string that is not closed ends at the next line feed or at the end of the input. It is still
/// recognized and the line feed belongs to its span and content.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringLiteral;

impl StringLiteral {
    fn unescape(c: char, content: &mut String) {
        match c {
            'n' => content.push('\n'),
            'r' => content.push('\r'),
            '"' | '\'' => content.push(c),
            _ => {
                content.push('\\');
                content.push(c);
            }
        }
    }
}

impl ReadMatcher for StringLiteral {
    fn token_kind(&self) -> TokenKind {
        TokenKind::STRING
    }

    fn read(&self, cursor: &mut dyn RuneSource) -> Option<Token> {
        let delimiter = match cursor.peek(0) {
            Some(c @ ('"' | '\'')) => c,
            _ => return None,
        };

        let mut escaping = false;
        let mut content = String::new();
        // Number of runes between the delimiters
        let mut count = 0;
        loop {
            let c = cursor.peek(count + 1);
            match c {
                Some(c) if escaping => {
                    Self::unescape(c, &mut content);
                    escaping = false;
                }
                Some('\\') => escaping = true,
                Some(c) if c != delimiter => content.push(c),
                Some(_) => break,
                // A backslash at the end of the input is kept.
                None if escaping => content.push('\\'),
                None => {}
            }
            if matches!(c, None | Some('\n')) {
                break;
            }
            count += 1;
        }

        if count == 0 {
            return None;
        }

        // Both delimiters, or the opening one and the rune that ended the string.
        let len = count + 2;
        let token = cursor.new_token_literal(len, self.token_kind(), content);
        trace!("String {:?} at {}", token.value(), token.span());
        cursor.consume(len);
        Some(token)
    }
}
