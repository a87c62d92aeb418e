// SPDX-License-Identifier: Apache-2.0

use std::borrow::Cow;

/// Escape decoding for string literals.
///
/// Decoding works on the whole raw span captured between the quotes, not
/// position by position. Only four escapes are recognized and they are
/// substituted in a fixed order: `\n`, `\t`, `\"`, `\\`. Any other escape
/// (`\r`, `\b`, `\f`, `\/`, `\uXXXX`) is left in the output verbatim.
///
/// Because substitution is ordered, an escaped backslash followed by `n`
/// (raw text `\\n`) decodes to a backslash and a newline.
pub struct EscapeProcessor;

/// Recognized escapes in substitution order.
const SUBSTITUTIONS: [(&str, &str); 4] = [
    ("\\n", "\n"),
    ("\\t", "\t"),
    ("\\\"", "\""),
    ("\\\\", "\\"),
];

impl EscapeProcessor {
    /// Decode the raw content of a string literal.
    ///
    /// # Arguments
    /// * `raw` - The text between the opening and closing quote, escapes undecoded
    ///
    /// # Returns
    /// The input unchanged (borrowed) when it contains no backslash, otherwise
    /// an owned copy with the recognized escapes replaced.
    pub fn decode(raw: &str) -> Cow<'_, str> {
        if !raw.contains('\\') {
            return Cow::Borrowed(raw);
        }
        let mut decoded = raw.to_owned();
        for (escape, replacement) in SUBSTITUTIONS {
            if decoded.contains(escape) {
                decoded = decoded.replace(escape, replacement);
            }
        }
        Cow::Owned(decoded)
    }

    /// Returns true if the escape character after a backslash is one the
    /// decoder substitutes.
    pub fn is_recognized(escape_char: char) -> bool {
        matches!(escape_char, 'n' | 't' | '"' | '\\')
    }
}
