// SPDX-License-Identifier: Apache-2.0

use core::num::IntErrorKind;
use core::str::FromStr;

/// Represents the parsed value of a JSON number literal.
///
/// Lexemes without a decimal point or exponent become [`JsonNumber::Integer`].
/// Everything else, and integral lexemes too large for `i64`, becomes
/// [`JsonNumber::Float`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JsonNumber {
    /// Integral literal that fits in an `i64`
    Integer(i64),
    /// Literal with a fraction or exponent, or an integer beyond `i64`
    Float(f64),
}

impl JsonNumber {
    /// Parse a scanned number lexeme.
    ///
    /// The lexeme is expected to already match the JSON number grammar.
    /// Returns `None` when the value cannot be represented, which happens
    /// when the floating point result is not finite (e.g. `1e999`).
    ///
    /// # Arguments
    /// * `lexeme` - The raw number text, e.g. `-12`, `2.5`, `1E+3`
    pub fn from_lexeme(lexeme: &str) -> Option<JsonNumber> {
        if is_integer(lexeme.as_bytes()) {
            match i64::from_str(lexeme) {
                Ok(val) => Some(JsonNumber::Integer(val)),
                Err(e)
                    if matches!(
                        e.kind(),
                        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow
                    ) =>
                {
                    log::debug!("integer literal {lexeme} overflows i64, using f64");
                    parse_float(lexeme)
                }
                Err(_) => None,
            }
        } else {
            parse_float(lexeme)
        }
    }

    /// Get the number as an `i64` if it is an integer.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            JsonNumber::Integer(val) => Some(*val),
            JsonNumber::Float(_) => None,
        }
    }

    /// Get the number as an `f64`. Integers are converted.
    pub fn as_f64(&self) -> f64 {
        match self {
            JsonNumber::Integer(val) => *val as f64,
            JsonNumber::Float(val) => *val,
        }
    }

    /// Check if this number came from an integral literal that fit in an `i64`.
    pub fn is_integer(&self) -> bool {
        matches!(self, JsonNumber::Integer(_))
    }

    /// Returns true if this number is stored as a float.
    pub fn is_float(&self) -> bool {
        !self.is_integer()
    }
}

impl From<i64> for JsonNumber {
    fn from(val: i64) -> Self {
        JsonNumber::Integer(val)
    }
}

impl From<f64> for JsonNumber {
    fn from(val: f64) -> Self {
        JsonNumber::Float(val)
    }
}

impl core::fmt::Display for JsonNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            JsonNumber::Integer(val) => write!(f, "{val}"),
            JsonNumber::Float(val) => write!(f, "{val}"),
        }
    }
}

/// Detects if a number byte slice represents an integer (no decimal point or exponent).
/// JSON numbers are pure ASCII, so this avoids unnecessary UTF-8 string processing.
pub fn is_integer(bytes: &[u8]) -> bool {
    !bytes.iter().any(|&b| b == b'.' || b == b'e' || b == b'E')
}

fn parse_float(lexeme: &str) -> Option<JsonNumber> {
    match f64::from_str(lexeme) {
        Ok(val) if val.is_finite() => Some(JsonNumber::Float(val)),
        _ => None,
    }
}
