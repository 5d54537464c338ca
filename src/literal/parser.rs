// ============================================================================
// Literal Parser
// Const digit-sequence parsing with base prefixes and range checking
// ============================================================================

use crate::numeric::Representation;
use std::fmt;

/// Reasons a literal is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralError {
    /// No digits (empty text or a bare prefix such as `0x`)
    Empty,
    /// A character outside the literal's base
    InvalidDigit,
    /// Value does not fit in `u64`
    Overflow,
    /// A floating literal where an integer was required
    Floating,
    /// Value does not fit in the destination representation
    OutOfRange,
}

impl LiteralError {
    /// Human-readable reason, usable in const panics.
    pub const fn message(self) -> &'static str {
        match self {
            LiteralError::Empty => "literal has no digits",
            LiteralError::InvalidDigit => "literal contains a digit outside its base",
            LiteralError::Overflow => "integer literal does not fit in u64",
            LiteralError::Floating => "floating literal requires a floating representation",
            LiteralError::OutOfRange => {
                "value is out of range of the quantity's representation type"
            },
        }
    }
}

impl fmt::Display for LiteralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for LiteralError {}

/// Base selected by a literal's prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Radix {
    /// `0b` / `0B`
    Binary = 2,
    /// `0o` / `0O` or a bare leading `0`
    Octal = 8,
    /// No prefix
    Decimal = 10,
    /// `0x` / `0X`
    Hexadecimal = 16,
}

/// Detect the base and the index of the first digit.
pub const fn radix(bytes: &[u8]) -> (Radix, usize) {
    if bytes.len() < 2 || bytes[0] != b'0' {
        return (Radix::Decimal, 0);
    }
    match bytes[1] {
        b'x' | b'X' => (Radix::Hexadecimal, 2),
        b'b' | b'B' => (Radix::Binary, 2),
        b'o' | b'O' => (Radix::Octal, 2),
        _ => (Radix::Octal, 1),
    }
}

/// True when the text reads as a floating literal (`1.5`, `2e3`).
///
/// Hexadecimal text is never floating, its `e` is a digit.
pub const fn is_floating(text: &str) -> bool {
    let bytes = text.as_bytes();
    if let (Radix::Hexadecimal, _) = radix(bytes) {
        return false;
    }
    let mut i = 0;
    while i < bytes.len() {
        if matches!(bytes[i], b'.' | b'e' | b'E') {
            return true;
        }
        i += 1;
    }
    false
}

const fn digit(byte: u8) -> Option<u64> {
    match byte {
        b'0'..=b'9' => Some((byte - b'0') as u64),
        b'a'..=b'f' => Some((byte - b'a' + 10) as u64),
        b'A'..=b'F' => Some((byte - b'A' + 10) as u64),
        _ => None,
    }
}

/// Parse an unsigned integer literal.
///
/// Accepts `0x`/`0X` (hex), `0b`/`0B` (binary), `0o`/`0O` or a bare leading
/// `0` (octal), and plain decimal. `_` and `'` separators are ignored.
///
/// ```
/// use digital_units::literal::parse_integer;
///
/// assert_eq!(parse_integer("0x123456789abcdef"), Ok(81_985_529_216_486_895));
/// assert_eq!(parse_integer("0644"), Ok(420));
/// assert_eq!(parse_integer("1'048'576"), Ok(1_048_576));
/// ```
pub const fn parse_integer(text: &str) -> Result<u64, LiteralError> {
    let bytes = text.as_bytes();
    if bytes.is_empty() {
        return Err(LiteralError::Empty);
    }
    if is_floating(text) {
        return Err(LiteralError::Floating);
    }

    let (radix, mut i) = radix(bytes);
    let base = radix as u64;
    let mut value: u64 = 0;
    // The leading zero of a bare octal literal is itself a digit
    let mut digits = if i == 1 { 1 } else { 0 };

    while i < bytes.len() {
        let byte = bytes[i];
        i += 1;
        if byte == b'_' || byte == b'\'' {
            continue;
        }
        let d = match digit(byte) {
            Some(d) if d < base => d,
            _ => return Err(LiteralError::InvalidDigit),
        };
        value = match value.checked_mul(base) {
            Some(v) => v,
            None => return Err(LiteralError::Overflow),
        };
        value = match value.checked_add(d) {
            Some(v) => v,
            None => return Err(LiteralError::Overflow),
        };
        digits += 1;
    }

    if digits == 0 {
        return Err(LiteralError::Empty);
    }
    Ok(value)
}

/// Parse an integer literal destined for representation `R`.
///
/// Evaluated inside the `digital!` macro's const item, so every failure is a
/// compile error naming the reason.
///
/// # Panics
/// On any [`LiteralError`], including values above `R::LITERAL_MAX`.
pub const fn integer<R: Representation>(text: &str) -> u64 {
    match parse_integer(text) {
        Ok(value) if value <= R::LITERAL_MAX => value,
        Ok(_) => panic!("value is out of range of the quantity's representation type"),
        Err(LiteralError::Empty) => panic!("literal has no digits"),
        Err(LiteralError::InvalidDigit) => panic!("literal contains a digit outside its base"),
        Err(LiteralError::Overflow) => panic!("integer literal does not fit in u64"),
        Err(LiteralError::Floating) => {
            panic!("floating literal requires a floating representation (`as f64`)")
        },
        Err(LiteralError::OutOfRange) => {
            panic!("value is out of range of the quantity's representation type")
        },
    }
}

/// Require a floating literal.
///
/// # Panics
/// When the text is an integer literal.
pub const fn floating(text: &str) {
    assert!(
        is_floating(text),
        "floating representations take a floating literal such as `1.0`"
    );
}
