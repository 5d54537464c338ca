// ============================================================================
// Text Conversion
// Display, Debug and FromStr for quantities
// ============================================================================

use super::value::Quantity;
use crate::literal::{is_floating, parse_integer, LiteralError};
use crate::numeric::{DigitalError, DigitalResult, Representation};
use crate::scale::{factor_of_symbol, Scale, SYMBOLS};
use std::fmt;
use std::str::FromStr;

/// Writes the unit part: the catalog symbol, or the byte ratio otherwise.
fn write_unit<S: Scale>(f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match S::SYMBOL {
        Some(symbol) => f.write_str(symbol),
        None if S::FACTOR.is_integral() => write!(f, "({} B)", S::FACTOR.num()),
        None => write!(f, "({}/{} B)", S::FACTOR.num(), S::FACTOR.den()),
    }
}

/// `"<raw> <unit>"`; format options apply to the raw value.
///
/// ```
/// use digital_units::digital;
///
/// assert_eq!(digital!(4 KiB).to_string(), "4 KiB");
/// assert_eq!(format!("{:.2}", digital!(1.5 GB as f64)), "1.50 GB");
/// ```
impl<R: Representation, S: Scale> fmt::Display for Quantity<R, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.raw(), f)?;
        f.write_str(" ")?;
        write_unit::<S>(f)
    }
}

impl<R: Representation, S: Scale> fmt::Debug for Quantity<R, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Quantity<")?;
        match S::SYMBOL {
            Some(symbol) => f.write_str(symbol)?,
            None => write!(f, "{}/{}", S::FACTOR.num(), S::FACTOR.den())?,
        }
        f.write_str(">(")?;
        fmt::Debug::fmt(&self.raw(), f)?;
        f.write_str(")")
    }
}

// ============================================================================
// String Parsing
// ============================================================================

/// Split `"<number>[ ][unit]"` into its number and optional unit.
fn split_unit(text: &str) -> (&str, Option<&str>) {
    if let Some(pos) = text.rfind(char::is_whitespace) {
        let (number, unit) = text.split_at(pos);
        return (number.trim_end(), Some(unit.trim_start()));
    }

    // Hex digits overlap the unit letters ("0xAB")
    let digits = text.strip_prefix('-').unwrap_or(text);
    if digits.starts_with("0x") || digits.starts_with("0X") {
        return (text, None);
    }

    for symbol in SYMBOLS {
        if let Some(number) = text.strip_suffix(symbol) {
            if !number.is_empty() {
                return (number, Some(symbol));
            }
        }
    }
    (text, None)
}

fn parse_raw<R: Representation>(number: &str) -> DigitalResult<R> {
    let (negative, digits) = match number.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, number),
    };

    if R::IS_FLOAT && is_floating(digits) {
        let value: f64 = digits
            .parse()
            .map_err(|_| DigitalError::InvalidLiteral(LiteralError::InvalidDigit))?;
        return Ok(R::from_f64(if negative { -value } else { value }));
    }

    let magnitude = i128::from(parse_integer(digits)?);
    let value = if negative { -magnitude } else { magnitude };

    if R::IS_FLOAT {
        return Ok(R::from_f64(value as f64));
    }
    if value < R::LOWEST.to_i128() || value > R::HIGHEST.to_i128() {
        return Err(DigitalError::OutOfRange);
    }
    Ok(R::from_i128(value))
}

fn parse_quantity<R: Representation, S: Scale>(text: &str) -> DigitalResult<Quantity<R, S>> {
    let (number, unit) = split_unit(text.trim());

    if let Some(unit) = unit {
        let factor = factor_of_symbol(unit).ok_or(DigitalError::UnknownUnit)?;
        if factor != S::FACTOR {
            return Err(DigitalError::UnitMismatch);
        }
    }

    let raw = parse_raw::<R>(number)?;
    tracing::trace!(input = text, raw = %raw, "parsed quantity");
    Ok(Quantity::new(raw))
}

impl<R: Representation, S: Scale> FromStr for Quantity<R, S> {
    type Err = DigitalError;

    /// Parse `"<literal>[ ][unit]"`.
    ///
    /// The literal follows the `digital!` grammar (prefixes, `_`/`'`
    /// separators, optional leading `-`); floating text is accepted only by
    /// floating representations. A unit, when present, must name this
    /// quantity's scale.
    ///
    /// # Examples
    /// - "4 KiB" as kibibytes -> 4
    /// - "0x1000 B" as bytes -> 4096 (hex text keeps a trailing `B` as a digit)
    /// - "1.5 GB" as `Quantity<f64, Giga>` -> 1.5
    /// - "4 MB" as kibibytes -> `UnitMismatch`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_quantity(s).inspect_err(|error| {
            tracing::debug!(input = s, %error, "rejected quantity text");
        })
    }
}
