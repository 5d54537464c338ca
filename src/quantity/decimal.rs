// ============================================================================
// Conversion to/from rust_decimal (for API boundaries)
// ============================================================================

use super::value::Quantity;
use crate::numeric::{DigitalError, DigitalResult, Representation};
use crate::scale::Scale;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

impl<R: Representation, S: Scale> Quantity<R, S> {
    /// Exact magnitude in bytes as a `Decimal`.
    ///
    /// Intended for reporting and interchange, not for arithmetic.
    ///
    /// # Errors
    /// `Overflow` when the byte count exceeds `Decimal`'s 96-bit mantissa
    /// (or the raw value is not finite).
    ///
    /// ```
    /// use digital_units::digital;
    /// use rust_decimal::Decimal;
    ///
    /// assert_eq!(digital!(3 KiB).to_decimal(), Ok(Decimal::from(3_072)));
    /// ```
    pub fn to_decimal(self) -> DigitalResult<Decimal> {
        let units = if R::IS_FLOAT {
            Decimal::from_f64_retain(self.raw().to_f64()).ok_or(DigitalError::Overflow)?
        } else {
            Decimal::try_from_i128_with_scale(self.raw().to_i128(), 0)
                .map_err(|_| DigitalError::Overflow)?
        };

        units
            .checked_mul(Decimal::from(S::FACTOR.num()))
            .and_then(|bytes| bytes.checked_div(Decimal::from(S::FACTOR.den())))
            .map(|bytes| bytes.normalize())
            .ok_or(DigitalError::Overflow)
    }

    /// Build from a magnitude in bytes.
    ///
    /// # Errors
    /// - `PrecisionLoss` if an integral representation would drop a fraction
    ///   of a unit
    /// - `OutOfRange` if the unit count does not fit the representation
    /// - `Overflow` if the intermediate `Decimal` arithmetic overflows
    pub fn from_decimal(bytes: Decimal) -> DigitalResult<Self> {
        let units = bytes
            .checked_mul(Decimal::from(S::FACTOR.den()))
            .and_then(|scaled| scaled.checked_div(Decimal::from(S::FACTOR.num())))
            .ok_or(DigitalError::Overflow)?;

        if R::IS_FLOAT {
            let value = units.to_f64().ok_or(DigitalError::OutOfRange)?;
            return Ok(Self::new(R::from_f64(value)));
        }

        if !units.fract().is_zero() {
            return Err(DigitalError::PrecisionLoss);
        }
        let value = units.to_i128().ok_or(DigitalError::OutOfRange)?;
        if value < R::LOWEST.to_i128() || value > R::HIGHEST.to_i128() {
            return Err(DigitalError::OutOfRange);
        }
        Ok(Self::new(R::from_i128(value)))
    }
}
