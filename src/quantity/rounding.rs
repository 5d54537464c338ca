// ============================================================================
// Rounding Helpers
// Directed conversion: floor, ceil, round-half-to-even and abs
// ============================================================================

use super::conversion::QuantityType;
use super::value::Quantity;
use crate::numeric::Representation;
use crate::scale::{Factor, Scale};

/// Exact quotient and remainder of a raw count re-expressed through `ratio`.
///
/// `n = raw * num` is divided by `den` with truncation, so `quotient` is the
/// plain conversion result and `remainder` carries the sign of `n`.
#[derive(Debug, Clone, Copy)]
struct Division {
    numerator: i128,
    quotient: i128,
    remainder: i128,
    den: i128,
}

impl Division {
    #[inline]
    fn new(raw: i128, ratio: Factor) -> Self {
        let numerator = raw.wrapping_mul(ratio.num() as i128);
        let den = ratio.den() as i128;
        Self {
            numerator,
            quotient: numerator / den,
            remainder: numerator % den,
            den,
        }
    }

    #[inline]
    fn floor(self) -> i128 {
        if self.remainder != 0 && self.numerator < 0 {
            self.quotient - 1
        } else {
            self.quotient
        }
    }

    #[inline]
    fn ceil(self) -> i128 {
        if self.remainder != 0 && self.numerator > 0 {
            self.quotient + 1
        } else {
            self.quotient
        }
    }

    /// Nearest integer, ties to even.
    ///
    /// Compares `2|r|` with `den`: below keeps the truncated quotient, above
    /// steps one unit away from zero, and a tie steps only when the
    /// truncated quotient is odd. The rule is symmetric in sign.
    #[inline]
    fn round_half_even(self) -> i128 {
        let away = if self.numerator < 0 { -1 } else { 1 };
        let twice = self.remainder.abs() * 2;
        if twice < self.den {
            self.quotient
        } else if twice > self.den {
            self.quotient + away
        } else if self.quotient % 2 == 0 {
            self.quotient
        } else {
            self.quotient + away
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Direction {
    Floor,
    Ceil,
    Nearest,
}

#[inline]
fn directed<D: QuantityType, Q: QuantityType>(quantity: Q, direction: Direction) -> D {
    let ratio = const { <Q::Scale as Scale>::FACTOR.divide(<D::Scale as Scale>::FACTOR) };
    let raw = quantity.into_raw();

    if <Q::Rep as Representation>::IS_FLOAT || <D::Rep as Representation>::IS_FLOAT {
        let exact = raw.to_f64() * ratio.num() as f64 / ratio.den() as f64;
        let rounded = match direction {
            Direction::Floor => exact.floor(),
            Direction::Ceil => exact.ceil(),
            Direction::Nearest => exact.round_ties_even(),
        };
        return D::from_raw(<D::Rep as Representation>::from_f64(rounded));
    }

    let division = Division::new(raw.to_i128(), ratio);
    let rounded = match direction {
        Direction::Floor => division.floor(),
        Direction::Ceil => division.ceil(),
        Direction::Nearest => division.round_half_even(),
    };
    D::from_raw(<D::Rep as Representation>::from_i128(rounded))
}

/// Absolute value of a quantity, same type out.
///
/// ```
/// use digital_units::{abs, digital};
///
/// assert_eq!(abs(digital!(-1024 EiB)), digital!(1024 EiB));
/// ```
#[inline]
pub fn abs<Q: QuantityType>(quantity: Q) -> Q {
    Q::from_raw(quantity.into_raw().abs())
}

/// Convert into `D`, rounding toward negative infinity.
///
/// ```
/// use digital_units::{digital, floor, Kilobytes};
///
/// assert_eq!(floor::<Kilobytes>(digital!(-999 B)), digital!(-1 KB));
/// ```
#[inline]
pub fn floor<D: QuantityType>(quantity: impl QuantityType) -> D {
    directed(quantity, Direction::Floor)
}

/// Convert into `D`, rounding toward positive infinity.
///
/// ```
/// use digital_units::{ceil, digital, Kilobytes};
///
/// assert_eq!(ceil::<Kilobytes>(digital!(999 B)), digital!(1 KB));
/// ```
#[inline]
pub fn ceil<D: QuantityType>(quantity: impl QuantityType) -> D {
    directed(quantity, Direction::Ceil)
}

/// Convert into `D`, rounding to the nearest unit with ties to even.
///
/// ```
/// use digital_units::{digital, round, Kilobytes};
///
/// assert_eq!(round::<Kilobytes>(digital!(1500 B)), digital!(2 KB));
/// assert_eq!(round::<Kilobytes>(digital!(2500 B)), digital!(2 KB));
/// ```
#[inline]
pub fn round<D: QuantityType>(quantity: impl QuantityType) -> D {
    directed(quantity, Direction::Nearest)
}

impl<R: Representation, S: Scale> Quantity<R, S> {
    /// Method form of [`floor`].
    #[inline]
    pub fn floor<D: QuantityType>(self) -> D {
        directed(self, Direction::Floor)
    }

    /// Method form of [`ceil`].
    #[inline]
    pub fn ceil<D: QuantityType>(self) -> D {
        directed(self, Direction::Ceil)
    }

    /// Method form of [`round`].
    #[inline]
    pub fn round<D: QuantityType>(self) -> D {
        directed(self, Direction::Nearest)
    }
}
