// ============================================================================
// Conversion Engine
// Scale-to-scale conversion with compile-time dispatch on the reduced ratio
// ============================================================================

use super::value::Quantity;
use crate::numeric::Representation;
use crate::scale::{is_harmonic, Scale};

/// A concrete quantity type, named as a conversion destination.
///
/// Implemented by every [`Quantity`]; lets `convert::<Kilobytes>(q)` name
/// its target through an alias instead of spelling out representation and
/// scale.
pub trait QuantityType: Copy {
    /// The representation.
    type Rep: Representation;

    /// The scale.
    type Scale: Scale;

    /// Wrap a raw count.
    fn from_raw(raw: Self::Rep) -> Self;

    /// Unwrap the raw count.
    fn into_raw(self) -> Self::Rep;
}

impl<R: Representation, S: Scale> QuantityType for Quantity<R, S> {
    type Rep = R;
    type Scale = S;

    #[inline]
    fn from_raw(raw: R) -> Self {
        Quantity::new(raw)
    }

    #[inline]
    fn into_raw(self) -> R {
        self.raw()
    }
}

/// Scalar cast between representations, with `as` semantics.
#[inline]
pub(crate) fn cast<A: Representation, B: Representation>(value: A) -> B {
    if A::IS_FLOAT || B::IS_FLOAT {
        B::from_f64(value.to_f64())
    } else {
        B::from_i128(value.to_i128())
    }
}

/// Re-express a raw count of `S` units as a raw count of `S2` units.
///
/// The ratio `S / S2` is reduced at compile time and selects the path:
/// - `1/1`: plain cast
/// - `n/1`: multiply
/// - `1/d`: divide
/// - `n/d`: multiply then divide
///
/// Integral pairs are evaluated in `i128` and truncate toward zero; any
/// floating side moves the arithmetic to `f64`. Overflow is not checked.
#[inline]
pub(crate) fn rescale<R, S, R2, S2>(raw: R) -> R2
where
    R: Representation,
    S: Scale,
    R2: Representation,
    S2: Scale,
{
    let ratio = const { S::FACTOR.divide(S2::FACTOR) };

    if ratio.is_one() {
        return cast(raw);
    }

    if R::IS_FLOAT || R2::IS_FLOAT {
        let value = raw.to_f64();
        let scaled = if ratio.den() == 1 {
            value * ratio.num() as f64
        } else if ratio.num() == 1 {
            value / ratio.den() as f64
        } else {
            value * ratio.num() as f64 / ratio.den() as f64
        };
        R2::from_f64(scaled)
    } else {
        let value = raw.to_i128();
        let scaled = if ratio.den() == 1 {
            value.wrapping_mul(ratio.num() as i128)
        } else if ratio.num() == 1 {
            value / ratio.den() as i128
        } else {
            value.wrapping_mul(ratio.num() as i128) / ratio.den() as i128
        };
        R2::from_i128(scaled)
    }
}

impl<R: Representation, S: Scale> Quantity<R, S> {
    /// Convert into any quantity type.
    ///
    /// Always allowed. Integral destinations truncate toward zero
    /// (`-999 B` becomes `0 KB`); use [`floor`](crate::floor),
    /// [`ceil`](crate::ceil) or [`round`](crate::round) to pick a direction.
    ///
    /// ```
    /// use digital_units::{digital, Kilobytes};
    ///
    /// let kb: Kilobytes = digital!(2 KiB).convert();
    /// assert_eq!(kb.raw(), 2);
    /// ```
    #[inline]
    pub fn convert<D: QuantityType>(self) -> D {
        D::from_raw(rescale::<R, S, D::Rep, D::Scale>(self.raw()))
    }

    /// Lossless conversion from another quantity.
    ///
    /// Accepted when `Self` has a floating representation, or when both
    /// representations are integral and every source unit is a whole number
    /// of `S` units (kibibytes into bytes, terabytes into kibibytes). Any
    /// other pair fails to compile; use [`convert`](Self::convert) instead.
    ///
    /// ```
    /// use digital_units::{digital, Bytes};
    ///
    /// let bytes = Bytes::from_quantity(digital!(1 KiB));
    /// assert_eq!(bytes.raw(), 1024);
    /// ```
    ///
    /// ```compile_fail
    /// use digital_units::{digital, Kibibytes};
    ///
    /// // 1 GB is not a whole number of kibibytes
    /// let kib = Kibibytes::from_quantity(digital!(1 GB));
    /// ```
    ///
    /// ```compile_fail
    /// use digital_units::{digital, Bytes};
    ///
    /// // floating source into an integral destination
    /// let bytes = Bytes::from_quantity(digital!(1.5 KiB as f64));
    /// ```
    #[inline]
    pub fn from_quantity<R2: Representation, S2: Scale>(other: Quantity<R2, S2>) -> Self {
        const {
            assert!(
                R::IS_FLOAT || (!R2::IS_FLOAT && is_harmonic(S::FACTOR, S2::FACTOR)),
                "lossless conversion requires a floating destination or a harmonic integral pair"
            )
        };
        other.convert()
    }

    /// Lossless conversion into another quantity; see
    /// [`from_quantity`](Self::from_quantity).
    #[inline]
    pub fn into_quantity<D: QuantityType>(self) -> D {
        D::from_raw(Quantity::<D::Rep, D::Scale>::from_quantity(self).raw())
    }
}

/// Convert any quantity into the quantity type `D`.
///
/// Free-function form of [`Quantity::convert`].
///
/// ```
/// use digital_units::{convert, digital, Bytes};
///
/// assert_eq!(convert::<Bytes>(digital!(1 EiB)).raw(), 1_152_921_504_606_846_976);
/// ```
#[inline]
pub fn convert<D: QuantityType>(quantity: impl QuantityType) -> D {
    from_type(quantity)
}

#[inline]
fn from_type<D: QuantityType, Q: QuantityType>(quantity: Q) -> D {
    D::from_raw(rescale::<Q::Rep, Q::Scale, D::Rep, D::Scale>(
        quantity.into_raw(),
    ))
}
