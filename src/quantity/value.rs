// ============================================================================
// Quantity
// A raw count tagged at compile time with its scale
// ============================================================================

use crate::numeric::Representation;
use crate::scale::{Factor, Identity, Scale};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::iter::Sum;
use std::marker::PhantomData;

/// A digital storage quantity: `raw` units of `S::NUM / S::DEN` bytes each.
///
/// The scale lives only in the type, so a `Quantity` is exactly as large as
/// its representation and every operation compiles down to plain scalar
/// arithmetic.
///
/// # Type Parameters
/// - `R`: the representation (any [`Representation`]: integers, `f32`, `f64`)
/// - `S`: the scale, defaults to bytes ([`Identity`])
///
/// # Example
/// ```
/// use digital_units::{digital, Bytes, Kibibytes, Quantity};
/// use digital_units::scale::Kibi;
///
/// let page = Quantity::<i64, Kibi>::new(4);
/// let bytes: Bytes = page.convert();
/// assert_eq!(bytes.raw(), 4096);
/// assert_eq!(page, digital!(4096 B));
/// ```
#[repr(transparent)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        transparent,
        bound(serialize = "R: serde::Serialize", deserialize = "R: serde::Deserialize<'de>")
    )
)]
pub struct Quantity<R, S = Identity> {
    raw: R,
    #[cfg_attr(feature = "serde", serde(skip))]
    scale: PhantomData<S>,
}

impl<R: Representation, S: Scale> Quantity<R, S> {
    /// Zero units
    pub const ZERO: Self = Self::new(R::ZERO);

    /// The representation's lowest value
    pub const MIN: Self = Self::new(R::LOWEST);

    /// The representation's highest value
    pub const MAX: Self = Self::new(R::HIGHEST);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Wrap a raw count of `S` units.
    ///
    /// An ill-formed scale (zero or unreduced ratio) is rejected here at
    /// compile time:
    ///
    /// ```compile_fail
    /// use digital_units::Quantity;
    /// use digital_units::scale::Ratio;
    ///
    /// let q = Quantity::<i64, Ratio<2, 4>>::new(1);
    /// ```
    #[inline]
    pub const fn new(raw: R) -> Self {
        let _factor: Factor = S::FACTOR;
        Self {
            raw,
            scale: PhantomData,
        }
    }

    /// Zero units.
    #[inline]
    pub const fn zero() -> Self {
        Self::ZERO
    }

    /// Lowest representable quantity.
    #[inline]
    pub const fn min_value() -> Self {
        Self::MIN
    }

    /// Highest representable quantity.
    #[inline]
    pub const fn max_value() -> Self {
        Self::MAX
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The count of `S` units.
    #[inline]
    pub const fn raw(self) -> R {
        self.raw
    }

    /// The scale's factor to bytes.
    #[inline]
    pub const fn factor(self) -> Factor {
        S::FACTOR
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.raw == R::ZERO
    }

    /// Absolute value (identity for unsigned representations).
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.raw.abs())
    }

    // ========================================================================
    // Stepping
    // ========================================================================
    //
    // One step is one unit of this quantity's own scale: incrementing a
    // kibibyte quantity adds 1024 bytes, incrementing bytes adds one byte.

    /// Add one unit and return the new value.
    #[inline]
    pub fn increment(&mut self) -> Self {
        self.raw += R::ONE;
        *self
    }

    /// Subtract one unit and return the new value.
    #[inline]
    pub fn decrement(&mut self) -> Self {
        self.raw -= R::ONE;
        *self
    }

    /// Add one unit and return the previous value.
    #[inline]
    pub fn fetch_increment(&mut self) -> Self {
        let previous = *self;
        self.raw += R::ONE;
        previous
    }

    /// Subtract one unit and return the previous value.
    #[inline]
    pub fn fetch_decrement(&mut self) -> Self {
        let previous = *self;
        self.raw -= R::ONE;
        previous
    }
}

// ============================================================================
// Standard Trait Implementations
// ============================================================================

impl<R: Clone, S> Clone for Quantity<R, S> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            raw: self.raw.clone(),
            scale: PhantomData,
        }
    }
}

impl<R: Copy, S> Copy for Quantity<R, S> {}

impl<R: Representation, S: Scale> Default for Quantity<R, S> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<R: Representation + Eq, S: Scale> Eq for Quantity<R, S> {}

impl<R: Representation + Ord, S: Scale> Ord for Quantity<R, S> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.raw.cmp(&other.raw)
    }
}

/// Hashes the raw count only: `1 KiB` and `1024 B` compare equal but hash
/// differently, so keep a single scale per map or set.
impl<R: Hash, S> Hash for Quantity<R, S> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl<R: Representation, S: Scale> Sum for Quantity<R, S> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |total, q| Self::new(total.raw + q.raw))
    }
}

impl<'a, R: Representation, S: Scale> Sum<&'a Quantity<R, S>> for Quantity<R, S> {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::{Kibi, Mega, Tebi};
    use std::collections::hash_map::DefaultHasher;

    type KiB = Quantity<i64, Kibi>;
    type B = Quantity<i64>;

    fn hash_of<T: Hash>(value: T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_size_matches_representation() {
        assert_eq!(std::mem::size_of::<KiB>(), std::mem::size_of::<i64>());
        assert_eq!(std::mem::size_of::<Quantity<u8, Mega>>(), 1);
    }

    #[test]
    fn test_constants() {
        type TiB = Quantity<i64, Tebi>;
        assert_eq!(TiB::zero().raw(), 0);
        assert_eq!(TiB::min_value().raw(), i64::MIN);
        assert_eq!(TiB::max_value().raw(), i64::MAX);
        assert_eq!(Quantity::<f64, Mega>::MAX.raw(), f64::MAX);
        assert_eq!(Quantity::<f64, Mega>::MIN.raw(), f64::MIN);
        assert_eq!(KiB::default(), KiB::ZERO);
        assert!(KiB::ZERO.is_zero());
    }

    #[test]
    fn test_increment_steps_own_scale() {
        let mut value = KiB::new(1);
        let new_value = value.increment();
        assert_eq!(value.raw(), 2);
        assert_eq!(new_value.raw(), 2);

        let mut bytes = B::new(512);
        let old = bytes.fetch_increment();
        assert_eq!(old.raw(), 512);
        assert_eq!(bytes.raw(), 513);
    }

    #[test]
    fn test_decrement_steps_own_scale() {
        let mut value = KiB::new(2);
        let new_value = value.decrement();
        assert_eq!(new_value.raw(), 1);

        let mut bytes = B::new(512);
        let old = bytes.fetch_decrement();
        assert_eq!(old.raw(), 512);
        assert_eq!(bytes.raw(), 511);
    }

    #[test]
    fn test_abs() {
        assert_eq!(KiB::new(-1024).abs().raw(), 1024);
        assert_eq!(KiB::new(7).abs().raw(), 7);
        assert_eq!(Quantity::<u32, Kibi>::new(3).abs().raw(), 3);
        assert_eq!(Quantity::<f64, Kibi>::new(-1.5).abs().raw(), 1.5);
    }

    #[test]
    fn test_hash_is_raw_value() {
        assert_eq!(hash_of(KiB::new(1)), hash_of(1i64));
        assert_ne!(hash_of(KiB::new(1)), hash_of(B::new(1024)));
    }

    #[test]
    fn test_ord() {
        let mut values = vec![KiB::new(3), KiB::new(-1), KiB::new(2)];
        values.sort();
        assert_eq!(values, vec![KiB::new(-1), KiB::new(2), KiB::new(3)]);
        assert_eq!(KiB::new(1).max(KiB::new(5)), KiB::new(5));
    }

    #[test]
    fn test_sum() {
        let values = [KiB::new(1), KiB::new(2), KiB::new(3)];
        assert_eq!(values.iter().sum::<KiB>(), KiB::new(6));
        assert_eq!(values.into_iter().sum::<KiB>(), KiB::new(6));
        assert_eq!(Vec::<KiB>::new().into_iter().sum::<KiB>(), KiB::ZERO);
    }
}
