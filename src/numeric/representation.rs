// ============================================================================
// Representations
// Scalar types a quantity may count its units in
// ============================================================================

use std::fmt;
use std::hash::Hash;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Rem, RemAssign, Sub, SubAssign};

/// A scalar type that can hold the raw count of a quantity.
///
/// Implemented for the primitive integers (`i8`..`i64`, `u8`..`u64`,
/// `isize`, `usize`) and for `f32`/`f64`.
///
/// # Bridges
/// Conversion between scales is evaluated in `i128` when both sides are
/// integral and in `f64` otherwise. `to_*`/`from_*` are plain `as` casts:
/// values outside the destination's range wrap (integers) or saturate
/// (floats) exactly like scalar casts do.
pub trait Representation:
    Copy
    + Default
    + PartialEq
    + PartialOrd
    + fmt::Debug
    + fmt::Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + 'static
{
    /// Additive identity.
    const ZERO: Self;

    /// One unit.
    const ONE: Self;

    /// Lowest representable value.
    const LOWEST: Self;

    /// Highest representable value.
    const HIGHEST: Self;

    /// True for `f32`/`f64`.
    const IS_FLOAT: bool;

    /// True when negative values are representable.
    const IS_SIGNED: bool;

    /// Largest unsigned literal this type accepts.
    const LITERAL_MAX: u64;

    /// Widen into the integral conversion domain.
    fn to_i128(self) -> i128;

    /// Narrow from the integral conversion domain.
    fn from_i128(value: i128) -> Self;

    /// Widen into the floating conversion domain.
    fn to_f64(self) -> f64;

    /// Narrow from the floating conversion domain.
    fn from_f64(value: f64) -> Self;

    /// Magnitude (identity for unsigned types).
    fn abs(self) -> Self;
}

/// Integral representations: the only ones supporting `%` and `%=`.
pub trait Integral: Representation + Eq + Ord + Hash + Rem<Output = Self> + RemAssign {}

macro_rules! impl_signed {
    ($($t:ty),*) => {
        $(
            impl Representation for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const LOWEST: Self = <$t>::MIN;
                const HIGHEST: Self = <$t>::MAX;
                const IS_FLOAT: bool = false;
                const IS_SIGNED: bool = true;
                const LITERAL_MAX: u64 = <$t>::MAX as u64;

                #[inline]
                fn to_i128(self) -> i128 {
                    self as i128
                }

                #[inline]
                fn from_i128(value: i128) -> Self {
                    value as $t
                }

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn from_f64(value: f64) -> Self {
                    value as $t
                }

                #[inline]
                fn abs(self) -> Self {
                    self.wrapping_abs()
                }
            }

            impl Integral for $t {}
        )*
    };
}

macro_rules! impl_unsigned {
    ($($t:ty),*) => {
        $(
            impl Representation for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const LOWEST: Self = <$t>::MIN;
                const HIGHEST: Self = <$t>::MAX;
                const IS_FLOAT: bool = false;
                const IS_SIGNED: bool = false;
                const LITERAL_MAX: u64 = <$t>::MAX as u64;

                #[inline]
                fn to_i128(self) -> i128 {
                    self as i128
                }

                #[inline]
                fn from_i128(value: i128) -> Self {
                    value as $t
                }

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn from_f64(value: f64) -> Self {
                    value as $t
                }

                #[inline]
                fn abs(self) -> Self {
                    self
                }
            }

            impl Integral for $t {}
        )*
    };
}

macro_rules! impl_float {
    ($($t:ty),*) => {
        $(
            impl Representation for $t {
                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;
                const LOWEST: Self = <$t>::MIN;
                const HIGHEST: Self = <$t>::MAX;
                const IS_FLOAT: bool = true;
                const IS_SIGNED: bool = true;
                const LITERAL_MAX: u64 = u64::MAX;

                #[inline]
                fn to_i128(self) -> i128 {
                    self as i128
                }

                #[inline]
                fn from_i128(value: i128) -> Self {
                    value as $t
                }

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn from_f64(value: f64) -> Self {
                    value as $t
                }

                #[inline]
                fn abs(self) -> Self {
                    <$t>::abs(self)
                }
            }
        )*
    };
}

impl_signed!(i8, i16, i32, i64, isize);
impl_unsigned!(u8, u16, u32, u64, usize);
impl_float!(f32, f64);
