// ============================================================================
// Scale Catalog
// Type-level scales, the decimal/binary catalog and common-scale deduction
// ============================================================================

use super::factor::{gcd, Factor};

/// A compile-time scale: one unit equals `NUM / DEN` bytes.
///
/// Implementors must state the ratio in lowest terms. [`Scale::FACTOR`]
/// rejects anything else when the scale is first used, so two types can
/// never describe the same ratio.
pub trait Scale: Copy + 'static {
    /// Numerator of the ratio to one byte.
    const NUM: u64;

    /// Denominator of the ratio to one byte.
    const DEN: u64;

    /// The validated factor.
    const FACTOR: Factor = Factor::canonical(Self::NUM, Self::DEN);

    /// Catalog symbol (`"KiB"`, `"MB"`, ...), if this is a catalog scale.
    const SYMBOL: Option<&'static str> = symbol(Self::FACTOR);
}

/// The generic scale descriptor: `NUM / DEN` bytes per unit.
///
/// ```
/// use digital_units::scale::{Ratio, Scale};
///
/// // Bits: one eighth of a byte
/// type Bits = Ratio<1, 8>;
/// assert_eq!(Bits::FACTOR.den(), 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Ratio<const NUM: u64, const DEN: u64 = 1>;

impl<const N: u64, const D: u64> Scale for Ratio<N, D> {
    const NUM: u64 = N;
    const DEN: u64 = D;
}

// ============================================================================
// Catalog
// ============================================================================

/// One byte per unit.
pub type Identity = Ratio<1>;

/// 1000^1 bytes.
pub type Kilo = Ratio<1_000>;
/// 1000^2 bytes.
pub type Mega = Ratio<1_000_000>;
/// 1000^3 bytes.
pub type Giga = Ratio<1_000_000_000>;
/// 1000^4 bytes.
pub type Tera = Ratio<1_000_000_000_000>;
/// 1000^5 bytes.
pub type Peta = Ratio<1_000_000_000_000_000>;
/// 1000^6 bytes.
pub type Exa = Ratio<1_000_000_000_000_000_000>;

/// 1024^1 bytes.
pub type Kibi = Ratio<1_024>;
/// 1024^2 bytes.
pub type Mebi = Ratio<1_048_576>;
/// 1024^3 bytes.
pub type Gibi = Ratio<1_073_741_824>;
/// 1024^4 bytes.
pub type Tebi = Ratio<1_099_511_627_776>;
/// 1024^5 bytes.
pub type Pebi = Ratio<1_125_899_906_842_624>;
/// 1024^6 bytes.
pub type Exbi = Ratio<1_152_921_504_606_846_976>;

/// Symbols of the catalog, longest first so suffix matching is unambiguous.
pub const SYMBOLS: [&str; 13] = [
    "KiB", "MiB", "GiB", "TiB", "PiB", "EiB", "KB", "MB", "GB", "TB", "PB", "EB", "B",
];

/// Catalog symbol of a factor, if any.
pub const fn symbol(factor: Factor) -> Option<&'static str> {
    if !factor.is_integral() {
        return None;
    }
    match factor.num() {
        1 => Some("B"),
        1_000 => Some("KB"),
        1_000_000 => Some("MB"),
        1_000_000_000 => Some("GB"),
        1_000_000_000_000 => Some("TB"),
        1_000_000_000_000_000 => Some("PB"),
        1_000_000_000_000_000_000 => Some("EB"),
        1_024 => Some("KiB"),
        1_048_576 => Some("MiB"),
        1_073_741_824 => Some("GiB"),
        1_099_511_627_776 => Some("TiB"),
        1_125_899_906_842_624 => Some("PiB"),
        1_152_921_504_606_846_976 => Some("EiB"),
        _ => None,
    }
}

/// Factor named by a catalog symbol.
pub fn factor_of_symbol(symbol: &str) -> Option<Factor> {
    let num = match symbol {
        "B" => 1,
        "KB" => Kilo::NUM,
        "MB" => Mega::NUM,
        "GB" => Giga::NUM,
        "TB" => Tera::NUM,
        "PB" => Peta::NUM,
        "EB" => Exa::NUM,
        "KiB" => Kibi::NUM,
        "MiB" => Mebi::NUM,
        "GiB" => Gibi::NUM,
        "TiB" => Tebi::NUM,
        "PiB" => Pebi::NUM,
        "EiB" => Exbi::NUM,
        _ => return None,
    };
    Some(Factor::new(num, 1))
}

/// True when one `From` unit is a whole number of `To` units.
///
/// Harmonic pairs convert between integral representations without
/// truncation (kibibytes into bytes, terabytes into kibibytes).
#[inline]
pub const fn is_harmonic(to: Factor, from: Factor) -> bool {
    from.is_multiple_of(to)
}

// ============================================================================
// Common Scale Deduction
// ============================================================================

/// The finest scale both `Self` and `Rhs` are whole multiples of.
///
/// Mixed-scale arithmetic and comparison convert both operands into this
/// scale first. Equal scales map to themselves; every pair drawn from the
/// catalog (and from the `2^(3k)` byte scales that decimal/binary mixing
/// produces) has an explicit entry.
pub trait CommonScale<Rhs: Scale>: Scale {
    /// The common scale.
    type Output: Scale;
}

/// Shorthand for `<A as CommonScale<B>>::Output`.
pub type Common<A, B> = <A as CommonScale<B>>::Output;

impl<S: Scale> CommonScale<S> for S {
    type Output = S;
}

macro_rules! impl_common_scale {
    () => {};
    ($head:literal $(, $tail:literal)*) => {
        $(
            impl CommonScale<Ratio<$tail>> for Ratio<$head> {
                type Output = Ratio<{ gcd($head, $tail) }>;
            }

            impl CommonScale<Ratio<$head>> for Ratio<$tail> {
                type Output = Ratio<{ gcd($head, $tail) }>;
            }
        )*
        impl_common_scale!($($tail),*);
    };
}

impl_common_scale!(
    1,
    1_000,
    1_000_000,
    1_000_000_000,
    1_000_000_000_000,
    1_000_000_000_000_000,
    1_000_000_000_000_000_000,
    1_024,
    1_048_576,
    1_073_741_824,
    1_099_511_627_776,
    1_125_899_906_842_624,
    1_152_921_504_606_846_976,
    8,
    64,
    512,
    4_096,
    32_768,
    262_144
);
