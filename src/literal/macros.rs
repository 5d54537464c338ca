// ============================================================================
// Quantity Literals
// The `digital!` macro and its unit-symbol table
// ============================================================================

/// Build a quantity from a literal and a unit symbol.
///
/// The representation defaults to `i64`; `as <type>` selects another one.
/// Integer literals accept `0x`, `0b`, `0o` and bare-`0` octal prefixes plus
/// `_`/`'` separators, and are range-checked against the representation at
/// compile time. Floating representations (`as f32`, `as f64`) also take
/// floating literals.
///
/// ```
/// use digital_units::{digital, Bytes, Kibibytes};
///
/// const PAGE: Kibibytes = digital!(4 KiB);
/// assert_eq!(PAGE.raw(), 4);
///
/// let mode: Bytes = digital!(0644 B);
/// assert_eq!(mode.raw(), 420);
/// assert_eq!(digital!(-010000 B), digital!(-4 KiB));
///
/// let half = digital!(0.5 KiB as f64);
/// assert_eq!(half, digital!(512 B));
///
/// let small = digital!(200 MB as u8);
/// assert_eq!(small.raw(), 200u8);
/// ```
///
/// Values outside the representation fail to build:
///
/// ```compile_fail
/// use digital_units::digital;
///
/// let too_big = digital!(256 B as u8);
/// ```
///
/// Floating literals need a floating representation:
///
/// ```compile_fail
/// use digital_units::digital;
///
/// let fractional = digital!(1.5 KiB);
/// ```
#[macro_export]
macro_rules! digital {
    (- $lit:literal $unit:ident as f32) => {
        $crate::__digital_float!([-] $lit, f32, $unit)
    };
    (- $lit:literal $unit:ident as f64) => {
        $crate::__digital_float!([-] $lit, f64, $unit)
    };
    (- $lit:literal $unit:ident as $rep:ty) => {
        $crate::__digital_integer!([-] $lit, $rep, $unit)
    };
    (- $lit:literal $unit:ident) => {
        $crate::__digital_integer!([-] $lit, i64, $unit)
    };
    ($lit:literal $unit:ident as f32) => {
        $crate::__digital_float!([] $lit, f32, $unit)
    };
    ($lit:literal $unit:ident as f64) => {
        $crate::__digital_float!([] $lit, f64, $unit)
    };
    ($lit:literal $unit:ident as $rep:ty) => {
        $crate::__digital_integer!([] $lit, $rep, $unit)
    };
    ($lit:literal $unit:ident) => {
        $crate::__digital_integer!([] $lit, i64, $unit)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __digital_integer {
    ([$($sign:tt)?] $lit:literal, $rep:ty, $unit:ident) => {{
        const VALUE: u64 = $crate::literal::integer::<$rep>(::core::stringify!($lit));
        $crate::Quantity::<$rep, $crate::__digital_scale!($unit)>::new($($sign)?(VALUE as $rep))
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __digital_float {
    ([$($sign:tt)?] $lit:literal, $rep:ty, $unit:ident) => {{
        // Only the branch matching the literal's kind is evaluated
        #[allow(overflowing_literals, clippy::unnecessary_cast)]
        const VALUE: $rep = if $crate::literal::is_floating(::core::stringify!($lit)) {
            $lit as $rep
        } else {
            $crate::literal::integer::<$rep>(::core::stringify!($lit)) as $rep
        };
        $crate::Quantity::<$rep, $crate::__digital_scale!($unit)>::new($($sign)?VALUE)
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __digital_scale {
    (B) => { $crate::scale::Identity };
    (KB) => { $crate::scale::Kilo };
    (MB) => { $crate::scale::Mega };
    (GB) => { $crate::scale::Giga };
    (TB) => { $crate::scale::Tera };
    (PB) => { $crate::scale::Peta };
    (EB) => { $crate::scale::Exa };
    (KiB) => { $crate::scale::Kibi };
    (MiB) => { $crate::scale::Mebi };
    (GiB) => { $crate::scale::Gibi };
    (TiB) => { $crate::scale::Tebi };
    (PiB) => { $crate::scale::Pebi };
    (EiB) => { $crate::scale::Exbi };
}

#[cfg(test)]
mod tests {
    use crate::scale::{Exbi, Identity, Kibi, Mega};
    use crate::Quantity;

    #[test]
    fn test_integer_literals() {
        let q = digital!(42 MB);
        assert_eq!(q, Quantity::<i64, Mega>::new(42));
        assert_eq!(digital!(0 B).raw(), 0);
        assert_eq!(digital!(1_000 B).raw(), 1_000);
        assert_eq!(digital!(0x123456789abcdef B).raw(), 81_985_529_216_486_895);
        assert_eq!(digital!(0b1000_0000 B as u8).raw(), 128);
        assert_eq!(digital!(0644 B).raw(), 420);
    }

    #[test]
    fn test_negative_literals() {
        assert_eq!(digital!(-0755 B).raw(), -493);
        assert_eq!(digital!(-1 EiB), Quantity::<i64, Exbi>::new(-1));
        assert_eq!(digital!(-42 KiB as i16).raw(), -42i16);
    }

    #[test]
    fn test_float_literals() {
        assert_eq!(digital!(1.5 KiB as f64).raw(), 1.5);
        assert_eq!(digital!(-0.25 B as f32).raw(), -0.25f32);
        assert_eq!(digital!(2 KiB as f64).raw(), 2.0);
        assert_eq!(digital!(0x10 B as f64).raw(), 16.0);
        assert_eq!(digital!(1e3 B as f64).raw(), 1000.0);
    }

    #[test]
    fn test_representation_selection() {
        let q: Quantity<u32, Kibi> = digital!(4 KiB as u32);
        assert_eq!(q.raw(), 4u32);
        let max: Quantity<u64, Identity> = digital!(18446744073709551615 B as u64);
        assert_eq!(max.raw(), u64::MAX);
    }

    #[test]
    fn test_const_context() {
        const LIMIT: Quantity<i64, Kibi> = digital!(64 KiB);
        const HALF: Quantity<f64, Kibi> = digital!(0.5 KiB as f64);
        assert_eq!(LIMIT.raw(), 64);
        assert_eq!(HALF.raw(), 0.5);
    }
}
