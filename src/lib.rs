// ============================================================================
// Digital Units Library
// Strongly-typed digital storage quantities with compile-time scale safety
// ============================================================================

//! # Digital Units
//!
//! Byte counts that carry their unit in the type.
//!
//! ## Features
//!
//! - **Zero overhead**: a quantity is exactly its raw value
//! - **Compile-time scales**: decimal (`KB`..`EB`) and binary (`KiB`..`EiB`)
//!   catalogs, plus any reduced ratio via `Ratio<NUM, DEN>`
//! - **Mixed arithmetic**: operands of different scales and representations
//!   meet in their common type, with C-style representation promotion
//! - **Checked literals**: `digital!(0x1000 B)`, `digital!(-4 KiB)`, range
//!   checked against the representation while compiling
//! - **Directed rounding**: `floor`, `ceil` and half-to-even `round`
//!
//! ## Example
//!
//! ```rust
//! use digital_units::prelude::*;
//!
//! // Literals default to an i64 representation
//! let cache = digital!(512 MiB);
//! let block = digital!(4 KiB);
//!
//! // Mixed scales compare and combine in their common scale
//! assert_eq!(cache, digital!(524_288 KiB));
//! assert!(digital!(1 KB) < digital!(1 KiB));
//! assert_eq!(cache / block, 131_072);
//!
//! // Lossless conversions are implicit-safe, lossy ones are explicit
//! let bytes = Bytes::from_quantity(block);
//! let decimal: Kilobytes = block.convert();
//! assert_eq!(bytes.raw(), 4_096);
//! assert_eq!(decimal.raw(), 4);
//!
//! // Rounding picks a direction instead of truncating
//! assert_eq!(round::<Kilobytes>(digital!(1_500 B)), digital!(2 KB));
//! assert_eq!(floor::<Kilobytes>(digital!(-999 B)), digital!(-1 KB));
//!
//! println!("cache: {}", cache);
//! ```

pub mod literal;
pub mod numeric;
pub mod quantity;
pub mod scale;

pub use numeric::{DigitalError, DigitalResult, Integral, Representation};
pub use quantity::{abs, ceil, convert, floor, round, Quantity, QuantityType};
pub use scale::{Ratio, Scale};

// ============================================================================
// Type Aliases for Common Use Cases
// ============================================================================

/// Bytes as `i64`
pub type Bytes = Quantity<i64, scale::Identity>;

/// 1000 bytes per unit, as `i64`
pub type Kilobytes = Quantity<i64, scale::Kilo>;
/// 1000^2 bytes per unit, as `i64`
pub type Megabytes = Quantity<i64, scale::Mega>;
/// 1000^3 bytes per unit, as `i64`
pub type Gigabytes = Quantity<i64, scale::Giga>;
/// 1000^4 bytes per unit, as `i64`
pub type Terabytes = Quantity<i64, scale::Tera>;
/// 1000^5 bytes per unit, as `i64`
pub type Petabytes = Quantity<i64, scale::Peta>;
/// 1000^6 bytes per unit, as `i64`
pub type Exabytes = Quantity<i64, scale::Exa>;

/// 1024 bytes per unit, as `i64`
pub type Kibibytes = Quantity<i64, scale::Kibi>;
/// 1024^2 bytes per unit, as `i64`
pub type Mebibytes = Quantity<i64, scale::Mebi>;
/// 1024^3 bytes per unit, as `i64`
pub type Gibibytes = Quantity<i64, scale::Gibi>;
/// 1024^4 bytes per unit, as `i64`
pub type Tebibytes = Quantity<i64, scale::Tebi>;
/// 1024^5 bytes per unit, as `i64`
pub type Pebibytes = Quantity<i64, scale::Pebi>;
/// 1024^6 bytes per unit, as `i64`
pub type Exbibytes = Quantity<i64, scale::Exbi>;

// Re-exports for convenience
pub mod prelude {
    pub use crate::numeric::{DigitalError, DigitalResult, Representation};
    pub use crate::quantity::{abs, ceil, convert, floor, round, Quantity, QuantityType};
    pub use crate::scale::{Ratio, Scale};
    pub use crate::{
        digital, Bytes, Exabytes, Exbibytes, Gibibytes, Gigabytes, Kibibytes, Kilobytes,
        Mebibytes, Megabytes, Pebibytes, Petabytes, Tebibytes, Terabytes,
    };
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use crate::scale::Mega;
    use proptest::prelude::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    // ========================================================================
    // Conversion tables
    // ========================================================================

    /// Converts 1 B, 2 KB, 4 MB, 8 GB, 1 TB, 1 PB, 1 EB, 2 KiB, 4 MiB, 8 GiB,
    /// 1 TiB, 1 PiB and 1 EiB into `$dest` and compares the raw counts.
    macro_rules! conversion_table {
        ($name:ident, $dest:ty, [$($expected:expr),* $(,)?]) => {
            #[test]
            fn $name() {
                let actual = [
                    convert::<$dest>(digital!(1 B)).raw(),
                    convert::<$dest>(digital!(2 KB)).raw(),
                    convert::<$dest>(digital!(4 MB)).raw(),
                    convert::<$dest>(digital!(8 GB)).raw(),
                    convert::<$dest>(digital!(1 TB)).raw(),
                    convert::<$dest>(digital!(1 PB)).raw(),
                    convert::<$dest>(digital!(1 EB)).raw(),
                    convert::<$dest>(digital!(2 KiB)).raw(),
                    convert::<$dest>(digital!(4 MiB)).raw(),
                    convert::<$dest>(digital!(8 GiB)).raw(),
                    convert::<$dest>(digital!(1 TiB)).raw(),
                    convert::<$dest>(digital!(1 PiB)).raw(),
                    convert::<$dest>(digital!(1 EiB)).raw(),
                ];
                assert_eq!(actual, [$($expected),*]);
            }
        };
    }

    conversion_table!(test_into_bytes, Bytes, [
        1,
        2_000,
        4_000_000,
        8_000_000_000,
        1_000_000_000_000,
        1_000_000_000_000_000,
        1_000_000_000_000_000_000,
        2_048,
        4_194_304,
        8_589_934_592,
        1_099_511_627_776,
        1_125_899_906_842_624,
        1_152_921_504_606_846_976,
    ]);

    conversion_table!(test_into_kilobytes, Kilobytes, [
        0,
        2,
        4_000,
        8_000_000,
        1_000_000_000,
        1_000_000_000_000,
        1_000_000_000_000_000,
        2,
        4_194,
        8_589_934,
        1_099_511_627,
        1_125_899_906_842,
        1_152_921_504_606_846,
    ]);

    conversion_table!(test_into_megabytes, Megabytes, [
        0,
        0,
        4,
        8_000,
        1_000_000,
        1_000_000_000,
        1_000_000_000_000,
        0,
        4,
        8_589,
        1_099_511,
        1_125_899_906,
        1_152_921_504_606,
    ]);

    conversion_table!(test_into_gigabytes, Gigabytes, [
        0,
        0,
        0,
        8,
        1_000,
        1_000_000,
        1_000_000_000,
        0,
        0,
        8,
        1_099,
        1_125_899,
        1_152_921_504,
    ]);

    conversion_table!(test_into_terabytes, Terabytes, [
        0, 0, 0, 0, 1, 1_000, 1_000_000, 0, 0, 0, 1, 1_125, 1_152_921,
    ]);

    conversion_table!(test_into_petabytes, Petabytes, [
        0, 0, 0, 0, 0, 1, 1_000, 0, 0, 0, 0, 1, 1_152,
    ]);

    conversion_table!(test_into_exabytes, Exabytes, [
        0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1,
    ]);

    conversion_table!(test_into_kibibytes, Kibibytes, [
        0,
        1,
        3_906,
        7_812_500,
        976_562_500,
        976_562_500_000,
        976_562_500_000_000,
        2,
        4_096,
        8_388_608,
        1_073_741_824,
        1_099_511_627_776,
        1_125_899_906_842_624,
    ]);

    conversion_table!(test_into_mebibytes, Mebibytes, [
        0,
        0,
        3,
        7_629,
        953_674,
        953_674_316,
        953_674_316_406,
        0,
        4,
        8_192,
        1_048_576,
        1_073_741_824,
        1_099_511_627_776,
    ]);

    conversion_table!(test_into_gibibytes, Gibibytes, [
        0,
        0,
        0,
        7,
        931,
        931_322,
        931_322_574,
        0,
        0,
        8,
        1_024,
        1_048_576,
        1_073_741_824,
    ]);

    conversion_table!(test_into_tebibytes, Tebibytes, [
        0, 0, 0, 0, 0, 909, 909_494, 0, 0, 0, 1, 1_024, 1_048_576,
    ]);

    conversion_table!(test_into_pebibytes, Pebibytes, [
        0, 0, 0, 0, 0, 0, 888, 0, 0, 0, 0, 1, 1_024,
    ]);

    conversion_table!(test_into_exbibytes, Exbibytes, [
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1,
    ]);

    #[test]
    fn test_fractional_conversions() {
        use crate::scale::{Kibi, Kilo, Mebi};

        let close = |actual: f32, expected: f32| (actual - expected).abs() < 1e-6;
        assert!(close(convert::<Quantity<f32, Kibi>>(digital!(1 KiB)).raw(), 1.0));
        assert!(close(convert::<Quantity<f32, Kibi>>(Quantity::<f64, Kibi>::new(1.0)).raw(), 1.0));
        assert!(close(convert::<Quantity<f32, Kilo>>(digital!(1 KiB)).raw(), 1.024));
        assert!(close(convert::<Quantity<f32, Kibi>>(digital!(1 KB)).raw(), 0.976_562_5));
        assert!(close(convert::<Quantity<f32, Mebi>>(digital!(1 KiB)).raw(), 0.000_976_562_5));
        assert!(close(convert::<Quantity<f32, Kibi>>(digital!(1 MiB)).raw(), 1_024.0));
    }

    // ========================================================================
    // Literals
    // ========================================================================

    #[test]
    fn test_non_decimal_bases() {
        assert_eq!(digital!(0x123456789abcdef B), digital!(81_985_529_216_486_895 B));
        assert_eq!(digital!(0644 B), digital!(420 B));
        assert_eq!(digital!(-0755 B), digital!(-493 B));
        assert_eq!(digital!(-010000 B), digital!(-4 KiB));
    }

    // ========================================================================
    // Stepping
    // ========================================================================

    #[test]
    fn test_increment_after_assignment_steps_bytes() {
        let mut value: Bytes = digital!(512 B);
        assert_eq!(value.increment(), digital!(513 B));

        // 1 KiB becomes 1024 bytes, so one step is one byte
        value = Bytes::from_quantity(digital!(1 KiB));
        let old = value.fetch_increment();
        assert_eq!(old, digital!(1 KiB));
        assert_eq!(value, digital!(1025 B));

        value = Bytes::from_quantity(digital!(1 KiB));
        assert_eq!(value.decrement(), digital!(1023 B));
    }

    #[test]
    fn test_increment_at_kibi_scale_steps_kibibytes() {
        let mut value: Kibibytes = digital!(1 KiB);
        let old = value.fetch_increment();
        assert_eq!(old, digital!(1 KiB));
        assert_eq!(value, digital!(2 KiB));
        assert_eq!(value, digital!(2048 B));

        let mut value: Kibibytes = digital!(2 KiB);
        assert_eq!(value.fetch_decrement(), digital!(2 KiB));
        assert_eq!(value, digital!(1 KiB));
    }

    // ========================================================================
    // Bounds and hashing
    // ========================================================================

    #[test]
    fn test_zero_min_max() {
        assert_eq!(Tebibytes::zero(), digital!(0 TiB));
        assert_eq!(Tebibytes::min_value(), Tebibytes::new(i64::MIN));
        assert_eq!(Tebibytes::max_value(), Tebibytes::new(i64::MAX));

        type MegabytesF = Quantity<f64, Mega>;
        assert_eq!(MegabytesF::zero(), digital!(0.0 MiB as f64));
        assert_eq!(MegabytesF::min_value().raw(), f64::MIN);
        assert_eq!(MegabytesF::max_value().raw(), f64::MAX);
    }

    #[test]
    fn test_hash_follows_raw_value() {
        fn hash_of<T: Hash>(value: &T) -> u64 {
            let mut hasher = DefaultHasher::new();
            value.hash(&mut hasher);
            hasher.finish()
        }

        assert_eq!(hash_of(&digital!(1 KiB)), hash_of(&1i64));
        assert_eq!(digital!(1 KiB), digital!(1024 B));
        assert_ne!(hash_of(&digital!(1 KiB)), hash_of(&digital!(1024 B)));
    }

    #[test]
    fn test_thread_safety() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Bytes>();
        assert_send_sync::<Quantity<f32, Ratio<1, 8>>>();
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_as_raw_value() {
        let json = serde_json::to_string(&digital!(4 KiB)).unwrap();
        assert_eq!(json, "4");
        let back: Kibibytes = serde_json::from_str(&json).unwrap();
        assert_eq!(back, digital!(4 KiB));

        let float: Quantity<f64, Mega> = serde_json::from_str("1.5").unwrap();
        assert_eq!(float, digital!(1500 KB));
    }

    // ========================================================================
    // Properties
    // ========================================================================

    proptest! {
        #[test]
        fn prop_round_trip_through_bytes(v in -1_000_000_000i64..1_000_000_000) {
            let kib = Kibibytes::new(v);
            prop_assert_eq!(convert::<Kibibytes>(convert::<Bytes>(kib)), kib);
            let tb = Terabytes::new(v % 1_000_000);
            prop_assert_eq!(convert::<Terabytes>(convert::<Bytes>(tb)), tb);
        }

        #[test]
        fn prop_round_trip_extreme_scales(v in -7i64..=7) {
            let eib = Exbibytes::new(v);
            prop_assert_eq!(convert::<Exbibytes>(convert::<Bytes>(eib)), eib);
            let eb = Exabytes::new(v);
            prop_assert_eq!(convert::<Exabytes>(convert::<Kilobytes>(eb)), eb);
        }

        #[test]
        fn prop_addition_commutes(a in any::<i32>(), b in any::<i32>()) {
            let (a, b) = (Megabytes::new(a as i64), Kibibytes::new(b as i64));
            prop_assert_eq!(a + b, b + a);
            prop_assert_eq!(a + a, a * 2);
        }

        #[test]
        fn prop_trichotomy(a in any::<i32>(), b in any::<i32>()) {
            let (a, b) = (Gibibytes::new(a as i64), Gigabytes::new(b as i64));
            let holds = [a < b, a == b, a > b].iter().filter(|&&x| x).count();
            prop_assert_eq!(holds, 1);
        }

        #[test]
        fn prop_lossless_matches_convert(v in any::<i32>()) {
            let tib = Tebibytes::new(v as i64);
            prop_assert_eq!(Kibibytes::from_quantity(tib), convert::<Kibibytes>(tib));
        }
    }
}
