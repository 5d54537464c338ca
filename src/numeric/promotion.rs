// ============================================================================
// Representation Promotion
// The representation two operands are combined in
// ============================================================================

use super::representation::Representation;

/// Usual arithmetic conversion of two representations.
///
/// Follows the C rules the byte-count literature assumes:
/// - types narrower than 32 bits promote to `i32` when mixed
/// - signed with signed (or unsigned with unsigned) picks the wider
/// - signed with unsigned of equal or greater rank picks the unsigned
/// - any float dominates any integer, `f64` dominates `f32`
///
/// `isize` and `usize` only combine with themselves.
pub trait Promote<Rhs: Representation>: Representation {
    /// The promoted representation.
    type Output: Representation;
}

/// Shorthand for `<A as Promote<B>>::Output`.
pub type Promoted<A, B> = <A as Promote<B>>::Output;

impl<R: Representation> Promote<R> for R {
    type Output = R;
}

macro_rules! promote {
    ($($a:ty, $b:ty => $out:ty;)*) => {
        $(
            impl Promote<$b> for $a {
                type Output = $out;
            }

            impl Promote<$a> for $b {
                type Output = $out;
            }
        )*
    };
}

promote! {
    i8, i16 => i32;
    i8, i32 => i32;
    i8, i64 => i64;
    i8, u8 => i32;
    i8, u16 => i32;
    i8, u32 => u32;
    i8, u64 => u64;
    i8, f32 => f32;
    i8, f64 => f64;

    i16, i32 => i32;
    i16, i64 => i64;
    i16, u8 => i32;
    i16, u16 => i32;
    i16, u32 => u32;
    i16, u64 => u64;
    i16, f32 => f32;
    i16, f64 => f64;

    i32, i64 => i64;
    i32, u8 => i32;
    i32, u16 => i32;
    i32, u32 => u32;
    i32, u64 => u64;
    i32, f32 => f32;
    i32, f64 => f64;

    i64, u8 => i64;
    i64, u16 => i64;
    i64, u32 => i64;
    i64, u64 => u64;
    i64, f32 => f32;
    i64, f64 => f64;

    u8, u16 => i32;
    u8, u32 => u32;
    u8, u64 => u64;
    u8, f32 => f32;
    u8, f64 => f64;

    u16, u32 => u32;
    u16, u64 => u64;
    u16, f32 => f32;
    u16, f64 => f64;

    u32, u64 => u64;
    u32, f32 => f32;
    u32, f64 => f64;

    u64, f32 => f32;
    u64, f64 => f64;

    f32, f64 => f64;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::any::TypeId;

    fn promotes_to<A: Promote<B>, B: Representation, Out: 'static>() -> bool {
        TypeId::of::<Promoted<A, B>>() == TypeId::of::<Out>()
    }

    #[test]
    fn test_same_type() {
        assert!(promotes_to::<i8, i8, i8>());
        assert!(promotes_to::<usize, usize, usize>());
        assert!(promotes_to::<f32, f32, f32>());
    }

    #[test]
    fn test_integer_promotion() {
        assert!(promotes_to::<i8, u8, i32>());
        assert!(promotes_to::<u16, u8, i32>());
        assert!(promotes_to::<i16, i64, i64>());
        assert!(promotes_to::<u32, u64, u64>());
    }

    #[test]
    fn test_signed_unsigned() {
        assert!(promotes_to::<i64, u64, u64>());
        assert!(promotes_to::<u64, i64, u64>());
        assert!(promotes_to::<i64, u32, i64>());
        assert!(promotes_to::<i32, u32, u32>());
    }

    #[test]
    fn test_float_dominates() {
        assert!(promotes_to::<u64, f32, f32>());
        assert!(promotes_to::<f32, i64, f32>());
        assert!(promotes_to::<f32, f64, f64>());
        assert!(promotes_to::<i64, f64, f64>());
    }
}
