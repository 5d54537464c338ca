// ============================================================================
// Quantity Operators
// Arithmetic and comparison across scales and representations
// ============================================================================
//
// Mixed operands meet in their common type: the representation given by
// `Promote` and the scale given by `CommonScale`. Compound assignment only
// accepts the exact same type, so a lossy conversion is always spelled out.
// Overflow and division by zero behave like the underlying scalar.

use super::conversion::cast;
use super::value::Quantity;
use crate::numeric::{Integral, Promote, Promoted, Representation};
use crate::scale::{Common, CommonScale, Scale};
use std::cmp::Ordering;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};

/// The type two quantities combine into.
pub type CommonQuantity<R1, S1, R2, S2> = Quantity<Promoted<R1, R2>, Common<S1, S2>>;

/// Both operands as raw counts of their common type.
#[inline]
fn to_common<R1, S1, R2, S2>(
    lhs: Quantity<R1, S1>,
    rhs: Quantity<R2, S2>,
) -> (Promoted<R1, R2>, Promoted<R1, R2>)
where
    R1: Promote<R2>,
    R2: Representation,
    S1: CommonScale<S2>,
    S2: Scale,
{
    let lhs: CommonQuantity<R1, S1, R2, S2> = lhs.convert();
    let rhs: CommonQuantity<R1, S1, R2, S2> = rhs.convert();
    (lhs.raw(), rhs.raw())
}

// ============================================================================
// Unary
// ============================================================================

impl<R: Representation + Neg<Output = R>, S: Scale> Neg for Quantity<R, S> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self::new(-self.raw())
    }
}

// ============================================================================
// Compound Assignment
// ============================================================================

impl<R: Representation, S: Scale> AddAssign for Quantity<R, S> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = Self::new(self.raw() + rhs.raw());
    }
}

impl<R: Representation, S: Scale> SubAssign for Quantity<R, S> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = Self::new(self.raw() - rhs.raw());
    }
}

impl<R: Representation, S: Scale> MulAssign<R> for Quantity<R, S> {
    #[inline]
    fn mul_assign(&mut self, rhs: R) {
        *self = Self::new(self.raw() * rhs);
    }
}

impl<R: Representation, S: Scale> DivAssign<R> for Quantity<R, S> {
    #[inline]
    fn div_assign(&mut self, rhs: R) {
        *self = Self::new(self.raw() / rhs);
    }
}

impl<R: Integral, S: Scale> RemAssign<R> for Quantity<R, S> {
    #[inline]
    fn rem_assign(&mut self, rhs: R) {
        *self = Self::new(self.raw() % rhs);
    }
}

impl<R: Integral, S: Scale> RemAssign for Quantity<R, S> {
    #[inline]
    fn rem_assign(&mut self, rhs: Self) {
        *self = Self::new(self.raw() % rhs.raw());
    }
}

// ============================================================================
// Quantity with Quantity
// ============================================================================

impl<R1, S1, R2, S2> Add<Quantity<R2, S2>> for Quantity<R1, S1>
where
    R1: Promote<R2>,
    R2: Representation,
    S1: CommonScale<S2>,
    S2: Scale,
{
    type Output = CommonQuantity<R1, S1, R2, S2>;

    #[inline]
    fn add(self, rhs: Quantity<R2, S2>) -> Self::Output {
        let (lhs, rhs) = to_common(self, rhs);
        Quantity::new(lhs + rhs)
    }
}

impl<R1, S1, R2, S2> Sub<Quantity<R2, S2>> for Quantity<R1, S1>
where
    R1: Promote<R2>,
    R2: Representation,
    S1: CommonScale<S2>,
    S2: Scale,
{
    type Output = CommonQuantity<R1, S1, R2, S2>;

    #[inline]
    fn sub(self, rhs: Quantity<R2, S2>) -> Self::Output {
        let (lhs, rhs) = to_common(self, rhs);
        Quantity::new(lhs - rhs)
    }
}

/// Ratio of two quantities: a plain number, not a quantity.
impl<R1, S1, R2, S2> Div<Quantity<R2, S2>> for Quantity<R1, S1>
where
    R1: Promote<R2>,
    R2: Representation,
    S1: CommonScale<S2>,
    S2: Scale,
{
    type Output = Promoted<R1, R2>;

    #[inline]
    fn div(self, rhs: Quantity<R2, S2>) -> Self::Output {
        let (lhs, rhs) = to_common(self, rhs);
        lhs / rhs
    }
}

impl<R1, S1, R2, S2> Rem<Quantity<R2, S2>> for Quantity<R1, S1>
where
    R1: Promote<R2>,
    R2: Representation,
    S1: CommonScale<S2>,
    S2: Scale,
    Promoted<R1, R2>: Integral,
{
    type Output = CommonQuantity<R1, S1, R2, S2>;

    #[inline]
    fn rem(self, rhs: Quantity<R2, S2>) -> Self::Output {
        let (lhs, rhs) = to_common(self, rhs);
        Quantity::new(lhs % rhs)
    }
}

// ============================================================================
// Quantity with Scalar
// ============================================================================

impl<R, S, T> Mul<T> for Quantity<R, S>
where
    R: Promote<T>,
    T: Representation,
    S: Scale,
{
    type Output = Quantity<Promoted<R, T>, S>;

    #[inline]
    fn mul(self, rhs: T) -> Self::Output {
        Quantity::new(cast::<R, Promoted<R, T>>(self.raw()) * cast(rhs))
    }
}

impl<R, S, T> Div<T> for Quantity<R, S>
where
    R: Promote<T>,
    T: Representation,
    S: Scale,
{
    type Output = Quantity<Promoted<R, T>, S>;

    #[inline]
    fn div(self, rhs: T) -> Self::Output {
        Quantity::new(cast::<R, Promoted<R, T>>(self.raw()) / cast(rhs))
    }
}

impl<R, S, T> Rem<T> for Quantity<R, S>
where
    R: Promote<T>,
    T: Integral,
    S: Scale,
    Promoted<R, T>: Integral,
{
    type Output = Quantity<Promoted<R, T>, S>;

    #[inline]
    fn rem(self, rhs: T) -> Self::Output {
        Quantity::new(cast::<R, Promoted<R, T>>(self.raw()) % cast(rhs))
    }
}

macro_rules! impl_scalar_mul {
    ($($t:ty),*) => {
        $(
            impl<R: Representation, S: Scale> Mul<Quantity<R, S>> for $t
            where
                $t: Promote<R>,
            {
                type Output = Quantity<Promoted<$t, R>, S>;

                #[inline]
                fn mul(self, rhs: Quantity<R, S>) -> Self::Output {
                    Quantity::new(cast::<$t, Promoted<$t, R>>(self) * cast(rhs.raw()))
                }
            }
        )*
    };
}

impl_scalar_mul!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

// ============================================================================
// Comparison
// ============================================================================

impl<R1, S1, R2, S2> PartialEq<Quantity<R2, S2>> for Quantity<R1, S1>
where
    R1: Promote<R2>,
    R2: Representation,
    S1: CommonScale<S2>,
    S2: Scale,
{
    #[inline]
    fn eq(&self, other: &Quantity<R2, S2>) -> bool {
        let (lhs, rhs) = to_common(*self, *other);
        lhs == rhs
    }
}

impl<R1, S1, R2, S2> PartialOrd<Quantity<R2, S2>> for Quantity<R1, S1>
where
    R1: Promote<R2>,
    R2: Representation,
    S1: CommonScale<S2>,
    S2: Scale,
{
    #[inline]
    fn partial_cmp(&self, other: &Quantity<R2, S2>) -> Option<Ordering> {
        let (lhs, rhs) = to_common(*self, *other);
        lhs.partial_cmp(&rhs)
    }
}
