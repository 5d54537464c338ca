// ============================================================================
// Scale Factor
// Reduced positive rationals relating a scale to the base unit (one byte)
// ============================================================================

/// Greatest common divisor, usable in const contexts.
#[inline]
pub const fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Least common multiple, usable in const contexts.
///
/// # Panics
/// If the result does not fit in `u64` (a compile error in const contexts).
#[inline]
pub const fn lcm(a: u64, b: u64) -> u64 {
    mul(a / gcd(a, b), b)
}

const fn mul(a: u64, b: u64) -> u64 {
    match a.checked_mul(b) {
        Some(product) => product,
        None => panic!("scale factor does not fit in u64"),
    }
}

/// A positive rational `num / den` kept in lowest terms.
///
/// One unit of a scale equals `num / den` bytes. Every operation here is a
/// `const fn`, so the factors relating two scales are computed while the
/// crate is compiled and never at run time.
///
/// # Example
/// ```
/// use digital_units::scale::Factor;
///
/// let kilo = Factor::new(1_000, 1);
/// let kibi = Factor::new(1_024, 1);
/// assert_eq!(kilo.divide(kibi), Factor::new(125, 128));
/// assert_eq!(kilo.common(kibi), Factor::new(8, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Factor {
    num: u64,
    den: u64,
}

impl Factor {
    /// The identity factor (one byte per unit).
    pub const ONE: Self = Self { num: 1, den: 1 };

    /// Create a factor, reducing it to lowest terms.
    ///
    /// # Panics
    /// If either side is zero.
    #[inline]
    pub const fn new(num: u64, den: u64) -> Self {
        assert!(num > 0 && den > 0, "scale factor must be positive");
        let g = gcd(num, den);
        Self {
            num: num / g,
            den: den / g,
        }
    }

    /// Create a factor that is required to already be in lowest terms.
    ///
    /// Used by [`Scale`](super::Scale) so that two spellings of the same
    /// ratio can never name two different scale types.
    ///
    /// # Panics
    /// If either side is zero or `gcd(num, den) != 1`.
    #[inline]
    pub const fn canonical(num: u64, den: u64) -> Self {
        assert!(num > 0 && den > 0, "scale factor must be positive");
        assert!(gcd(num, den) == 1, "scale factor must be in lowest terms");
        Self { num, den }
    }

    /// Numerator.
    #[inline]
    pub const fn num(self) -> u64 {
        self.num
    }

    /// Denominator.
    #[inline]
    pub const fn den(self) -> u64 {
        self.den
    }

    /// True for `1 / 1`.
    #[inline]
    pub const fn is_one(self) -> bool {
        self.num == 1 && self.den == 1
    }

    /// True when the denominator is one.
    #[inline]
    pub const fn is_integral(self) -> bool {
        self.den == 1
    }

    /// `self / rhs` in lowest terms.
    ///
    /// Both operands are cross-reduced before multiplying, so the products
    /// stay as small as the result allows (exbi over kilo never forms
    /// `2^60 * 1000`).
    #[inline]
    pub const fn divide(self, rhs: Self) -> Self {
        let g_num = gcd(self.num, rhs.num);
        let g_den = gcd(self.den, rhs.den);
        Self {
            num: mul(self.num / g_num, rhs.den / g_den),
            den: mul(self.den / g_den, rhs.num / g_num),
        }
    }

    /// The largest factor dividing both `self` and `rhs` evenly.
    ///
    /// `gcd` of the numerators over `lcm` of the denominators. The result is
    /// always in lowest terms and both operands are integer multiples of it.
    #[inline]
    pub const fn common(self, rhs: Self) -> Self {
        Self {
            num: gcd(self.num, rhs.num),
            den: lcm(self.den, rhs.den),
        }
    }

    /// True when `self` is an integer multiple of `unit`.
    #[inline]
    pub const fn is_multiple_of(self, unit: Self) -> bool {
        self.divide(unit).is_integral()
    }
}

impl Default for Factor {
    fn default() -> Self {
        Self::ONE
    }
}
