//! Exact positive rationals used as unit scales.
//!
//! Every [`Unit`](crate::Unit) carries its scale relative to the canonical unit of its dimension as a [`Ratio`].
//! All operations are `const fn`, so scales of composite units are folded by the compiler. Arithmetic that does
//! not fit in 128 bits panics; inside const evaluation that panic is a compile-time error.
//!
//! ```rust
//! use dimen_core::Ratio;
//!
//! const KILO: Ratio = Ratio::integer(1000);
//! const HECTO: Ratio = Ratio::integer(100);
//! assert_eq!(HECTO.div(KILO), Ratio::new(1, 10));
//! assert_eq!(KILO.mul(HECTO).numer(), 100_000);
//! ```

use core::cmp::Ordering;
use core::fmt;

/// A positive rational number `num / den`, always stored in lowest terms.
///
/// Because the representation is canonical, structural equality is value equality.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ratio {
    num: u128,
    den: u128,
}

/// Compares `a / b` with `c / d` (`b` and `d` nonzero) without multiplying.
///
/// Compares integer parts, then recurses on the reciprocals of the remainders (a continued-fraction walk).
pub(crate) const fn compare_fractions(mut a: u128, mut b: u128, mut c: u128, mut d: u128) -> Ordering {
    // Flips each time we move to the reciprocals.
    let mut flipped = false;
    loop {
        let (q1, q2) = (a / b, c / d);
        if q1 != q2 {
            let less = q1 < q2;
            return if less != flipped {
                Ordering::Less
            } else {
                Ordering::Greater
            };
        }
        let (r1, r2) = (a % b, c % d);
        match (r1 == 0, r2 == 0) {
            (true, true) => return Ordering::Equal,
            (true, false) => {
                return if flipped {
                    Ordering::Greater
                } else {
                    Ordering::Less
                }
            }
            (false, true) => {
                return if flipped {
                    Ordering::Less
                } else {
                    Ordering::Greater
                }
            }
            (false, false) => {
                (a, b, c, d) = (b, r1, d, r2);
                flipped = !flipped;
            }
        }
    }
}

const fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

impl Ratio {
    /// The neutral scale `1/1`.
    pub const ONE: Self = Self { num: 1, den: 1 };

    /// Creates a reduced ratio.
    ///
    /// # Panics
    ///
    /// Panics (at compile time when used in a const) if either term is zero.
    ///
    /// ```rust
    /// use dimen_core::Ratio;
    /// let r = Ratio::new(250, 1000);
    /// assert_eq!((r.numer(), r.denom()), (1, 4));
    /// ```
    pub const fn new(num: u128, den: u128) -> Self {
        assert!(num != 0 && den != 0, "unit scale must be a positive rational");
        let g = gcd(num, den);
        Self {
            num: num / g,
            den: den / g,
        }
    }

    /// Creates the ratio `n / 1`.
    pub const fn integer(n: u128) -> Self {
        Self::new(n, 1)
    }

    /// Numerator in lowest terms.
    #[inline]
    pub const fn numer(self) -> u128 {
        self.num
    }

    /// Denominator in lowest terms.
    #[inline]
    pub const fn denom(self) -> u128 {
        self.den
    }

    /// `true` when the denominator is 1.
    #[inline]
    pub const fn is_integer(self) -> bool {
        self.den == 1
    }

    /// `true` for the neutral scale.
    #[inline]
    pub const fn is_one(self) -> bool {
        self.num == 1 && self.den == 1
    }

    /// The reciprocal `den / num`.
    #[inline]
    pub const fn recip(self) -> Self {
        Self {
            num: self.den,
            den: self.num,
        }
    }

    /// Exact product, or `None` if a term overflows.
    ///
    /// Terms are cross-reduced first, so the result is already in lowest terms and intermediate values stay as
    /// small as possible.
    pub const fn checked_mul(self, rhs: Self) -> Option<Self> {
        let g1 = gcd(self.num, rhs.den);
        let g2 = gcd(rhs.num, self.den);
        let num = match (self.num / g1).checked_mul(rhs.num / g2) {
            Some(v) => v,
            None => return None,
        };
        let den = match (self.den / g2).checked_mul(rhs.den / g1) {
            Some(v) => v,
            None => return None,
        };
        Some(Self { num, den })
    }

    /// Exact quotient, or `None` if a term overflows.
    #[inline]
    pub const fn checked_div(self, rhs: Self) -> Option<Self> {
        self.checked_mul(rhs.recip())
    }

    /// Exact integer power (negative exponents invert), or `None` on overflow.
    ///
    /// Squares repeatedly, so the cost is logarithmic in `exp`. A square is only taken when a later bit of the
    /// exponent still needs it, hence it never overflows unless the result does.
    pub const fn checked_pow(self, exp: i32) -> Option<Self> {
        let mut base = if exp < 0 { self.recip() } else { self };
        let mut n = exp.unsigned_abs();
        let mut acc = Self::ONE;
        while n > 0 {
            if n & 1 == 1 {
                acc = match acc.checked_mul(base) {
                    Some(v) => v,
                    None => return None,
                };
            }
            n >>= 1;
            if n > 0 {
                base = match base.checked_mul(base) {
                    Some(v) => v,
                    None => return None,
                };
            }
        }
        Some(acc)
    }

    /// Exact product.
    ///
    /// # Panics
    ///
    /// Panics with `scale overflow` when a term does not fit in `u128`.
    pub const fn mul(self, rhs: Self) -> Self {
        match self.checked_mul(rhs) {
            Some(v) => v,
            None => panic!("scale overflow: unit scale does not fit in 128 bits"),
        }
    }

    /// Exact quotient.
    ///
    /// # Panics
    ///
    /// Panics with `scale overflow` when a term does not fit in `u128`.
    #[inline]
    pub const fn div(self, rhs: Self) -> Self {
        self.mul(rhs.recip())
    }

    /// Exact integer power.
    ///
    /// ```rust
    /// use dimen_core::Ratio;
    /// assert_eq!(Ratio::integer(10).pow(-3), Ratio::new(1, 1000));
    /// ```
    ///
    /// # Panics
    ///
    /// Panics with `scale overflow` when a term does not fit in `u128`.
    pub const fn pow(self, exp: i32) -> Self {
        match self.checked_pow(exp) {
            Some(v) => v,
            None => panic!("scale overflow: unit scale does not fit in 128 bits"),
        }
    }

    /// Total order without overflow.
    #[inline]
    pub const fn compare(self, rhs: Self) -> Ordering {
        compare_fractions(self.num, self.den, rhs.num, rhs.den)
    }

    /// Nearest `f64` to this ratio.
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.num as f64 / self.den as f64
    }
}

impl PartialOrd for Ratio {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ratio {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(*other)
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ─────────────────────────────────────────────────────────────────────────────
    // Construction and reduction
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn new_reduces_to_lowest_terms() {
        let r = Ratio::new(1000, 100);
        assert_eq!(r.numer(), 10);
        assert_eq!(r.denom(), 1);
        assert!(r.is_integer());
    }

    #[test]
    fn equal_values_compare_equal_structurally() {
        assert_eq!(Ratio::new(2, 4), Ratio::new(1, 2));
        assert_ne!(Ratio::new(1, 3), Ratio::new(1, 2));
    }

    #[test]
    #[should_panic(expected = "positive rational")]
    fn zero_numerator_is_rejected() {
        let _ = Ratio::new(0, 1);
    }

    #[test]
    #[should_panic(expected = "positive rational")]
    fn zero_denominator_is_rejected() {
        let _ = Ratio::new(1, 0);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Arithmetic
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn mul_and_div() {
        let kilo = Ratio::integer(1000);
        let hecto = Ratio::integer(100);
        assert_eq!(kilo.mul(hecto), Ratio::integer(100_000));
        assert_eq!(hecto.div(kilo), Ratio::new(1, 10));
        assert_eq!(kilo.div(hecto), Ratio::integer(10));
    }

    #[test]
    fn mul_cross_reduces_before_overflowing() {
        // 10^30 * 10^-30 would overflow if multiplied naively.
        let big = Ratio::integer(10u128.pow(30));
        let small = Ratio::new(1, 10u128.pow(30));
        assert_eq!(big.mul(small), Ratio::ONE);
    }

    #[test]
    #[should_panic(expected = "scale overflow")]
    fn mul_overflow_panics() {
        let big = Ratio::integer(10u128.pow(30));
        let _ = big.mul(big);
    }

    #[test]
    fn pow_with_huge_exponent_is_fast() {
        assert_eq!(Ratio::ONE.checked_pow(i32::MAX), Some(Ratio::ONE));
        assert_eq!(Ratio::ONE.checked_pow(i32::MIN), Some(Ratio::ONE));
        assert_eq!(Ratio::integer(2).checked_pow(i32::MAX), None);
        assert_eq!(Ratio::integer(2).checked_pow(127), Some(Ratio::integer(1 << 127)));
        assert_eq!(Ratio::integer(2).checked_pow(128), None);
        assert_eq!(Ratio::new(1, 3).checked_pow(-4), Some(Ratio::integer(81)));
    }

    #[test]
    fn checked_mul_reports_overflow() {
        let big = Ratio::integer(10u128.pow(30));
        assert_eq!(big.checked_mul(big), None);
        assert_eq!(big.checked_pow(2), None);
    }

    #[test]
    fn pow_handles_negative_and_zero_exponents() {
        let ten = Ratio::integer(10);
        assert_eq!(ten.pow(0), Ratio::ONE);
        assert_eq!(ten.pow(3), Ratio::integer(1000));
        assert_eq!(ten.pow(-2), Ratio::new(1, 100));
        assert_eq!(Ratio::new(2, 3).pow(2), Ratio::new(4, 9));
    }

    #[test]
    fn const_evaluation() {
        const SCALE: Ratio = Ratio::integer(1000).mul(Ratio::integer(100));
        assert_eq!(SCALE.numer(), 100_000);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Ordering
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn ordering_of_simple_values() {
        assert!(Ratio::new(1, 10) < Ratio::ONE);
        assert!(Ratio::integer(1000) > Ratio::integer(100));
        assert!(Ratio::new(2, 3) > Ratio::new(3, 5));
        assert!(Ratio::new(7, 3) < Ratio::new(5, 2));
        assert_eq!(Ratio::new(3, 9).cmp(&Ratio::new(1, 3)), Ordering::Equal);
    }

    #[test]
    fn fractions_compare_without_overflow() {
        assert_eq!(compare_fractions(u128::MAX, 3, u128::MAX, 3), Ordering::Equal);
        assert_eq!(compare_fractions(u128::MAX, 127, u128::MAX - 1, 127), Ordering::Greater);
        assert_eq!(compare_fractions(0, 5, 0, 7), Ordering::Equal);
        assert_eq!(compare_fractions(0, 5, 1, u128::MAX), Ordering::Less);
    }

    #[test]
    fn ordering_near_u128_limits() {
        let a = Ratio::new(u128::MAX, u128::MAX - 1);
        let b = Ratio::new(u128::MAX - 1, u128::MAX - 2);
        // (n+1)/n decreases with n, so a < b.
        assert!(a < b);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Display
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn display() {
        assert_eq!(format!("{}", Ratio::integer(1000)), "1000");
        assert_eq!(format!("{}", Ratio::new(1, 1000)), "1/1000");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Property-based tests
    // ─────────────────────────────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn prop_ordering_matches_cross_multiplication(
            a in 1u128..1_000_000, b in 1u128..1_000_000,
            c in 1u128..1_000_000, d in 1u128..1_000_000,
        ) {
            let expected = (a * d).cmp(&(c * b));
            prop_assert_eq!(Ratio::new(a, b).cmp(&Ratio::new(c, d)), expected);
        }

        #[test]
        fn prop_mul_div_roundtrip(
            a in 1u128..1_000_000, b in 1u128..1_000_000,
            c in 1u128..1_000_000, d in 1u128..1_000_000,
        ) {
            let x = Ratio::new(a, b);
            let y = Ratio::new(c, d);
            prop_assert_eq!(x.mul(y).div(y), x);
        }
    }
}
