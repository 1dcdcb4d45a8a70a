//! Numeric representations and the promotion rule between them.
//!
//! A [`Quantity<U, T>`](crate::Quantity) stores its amount as a primitive number `T` implementing
//! [`Representation`]. When two quantities meet in a binary operation, their amounts are first lifted into a common
//! representation `Tr` given by [`Promote`]:
//!
//! - if either side is floating point, `Tr` is the wider floating type involved;
//! - if both are signed (or both unsigned) integers, `Tr` is the wider integer type.
//!
//! Mixing signed and unsigned integers has no common representation and does not compile.
//!
//! ```rust
//! use dimen_core::{Promote, Representation};
//!
//! fn common<A: Promote<B>, B: Representation>(a: A, b: B) -> A::Common {
//!     a.lift() + A::lift_rhs(b)
//! }
//!
//! assert_eq!(common(3000.0_f64, 72_i32), 3072.0);
//! assert_eq!(common(5_i16, 10_i64), 15_i64);
//! ```

use crate::Ratio;
use core::cmp::Ordering;
use core::fmt::{Debug, Display};
use core::ops::{Add, Div, Mul, Rem, Sub};

/// A primitive numeric type able to carry the amount of a quantity.
///
/// Implemented for `i8`…`i128`, `u8`…`u128`, `f32` and `f64`.
pub trait Representation:
    Copy
    + Debug
    + Display
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Rem<Output = Self>
{
    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity.
    const ONE: Self;
    /// `true` for `f32` and `f64`.
    const IS_FLOAT: bool;
    /// `true` when negative amounts are representable.
    const IS_SIGNED: bool;
    /// Largest integer scale factor this type can carry exactly.
    const MAX_FACTOR: u128;
    /// Type name used in diagnostics.
    const NAME: &'static str;

    /// [`IntegerArithmetic`] or [`FloatArithmetic`]; selects how products treat the right operand's unit.
    type Arithmetic;

    /// Realizes an integer factor in this representation.
    ///
    /// Callers guarantee `n <= Self::MAX_FACTOR` for integer types.
    fn from_factor(n: u128) -> Self;

    /// Nearest `f64` to this amount.
    fn to_f64(self) -> f64;

    /// Absolute value (identity for unsigned types).
    fn abs(self) -> Self;

    /// Multiplies by an integer factor, or `None` when the product leaves the representation.
    ///
    /// Floats never report overflow.
    fn checked_scale(self, n: u128) -> Option<Self>;

    /// Sign of the amount against zero and its magnitude, used when a scaled comparison overflows.
    fn sign_magnitude(self) -> (Ordering, u128);

    /// Multiplies by an exact rational factor.
    ///
    /// Integer representations only ever receive integral factors; [`crate::unit::Conversion`] rejects the others at
    /// compile time.
    #[inline]
    fn scale(self, factor: Ratio) -> Self {
        if factor.is_one() {
            self
        } else if factor.is_integer() {
            self * Self::from_factor(factor.numer())
        } else {
            self * Self::from_factor(factor.numer()) / Self::from_factor(factor.denom())
        }
    }

    /// Integer power by repeated squaring. Negative exponents divide `ONE`.
    fn powi(self, exp: i32) -> Self {
        let mut base = self;
        let mut n = exp.unsigned_abs();
        let mut acc = Self::ONE;
        while n > 0 {
            if n & 1 == 1 {
                acc = acc * base;
            }
            n >>= 1;
            if n > 0 {
                base = base * base;
            }
        }
        if exp < 0 {
            Self::ONE / acc
        } else {
            acc
        }
    }
}

/// Arithmetic kind of the integer representations.
#[derive(Clone, Copy, Debug)]
pub struct IntegerArithmetic;

/// Arithmetic kind of the floating-point representations.
#[derive(Clone, Copy, Debug)]
pub struct FloatArithmetic;

/// Floating-point representations.
pub trait Float: Representation {
    /// Not-a-number.
    const NAN: Self;

    /// Square root.
    fn sqrt(self) -> Self;
}

/// The common representation of `Self` and `Rhs`.
#[diagnostic::on_unimplemented(
    message = "no common representation for `{Self}` and `{Rhs}`",
    label = "combining `{Self}` with `{Rhs}` would narrow one of them",
    note = "signed and unsigned integers do not mix; `cast` one operand to a shared representation first"
)]
pub trait Promote<Rhs: Representation>: Representation {
    /// The promoted representation `Tr`.
    type Common: Representation;

    /// Lifts the left operand into `Tr`.
    fn lift(self) -> Self::Common;

    /// Lifts the right operand into `Tr`.
    fn lift_rhs(rhs: Rhs) -> Self::Common;
}

macro_rules! int_representation {
    ($($t:ty => signed: $signed:expr),* $(,)?) => {$(
        impl Representation for $t {
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const IS_FLOAT: bool = false;
            const IS_SIGNED: bool = $signed;
            const MAX_FACTOR: u128 = <$t>::MAX as u128;
            const NAME: &'static str = stringify!($t);

            type Arithmetic = IntegerArithmetic;

            #[inline]
            fn from_factor(n: u128) -> Self {
                n as $t
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            #[allow(unused_comparisons)]
            fn abs(self) -> Self {
                if self < 0 as $t { (0 as $t).wrapping_sub(self) } else { self }
            }

            #[inline]
            fn checked_scale(self, n: u128) -> Option<Self> {
                <$t>::try_from(n).ok().and_then(|n| self.checked_mul(n))
            }

            #[inline]
            fn sign_magnitude(self) -> (Ordering, u128) {
                (self.cmp(&0), self.abs_diff(0) as u128)
            }
        }
    )*};
}

int_representation!(
    i8 => signed: true,
    i16 => signed: true,
    i32 => signed: true,
    i64 => signed: true,
    i128 => signed: true,
    u8 => signed: false,
    u16 => signed: false,
    u32 => signed: false,
    u64 => signed: false,
    u128 => signed: false,
);

macro_rules! float_representation {
    ($($t:ident => $libm_sqrt:ident, $libm_abs:ident);* $(;)?) => {$(
        impl Representation for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const IS_FLOAT: bool = true;
            const IS_SIGNED: bool = true;
            const MAX_FACTOR: u128 = u128::MAX;
            const NAME: &'static str = stringify!($t);

            type Arithmetic = FloatArithmetic;

            #[inline]
            fn from_factor(n: u128) -> Self {
                n as $t
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn abs(self) -> Self {
                #[cfg(feature = "std")]
                {
                    <$t>::abs(self)
                }
                #[cfg(not(feature = "std"))]
                {
                    libm::$libm_abs(self)
                }
            }

            #[inline]
            fn checked_scale(self, n: u128) -> Option<Self> {
                Some(self * n as $t)
            }

            #[inline]
            fn sign_magnitude(self) -> (Ordering, u128) {
                let sign = self.partial_cmp(&0.0).unwrap_or(Ordering::Equal);
                (sign, Representation::abs(self) as u128)
            }
        }

        impl Float for $t {
            const NAN: Self = <$t>::NAN;

            #[inline]
            fn sqrt(self) -> Self {
                #[cfg(feature = "std")]
                {
                    <$t>::sqrt(self)
                }
                #[cfg(not(feature = "std"))]
                {
                    libm::$libm_sqrt(self)
                }
            }
        }
    )*};
}

float_representation!(
    f32 => sqrtf, fabsf;
    f64 => sqrt, fabs;
);

macro_rules! promote {
    ($($lhs:ty, $rhs:ty => $out:ty;)*) => {$(
        impl Promote<$rhs> for $lhs {
            type Common = $out;

            #[inline]
            #[allow(clippy::unnecessary_cast)]
            fn lift(self) -> $out {
                self as $out
            }

            #[inline]
            #[allow(clippy::unnecessary_cast)]
            fn lift_rhs(rhs: $rhs) -> $out {
                rhs as $out
            }
        }
    )*};
}

macro_rules! promote_both_ways {
    ($($a:ty, $b:ty => $out:ty;)*) => {
        promote!($($a, $b => $out; $b, $a => $out;)*);
    };
}

// Same representation on both sides.
promote!(
    i8, i8 => i8;
    i16, i16 => i16;
    i32, i32 => i32;
    i64, i64 => i64;
    i128, i128 => i128;
    u8, u8 => u8;
    u16, u16 => u16;
    u32, u32 => u32;
    u64, u64 => u64;
    u128, u128 => u128;
    f32, f32 => f32;
    f64, f64 => f64;
);

// Signed integers widen.
promote_both_ways!(
    i8, i16 => i16;
    i8, i32 => i32;
    i8, i64 => i64;
    i8, i128 => i128;
    i16, i32 => i32;
    i16, i64 => i64;
    i16, i128 => i128;
    i32, i64 => i64;
    i32, i128 => i128;
    i64, i128 => i128;
);

// Unsigned integers widen.
promote_both_ways!(
    u8, u16 => u16;
    u8, u32 => u32;
    u8, u64 => u64;
    u8, u128 => u128;
    u16, u32 => u32;
    u16, u64 => u64;
    u16, u128 => u128;
    u32, u64 => u64;
    u32, u128 => u128;
    u64, u128 => u128;
);

// Any float wins; the wider float wins between floats.
promote_both_ways!(
    f32, f64 => f64;
    i8, f32 => f32;
    i16, f32 => f32;
    i32, f32 => f32;
    i64, f32 => f32;
    i128, f32 => f32;
    u8, f32 => f32;
    u16, f32 => f32;
    u32, f32 => f32;
    u64, f32 => f32;
    u128, f32 => f32;
    i8, f64 => f64;
    i16, f64 => f64;
    i32, f64 => f64;
    i64, f64 => f64;
    i128, f64 => f64;
    u8, f64 => f64;
    u16, f64 => f64;
    u32, f64 => f64;
    u64, f64 => f64;
    u128, f64 => f64;
);
