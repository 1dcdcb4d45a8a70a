//! Dimensionless helpers.
//!
//! Dividing two quantities of the same dimension yields a dimensionless quantity whose unit still remembers the
//! scales involved (`kg/g` has scale `1000`). [`Quantity::simplify`] folds such a unit into [`Unitless`]:
//!
//! ```rust
//! use dimen_core::mass::{Grams, Kilograms};
//!
//! let ratio = Kilograms::new(1.0) / Grams::new(1.0);
//! assert_eq!(ratio.amount(), 1.0);
//! assert_eq!(ratio.simplify().amount(), 1000.0);
//!
//! let plain: f64 = ratio.simplify().into();
//! assert_eq!(plain, 1000.0);
//! ```

use crate::dimension::Dimensionless;
use crate::{Quantity, Representation, Unit, Unitless};

/// A dimensionless quantity in [`Unitless`].
pub type Scalar<T = f64> = Quantity<Unitless, T>;

impl<U: Unit<Dim = Dimensionless>, T: Representation> Quantity<U, T> {
    /// Rescales a dimensionless quantity into [`Unitless`].
    ///
    /// For integer amounts this only compiles when the unit scale is an integer.
    #[inline]
    pub fn simplify(self) -> Scalar<T> {
        self.to::<Unitless>()
    }
}

impl<T: Representation> From<T> for Scalar<T> {
    #[inline]
    fn from(amount: T) -> Self {
        Self::new(amount)
    }
}

macro_rules! scalar_into_primitive {
    ($($t:ty),* $(,)?) => {$(
        impl From<Scalar<$t>> for $t {
            #[inline]
            fn from(q: Scalar<$t>) -> Self {
                q.amount()
            }
        }
    )*};
}

scalar_into_primitive!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::length::{Kilometers, Meters};
    use crate::mass::{Gram, Grams, Hectogram, Hectograms, Kilograms};
    use crate::Per;
    use proptest::prelude::*;

    // ─────────────────────────────────────────────────────────────────────────────
    // Basic Unitless behavior
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn unitless_from_primitive() {
        let u: Scalar = 1.5.into();
        assert_eq!(u.amount(), 1.5);
        let n: Scalar<u8> = 7u8.into();
        assert_eq!(n.amount(), 7);
    }

    #[test]
    fn display_has_no_symbol() {
        assert_eq!(Scalar::new(123.456).to_string(), "123.456");
        assert_eq!(Scalar::<i32>::new(42).to_string(), "42");
    }

    #[test]
    fn unitless_scale_and_symbol() {
        assert!(Unitless::SCALE.is_one());
        assert_eq!(Unitless::SYMBOL, "");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Simplification of quotients
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn simplify_same_unit_ratio() {
        let r = Meters::new(6.0) / Meters::new(3.0);
        assert_eq!(r.simplify().amount(), 2.0);
    }

    #[test]
    fn simplify_scaled_ratio() {
        let r = Kilometers::new(3.0) / Meters::new(1500.0);
        assert_eq!(r.to_string(), "0.002 km/m");
        assert_eq!(r.simplify().amount(), 2.0);
    }

    #[test]
    fn simplify_integer_ratio() {
        let r: Quantity<Per<Hectogram, Gram>, i32> = Hectograms::new(5) / Grams::new(10);
        assert_eq!(r.amount(), 0);
        let exact = Hectograms::new(50i32) / Grams::new(10i32);
        assert_eq!(exact.simplify().amount(), 500);
    }

    #[test]
    fn into_primitive() {
        let x: i64 = Scalar::<i64>::new(-4).into();
        assert_eq!(x, -4);
        let y: f32 = (Grams::new(8.0f32) / Grams::new(2.0f32)).simplify().into();
        assert_eq!(y, 4.0);
    }

    proptest! {
        #[test]
        fn prop_simplify_matches_manual_ratio(a in 1e-3..1e6f64, b in 1e-3..1e6f64) {
            let r = Kilograms::new(a) / Grams::new(b);
            let expected = a * 1000.0 / b;
            prop_assert!((r.simplify().amount() - expected).abs() <= 1e-9 * expected);
        }
    }
}
