//! Type-erased quantities.
//!
//! A [`DynQuantity`] is an `f64` amount paired with a [`DynUnit`]: the runtime record of a unit's dimension, exact
//! scale and symbol. It is obtained from any typed quantity with [`Quantity::erase`] and turned back with
//! [`DynQuantity::downcast`]. Every check the type system performs for [`Quantity`] runs here at runtime and
//! reports a [`QuantityError`].
//!
//! The operation rules are the typed ones for floating-point amounts: the left unit wins for `+`/`-`, and the right
//! operand is normalized to its canonical unit for `*`/`/`.
//!
//! ```rust
//! use dimen_core::{Meter, Quantity, Second};
//!
//! let distance = Quantity::<Meter>::new(100.0).erase();
//! let time = Quantity::<Second>::new(20.0).erase();
//! let speed = distance.div(&time).unwrap();
//! assert_eq!(speed.amount(), 5.0);
//! assert_eq!(speed.to_string(), "5 m/s");
//! assert!(distance.try_add(&time).is_err());
//! ```

use crate::dimension::{DimensionVector, SymbolForm};
use crate::error::{QuantityError, QuantityResult};
use crate::repr::Representation;
use crate::unit::{Symbol, Unit};
use crate::{Quantity, Ratio};
use alloc::string::{String, ToString};
use core::fmt;
use core::fmt::Write as _;

/// Runtime description of a unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynUnit {
    dimension: DimensionVector,
    scale: Ratio,
    symbol: String,
    form: SymbolForm,
}

impl DynUnit {
    /// Describes the statically known unit `U`.
    pub fn of<U: Unit>() -> Self {
        Self {
            dimension: <U::Dim as crate::Dimension>::EXPONENTS,
            scale: U::SCALE,
            symbol: Symbol::<U>::new().to_string(),
            form: U::FORM,
        }
    }

    /// A named unit given by its parts.
    pub fn new(dimension: DimensionVector, scale: Ratio, symbol: impl Into<String>) -> Self {
        Self {
            dimension,
            scale,
            symbol: symbol.into(),
            form: SymbolForm::Atom,
        }
    }

    /// The scale-1 unit of `dimension`.
    pub fn canonical(dimension: DimensionVector) -> Self {
        Self {
            dimension,
            scale: Ratio::ONE,
            symbol: dimension.to_string(),
            form: dimension.form(),
        }
    }

    /// Dimension exponents.
    pub fn dimension(&self) -> DimensionVector {
        self.dimension
    }

    /// Scale relative to the canonical unit.
    pub fn scale(&self) -> Ratio {
        self.scale
    }

    /// Printable symbol.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// `true` when both units measure the same dimension.
    pub fn is_compatible(&self, other: &DynUnit) -> bool {
        self.dimension == other.dimension
    }

    /// The product unit `self · rhs`.
    pub fn try_mul(&self, rhs: &DynUnit) -> QuantityResult<DynUnit> {
        let dimension = self
            .dimension
            .checked_mul(&rhs.dimension)
            .ok_or_else(|| QuantityError::ExponentOutOfRange(join(self, '·', rhs)))?;
        let scale = self
            .scale
            .checked_mul(rhs.scale)
            .ok_or_else(|| QuantityError::ScaleOverflow(self.symbol.clone(), rhs.symbol.clone()))?;
        Ok(Self {
            dimension,
            scale,
            symbol: join(self, '·', rhs),
            form: SymbolForm::Product,
        })
    }

    /// The quotient unit `self / rhs`.
    pub fn try_div(&self, rhs: &DynUnit) -> QuantityResult<DynUnit> {
        let dimension = self
            .dimension
            .checked_div(&rhs.dimension)
            .ok_or_else(|| QuantityError::ExponentOutOfRange(join(self, '/', rhs)))?;
        let scale = self
            .scale
            .checked_div(rhs.scale)
            .ok_or_else(|| QuantityError::ScaleOverflow(self.symbol.clone(), rhs.symbol.clone()))?;
        Ok(Self {
            dimension,
            scale,
            symbol: join(self, '/', rhs),
            form: SymbolForm::Quotient,
        })
    }

    /// The power unit `selfⁿ`.
    pub fn try_powi(&self, n: i32) -> QuantityResult<DynUnit> {
        let mut symbol = String::new();
        push_operand(&mut symbol, self, self.form != SymbolForm::Atom);
        // Writing into a String cannot fail.
        let _ = crate::dimension::write_superscript(&mut symbol, n);

        let dimension = self
            .dimension
            .checked_pow(n)
            .ok_or_else(|| QuantityError::ExponentOutOfRange(symbol.clone()))?;
        let scale = self
            .scale
            .checked_pow(n)
            .ok_or_else(|| QuantityError::ScaleOverflow(self.symbol.clone(), symbol.clone()))?;
        Ok(Self {
            dimension,
            scale,
            symbol,
            form: SymbolForm::Power,
        })
    }

    /// Exact factor from `self` to `to`.
    fn factor_to(&self, to: &DynUnit) -> QuantityResult<Ratio> {
        if !self.is_compatible(to) {
            log::debug!("rejected conversion from `{}` to `{}`: dimensions differ", self.symbol, to.symbol);
            return Err(QuantityError::IncompatibleDimensions {
                from: self.symbol.clone(),
                to: to.symbol.clone(),
            });
        }
        self.scale.checked_div(to.scale).ok_or_else(|| {
            log::debug!("rejected conversion from `{}` to `{}`: scale overflow", self.symbol, to.symbol);
            QuantityError::ScaleOverflow(self.symbol.clone(), to.symbol.clone())
        })
    }
}

impl fmt::Display for DynUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbol)
    }
}

fn push_operand(out: &mut String, unit: &DynUnit, paren: bool) {
    if paren {
        out.push('(');
        out.push_str(&unit.symbol);
        out.push(')');
    } else {
        out.push_str(&unit.symbol);
    }
}

fn join(lhs: &DynUnit, op: char, rhs: &DynUnit) -> String {
    let mut out = String::new();
    push_operand(&mut out, lhs, lhs.form == SymbolForm::Quotient);
    out.push(op);
    let paren_rhs = match op {
        '/' => matches!(rhs.form, SymbolForm::Product | SymbolForm::Quotient),
        _ => rhs.form == SymbolForm::Quotient,
    };
    push_operand(&mut out, rhs, paren_rhs);
    out
}

/// An `f64` amount in a runtime unit.
#[derive(Debug, Clone, PartialEq)]
pub struct DynQuantity {
    amount: f64,
    unit: DynUnit,
}

impl DynQuantity {
    /// Creates a quantity; `amount` is interpreted in `unit`.
    pub fn new(amount: f64, unit: DynUnit) -> Self {
        Self { amount, unit }
    }

    /// Amount expressed in [`DynQuantity::unit`].
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Unit of the amount.
    pub fn unit(&self) -> &DynUnit {
        &self.unit
    }

    /// Re-expresses the amount in `target`.
    pub fn convert_to(&self, target: &DynUnit) -> QuantityResult<DynQuantity> {
        let factor = self.unit.factor_to(target)?;
        let amount = self.amount.scale(factor);
        log::trace!("converted {} {} to {} {}", self.amount, self.unit, amount, target);
        Ok(Self::new(amount, target.clone()))
    }

    /// Recovers a typed quantity in `U`, converting the amount if the scales differ.
    ///
    /// ```rust
    /// use dimen_core::{Gram, Meter, Quantity};
    /// use dimen_core::dynamic::{DynQuantity, DynUnit};
    /// use dimen_core::dimension::{BaseDimension, DimensionVector};
    /// use dimen_core::Ratio;
    ///
    /// let kg = DynUnit::new(DimensionVector::base(BaseDimension::Mass), Ratio::integer(1000), "kg");
    /// let q = DynQuantity::new(2.5, kg);
    /// assert_eq!(q.downcast::<Gram>().unwrap().amount(), 2500.0);
    /// assert!(q.downcast::<Meter>().is_err());
    /// ```
    pub fn downcast<U: Unit>(&self) -> QuantityResult<Quantity<U, f64>> {
        let converted = self.convert_to(&DynUnit::of::<U>())?;
        Ok(Quantity::new(converted.amount))
    }

    /// Sum expressed in the left operand's unit.
    pub fn try_add(&self, rhs: &DynQuantity) -> QuantityResult<DynQuantity> {
        let rhs = rhs.convert_to(&self.unit)?;
        Ok(Self::new(self.amount + rhs.amount, self.unit.clone()))
    }

    /// Difference expressed in the left operand's unit.
    pub fn try_sub(&self, rhs: &DynQuantity) -> QuantityResult<DynQuantity> {
        let rhs = rhs.convert_to(&self.unit)?;
        Ok(Self::new(self.amount - rhs.amount, self.unit.clone()))
    }

    /// Product in `self.unit · canonical(rhs)`.
    pub fn mul(&self, rhs: &DynQuantity) -> QuantityResult<DynQuantity> {
        let rhs = rhs.canonicalized()?;
        let unit = self.unit.try_mul(&rhs.unit).map_err(|e| {
            log::debug!("rejected product of `{}` and `{}`: {e}", self.unit, rhs.unit);
            e
        })?;
        Ok(Self::new(self.amount * rhs.amount, unit))
    }

    /// Quotient in `self.unit / canonical(rhs)`.
    pub fn div(&self, rhs: &DynQuantity) -> QuantityResult<DynQuantity> {
        let rhs = rhs.canonicalized()?;
        let unit = self.unit.try_div(&rhs.unit).map_err(|e| {
            log::debug!("rejected quotient of `{}` and `{}`: {e}", self.unit, rhs.unit);
            e
        })?;
        Ok(Self::new(self.amount / rhs.amount, unit))
    }

    /// Integer power.
    pub fn powi(&self, n: i32) -> QuantityResult<DynQuantity> {
        let unit = self.unit.try_powi(n).map_err(|e| {
            log::debug!("rejected power {n} of `{}`: {e}", self.unit);
            e
        })?;
        Ok(Self::new(Representation::powi(self.amount, n), unit))
    }

    fn canonicalized(&self) -> QuantityResult<DynQuantity> {
        self.convert_to(&DynUnit::canonical(self.unit.dimension))
    }
}

impl fmt::Display for DynQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.amount, f)?;
        if !self.unit.symbol.is_empty() {
            f.write_char(' ')?;
            f.write_str(&self.unit.symbol)?;
        }
        Ok(())
    }
}

impl<U: Unit, T: Representation> Quantity<U, T> {
    /// Erases the unit into a runtime [`DynQuantity`] with an `f64` amount.
    pub fn erase(&self) -> DynQuantity {
        DynQuantity::new(self.amount().to_f64(), DynUnit::of::<U>())
    }
}

impl<U: Unit, T: Representation> From<Quantity<U, T>> for DynQuantity {
    fn from(q: Quantity<U, T>) -> Self {
        q.erase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::{BaseDimension, Mass, Time};
    use crate::unit::{Gram, Meter, Per, Second};
    use crate::Dimension;
    use approx::assert_relative_eq;

    fn kilogram() -> DynUnit {
        DynUnit::new(Mass::EXPONENTS, Ratio::integer(1000), "kg")
    }

    fn hectogram() -> DynUnit {
        DynUnit::new(Mass::EXPONENTS, Ratio::integer(100), "hg")
    }

    fn hour() -> DynUnit {
        DynUnit::new(Time::EXPONENTS, Ratio::integer(3600), "h")
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Units
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn of_typed_unit() {
        let u = DynUnit::of::<Per<Meter, Second>>();
        assert_eq!(u.symbol(), "m/s");
        assert_eq!(u.scale(), Ratio::ONE);
        assert_eq!(u.dimension().get(BaseDimension::Time), -1);
    }

    #[test]
    fn composite_unit_symbols() {
        let speed = DynUnit::canonical(DimensionVector::base(BaseDimension::Length))
            .try_div(&hour())
            .unwrap();
        assert_eq!(speed.symbol(), "m/h");
        assert_eq!(speed.scale(), Ratio::new(1, 3600));
        let accel = speed.try_div(&hour()).unwrap();
        assert_eq!(accel.symbol(), "(m/h)/h");
        let inverse = kilogram().try_mul(&hour()).unwrap().try_powi(-1).unwrap();
        assert_eq!(inverse.symbol(), "(kg·h)⁻¹");
    }

    #[test]
    fn exponent_overflow_is_reported() {
        let err = kilogram().try_powi(9).unwrap_err();
        assert!(matches!(err, QuantityError::ExponentOutOfRange(_)));
    }

    #[test]
    fn scale_overflow_is_reported() {
        let huge = DynUnit::new(Mass::EXPONENTS, Ratio::integer(10u128.pow(30)), "X");
        let err = huge.try_mul(&huge).unwrap_err();
        assert_eq!(err, QuantityError::ScaleOverflow("X".into(), "X".into()));
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Quantities
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn add_and_sub_keep_left_unit() {
        let q1 = DynQuantity::new(3000.0, kilogram());
        let q2 = DynQuantity::new(72.0, hectogram());
        let sum = q1.try_add(&q2).unwrap();
        assert_relative_eq!(sum.amount(), 3007.2, epsilon = 1e-9);
        assert_eq!(sum.unit().symbol(), "kg");
        assert_relative_eq!(q1.try_sub(&q2).unwrap().amount(), 2992.8, epsilon = 1e-9);
    }

    #[test]
    fn mul_normalizes_right_operand() {
        let q1 = DynQuantity::new(3000.0, kilogram());
        let q2 = DynQuantity::new(72.0, hectogram());
        let product = q1.mul(&q2).unwrap();
        assert_eq!(product.amount(), 21_600_000.0);
        assert_eq!(product.to_string(), "21600000 kg·g");
    }

    #[test]
    fn incompatible_addition_is_rejected() {
        let q1 = DynQuantity::new(1.0, kilogram());
        let q2 = DynQuantity::new(1.0, hour());
        let err = q1.try_add(&q2).unwrap_err();
        assert_eq!(
            err,
            QuantityError::IncompatibleDimensions {
                from: "h".into(),
                to: "kg".into()
            }
        );
    }

    #[test]
    fn erase_and_downcast_round_trip() {
        let typed = Quantity::<Meter, i32>::new(5);
        let erased: DynQuantity = typed.into();
        assert_eq!(erased.to_string(), "5 m");
        let back = erased.downcast::<Meter>().unwrap();
        assert_eq!(back.amount(), 5.0);
        assert!(erased.downcast::<Gram>().is_err());
    }

    #[test]
    fn powi_of_dimensionless_with_huge_exponent_returns() {
        let one = DynQuantity::new(1.0, DynUnit::canonical(DimensionVector::DIMENSIONLESS));
        let q = one.powi(i32::MAX).unwrap();
        assert_eq!(q.amount(), 1.0);
        assert_eq!(q.unit().scale(), Ratio::ONE);
    }

    #[test]
    fn powi_squares_units() {
        let side = Quantity::<Meter>::new(3.0).erase();
        let area = side.powi(2).unwrap();
        assert_eq!(area.amount(), 9.0);
        assert_eq!(area.unit().symbol(), "m²");
    }
}
