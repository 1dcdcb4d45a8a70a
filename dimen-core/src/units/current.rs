//! Electric current units.
//!
//! The canonical scaling unit for this dimension is [`Ampere`].

use crate::dimension::Current;
use crate::{Quantity, Unit};
use dimen_derive::Unit;

pub use crate::unit::Ampere;

/// Marker trait for any [`Unit`] whose dimension is [`Current`].
pub trait CurrentUnit: Unit<Dim = Current> {}
impl<T: Unit<Dim = Current>> CurrentUnit for T {}

/// A quantity measured in amperes.
pub type Amperes<T = f64> = Quantity<Ampere, T>;
/// One ampere.
pub const A: Amperes = Amperes::new(1.0);

/// Milliampere (`1e-3 A`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "mA", dimension = Current, scale = 1 / 1000)]
pub struct Milliampere;
/// A quantity measured in milliamperes.
pub type Milliamperes<T = f64> = Quantity<Milliampere, T>;
/// One milliampere.
pub const MA: Milliamperes = Milliamperes::new(1.0);

/// Microampere (`1e-6 A`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "µA", dimension = Current, scale = 1 / 1_000_000)]
pub struct Microampere;
/// A quantity measured in microamperes.
pub type Microamperes<T = f64> = Quantity<Microampere, T>;
/// One microampere.
pub const UA: Microamperes = Microamperes::new(1.0);

/// Kiloampere (`1000 A`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "kA", dimension = Current, scale = 1000)]
pub struct Kiloampere;
/// A quantity measured in kiloamperes.
pub type Kiloamperes<T = f64> = Quantity<Kiloampere, T>;
/// One kiloampere.
pub const KA: Kiloamperes = Kiloamperes::new(1.0);

crate::impl_unit_conversions!(Ampere, Milliampere, Microampere, Kiloampere);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn milliamperes_to_amperes() {
        assert_eq!(Milliamperes::new(250.0).to::<Ampere>().amount(), 0.25);
        assert_eq!(Amperes::<u32>::new(3).to::<Microampere>().amount(), 3_000_000);
    }

    #[test]
    fn from_impl() {
        let a: Amperes<i64> = Kiloamperes::<i64>::new(2).into();
        assert_eq!(a.amount(), 2000);
    }
}
