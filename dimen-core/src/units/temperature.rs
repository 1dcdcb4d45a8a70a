//! Thermodynamic temperature units.
//!
//! Only absolute scales are provided. Offset scales such as degrees Celsius are not multiplicative and cannot be
//! expressed as a [`Unit`].

use crate::dimension::Temperature;
use crate::{Quantity, Unit};
use dimen_derive::Unit;

pub use crate::unit::Kelvin;

/// Marker trait for any [`Unit`] whose dimension is [`Temperature`].
pub trait TemperatureUnit: Unit<Dim = Temperature> {}
impl<T: Unit<Dim = Temperature>> TemperatureUnit for T {}

/// A quantity measured in kelvins.
pub type Kelvins<T = f64> = Quantity<Kelvin, T>;
/// One kelvin.
pub const K: Kelvins = Kelvins::new(1.0);

/// Millikelvin (`1e-3 K`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "mK", dimension = Temperature, scale = 1 / 1000)]
pub struct Millikelvin;
/// A quantity measured in millikelvins.
pub type Millikelvins<T = f64> = Quantity<Millikelvin, T>;

/// Microkelvin (`1e-6 K`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "µK", dimension = Temperature, scale = 1 / 1_000_000)]
pub struct Microkelvin;
/// A quantity measured in microkelvins.
pub type Microkelvins<T = f64> = Quantity<Microkelvin, T>;

crate::impl_unit_conversions!(Kelvin, Millikelvin, Microkelvin);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn kelvin_ladder() {
        assert_eq!(Kelvins::<i32>::new(4).to::<Millikelvin>().amount(), 4000);
        assert_abs_diff_eq!(Microkelvins::new(2500.0).to::<Millikelvin>().amount(), 2.5, epsilon = 1e-12);
    }

    #[test]
    fn display() {
        assert_eq!(Millikelvins::<u8>::new(20).to_string(), "20 mK");
        assert_eq!(K.to_string(), "1 K");
    }
}
