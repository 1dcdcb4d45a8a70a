//! Luminous intensity units; the canonical unit is [`Candela`].

use crate::dimension::LuminousIntensity;
use crate::{Quantity, Unit};
use dimen_derive::Unit;

pub use crate::unit::Candela;

/// Marker trait for any [`Unit`] whose dimension is [`LuminousIntensity`].
pub trait LuminousIntensityUnit: Unit<Dim = LuminousIntensity> {}
impl<T: Unit<Dim = LuminousIntensity>> LuminousIntensityUnit for T {}

/// A quantity measured in candelas.
pub type Candelas<T = f64> = Quantity<Candela, T>;
/// One candela.
pub const CD: Candelas = Candelas::new(1.0);

/// Millicandela.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "mcd", dimension = LuminousIntensity, scale = 1 / 1000)]
pub struct Millicandela;
/// A quantity measured in millicandelas.
pub type Millicandelas<T = f64> = Quantity<Millicandela, T>;

/// Kilocandela.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "kcd", dimension = LuminousIntensity, scale = 1000)]
pub struct Kilocandela;
/// A quantity measured in kilocandelas.
pub type Kilocandelas<T = f64> = Quantity<Kilocandela, T>;

crate::impl_unit_conversions!(Candela, Millicandela, Kilocandela);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candela_ladder() {
        assert_eq!(Kilocandelas::<i32>::new(2).to::<Millicandela>().amount(), 2_000_000);
        assert!(Millicandelas::new(999.0) < CD);
    }
}
