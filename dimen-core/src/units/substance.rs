//! Amount-of-substance units; the canonical unit is [`Mole`].

use crate::dimension::Amount;
use crate::{Quantity, Unit};
use dimen_derive::Unit;

pub use crate::unit::Mole;

/// Marker trait for any [`Unit`] whose dimension is [`Amount`].
pub trait AmountUnit: Unit<Dim = Amount> {}
impl<T: Unit<Dim = Amount>> AmountUnit for T {}

/// A quantity measured in moles.
pub type Moles<T = f64> = Quantity<Mole, T>;
/// One mole.
pub const MOL: Moles = Moles::new(1.0);

/// Millimole.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "mmol", dimension = Amount, scale = 1 / 1000)]
pub struct Millimole;
/// A quantity measured in millimoles.
pub type Millimoles<T = f64> = Quantity<Millimole, T>;

/// Micromole.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "µmol", dimension = Amount, scale = 1 / 1_000_000)]
pub struct Micromole;
/// A quantity measured in micromoles.
pub type Micromoles<T = f64> = Quantity<Micromole, T>;

/// Kilomole.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "kmol", dimension = Amount, scale = 1000)]
pub struct Kilomole;
/// A quantity measured in kilomoles.
pub type Kilomoles<T = f64> = Quantity<Kilomole, T>;

crate::impl_unit_conversions!(Mole, Millimole, Micromole, Kilomole);
