//! Mass units.
//!
//! The canonical scaling unit for this dimension is [`Gram`] (`Gram::SCALE == 1`), so the kilogram has scale
//! `1000`. Every scale is an exact rational:
//!
//! - **SI grams**: prefix ladder from nanogram to gigagram.
//! - **Defined non-SI**: tonne, avoirdupois pound/ounce/stone, carat, grain.
//! - **Science/astro**: atomic mass unit (u/Da), nominal solar mass.
//!
//! ```rust
//! use dimen_core::mass::{Hectograms, Kilogram, Kilograms};
//!
//! let total = Kilograms::new(3000.0) + Hectograms::new(72.0);
//! assert_eq!(total.amount(), 3007.2);
//! assert_eq!(Hectograms::new(72.0).to::<Kilogram>().amount(), 7.2);
//! ```

use crate::dimension::Mass;
use crate::{Quantity, Unit};
use dimen_derive::Unit;

pub use crate::unit::Gram;

/// Marker trait for any [`Unit`] whose dimension is [`Mass`].
pub trait MassUnit: Unit<Dim = Mass> {}
impl<T: Unit<Dim = Mass>> MassUnit for T {}

/// A quantity measured in grams.
pub type Grams<T = f64> = Quantity<Gram, T>;
/// One gram.
pub const G: Grams = Grams::new(1.0);

/// Declares a gram-based SI mass unit with its quantity alias and a one-unit constant.
macro_rules! si_gram {
    ($name:ident, $sym:literal, $scale:expr, $qty:ident, $one:ident) => {
        #[doc = concat!("SI mass unit `", stringify!($name), "` (symbol `", $sym, "`).")]
        #[doc = concat!("By definition, `1 ", $sym, " = ", stringify!($scale), " g`.")]
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
        #[unit(symbol = $sym, dimension = Mass, scale = $scale)]
        pub struct $name;

        #[doc = concat!("Quantity measured in ", stringify!($name), " (", $sym, ").")]
        pub type $qty<T = f64> = Quantity<$name, T>;

        #[doc = concat!("Constant equal to one ", stringify!($name), " (1 ", $sym, ").")]
        pub const $one: $qty = $qty::new(1.0);
    };
}

si_gram!(Nanogram, "ng", 1 / 1_000_000_000, Nanograms, NG);
si_gram!(Microgram, "µg", 1 / 1_000_000, Micrograms, UG);
si_gram!(Milligram, "mg", 1 / 1000, Milligrams, MG);
si_gram!(Centigram, "cg", 1 / 100, Centigrams, CG);
si_gram!(Decigram, "dg", 1 / 10, Decigrams, DG);
si_gram!(Decagram, "dag", 10, Decagrams, DAG);
si_gram!(Hectogram, "hg", 100, Hectograms, HG);
si_gram!(Kilogram, "kg", 1000, Kilograms, KG);
si_gram!(Megagram, "Mg", 1_000_000, Megagrams, MEGAGRAM);
si_gram!(Gigagram, "Gg", 1_000_000_000, Gigagrams, GG);

/// Tonne (metric ton): `1 t = 1_000_000 g`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "t", dimension = Mass, scale = 1_000_000)]
pub struct Tonne;
/// Quantity measured in tonnes.
pub type Tonnes<T = f64> = Quantity<Tonne, T>;
/// One metric tonne.
pub const TONNE: Tonnes = Tonnes::new(1.0);

/// Carat: `1 ct = 1/5 g`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "ct", dimension = Mass, scale = 1 / 5)]
pub struct Carat;
/// Quantity measured in carats.
pub type Carats<T = f64> = Quantity<Carat, T>;
/// One carat.
pub const CT: Carats = Carats::new(1.0);

/// Grain: `1 gr = 64.79891 mg`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "gr", dimension = Mass, scale = 6_479_891 / 100_000_000)]
pub struct Grain;
/// Quantity measured in grains.
pub type Grains<T = f64> = Quantity<Grain, T>;
/// One grain.
pub const GR: Grains = Grains::new(1.0);

/// Avoirdupois pound: `1 lb = 453.59237 g`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "lb", dimension = Mass, scale = 45_359_237 / 100_000)]
pub struct Pound;
/// Quantity measured in pounds.
pub type Pounds<T = f64> = Quantity<Pound, T>;
/// One pound.
pub const LB: Pounds = Pounds::new(1.0);

/// Avoirdupois ounce: `1 oz = 1/16 lb`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "oz", dimension = Mass, scale = 45_359_237 / 1_600_000)]
pub struct Ounce;
/// Quantity measured in ounces.
pub type Ounces<T = f64> = Quantity<Ounce, T>;
/// One ounce.
pub const OZ: Ounces = Ounces::new(1.0);

/// Avoirdupois stone: `1 st = 14 lb`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "st", dimension = Mass, scale = 635_029_318 / 100_000)]
pub struct Stone;
/// Quantity measured in stones.
pub type Stones<T = f64> = Quantity<Stone, T>;
/// One stone.
pub const ST: Stones = Stones::new(1.0);

/// Unified atomic mass unit (u), a.k.a. dalton (Da).
///
/// CODATA 2022 value `1.660_539_068_92e-27 kg`, stored in grams.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "u", dimension = Mass, scale = 166_053_906_892 / 10u128.pow(35))]
pub struct AtomicMassUnit;
/// Type alias shorthand for [`AtomicMassUnit`].
pub type Dalton = AtomicMassUnit;
/// Quantity measured in atomic mass units.
pub type AtomicMassUnits<T = f64> = Quantity<AtomicMassUnit, T>;
/// One atomic mass unit.
pub const U: AtomicMassUnits = AtomicMassUnits::new(1.0);

/// Nominal solar mass (IAU 2015 Resolution B3): `1.988416e33 g`.
///
/// This is a conversion constant, not a best estimate of the Sun's true mass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "M☉", dimension = Mass, scale = 1_988_416 * 10u128.pow(27))]
pub struct SolarMass;
/// A quantity measured in solar masses.
pub type SolarMasses<T = f64> = Quantity<SolarMass, T>;
/// One nominal solar mass.
pub const MSUN: SolarMasses = SolarMasses::new(1.0);

// Atomic mass units and solar masses are left out. The ratio of a gigagram to an atomic mass unit and that of a
// solar mass to a nanogram both overflow 128 bits.
crate::impl_unit_conversions!(
    Gram, Nanogram, Microgram, Milligram, Centigram, Decigram, Decagram, Hectogram, Kilogram, Megagram, Gigagram,
    Tonne, Carat, Grain, Pound, Ounce, Stone,
);
