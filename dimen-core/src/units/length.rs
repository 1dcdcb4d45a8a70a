//! Length units.
//!
//! The canonical scaling unit for this dimension is [`Meter`] (`Meter::SCALE == 1`). All other length units are
//! expressed as exact ratios to metres.
//!
//! This module provides:
//!
//! - **SI ladder**: metric prefixes for metres from nano- to giga-.
//! - **Common defined units**: inch, foot, yard, (statute) mile, nautical mile.
//! - **Astronomy**: astronomical unit (au) and light-year (ly).
//!
//! Notes on definitions used here:
//!
//! - **Astronomical unit (au)** is **exactly** `149_597_870_700 m` (IAU 2012).
//! - **Light-year (ly)** is derived from the exact speed of light `c = 299_792_458 m/s` and one **Julian year**
//!   (`365.25 d`, `d = 86400 s`), which makes it an integer number of metres.
//! - **Imperial units** follow the international definitions (the international inch is exactly `0.0254 m`).
//!
//! ```rust
//! use dimen_core::length::{AstronomicalUnits, Kilometer};
//!
//! let au = AstronomicalUnits::new(1.0);
//! let km = au.to::<Kilometer>();
//! assert_eq!(km.amount(), 149_597_870.7);
//! ```

use crate::dimension::Length;
use crate::{Quantity, Unit};
use dimen_derive::Unit;

pub use crate::unit::Meter;

/// Marker trait for any [`Unit`] whose dimension is [`Length`].
pub trait LengthUnit: Unit<Dim = Length> {}
impl<T: Unit<Dim = Length>> LengthUnit for T {}

// ─────────────────────────────────────────────────────────────────────────────
// SI base unit and prefixes
// ─────────────────────────────────────────────────────────────────────────────

/// A quantity measured in metres.
pub type Meters<T = f64> = Quantity<Meter, T>;
/// One metre.
pub const M: Meters = Meters::new(1.0);

/// Kilometre (`1000 m`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "km", dimension = Length, scale = 1000)]
pub struct Kilometer;
/// Type alias shorthand for [`Kilometer`].
pub type Km = Kilometer;
/// A quantity measured in kilometres.
pub type Kilometers<T = f64> = Quantity<Km, T>;
/// One kilometre.
pub const KM: Kilometers = Kilometers::new(1.0);

/// Centimetre (`1/100 m`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "cm", dimension = Length, scale = 1 / 100)]
pub struct Centimeter;
/// Type alias shorthand for [`Centimeter`].
pub type Cm = Centimeter;
/// A quantity measured in centimetres.
pub type Centimeters<T = f64> = Quantity<Cm, T>;
/// One centimetre.
pub const CM: Centimeters = Centimeters::new(1.0);

/// Millimetre (`1/1000 m`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "mm", dimension = Length, scale = 1 / 1000)]
pub struct Millimeter;
/// Type alias shorthand for [`Millimeter`].
pub type Mm = Millimeter;
/// A quantity measured in millimetres.
pub type Millimeters<T = f64> = Quantity<Mm, T>;
/// One millimetre.
pub const MM: Millimeters = Millimeters::new(1.0);

/// Declares a metre-based SI prefix unit that has no shorthand alias.
macro_rules! si_meter {
    ($name:ident, $sym:literal, $scale:expr, $qty:ident, $one:ident) => {
        #[doc = concat!("SI length unit `", stringify!($name), "` (`1 ", $sym, " = ", stringify!($scale), " m`).")]
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
        #[unit(symbol = $sym, dimension = Length, scale = $scale)]
        pub struct $name;

        #[doc = concat!("A quantity measured in ", stringify!($name), " (", $sym, ").")]
        pub type $qty<T = f64> = Quantity<$name, T>;

        #[doc = concat!("One ", stringify!($name), ".")]
        pub const $one: $qty = $qty::new(1.0);
    };
}

si_meter!(Nanometer, "nm", 1 / 1_000_000_000, Nanometers, NM);
si_meter!(Micrometer, "µm", 1 / 1_000_000, Micrometers, UM);
si_meter!(Decimeter, "dm", 1 / 10, Decimeters, DM);
si_meter!(Megameter, "Mm", 1_000_000, Megameters, MEGAMETER);
si_meter!(Gigameter, "Gm", 1_000_000_000, Gigameters, GM);

// ─────────────────────────────────────────────────────────────────────────────
// Imperial and nautical units
// ─────────────────────────────────────────────────────────────────────────────

/// International inch (`0.0254 m`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "in", dimension = Length, scale = 254 / 10_000)]
pub struct Inch;
/// A quantity measured in inches.
pub type Inches<T = f64> = Quantity<Inch, T>;
/// One inch.
pub const INCH: Inches = Inches::new(1.0);

/// International foot (`12 in`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "ft", dimension = Length, scale = 3048 / 10_000)]
pub struct Foot;
/// A quantity measured in feet.
pub type Feet<T = f64> = Quantity<Foot, T>;
/// One foot.
pub const FT: Feet = Feet::new(1.0);

/// International yard (`3 ft`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "yd", dimension = Length, scale = 9144 / 10_000)]
pub struct Yard;
/// A quantity measured in yards.
pub type Yards<T = f64> = Quantity<Yard, T>;
/// One yard.
pub const YD: Yards = Yards::new(1.0);

/// Statute mile (`1760 yd`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "mi", dimension = Length, scale = 1_609_344 / 1000)]
pub struct Mile;
/// A quantity measured in miles.
pub type Miles<T = f64> = Quantity<Mile, T>;
/// One mile.
pub const MI: Miles = Miles::new(1.0);

/// Nautical mile (`1852 m`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "nmi", dimension = Length, scale = 1852)]
pub struct NauticalMile;
/// A quantity measured in nautical miles.
pub type NauticalMiles<T = f64> = Quantity<NauticalMile, T>;
/// One nautical mile.
pub const NMI: NauticalMiles = NauticalMiles::new(1.0);

// ─────────────────────────────────────────────────────────────────────────────
// Astronomy
// ─────────────────────────────────────────────────────────────────────────────

/// Astronomical unit (au), exactly `149_597_870_700 m`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "au", dimension = Length, scale = 149_597_870_700)]
pub struct AstronomicalUnit;
/// Type alias shorthand for [`AstronomicalUnit`].
pub type Au = AstronomicalUnit;
/// A quantity measured in astronomical units.
pub type AstronomicalUnits<T = f64> = Quantity<Au, T>;
/// One astronomical unit.
pub const AU: AstronomicalUnits = AstronomicalUnits::new(1.0);

/// Light-year (ly): `c · 365.25 d`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "ly", dimension = Length, scale = 9_460_730_472_580_800)]
pub struct LightYear;
/// Type alias shorthand for [`LightYear`].
pub type Ly = LightYear;
/// A quantity measured in light-years.
pub type LightYears<T = f64> = Quantity<Ly, T>;
/// One light-year.
pub const LY: LightYears = LightYears::new(1.0);

crate::impl_unit_conversions!(
    Meter,
    Nanometer,
    Micrometer,
    Millimeter,
    Centimeter,
    Decimeter,
    Kilometer,
    Megameter,
    Gigameter,
    Inch,
    Foot,
    Yard,
    Mile,
    NauticalMile,
    AstronomicalUnit,
    LightYear,
);
