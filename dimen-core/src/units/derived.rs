//! Named derived units.
//!
//! Derived dimensions have no base symbol of their own, so their canonical unit is the product of base units
//! (`g·m·s⁻²` for force). Because the canonical mass unit is the gram, the coherent SI units carry powers of ten:
//! one newton is `1 kg·m·s⁻² = 1000 g·m·s⁻²`.
//!
//! Quantities built by arithmetic convert to these units with [`Quantity::to`]:
//!
//! ```rust
//! use dimen_core::derived::Newton;
//! use dimen_core::length::Meters;
//! use dimen_core::mass::Kilograms;
//! use dimen_core::time::Seconds;
//!
//! let a = Meters::new(9.0) / (Seconds::new(1.0) * Seconds::new(1.0));
//! let f = Kilograms::new(2.0) * a;
//! assert_eq!(f.to::<Newton>().amount(), 18.0);
//! ```

use crate::dimension::{Area, ChargeDim, EnergyDim, ForceDim, FrequencyDim, PowerDim, PressureDim, Volume};
use crate::{Canonical, Per, Pow, Quantity};
use dimen_derive::Unit;
use typenum::P2;

/// Declares a named derived unit with its quantity alias.
macro_rules! derived_unit {
    ($(#[$meta:meta])* $name:ident, $sym:literal, $dim:ty, $scale:expr, $qty:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
        #[unit(symbol = $sym, dimension = $dim, scale = $scale)]
        pub struct $name;

        #[doc = concat!("A quantity measured in ", stringify!($name), " (", $sym, ").")]
        pub type $qty<T = f64> = Quantity<$name, T>;
    };
}

// ─────────────────────────────────────────────────────────────────────────────
// Geometry
// ─────────────────────────────────────────────────────────────────────────────

/// Square metre, the canonical area unit (`m²`).
pub type SquareMeter = Canonical<Area>;
/// A quantity measured in square metres.
pub type SquareMeters<T = f64> = Quantity<SquareMeter, T>;

/// Cubic metre, the canonical volume unit (`m³`).
pub type CubicMeter = Canonical<Volume>;
/// A quantity measured in cubic metres.
pub type CubicMeters<T = f64> = Quantity<CubicMeter, T>;

derived_unit!(
    /// Hectare (`10_000 m²`).
    Hectare, "ha", Area, 10_000, Hectares
);
derived_unit!(
    /// Litre (`1 dm³`).
    Liter, "L", Volume, 1 / 1000, Liters
);
derived_unit!(
    /// Millilitre (`1 cm³`).
    Milliliter, "mL", Volume, 1 / 1_000_000, Milliliters
);

// ─────────────────────────────────────────────────────────────────────────────
// Mechanics
// ─────────────────────────────────────────────────────────────────────────────

/// Acceleration expressed as `N / D²`, e.g. `Acceleration<Meter, Second>` is `m/s²`.
pub type Acceleration<N, D, T = f64> = Quantity<Per<N, Pow<D, P2>>, T>;

derived_unit!(
    /// Newton (`kg·m·s⁻²`).
    Newton, "N", ForceDim, 1000, Newtons
);
derived_unit!(
    /// Kilonewton.
    Kilonewton, "kN", ForceDim, 1_000_000, Kilonewtons
);
derived_unit!(
    /// Joule (`N·m`).
    Joule, "J", EnergyDim, 1000, Joules
);
derived_unit!(
    /// Kilojoule.
    Kilojoule, "kJ", EnergyDim, 1_000_000, Kilojoules
);
derived_unit!(
    /// Watt (`J/s`).
    Watt, "W", PowerDim, 1000, Watts
);
derived_unit!(
    /// Milliwatt.
    Milliwatt, "mW", PowerDim, 1, Milliwatts
);
derived_unit!(
    /// Kilowatt.
    Kilowatt, "kW", PowerDim, 1_000_000, Kilowatts
);
derived_unit!(
    /// Pascal (`N/m²`).
    Pascal, "Pa", PressureDim, 1000, Pascals
);
derived_unit!(
    /// Kilopascal.
    Kilopascal, "kPa", PressureDim, 1_000_000, Kilopascals
);
derived_unit!(
    /// Bar (`100_000 Pa`).
    Bar, "bar", PressureDim, 100_000_000, Bars
);

// ─────────────────────────────────────────────────────────────────────────────
// Frequency and charge
// ─────────────────────────────────────────────────────────────────────────────

derived_unit!(
    /// Hertz (`s⁻¹`).
    Hertz, "Hz", FrequencyDim, 1, Hertzes
);
derived_unit!(
    /// Kilohertz.
    Kilohertz, "kHz", FrequencyDim, 1000, Kilohertzes
);
derived_unit!(
    /// Coulomb (`A·s`).
    Coulomb, "C", ChargeDim, 1, Coulombs
);

crate::impl_unit_conversions!(SquareMeter, Hectare);
crate::impl_unit_conversions!(CubicMeter, Liter, Milliliter);
crate::impl_unit_conversions!(Newton, Kilonewton);
crate::impl_unit_conversions!(Joule, Kilojoule);
crate::impl_unit_conversions!(Watt, Milliwatt, Kilowatt);
crate::impl_unit_conversions!(Pascal, Kilopascal, Bar);
crate::impl_unit_conversions!(Hertz, Kilohertz);
