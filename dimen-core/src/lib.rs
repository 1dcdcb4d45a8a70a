//! Core type system for statically checked physical quantities.
//!
//! `dimen-core` provides an exact, zero-cost units model:
//!
//! - A *dimension* is a type-level vector of seven integer exponents ([`Dim`]).
//! - A *unit* is a zero-sized marker type implementing [`Unit`]: a dimension plus an exact rational [`Ratio`] scale.
//! - A value tagged with a unit is a [`Quantity<U, T>`], backed by any primitive number `T` (default `f64`).
//! - Conversion is an explicit, type-checked scaling via [`Quantity::to`]; mixed-unit arithmetic converts
//!   implicitly, following the rules documented on the [`quantity`] module.
//!
//! Most users should depend on `dimen` (the facade crate) unless they need direct access to these primitives.
//!
//! # What this crate solves
//!
//! - Compile-time separation of dimensions; adding a mass to a length does not compile.
//! - Exact unit scales. Conversion factors are rationals folded at compile time, so `kg → g` on an `i32` amount is
//!   an exact integer multiplication, and `g → kg` on an `i32` amount is rejected before the program runs.
//! - Numeric promotion: `f64 kg + i32 hg` is computed and stored as `f64`.
//!
//! # What this crate does not try to solve
//!
//! - Parsing units from strings.
//! - Affine units (degrees Celsius and other offset scales).
//! - Uncertainty propagation.
//!
//! # Quick start
//!
//! ```rust
//! use dimen_core::mass::{Hectogram, Kilogram};
//! use dimen_core::Quantity;
//!
//! let q1 = Quantity::<Kilogram, f64>::new(3000.0);
//! let q2 = Quantity::<Hectogram, i32>::new(72);
//! assert_eq!((q1 + q2).to_string(), "3007.2 kg");
//! assert_eq!((q1 * q2).to_string(), "21600000 kg·g");
//! ```
//!
//! Compose derived units using `/`:
//!
//! ```rust
//! use dimen_core::length::Meters;
//! use dimen_core::time::Seconds;
//! use dimen_core::velocity::MetersPerSecond;
//!
//! let v: MetersPerSecond = Meters::new(100.0) / Seconds::new(20.0);
//! assert_eq!(v.amount(), 5.0);
//! ```
//!
//! # `no_std`
//!
//! Disable default features to build `dimen-core` without `std` (`alloc` is still required):
//!
//! ```toml
//! [dependencies]
//! dimen-core = { version = "0.1.0", default-features = false }
//! ```
//!
//! When `std` is disabled, floating-point math that isn't available in `core` is provided via `libm`.
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support.
//! - `serde`: enables `serde` support for `Quantity<U, T>`; serialization is the raw amount only, unless the field
//!   uses [`serde_with_unit`].
//!
//! # Panics and errors
//!
//! Typed operations never return `Result`. Dimension mismatches, lossy integer conversions, scale overflow and
//! narrowing representations are compile-time errors. Amount overflow follows the representation's own semantics.
//! The type-erased [`dynamic`] layer reports the same failures at runtime as [`QuantityError`].

#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(not(feature = "std"))]
extern crate libm;

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

pub mod dimension;
pub mod dynamic;
mod error;
mod macros;
pub mod quantity;
pub mod ratio;
pub mod repr;
pub mod unit;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use dimension::{Dim, DimDiv, DimMul, DimPow, Dimension, DimensionVector, Dimensionless};
pub use dynamic::{DynQuantity, DynUnit};
pub use error::{QuantityError, QuantityResult};
pub use quantity::Quantity;
pub use ratio::Ratio;
pub use repr::{Float, FloatArithmetic, IntegerArithmetic, Promote, Representation};
pub use unit::{
    Ampere, Candela, Canonical, Conversion, Gram, Kelvin, Meter, Mole, Normalize, Normalized, Per, Pow, Prod, Second,
    Symbol, Unit, Unitless,
};

#[cfg(feature = "serde")]
pub use quantity::serde_with_unit;

// ─────────────────────────────────────────────────────────────────────────────
// Predefined unit modules (grouped by dimension)
// ─────────────────────────────────────────────────────────────────────────────

/// Predefined unit modules (grouped by dimension).
///
/// These are defined in `dimen-core` so they can implement conversions without running into Rust's orphan rules.
pub mod units;

pub use units::current;
pub use units::derived;
pub use units::length;
pub use units::luminous;
pub use units::mass;
pub use units::substance;
pub use units::temperature;
pub use units::time;
pub use units::unitless;
pub use units::velocity;
