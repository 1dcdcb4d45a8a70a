//! Statically typed physical quantities with exact unit conversion.
//!
//! `dimen` is the user-facing crate in this workspace. It re-exports the full API from `dimen-core` plus every
//! predefined unit module (mass, length, time, the other SI base dimensions and common derived units).
//!
//! The core idea is: a value is always a `Quantity<U, T>`, where `U` is a zero-sized type describing the unit and `T`
//! is any primitive number. Dimensions and unit scales live in the type system, so the only runtime cost is the
//! arithmetic on `T` itself.
//!
//! # What this crate solves
//!
//! - Prevents mixing incompatible dimensions (you can’t add metres to grams).
//! - Makes unit conversion explicit, exact and type-checked (`to::<TargetUnit>()`).
//! - Lets integer and floating-point quantities mix, promoting to the wider representation.
//!
//! # What this crate does not try to solve
//!
//! - Parsing units or quantities from strings.
//! - Affine units such as degrees Celsius.
//! - Automatic renaming of composite units; `kg·m·s⁻²` becomes newtons through `to::<Newton>()`.
//!
//! # Quick start
//!
//! Mixed units and representations:
//!
//! ```rust
//! use dimen::{Hectogram, Kilogram, Quantity};
//!
//! let q1 = Quantity::<Kilogram, f64>::new(3000.0);
//! let q2 = Quantity::<Hectogram, i32>::new(72);
//!
//! // Addition keeps the left unit and promotes to `f64`.
//! assert_eq!((q1 + q2).amount(), 3007.2);
//! assert_eq!((q1 - q2).amount(), 2992.8);
//!
//! // With an `f64` result, multiplication expresses the right operand in grams.
//! assert_eq!((q1 * q2).to_string(), "21600000 kg·g");
//! ```
//!
//! Integer products never convert, so any pair of units multiplies exactly:
//!
//! ```rust
//! use dimen::{Meters, Milliseconds, Millimeters};
//!
//! let area = Millimeters::<i32>::new(5) * Millimeters::<i32>::new(10);
//! assert_eq!(area.to_string(), "50 mm·mm");
//!
//! let pace = Meters::<i32>::new(6) / Milliseconds::<i32>::new(2);
//! assert_eq!(pace.to_string(), "3 m/ms");
//! ```
//!
//! Compose and use derived units (velocity = length / time):
//!
//! ```rust
//! use dimen::{Kilometer, Kilometers, Second, Seconds};
//! use dimen::velocity::Velocity;
//!
//! let d = Kilometers::new(1_000.0);
//! let t = Seconds::new(100.0);
//! let v: Velocity<Kilometer, Second> = d / t;
//! assert!((v.amount() - 10.0).abs() < 1e-12);
//! ```
//!
//! # Incorrect usage (type errors)
//!
//! Different dimensions never combine additively:
//!
//! ```compile_fail
//! use dimen::{Kilograms, Meters};
//!
//! let m = Kilograms::new(1.0);
//! let l = Meters::new(1.0);
//! let _ = m + l; // mass and length have different dimensions
//! ```
//!
//! Integer conversions into a coarser unit would truncate, so they are rejected:
//!
//! ```compile_fail
//! use dimen::{Hectograms, Kilogram};
//!
//! let hg = Hectograms::<i32>::new(72);
//! let _ = hg.to::<Kilogram>(); // 72 hg is not a whole number of kilograms
//! ```
//!
//! The same applies to the right operand of an addition, which is converted into the left unit:
//!
//! ```compile_fail
//! use dimen::{Hectograms, Kilograms};
//!
//! let _ = Kilograms::<i32>::new(3) + Hectograms::<i32>::new(5);
//! ```
//!
//! Signed and unsigned integers have no common representation:
//!
//! ```compile_fail
//! use dimen::Meters;
//!
//! let _ = Meters::<i32>::new(5) + Meters::<u32>::new(10);
//! ```
//!
//! Compound assignment cannot narrow the left representation:
//!
//! ```compile_fail
//! use dimen::Meters;
//!
//! let mut m = Meters::<i32>::new(5);
//! m += Meters::<f64>::new(0.5);
//! ```
//!
//! A conversion factor that does not fit in 128 bits is a scale overflow:
//!
//! ```compile_fail
//! use dimen::{Nanogram, SolarMasses};
//!
//! let _ = SolarMasses::new(1.0).to::<Nanogram>(); // about 2·10⁴² ng
//! ```
//!
//! Dimension exponents are limited to `[-8, 8]`:
//!
//! ```compile_fail
//! use dimen::typenum::P9;
//! use dimen::Meters;
//!
//! let _ = Meters::new(1.0).pow::<P9>();
//! ```
//!
//! # Modules
//!
//! Units are grouped by dimension under modules (also re-exported at the crate root for convenience):
//!
//! - `dimen::mass` (grams, kilograms, pounds, solar mass, …)
//! - `dimen::length` (metres, kilometres, inches, AU, light-year, …)
//! - `dimen::time` (seconds, hours, days, Julian years, …)
//! - `dimen::current`, `dimen::temperature`, `dimen::substance`, `dimen::luminous`
//! - `dimen::derived` (newton, joule, watt, pascal, hertz, coulomb, litre)
//! - `dimen::velocity` (`Length / Time` aliases)
//! - `dimen::unitless` (dimensionless helpers)
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support in `dimen-core`.
//! - `serde`: enables `serde` support for `Quantity<U, T>`; serialization is the raw amount only, unless a field opts
//!   into `serde_with_unit`.
//!
//! Disable default features for `no_std`:
//!
//! ```toml
//! [dependencies]
//! dimen = { version = "0.1.0", default-features = false }
//! ```
//!
//! # Panics and errors
//!
//! Typed operations do not return `Result`: every structural mistake is a compile-time error. Integer amounts follow
//! Rust's overflow semantics, floats follow IEEE-754. The type-erased [`DynQuantity`] reports the same mistakes at
//! runtime as [`QuantityError`].
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub use dimen_core::*;

/// Derive macro used by `dimen-core` to define unit marker types.
///
/// This macro expands in terms of `crate::Unit` and `crate::Ratio`, so it is intended for use inside `dimen-core`
/// (or crates exposing the same crate-root API). Most users should implement [`Unit`](trait@Unit) by hand instead.
pub use dimen_derive::Unit;

/// Type-level integers for [`Quantity::pow`] and dimension declarations.
pub use typenum;

pub use dimen_core::units::current;
pub use dimen_core::units::derived;
pub use dimen_core::units::length;
pub use dimen_core::units::luminous;
pub use dimen_core::units::mass;
pub use dimen_core::units::substance;
pub use dimen_core::units::temperature;
pub use dimen_core::units::time;
pub use dimen_core::units::unitless;
pub use dimen_core::units::velocity;

pub use dimen_core::units::current::*;
pub use dimen_core::units::derived::*;
pub use dimen_core::units::length::*;
pub use dimen_core::units::luminous::*;
pub use dimen_core::units::mass::*;
pub use dimen_core::units::substance::*;
pub use dimen_core::units::temperature::*;
pub use dimen_core::units::time::*;
pub use dimen_core::units::unitless::*;
pub use dimen_core::units::velocity::*;
