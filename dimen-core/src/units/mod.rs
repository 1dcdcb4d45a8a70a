//! Predefined unit modules grouped by dimension.
//!
//! `dimen-core` ships a set of built-in units so that conversions and formatting work out of the box without
//! downstream crates having to fight Rust’s orphan rules. Every scale is an exact rational relative to the canonical
//! unit of its dimension.
//!
//! ## Modules
//!
//! - [`mass`]: mass units (gram is the canonical scaling unit).
//! - [`length`]: length units (metre is the canonical scaling unit) plus imperial and astronomical lengths.
//! - [`time`]: time units (SI second is the canonical scaling unit).
//! - [`current`]: electric current units (ampere).
//! - [`temperature`]: absolute temperature units (kelvin).
//! - [`substance`]: amount-of-substance units (mole).
//! - [`luminous`]: luminous intensity units (candela).
//! - [`derived`]: named derived SI units (newton, joule, watt, pascal, hertz, coulomb, litre).
//! - [`velocity`]: velocity aliases (`Length / Time`) built from [`length`] and [`time`].
//! - [`unitless`]: helpers for dimensionless quantities.

pub mod current;
pub mod derived;
pub mod length;
pub mod luminous;
pub mod mass;
pub mod substance;
pub mod temperature;
pub mod time;
pub mod unitless;
pub mod velocity;
