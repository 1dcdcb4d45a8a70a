//! Velocity unit aliases (`Length / Time`).
//!
//! Velocity units are *pure type aliases* over [`Per`] using length and time units already defined elsewhere in the
//! crate. No standalone velocity units are introduced.
//!
//! Dividing a floating-point length by a time yields a velocity per *second*, because the divisor is expressed in
//! its canonical unit. Integer quotients keep the divisor's unit. Use [`Quantity::to`] to move to another velocity unit:
//!
//! ```rust
//! use dimen_core::length::{Kilometer, Kilometers};
//! use dimen_core::time::{Hour, Hours};
//! use dimen_core::velocity::KilometersPerHour;
//! use dimen_core::Per;
//!
//! let v = Kilometers::new(90.0) / Hours::new(2.0);
//! let kmh: KilometersPerHour = v.to::<Per<Kilometer, Hour>>();
//! assert!((kmh.amount() - 45.0).abs() < 1e-12);
//! ```

use crate::dimension::VelocityDim;
use crate::length::{Kilometer, Meter, Mile, NauticalMile};
use crate::time::{Hour, Second};
use crate::{Per, Quantity, Unit};

/// Marker trait for any unit whose dimension is [`VelocityDim`].
pub trait VelocityUnit: Unit<Dim = VelocityDim> {}
impl<T: Unit<Dim = VelocityDim>> VelocityUnit for T {}

/// A velocity quantity parameterized by length and time units.
///
/// ```rust
/// use dimen_core::length::{Kilometer, Meter};
/// use dimen_core::time::{Hour, Second};
/// use dimen_core::velocity::Velocity;
///
/// let v1: Velocity<Meter, Second> = Velocity::new(10.0);
/// let v2: Velocity<Kilometer, Hour> = Velocity::new(36.0);
/// assert_eq!(v1, v2);
/// ```
pub type Velocity<N, D, T = f64> = Quantity<Per<N, D>, T>;

/// Metres per second.
pub type MetersPerSecond<T = f64> = Velocity<Meter, Second, T>;
/// Kilometres per second.
pub type KilometersPerSecond<T = f64> = Velocity<Kilometer, Second, T>;
/// Kilometres per hour.
pub type KilometersPerHour<T = f64> = Velocity<Kilometer, Hour, T>;
/// Miles per hour.
pub type MilesPerHour<T = f64> = Velocity<Mile, Hour, T>;
/// Knots (nautical miles per hour).
pub type Knots<T = f64> = Velocity<NauticalMile, Hour, T>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::length::{AstronomicalUnit, Kilometers, Meters};
    use crate::time::{Day, Hours, Seconds};
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;

    // ─────────────────────────────────────────────────────────────────────────────
    // Basic velocity conversions
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn km_per_s_to_m_per_s() {
        let v: KilometersPerSecond = Velocity::new(1.0);
        let v_mps: MetersPerSecond = v.to();
        assert_eq!(v_mps.amount(), 1000.0);
    }

    #[test]
    fn kmh_to_mps() {
        let v: KilometersPerHour = Velocity::new(36.0);
        assert_abs_diff_eq!(v.to::<Per<Meter, Second>>().amount(), 10.0, epsilon = 1e-12);
    }

    #[test]
    fn knots_to_kmh() {
        let v: Knots = Velocity::new(1.0);
        assert_abs_diff_eq!(v.to::<Per<Kilometer, Hour>>().amount(), 1.852, epsilon = 1e-12);
    }

    #[test]
    fn integer_mph_to_feet_per_hour() {
        let v: MilesPerHour<u32> = Velocity::new(3);
        assert_eq!(v.to::<Per<crate::length::Foot, Hour>>().amount(), 15_840);
    }

    #[test]
    fn au_per_day_to_km_per_s() {
        let v: Velocity<AstronomicalUnit, Day> = Velocity::new(1.0);
        assert_relative_eq!(v.to::<Per<Kilometer, Second>>().amount(), 1731.456_836_805_555_6, max_relative = 1e-12);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Velocities produced by division
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn length_over_time_is_per_second() {
        let v: MetersPerSecond = Meters::new(100.0) / Seconds::new(20.0);
        assert_eq!(v.amount(), 5.0);
        assert_eq!(v.to_string(), "5 m/s");
    }

    #[test]
    fn divisor_is_normalized_to_seconds() {
        let v: KilometersPerSecond = Kilometers::new(7200.0) / Hours::new(1.0);
        assert_eq!(v.amount(), 2.0);
        assert_abs_diff_eq!(v.to::<Per<Kilometer, Hour>>().amount(), 7200.0, epsilon = 1e-9);
    }

    #[test]
    fn velocity_times_time_is_length() {
        let v: MetersPerSecond = Velocity::new(3.0);
        let d = v * Seconds::new(4.0);
        assert_eq!(d.to::<Meter>().amount(), 12.0);
        assert_eq!(d.to_string(), "12 (m/s)·s");
    }

    #[test]
    fn velocities_compare_across_units() {
        let walking: KilometersPerHour = Velocity::new(5.0);
        let running: MetersPerSecond = Velocity::new(3.0);
        assert!(walking < running);
    }

    proptest! {
        #[test]
        fn prop_roundtrip_mps_kmh(v in -1e6..1e6f64) {
            let q: MetersPerSecond = Velocity::new(v);
            let back = q.to::<Per<Kilometer, Hour>>().to::<Per<Meter, Second>>();
            prop_assert!((back.amount() - v).abs() < 1e-9 * v.abs().max(1.0));
        }
    }
}
