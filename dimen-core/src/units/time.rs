//! Time units.
//!
//! The canonical scaling unit for this dimension is [`Second`] (`Second::SCALE == 1`).
//!
//! Calendar-like units use fixed conventional lengths: a day is `86_400 s` and a Julian year is `365.25 d`. Leap
//! seconds and civil calendars are out of scope.
//!
//! ```rust
//! use dimen_core::time::{Hours, Minute, Second};
//!
//! let h = Hours::<i64>::new(2);
//! assert_eq!(h.to::<Minute>().amount(), 120);
//! assert_eq!(h.to::<Second>().amount(), 7200);
//! ```

use crate::dimension::Time;
use crate::{Quantity, Unit};
use dimen_derive::Unit;

pub use crate::unit::Second;

/// Marker trait for any [`Unit`] whose dimension is [`Time`].
pub trait TimeUnit: Unit<Dim = Time> {}
impl<T: Unit<Dim = Time>> TimeUnit for T {}

/// A quantity measured in seconds.
pub type Seconds<T = f64> = Quantity<Second, T>;
/// One second.
pub const SEC: Seconds = Seconds::new(1.0);

/// Declares a time unit together with its quantity alias and a one-unit constant.
macro_rules! time_unit {
    ($(#[$meta:meta])* $name:ident, $sym:literal, $scale:expr, $qty:ident, $one:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
        #[unit(symbol = $sym, dimension = Time, scale = $scale)]
        pub struct $name;

        #[doc = concat!("A quantity measured in ", stringify!($name), " (", $sym, ").")]
        pub type $qty<T = f64> = Quantity<$name, T>;

        #[doc = concat!("One ", stringify!($name), ".")]
        pub const $one: $qty = $qty::new(1.0);
    };
}

time_unit!(
    /// Nanosecond (`1e-9 s`).
    Nanosecond, "ns", 1 / 1_000_000_000, Nanoseconds, NS
);
time_unit!(
    /// Microsecond (`1e-6 s`).
    Microsecond, "µs", 1 / 1_000_000, Microseconds, US
);
time_unit!(
    /// Millisecond (`1e-3 s`).
    Millisecond, "ms", 1 / 1000, Milliseconds, MS
);
time_unit!(
    /// Minute (`60 s`).
    Minute, "min", 60, Minutes, MIN
);
time_unit!(
    /// Hour (`3600 s`).
    Hour, "h", 3600, Hours, HOUR
);
time_unit!(
    /// Day (`86_400 s`).
    Day, "d", 86_400, Days, DAY
);
time_unit!(
    /// Week (`7 d`).
    Week, "wk", 604_800, Weeks, WEEK
);
time_unit!(
    /// Julian year (`365.25 d`), the year used by the light-year.
    JulianYear, "a", 31_557_600, JulianYears, YEAR
);

crate::impl_unit_conversions!(
    Second,
    Nanosecond,
    Microsecond,
    Millisecond,
    Minute,
    Hour,
    Day,
    Week,
    JulianYear,
);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    #[test]
    fn hour_to_seconds() {
        assert_eq!(HOUR.to::<Second>().amount(), 3600.0);
        assert_eq!(Hours::<u16>::new(2).to::<Minute>().amount(), 120);
    }

    #[test]
    fn seconds_to_hours() {
        let h = Seconds::new(5400.0).to::<Hour>();
        assert_abs_diff_eq!(h.amount(), 1.5, epsilon = 1e-12);
    }

    #[test]
    fn julian_year_in_days() {
        assert_abs_diff_eq!(YEAR.to::<Day>().amount(), 365.25, epsilon = 1e-12);
        assert_eq!(JulianYears::<u64>::new(1).to::<Millisecond>().amount(), 31_557_600_000);
    }

    #[test]
    fn weeks_in_integer_hours() {
        let w: Hours<i32> = Weeks::<i32>::new(2).into();
        assert_eq!(w.amount(), 336);
    }

    #[test]
    fn nanoseconds_display() {
        assert_eq!(Nanoseconds::<u64>::new(1500).to_string(), "1500 ns");
        assert_eq!(Microseconds::new(2.5).to_string(), "2.5 µs");
    }

    #[test]
    fn mixed_sum_keeps_left_unit() {
        let total = Minutes::new(1.0) + Seconds::new(30.0);
        assert_eq!(total.amount(), 1.5);
        assert_eq!(total.to_string(), "1.5 min");
    }

    proptest! {
        #[test]
        fn prop_roundtrip_s_ms(s in -1e6..1e6f64) {
            let back = Seconds::new(s).to::<Millisecond>().to::<Second>();
            prop_assert!((back.amount() - s).abs() < 1e-9 * s.abs().max(1.0));
        }

        #[test]
        fn prop_days_to_seconds_is_exact(d in 0i64..1_000_000) {
            prop_assert_eq!(Days::new(d).to::<Second>().amount(), d * 86_400);
        }
    }
}
