//! Algebraic properties of quantity arithmetic, checked with `proptest`.

use dimen::*;

use proptest::prelude::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

proptest! {
    // ─────────────────────────────────────────────────────────────────────────
    // Addition
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn sum_keeps_the_common_dimension(a in -1e6..1e6f64, b in -1e6..1e6f64) {
        let sum = Kilometers::new(a) + Meters::new(b);
        prop_assert_eq!(sum.dimension(), Meters::new(b).dimension());
        prop_assert_eq!(sum.dimension(), <dimension::Length as Dimension>::EXPONENTS);
    }

    #[test]
    fn sum_is_commutative_in_a_common_unit(a in -1e6..1e6f64, b in -1e6..1e6f64) {
        let left = (Kilometers::new(a) + Meters::new(b)).to::<Meter>();
        let right = (Meters::new(b) + Kilometers::new(a)).to::<Meter>();
        prop_assert!(close(left.amount(), right.amount()));
    }

    #[test]
    fn sum_is_commutative_for_integers(a in -1_000_000i64..1_000_000, b in -1_000_000i64..1_000_000) {
        let x = Grams::new(a) + Kilograms::new(b);
        let y = Kilograms::new(b).to::<Gram>() + Grams::new(a);
        prop_assert_eq!(x, y);
    }

    #[test]
    fn sum_is_associative_for_integers(
        a in -1_000_000i64..1_000_000,
        b in -1_000_000i64..1_000_000,
        c in -1_000_000i64..1_000_000,
    ) {
        let mg = Milligrams::new(a);
        let g = Grams::new(b);
        let kg = Kilograms::new(c);
        prop_assert_eq!((mg + g) + kg, mg + (g + kg));
        prop_assert_eq!(((mg + g) + kg).amount(), a + b * 1000 + c * 1_000_000);
    }

    #[test]
    fn zero_is_the_additive_identity(a in any::<i32>(), b in -1e12..1e12f64) {
        prop_assert_eq!(Meters::new(a) + Meters::<i32>::ZERO, Meters::new(a));
        prop_assert_eq!((Hours::new(b) + Seconds::<f64>::ZERO).amount(), b);
    }

    #[test]
    fn difference_with_itself_is_zero(a in -1e12..1e12f64, n in -1_000_000i64..1_000_000) {
        let q = Kilometers::new(a);
        prop_assert_eq!((q - q).amount(), 0.0);
        prop_assert_eq!((q - q).to::<Millimeter>().amount(), 0.0);
        let m = Meters::new(n);
        prop_assert_eq!((m - m).to::<Nanometer>().amount(), 0);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Conversion
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn float_round_trip_recovers_the_amount(a in -1e12..1e12f64) {
        let back = Pounds::new(a).to::<Gram>().to::<Pound>();
        prop_assert!(close(back.amount(), a));
    }

    #[test]
    fn integer_round_trip_is_exact(a in -1_000_000_000i64..1_000_000_000) {
        let g = Grams::new(a);
        prop_assert_eq!(g.to::<Gram>(), g);
        let ms = Seconds::new(a).to::<Millisecond>();
        prop_assert_eq!(ms.amount(), a * 1000);
        prop_assert_eq!(ms, Seconds::new(a));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Multiplication
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn product_dimension_adds_exponents(a in 1e-3..1e3f64, b in 1e-3..1e3f64) {
        let x = Kilograms::new(a);
        let y: MetersPerSecond = Velocity::new(b);
        let p = x * y;
        let q = x / y;
        prop_assert_eq!(Some(p.dimension()), x.dimension().checked_mul(&y.dimension()));
        prop_assert_eq!(Some(q.dimension()), x.dimension().checked_div(&y.dimension()));
    }

    #[test]
    fn product_amount_is_exact_in_its_unit(a in -10_000i64..10_000, b in -10_000i64..10_000) {
        let p = Kilograms::new(a) * Hectograms::new(b);
        prop_assert_eq!(p.amount(), a * b);
        prop_assert_eq!(p.to::<Prod<Gram, Gram>>().amount(), a * b * 100_000);
    }

    #[test]
    fn integer_comparison_matches_exact_ordering(a in any::<i32>(), b in any::<i32>()) {
        let expected = (i64::from(a) * 1000).cmp(&i64::from(b));
        prop_assert_eq!(Kilograms::new(a).partial_cmp(&Grams::new(b)), Some(expected));
        let expected = (i64::from(a) * 127).cmp(&(i64::from(b) * 50));
        prop_assert_eq!(Inches::new(a).partial_cmp(&Centimeters::new(b)), Some(expected));
    }

    #[test]
    fn scalar_multiplication_is_linear(
        a in -1_000_000i64..1_000_000,
        b in -1_000_000i64..1_000_000,
        k in -1_000i64..1_000,
    ) {
        let q1 = Milligrams::new(a);
        let q2 = Grams::new(b);
        prop_assert_eq!(q1 * k + q2 * k, (q1 + q2) * k);
        prop_assert_eq!(k * (q1 + q2), (q1 + q2) * k);
    }
}
