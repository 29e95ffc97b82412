use proptest::prelude::*;
use proptest::strategy::Strategy;
use stable_math_core::trig::{
    acospi, asinpi, atanpi, cosm1, cosm1pi, cospi, sinc, sincpi, sinpi, tanpi,
};

/// Multiples of 2^-10 in `[-1000, 1000]`; shifting them by an integer is exact.
fn dyadic_strategy() -> impl Strategy<Value = f64> {
    (-1_024_000i32..=1_024_000).prop_map(|k| k as f64 / 1024.0)
}

proptest! {
    /// Property: `sinpi(x ∓ 1) == -sinpi(x)` and `cospi(x ∓ 1) == -cospi(x)` for `|x| >= 1`.
    #[test]
    fn unit_shift_flips_sign(x in dyadic_strategy()) {
        prop_assume!(x.abs() >= 1.0);
        let shifted = if x < 0.0 { x + 1.0 } else { x - 1.0 };

        prop_assert_eq!(sinpi(shifted), -sinpi(x));
        prop_assert_eq!(cospi(shifted), -cospi(x));
    }

    /// Property: `tanpi` has period 1 away from its poles.
    #[test]
    fn tanpi_has_unit_period(k in 0i32..1024, shift in 0i32..1000) {
        let x = k as f64 / 1024.0;
        prop_assume!(x != 0.5);

        let t = tanpi(x);
        prop_assert_eq!(tanpi(x + shift as f64), t);
    }

    /// Property: half-integers hit the extrema exactly, however far out.
    #[test]
    fn half_integers_are_exact(n in -(1i64 << 40)..(1i64 << 40)) {
        let sign = if n % 2 == 0 { 1.0 } else { -1.0 };
        prop_assert_eq!(sinpi(n as f64 + 0.5), sign);
        prop_assert_eq!(cospi(n as f64), sign);
    }

    /// Property: `sin^2 + cos^2 == 1`.
    #[test]
    fn pythagorean_identity(x in -1e6f64..1e6) {
        let s = sinpi(x);
        let c = cospi(x);
        prop_assert!((s * s + c * c - 1.0).abs() <= 1e-15);
    }

    /// Property: `asinpi` and `atanpi` are odd, and `asinpi + acospi == 1/2`.
    #[test]
    fn inverse_symmetries(x in -1.0f64..=1.0, y in -1e6f64..1e6) {
        prop_assert_eq!(asinpi(-x), -asinpi(x));
        prop_assert!((asinpi(x) + acospi(x) - 0.5).abs() <= 1e-15);
        prop_assert_eq!(atanpi(-y), -atanpi(y));
    }

    /// Property: `atanpi` inverts `tanpi` on the principal branch.
    #[test]
    fn atanpi_inverts_tanpi(x in -0.49f64..0.49) {
        prop_assert!((atanpi(tanpi(x)) - x).abs() <= 1e-14);
    }

    /// Property: `asinpi` inverts `sinpi` on `[-1/2, 1/2]`. Near `±1/2` one
    /// ulp of `sinpi` moves the angle by up to `sqrt(2 * 2^-53) / π`.
    #[test]
    fn asinpi_inverts_sinpi(x in -0.5f64..=0.5) {
        prop_assert!((asinpi(sinpi(x)) - x).abs() <= 1e-8);
    }

    /// Property: `cos(t) - 1 == -2 sin^2(t/2)` across the half-angle region
    /// and just past its upper edge.
    #[test]
    fn cosm1_matches_half_angle_identity(x in prop_oneof![-1.0f64..-1e-8, 1e-8f64..1.0]) {
        let half = (x / 2.0).sin();
        let expected = -2.0 * half * half;
        prop_assert!((cosm1(x) - expected).abs() <= expected.abs() * 1e-14);

        let half_pi = sinpi(x / 2.0);
        let expected_pi = -2.0 * half_pi * half_pi;
        prop_assert!((cosm1pi(x) - expected_pi).abs() <= expected_pi.abs() * 1e-14);
    }

    /// Property: `sinc` and `sincpi` are even and bounded by 1.
    #[test]
    fn sinc_is_even_and_bounded(x in -1e6f64..1e6) {
        prop_assert_eq!(sinc(-x), sinc(x));
        prop_assert_eq!(sincpi(-x), sincpi(x));
        prop_assert!(sinc(x).abs() <= 1.0 + 1e-15);
        prop_assert!(sincpi(x).abs() <= 1.0 + 1e-15);
    }
}
