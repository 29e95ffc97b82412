use proptest::prelude::*;
use proptest::strategy::Strategy;
use stable_math_core::log_domain::{LogSumExpAccumulator, log_multiply_abs, log_sum_exp};

const RELATIVE_ERROR: f64 = 1e-12;

/// Values drawn from `[-500, 500]`: `exp` of each stays finite in plain f64,
/// so the naive formula is a usable reference.
fn exponent_strategy() -> impl Strategy<Value = f64> {
    -500.0f64..500.0
}

fn log_sum_exp_ref(x: &[f64]) -> f64 {
    x.iter().map(|v| v.exp()).sum::<f64>().ln()
}

/// Relative tolerance, widened to absolute near zero where the reference
/// itself is only accurate to a few ulps of 1.
fn assert_close(expected: f64, actual: f64) -> Result<(), TestCaseError> {
    let tol = RELATIVE_ERROR * expected.abs().max(1.0);
    prop_assert!(
        (actual - expected).abs() <= tol,
        "{} is not approximately equal to {}",
        actual,
        expected
    );
    Ok(())
}

/// `± m * 10^e` with `m` in `[1, 10)` and `e` in `[-200, 200]`.
fn wide_magnitude_strategy() -> impl Strategy<Value = f64> {
    (1.0f64..10.0, -200i32..=200, any::<bool>()).prop_map(|(m, e, negative)| {
        let v = m * 10f64.powi(e);
        if negative { -v } else { v }
    })
}

proptest! {
    /// Property: a single finite value is returned unchanged.
    #[test]
    fn singleton_is_identity(v in -1e300f64..1e300) {
        prop_assert_eq!(log_sum_exp(&[v]), v);
    }

    /// Property: two arguments agree with `ln(e^a + e^b)`.
    #[test]
    fn two_arguments_match_reference(a in exponent_strategy(), b in exponent_strategy()) {
        let expected = log_sum_exp_ref(&[a, b]);
        assert_close(expected, log_sum_exp(&[a, b]))?;
        assert_close(expected, log_sum_exp(&[b, a]))?;
    }

    /// Property: three arguments agree with `ln(e^a + e^b + e^c)` in every order.
    #[test]
    fn three_arguments_match_reference(
        a in exponent_strategy(),
        b in exponent_strategy(),
        c in exponent_strategy(),
    ) {
        let expected = log_sum_exp_ref(&[a, b, c]);
        assert_close(expected, log_sum_exp(&[a, b, c]))?;
        assert_close(expected, log_sum_exp(&[a, c, b]))?;
        assert_close(expected, log_sum_exp(&[c, b, a]))?;
    }

    /// Property: permuting the arguments does not change the result.
    #[test]
    fn permutation_invariant(
        (x, shuffled) in prop::collection::vec(exponent_strategy(), 0..12)
            .prop_flat_map(|x| (Just(x.clone()), Just(x).prop_shuffle()))
    ) {
        let lhs = log_sum_exp(&x);
        let rhs = log_sum_exp(&shuffled);
        if lhs.is_finite() {
            assert_close(lhs, rhs)?;
        } else {
            prop_assert_eq!(lhs, rhs);
        }
    }

    /// Property: special values dominate regardless of position.
    #[test]
    fn special_values_dominate(
        x in prop::collection::vec(-10.0f64..10.0, 0..6),
        pos in any::<prop::sample::Index>(),
    ) {
        let mut with_inf = x.clone();
        with_inf.insert(pos.index(x.len() + 1), f64::INFINITY);
        prop_assert_eq!(log_sum_exp(&with_inf), f64::INFINITY);

        let mut with_nan = x.clone();
        with_nan.insert(pos.index(x.len() + 1), f64::NAN);
        prop_assert!(log_sum_exp(&with_nan).is_nan());

        let all_neg_inf = vec![f64::NEG_INFINITY; x.len() + 1];
        prop_assert_eq!(log_sum_exp(&all_neg_inf), f64::NEG_INFINITY);
    }

    /// Property: the streaming accumulator tracks the two-pass result.
    #[test]
    fn accumulator_tracks_two_pass(x in prop::collection::vec(exponent_strategy(), 1..12)) {
        let acc: LogSumExpAccumulator = x.iter().copied().collect();
        assert_close(log_sum_exp(&x), acc.value())?;
    }

    /// Property: `ln|x_1 ... x_n| == Σ ln|x_i|` for magnitudes between 1e-200 and 1e200,
    /// measured against the magnitude of the individual logarithms.
    #[test]
    fn log_multiply_abs_matches_sum_of_logs(
        x in prop::collection::vec(wide_magnitude_strategy(), 0..20)
    ) {
        let logs: Vec<f64> = x.iter().map(|v| v.abs().ln()).collect();
        let expected: f64 = logs.iter().sum();
        let scale: f64 = logs.iter().map(|l| l.abs()).sum::<f64>().max(1.0);

        let result = log_multiply_abs(&x);
        prop_assert!(
            (result - expected).abs() <= RELATIVE_ERROR * scale,
            "{} is not approximately equal to {}",
            result,
            expected
        );
    }
}
