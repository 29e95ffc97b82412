// ----------------------------
// Benchmark inputs
// ----------------------------

pub const NUM_VALUES: usize = 1_000_000;
pub const NUM_REPEATS: usize = 20;

/// Values of moderate magnitude. Both the naive and the scaled 2-norm
/// stay finite, so the timings compare like with like.
///
/// Entries vary by index so the compiler cannot fold the loop away.
pub fn generate_moderate_values() -> Vec<f64> {
    (0..NUM_VALUES)
        .map(|i| {
            let sign = if i % 2 == 0 { 1.0 } else { -1.0 };
            sign * (1.0 + (i % 1000) as f64 * 1e-3)
        })
        .collect()
}

/// Values cycling through `1e-300 .. 1e300` in steps of ten decades.
/// Squaring overflows or underflows for most of them.
pub fn generate_wide_values() -> Vec<f64> {
    (0..NUM_VALUES)
        .map(|i| {
            let decade = (i % 61) as i32 * 10 - 300;
            (1.0 + (i % 7) as f64 * 0.125) * 10f64.powi(decade)
        })
        .collect()
}

/// Log-domain values in `[-700, 700)`, the range where `exp` is still finite.
pub fn generate_log_values() -> Vec<f64> {
    (0..NUM_VALUES)
        .map(|i| ((i * 7919) % 1400) as f64 - 700.0 + (i % 13) as f64 * 0.01)
        .collect()
}

/// `sqrt(Σ x²)` without scaling, the baseline the scaled norm is measured against.
pub fn naive_norm2(x: &[f64]) -> f64 {
    x.iter().map(|v| v * v).sum::<f64>().sqrt()
}

#[cfg(test)]
mod generator_tests {
    use super::*;

    #[test]
    fn generators_are_finite_and_sized() {
        for data in [
            generate_moderate_values(),
            generate_wide_values(),
            generate_log_values(),
        ] {
            assert_eq!(data.len(), NUM_VALUES);
            assert!(data.iter().all(|v| v.is_finite()));
        }
    }

    #[test]
    fn log_values_stay_in_exp_range() {
        assert!(generate_log_values().iter().all(|v| (-700.0..700.0).contains(v)));
    }

    #[test]
    fn naive_norm2_of_pythagorean_triple() {
        assert_eq!(naive_norm2(&[3.0, 4.0]), 5.0);
    }
}
