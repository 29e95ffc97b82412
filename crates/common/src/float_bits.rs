use std::f64;

/// Sign and exponent bits of an IEEE-754 double; clearing the mantissa leaves
/// the largest power of two not above the magnitude.
const SIGN_AND_EXPONENT_MASK: u64 = 0xFFF0_0000_0000_0000;

/// Returns the largest power of two `<= a`, never below `f64::MIN_POSITIVE`
/// (the smallest normal magnitude, 2^-1022).
///
/// Expects a finite, non-negative `a`. Subnormals and zero clear to `0.0`
/// under the mask and are lifted to `f64::MIN_POSITIVE`.
///
/// Example:
/// ```text
/// power_of_two_floor(5.0)    == 4.0
/// power_of_two_floor(0.75)   == 0.5
/// power_of_two_floor(1e-310) == f64::MIN_POSITIVE
/// ```
pub fn power_of_two_floor(a: f64) -> f64 {
    let masked = f64::from_bits(a.to_bits() & SIGN_AND_EXPONENT_MASK);
    masked.max(f64::MIN_POSITIVE)
}

/// Relative error `|actual - expected| / |expected|`.
///
/// Non-finite expectations compare by identity instead: `0.0` when `actual`
/// matches (`NaN` matching `NaN`), `INFINITY` otherwise. A zero expectation
/// falls back to the absolute error.
pub fn relative_error(expected: f64, actual: f64) -> f64 {
    if !expected.is_finite() {
        let same = (expected.is_nan() && actual.is_nan()) || expected == actual;
        return if same { 0.0 } else { f64::INFINITY };
    }

    let diff = (actual - expected).abs();
    if expected == 0.0 {
        return diff;
    }
    diff / expected.abs()
}
