use common::float_bits::power_of_two_floor;
use std::f64;

/// Max-norm (inf-norm): `max(|x_1|, |x_2|, ...)`.
///
/// Returns `0.0` for an empty slice. Unlike `f64::max`, a `NaN` element is
/// not skipped: any `NaN` makes the result `NaN`.
pub fn norm_max(x: &[f64]) -> f64 {
    let mut max_value = 0.0f64;
    for &v in x {
        let abs_v = v.abs();
        if abs_v.is_nan() {
            return f64::NAN;
        }
        if abs_v > max_value {
            max_value = abs_v;
        }
    }
    max_value
}

/// 1-norm: `|x_1| + |x_2| + ...`. Returns `0.0` for an empty slice.
pub fn norm1(x: &[f64]) -> f64 {
    x.iter().map(|v| v.abs()).sum()
}

/// 2-norm (Euclidean): `sqrt(|x_1|^2 + |x_2|^2 + ...)`.
///
/// The sum of squares is kept relative to a running power-of-two scale, so the
/// result neither overflows for elements near `f64::MAX` nor underflows for
/// subnormal elements. The scale starts at the smallest normal magnitude and
/// only grows; every growth rescales the partial sum by `(old / new)^2`, which
/// keeps the partial sum within `[0, n]`.
///
/// A non-finite element (`±inf`, `NaN`) short-circuits: its absolute value is
/// returned as is.
pub fn norm2(x: &[f64]) -> f64 {
    let mut sum = 0.0f64;
    let mut scale = f64::MIN_POSITIVE;

    for &v in x {
        let abs_v = v.abs();
        if !abs_v.is_finite() {
            return abs_v;
        }

        let candidate_scale = power_of_two_floor(abs_v);
        if candidate_scale > scale {
            // Ratio of powers of two: exact.
            let coeff = scale / candidate_scale;
            sum *= coeff * coeff;
            scale = candidate_scale;
        }

        let scaled_abs_v = abs_v / scale;
        sum += scaled_abs_v * scaled_abs_v;
    }

    sum.sqrt() * scale
}
