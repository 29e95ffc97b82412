//! Trigonometric functions of π-scaled arguments.
//!
//! `sinpi(x)` and friends compute `sin(πx)` without ever handing a large
//! multiple of π to the underlying primitive. The argument is reduced with an
//! exact floating-point remainder, split into buckets by a truncated integer,
//! and each bucket maps to a shifted argument of at most `π/2` (`π/8` for
//! `tanpi`). Every shift in this module is exact by Sterbenz's lemma, so the
//! only rounding happens inside the primitive.
//!
//! Non-finite arguments yield `NaN`, except `atanpi(±inf) = ±0.5`.

use std::f64;
use std::f64::consts::{FRAC_PI_2, PI};

/// Arguments at or below this magnitude are treated as the removable
/// singularity of `sinc`/`sincpi`.
const SINC_SINGULARITY: f64 = 1e-200;

/// Above this magnitude `atanpi` switches to the reciprocal form.
const ATANPI_RECIPROCAL_FROM: f64 = 1.5;

/// `sin(πx)`.
pub fn sinpi(x: f64) -> f64 {
    if !x.is_finite() {
        return f64::NAN;
    }

    // -2 < x < 2
    let x = x % 2.0;

    match (2.0 * x) as i32 {
        -3 => (PI * (2.0 + x)).sin(),
        -2 | -1 => -(PI * (1.0 + x)).sin(),
        0 => (PI * x).sin(),
        1 | 2 => -(PI * (x - 1.0)).sin(),
        3 => (PI * (x - 2.0)).sin(),
        b => unreachable!("sinpi bucket {} out of range", b),
    }
}

/// `cos(πx)`.
pub fn cospi(x: f64) -> f64 {
    if !x.is_finite() {
        return f64::NAN;
    }

    // cos is even: 0 <= x < 2
    let x = (x % 2.0).abs();

    match (2.0 * x) as i32 {
        0 | 1 => -(PI * (x - 0.5)).sin(),
        2 | 3 => (PI * (x - 1.5)).sin(),
        b => unreachable!("cospi bucket {} out of range", b),
    }
}

/// `tan(πx)`.
///
/// Poles (`x ≡ 0.5 mod 1`) return an infinity. Around odd multiples of
/// `0.25` the addition formulas
/// `tan(π(y + 1/4)) = (1 + t) / (1 - t)` and
/// `tan(π(y - 1/4)) = (t - 1) / (1 + t)`, with `t = tan(πy)` and
/// `|y| <= 1/8`, replace a direct evaluation.
pub fn tanpi(x: f64) -> f64 {
    if !x.is_finite() {
        return f64::NAN;
    }

    // -1 < x < 1
    let x = x % 1.0;

    match (8.0 * x) as i32 {
        -7 => tan_small(x + 1.0),
        -6 | -5 => quarter_up(x + 0.75),
        -4 | -3 => -1.0 / tan_small(x + 0.5),
        -2 | -1 => quarter_down(x + 0.25),
        0 => tan_small(x),
        1 | 2 => quarter_up(x - 0.25),
        3 | 4 => -1.0 / tan_small(x - 0.5),
        5 | 6 => quarter_down(x - 0.75),
        7 => tan_small(x - 1.0),
        b => unreachable!("tanpi bucket {} out of range", b),
    }
}

#[inline]
fn tan_small(y: f64) -> f64 {
    (PI * y).tan()
}

/// `tan(π(y + 1/4))`
#[inline]
fn quarter_up(y: f64) -> f64 {
    let t = tan_small(y);
    (1.0 + t) / (1.0 - t)
}

/// `tan(π(y - 1/4))`
#[inline]
fn quarter_down(y: f64) -> f64 {
    let t = tan_small(y);
    (t - 1.0) / (1.0 + t)
}

/// `asin(x) / π`, `NaN` outside `[-1, 1]`.
pub fn asinpi(x: f64) -> f64 {
    if x.is_nan() || x.abs() > 1.0 {
        return f64::NAN;
    }

    match (2.0 * x) as i32 {
        -2 | -1 => -0.5 + complement_asin(x) / PI,
        0 => x.asin() / PI,
        1 | 2 => 0.5 - complement_asin(x) / PI,
        b => unreachable!("asinpi bucket {} out of range", b),
    }
}

/// `acos(x) / π`, `NaN` outside `[-1, 1]`.
pub fn acospi(x: f64) -> f64 {
    if x.is_nan() || x.abs() > 1.0 {
        return f64::NAN;
    }

    match (2.0 * x) as i32 {
        -2 | -1 => 1.0 - complement_asin(x) / PI,
        0 => 0.5 - x.asin() / PI,
        1 | 2 => complement_asin(x) / PI,
        b => unreachable!("acospi bucket {} out of range", b),
    }
}

/// `asin(sqrt(1 - x^2))`, the complementary angle of `|asin(x)|`.
///
/// For `|x| >= 0.5`, `1 - |x|` is exact, so the radicand keeps full precision
/// as `|x|` approaches 1.
#[inline]
fn complement_asin(x: f64) -> f64 {
    let a = x.abs();
    ((1.0 - a) * (1.0 + a)).sqrt().asin()
}

/// `atan(x) / π`. `atanpi(±inf) = ±0.5`.
pub fn atanpi(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }

    if x.abs() >= ATANPI_RECIPROCAL_FROM {
        let offset = if x > 0.0 { 0.5 } else { -0.5 };
        return offset - (1.0 / x).atan() / PI;
    }

    match (2.0 * x) as i32 {
        -2 | -1 => -0.25 - ((x + 1.0) / (x - 1.0)).atan() / PI,
        0 => x.atan() / PI,
        1 | 2 => 0.25 + ((x - 1.0) / (x + 1.0)).atan() / PI,
        b => unreachable!("atanpi bucket {} out of range", b),
    }
}

/// `sin(x) / x`, with `sinc(0) = 1`.
///
/// For infinite `x` the numerator is undefined but bounded, so the result is
/// `0.0`.
pub fn sinc(x: f64) -> f64 {
    if x.abs() <= SINC_SINGULARITY {
        return 1.0;
    }

    let numerator = x.sin();
    if numerator.is_finite() {
        numerator / x
    } else if x.is_nan() {
        f64::NAN
    } else {
        0.0
    }
}

/// `sin(πx) / (πx)`, with `sincpi(0) = 1`.
pub fn sincpi(x: f64) -> f64 {
    if x.abs() <= SINC_SINGULARITY {
        return 1.0;
    }

    let numerator = sinpi(x);
    if numerator.is_finite() {
        numerator / (PI * x)
    } else if x.is_nan() {
        f64::NAN
    } else {
        0.0
    }
}

/// `cos(x) - 1` without cancellation near zero.
pub fn cosm1(x: f64) -> f64 {
    if x.abs() < FRAC_PI_2 {
        return half_angle_cosm1(x.sin(), x.cos());
    }
    x.cos() - 1.0
}

/// `cos(πx) - 1` without cancellation near zero.
pub fn cosm1pi(x: f64) -> f64 {
    if x.abs() < 0.5 {
        return half_angle_cosm1(sinpi(x), cospi(x));
    }
    cospi(x) - 1.0
}

/// `cos(t) - 1 = -sin(t)^2 / (1 + sqrt(1 - sin(t)^2))` for `|t| < π/2`.
///
/// On that range the root is `cos(t)`, which is taken as is: forming
/// `1 - s^2` cancels once `s` nears 1.
#[inline]
fn half_angle_cosm1(s: f64, c: f64) -> f64 {
    -(s * s) / (1.0 + c)
}
