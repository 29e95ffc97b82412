use std::f64;

/// Terms with `x_i - max` below this exponent are dropped when `|max| > 1`.
const LOG_SUM_EXP_CUTOFF: f64 = -46.0;

/// `exp(LOG_SUM_EXP_CUTOFF)`. A correction sum below this is ignored.
const SUM_EXP_THRESHOLD: f64 = 1.0530617357553812e-20;

/// Lower edge of the band the leftover product is kept in.
const LEFTOVER_MIN: f64 = 1e-150;

/// Upper edge of the band the leftover product is kept in.
const LEFTOVER_MAX: f64 = 1e150;

/// Log-sum-exp: `ln(e^{x_1} + e^{x_2} + ...)`.
///
/// Rewritten around the largest element as
/// `max + ln(1 + Σ_{i≠argmax} e^{x_i - max})`, so `exp` is only ever evaluated
/// at non-positive arguments.
///
/// Special values:
/// - empty slice: `-inf`
/// - any `NaN`: `NaN`
/// - any `+inf` (and no `NaN`): `+inf`
/// - only `-inf`: `-inf`
///
/// When `|max| > 1` the correction is only significant above
/// `e^-46 ≈ 1.05e-20` relative to `max`; terms below that cut-off are skipped
/// and a correction below it returns `max` unchanged.
pub fn log_sum_exp(x: &[f64]) -> f64 {
    let Some(&first) = x.first() else {
        return f64::NEG_INFINITY;
    };

    let mut max_x = first;
    let mut arg_max = 0;
    for (j, &v) in x.iter().enumerate().skip(1) {
        if v.is_nan() {
            return f64::NAN;
        }
        if v > max_x {
            max_x = v;
            arg_max = j;
        }
    }
    if !max_x.is_finite() {
        return max_x;
    }

    let others = x
        .iter()
        .enumerate()
        .filter(|&(j, _)| j != arg_max)
        .map(|(_, &v)| v - max_x);

    if max_x.abs() <= 1.0 {
        let sum: f64 = others.map(f64::exp).sum();
        return max_x + sum.ln_1p();
    }

    let sum: f64 = others
        .map(|d| if d < LOG_SUM_EXP_CUTOFF { 0.0 } else { d.exp() })
        .sum();

    if sum < SUM_EXP_THRESHOLD {
        max_x
    } else {
        max_x + sum.ln_1p()
    }
}

/// Log of the absolute product: `ln(|x_1| * |x_2| * ...)`.
///
/// Magnitudes are multiplied into a leftover product while it stays inside
/// `[1e-150, 1e150]` and its logarithm is flushed into the running total
/// whenever it leaves the band. Elements that are themselves outside the band
/// (zeros, infinities, `NaN` and extreme magnitudes) bypass the leftover and
/// add their own logarithm.
///
/// Returns `0.0` for an empty slice.
pub fn log_multiply_abs(x: &[f64]) -> f64 {
    let band = LEFTOVER_MIN..=LEFTOVER_MAX;

    let mut log_total = 0.0f64;
    let mut leftover = 1.0f64;
    for &v in x {
        let abs_v = v.abs();
        if !band.contains(&abs_v) {
            log_total += abs_v.ln();
            continue;
        }

        leftover *= abs_v;
        if !band.contains(&leftover) {
            log_total += leftover.ln();
            leftover = 1.0;
        }
    }

    // Unconditional, even when the leftover is exactly 1.
    log_total + leftover.ln()
}

/// Streaming log-sum-exp over values that arrive one at a time.
///
/// Tracks the largest exponent seen and the coefficient
/// `Σ e^{x_i - exponent}`, rescaling the coefficient whenever a larger value
/// arrives. Results agree with [`log_sum_exp`] to high precision but are not
/// bit-identical, since the slice version applies its cut-off.
///
/// ```text
/// let acc: LogSumExpAccumulator = [1.0, 2.0, 3.0].into_iter().collect();
/// acc.value() ≈ 3.40760596444438
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogSumExpAccumulator {
    exponent: f64,
    coeff: f64,
}

impl LogSumExpAccumulator {
    pub fn new() -> Self {
        Self {
            exponent: f64::NEG_INFINITY,
            coeff: 1.0,
        }
    }

    /// Folds one value into the accumulator.
    ///
    /// `-inf` contributes nothing, `+inf` pins the result to `+inf`, `NaN`
    /// poisons the coefficient.
    pub fn push(&mut self, v: f64) {
        if v == f64::NEG_INFINITY {
            return;
        }
        if v == f64::INFINITY {
            self.exponent = f64::INFINITY;
            return;
        }

        if v > self.exponent {
            self.coeff = self.coeff * (self.exponent - v).exp() + 1.0;
            self.exponent = v;
        } else {
            self.coeff += (v - self.exponent).exp();
        }
    }

    /// Current `ln Σ e^{x_i}`; `-inf` before any finite value was pushed.
    pub fn value(&self) -> f64 {
        self.exponent + self.coeff.ln()
    }
}

impl Default for LogSumExpAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<f64> for LogSumExpAccumulator {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for v in iter {
            self.push(v);
        }
    }
}

impl FromIterator<f64> for LogSumExpAccumulator {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut acc = Self::new();
        acc.extend(iter);
        acc
    }
}
