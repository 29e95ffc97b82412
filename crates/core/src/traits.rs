use common::{
    error::Error,
    types::{Arity, Kernel},
};

use super::{log_domain, norms, power, trig};

/// Trait for anything that can evaluate a numeric kernel over a loosely typed
/// argument sequence, as it arrives from a request file or a simulator.
pub trait Evaluate {
    /// Evaluates the kernel over `args`.
    ///
    /// Returns `Ok(value)` for every numeric outcome, including `NaN` and
    /// infinities, and `Err(Error::InvalidArgument)` when `args` is absent or
    /// does not fit the kernel's arity.
    fn evaluate(&self, args: Option<&[f64]>) -> Result<f64, Error>;
}

impl Evaluate for Kernel {
    fn evaluate(&self, args: Option<&[f64]>) -> Result<f64, Error> {
        let args = args.ok_or_else(|| {
            Error::InvalidArgument(format!("{}: argument sequence is absent", self))
        })?;

        match self.arity() {
            Arity::Variadic => Ok(sequence_kernel(*self, args)),
            Arity::Unary => {
                let &[x] = args else {
                    return Err(arity_error(*self, 1, args.len()));
                };
                Ok(scalar_kernel(*self, x))
            }
            Arity::Binary => {
                let &[x, n] = args else {
                    return Err(arity_error(*self, 2, args.len()));
                };
                Ok(power::pow(x, integral_exponent(n)?))
            }
        }
    }
}

fn sequence_kernel(kernel: Kernel, x: &[f64]) -> f64 {
    match kernel {
        Kernel::NormMax => norms::norm_max(x),
        Kernel::Norm1 => norms::norm1(x),
        Kernel::Norm2 => norms::norm2(x),
        Kernel::LogSumExp => log_domain::log_sum_exp(x),
        Kernel::LogMultiplyAbs => log_domain::log_multiply_abs(x),
        other => unreachable!("{} is not a sequence kernel", other),
    }
}

fn scalar_kernel(kernel: Kernel, x: f64) -> f64 {
    match kernel {
        Kernel::Sinpi => trig::sinpi(x),
        Kernel::Cospi => trig::cospi(x),
        Kernel::Tanpi => trig::tanpi(x),
        Kernel::Asinpi => trig::asinpi(x),
        Kernel::Acospi => trig::acospi(x),
        Kernel::Atanpi => trig::atanpi(x),
        Kernel::Sinc => trig::sinc(x),
        Kernel::Sincpi => trig::sincpi(x),
        Kernel::Cosm1 => trig::cosm1(x),
        Kernel::Cosm1pi => trig::cosm1pi(x),
        other => unreachable!("{} is not a scalar kernel", other),
    }
}

fn arity_error(kernel: Kernel, expected: usize, found: usize) -> Error {
    Error::InvalidArgument(format!(
        "{} takes {} value(s), got {}",
        kernel, expected, found
    ))
}

/// Narrows a float-encoded exponent to `i32`, rejecting fractions, non-finite
/// values and anything outside the `i32` range.
fn integral_exponent(n: f64) -> Result<i32, Error> {
    if n.fract() != 0.0 || n < i32::MIN as f64 || n > i32::MAX as f64 {
        return Err(Error::InvalidArgument(format!(
            "pow exponent {} is not an i32 integer",
            n
        )));
    }
    Ok(n as i32)
}
