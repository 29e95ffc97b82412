use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// How many values a kernel consumes from its argument sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Any number of values, including none.
    Variadic,
    /// Exactly one value.
    Unary,
    /// Exactly two values.
    Binary,
}

/// Catalogue of every numeric kernel exposed by the core crate.
///
/// The catalogue is shared between the core crate, which knows how to
/// evaluate each entry, and the drivers, which only need to name them
/// (e.g. when parsing a request row).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kernel {
    NormMax,
    Norm1,
    Norm2,
    LogSumExp,
    LogMultiplyAbs,
    Pow,
    Sinpi,
    Cospi,
    Tanpi,
    Asinpi,
    Acospi,
    Atanpi,
    Sinc,
    Sincpi,
    Cosm1,
    Cosm1pi,
}

impl Kernel {
    pub const ALL: [Kernel; 16] = [
        Kernel::NormMax,
        Kernel::Norm1,
        Kernel::Norm2,
        Kernel::LogSumExp,
        Kernel::LogMultiplyAbs,
        Kernel::Pow,
        Kernel::Sinpi,
        Kernel::Cospi,
        Kernel::Tanpi,
        Kernel::Asinpi,
        Kernel::Acospi,
        Kernel::Atanpi,
        Kernel::Sinc,
        Kernel::Sincpi,
        Kernel::Cosm1,
        Kernel::Cosm1pi,
    ];

    /// Returns the snake_case name used in request files and result rows.
    pub fn name(&self) -> &'static str {
        match self {
            Kernel::NormMax => "norm_max",
            Kernel::Norm1 => "norm1",
            Kernel::Norm2 => "norm2",
            Kernel::LogSumExp => "log_sum_exp",
            Kernel::LogMultiplyAbs => "log_multiply_abs",
            Kernel::Pow => "pow",
            Kernel::Sinpi => "sinpi",
            Kernel::Cospi => "cospi",
            Kernel::Tanpi => "tanpi",
            Kernel::Asinpi => "asinpi",
            Kernel::Acospi => "acospi",
            Kernel::Atanpi => "atanpi",
            Kernel::Sinc => "sinc",
            Kernel::Sincpi => "sincpi",
            Kernel::Cosm1 => "cosm1",
            Kernel::Cosm1pi => "cosm1pi",
        }
    }

    pub fn arity(&self) -> Arity {
        match self {
            Kernel::NormMax
            | Kernel::Norm1
            | Kernel::Norm2
            | Kernel::LogSumExp
            | Kernel::LogMultiplyAbs => Arity::Variadic,
            Kernel::Pow => Arity::Binary,
            _ => Arity::Unary,
        }
    }
}

impl fmt::Display for Kernel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Kernel {
    type Err = Error;

    /// Parses a kernel name. Matching ignores ASCII case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Kernel::ALL
            .iter()
            .copied()
            .find(|k| k.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::UnknownKernel(wanted.to_string()))
    }
}
