use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A kernel received an argument it cannot evaluate: an absent sequence,
    /// the wrong number of scalars, or a non-integral exponent.
    InvalidArgument(String),

    /// A request named a kernel that is not part of the catalogue.
    UnknownKernel(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidArgument(reason) => write!(f, "Invalid argument: {}.", reason),

            Error::UnknownKernel(name) => write!(f, "Unknown kernel '{}'.", name),
        }
    }
}

impl std::error::Error for Error {}
