//! Error definitions.
use std::convert::Infallible;
use std::error::Error;
use std::{fmt, result};

/// A specialized Result type for this library.
pub type Result<T, E = ShingleError> = result::Result<T, E>;

/// Errors in this library.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShingleError {
    /// Contains [`InvalidArgumentError`].
    InvalidArgument(InvalidArgumentError),
}

impl fmt::Display for ShingleError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidArgument(e) => e.fmt(f),
        }
    }
}

impl Error for ShingleError {}

impl From<Infallible> for ShingleError {
    fn from(e: Infallible) -> Self {
        match e {}
    }
}

impl ShingleError {
    pub(crate) const fn invalid_argument(msg: &'static str) -> Self {
        Self::InvalidArgument(InvalidArgumentError { msg })
    }

    /// Returns `true` if the error was caused by an invalid argument.
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

/// Error used when the input argument is invalid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidArgumentError {
    msg: &'static str,
}

impl InvalidArgumentError {
    /// Gets the message describing the rejected argument.
    pub const fn message(&self) -> &'static str {
        self.msg
    }
}

impl fmt::Display for InvalidArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidArgumentError: {}", self.msg)
    }
}
