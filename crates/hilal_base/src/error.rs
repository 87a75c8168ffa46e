//! Error types for crescent visibility calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

use hilal_time::TimeError;

/// Errors from the crescent visibility pipeline.
///
/// The quiet evaluator never produces these; only the validating
/// boundary and input constructors do.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum HilalError {
    /// Error from calendar handling.
    Time(TimeError),
    /// Invalid geographic location parameter.
    InvalidLocation(&'static str),
    /// An input was NaN or infinite.
    NonFiniteInput(&'static str),
    /// A divisor in the visibility formula is zero.
    DivisionByZero(&'static str),
    /// An intermediate value left the domain of sqrt/acos.
    InvalidAngleRange { quantity: &'static str, value: f64 },
}

impl Display for HilalError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::InvalidLocation(msg) => write!(f, "invalid location: {msg}"),
            Self::NonFiniteInput(name) => write!(f, "non-finite input: {name}"),
            Self::DivisionByZero(name) => write!(f, "division by zero: {name} is 0"),
            Self::InvalidAngleRange { quantity, value } => {
                write!(f, "{quantity} = {value} is outside [-1, 1]")
            }
        }
    }
}

impl Error for HilalError {}

impl From<TimeError> for HilalError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
