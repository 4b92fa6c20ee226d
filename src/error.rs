use std::num::ParseIntError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, FractionError>;

/// Failure of a fraction operation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FractionError {
    #[error("Division by zero")]
    DivisionByZero,

    #[error("Result does not fit in a 64-bit fraction")]
    Overflow,

    #[error("Value is not finite")]
    NonFinite,

    #[error(transparent)]
    Parse(#[from] ParseFractionError),
}

/// Failure to read a fraction from its `n/d` text form
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseFractionError {
    /// The input is not two parts separated by a single `/`
    #[error("Expected 'numerator/denominator', found '{input}'")]
    Shape { input: String },

    /// One side of the `/` is not an integer literal
    #[error("Invalid integer '{part}'")]
    InvalidInteger {
        part: String,
        source: ParseIntError,
    },
}

impl ParseFractionError {
    pub fn shape(input: impl Into<String>) -> Self {
        ParseFractionError::Shape {
            input: input.into(),
        }
    }

    pub fn invalid_integer(part: impl Into<String>, source: ParseIntError) -> Self {
        ParseFractionError::InvalidInteger {
            part: part.into(),
            source,
        }
    }
}

impl FractionError {
    /// True for errors raised while reading text
    pub fn is_parse(&self) -> bool {
        matches!(self, FractionError::Parse(_))
    }
}
