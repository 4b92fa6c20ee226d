//! Exact rational numbers over 64-bit integers
//!
//! This crate provides [`Fraction`], an immutable value holding a numerator
//! and a positive denominator in lowest terms. Arithmetic is exact: adding
//! `1/10` ten times gives exactly `1/1`, with no rounding drift.
//!
//! # Examples
//!
//! ```
//! use lfraction::{Fraction, FractionError};
//!
//! let half = Fraction::new(4, 8)?;
//! assert_eq!(half.to_string(), "1/2");
//!
//! let sum = half.plus(Fraction::new(1, 3)?)?;
//! assert_eq!(sum.to_string(), "5/6");
//!
//! // Fallible operations report errors instead of panicking
//! assert_eq!(half.divide_by(Fraction::ZERO), Err(FractionError::DivisionByZero));
//!
//! let parsed: Fraction = "7/2".parse()?;
//! assert_eq!(parsed.integer_part(), 3);
//! assert_eq!(parsed.fraction_part(), half);
//! # Ok::<(), FractionError>(())
//! ```
//!
//! # Main Components
//!
//! - **Fraction**: construction, normalization and decomposition
//! - **Arithmetic**: checked `plus`/`minus`/`times`/`divide_by`/`invert`,
//!   infallible `negate`, and the `+ - * /` operators
//! - **Ordering**: exact total order by value
//! - **Text**: `n/d` formatting and parsing
//!
//! # Overflow
//!
//! Intermediate products are formed in 128-bit integers and reduced before
//! being narrowed back to `i64`, so an operation fails with
//! [`FractionError::Overflow`] only when its exact result cannot be stored.
//! Comparison never overflows.
//!
//! # Features
//!
//! - `serde` (default): serialize fractions as their `n/d` text.

pub mod arith;
pub mod compare;
pub mod error;
pub mod fraction;
pub mod parse;
#[cfg(feature = "serde")]
mod serde_impl;

#[cfg(test)]
mod proptests;

pub use error::{FractionError, ParseFractionError, Result};
pub use fraction::Fraction;
