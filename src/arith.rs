//! Arithmetic on fractions.
//!
//! The named methods are checked and report failure through [`Result`]. The
//! operator impls delegate to them and panic on failure, the same way the
//! primitive integer operators do.

use crate::error::Result;
use crate::Fraction;
use std::iter::{Product, Sum};
use std::ops::{Add, Div, Mul, Neg, Sub};

// Products of two i64 components stay below 2^126 in magnitude.
fn widen(f: Fraction) -> (i128, i128) {
    (f.numerator() as i128, f.denominator() as i128)
}

impl Fraction {
    /// Sum of fractions
    pub fn plus(self, other: Fraction) -> Result<Fraction> {
        let (n1, d1) = widen(self);
        let (n2, d2) = widen(other);
        Fraction::reduce(n1 * d2 + n2 * d1, d1 * d2)
    }

    /// Difference of fractions
    pub fn minus(self, other: Fraction) -> Result<Fraction> {
        let (n1, d1) = widen(self);
        let (n2, d2) = widen(other);
        Fraction::reduce(n1 * d2 - n2 * d1, d1 * d2)
    }

    /// Product of fractions
    pub fn times(self, other: Fraction) -> Result<Fraction> {
        let (n1, d1) = widen(self);
        let (n2, d2) = widen(other);
        Fraction::reduce(n1 * n2, d1 * d2)
    }

    /// Quotient of fractions. Division is multiplication by the reciprocal.
    pub fn divide_by(self, other: Fraction) -> Result<Fraction> {
        self.times(other.invert()?)
    }

    /// Get the reciprocal. Fails for zero.
    pub fn invert(self) -> Result<Fraction> {
        let (n, d) = widen(self);
        Fraction::reduce(d, n)
    }

    /// Opposite of the fraction
    pub fn negate(self) -> Fraction {
        Fraction::from_reduced(-self.numerator(), self.denominator())
    }

    /// Add up fractions, stopping at the first failure
    pub fn checked_sum<I>(fractions: I) -> Result<Fraction>
    where
        I: IntoIterator<Item = Fraction>,
    {
        fractions
            .into_iter()
            .try_fold(Fraction::ZERO, Fraction::plus)
    }

    /// Multiply fractions, stopping at the first failure
    pub fn checked_product<I>(fractions: I) -> Result<Fraction>
    where
        I: IntoIterator<Item = Fraction>,
    {
        fractions
            .into_iter()
            .try_fold(Fraction::ONE, Fraction::times)
    }
}

impl Add for Fraction {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if the sum does not fit in a `Fraction`.
    fn add(self, other: Self) -> Self {
        self.plus(other)
            .unwrap_or_else(|err| panic!("{} + {}: {}", self, other, err))
    }
}

impl Sub for Fraction {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if the difference does not fit in a `Fraction`.
    fn sub(self, other: Self) -> Self {
        self.minus(other)
            .unwrap_or_else(|err| panic!("{} - {}: {}", self, other, err))
    }
}

impl Mul for Fraction {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if the product does not fit in a `Fraction`.
    fn mul(self, other: Self) -> Self {
        self.times(other)
            .unwrap_or_else(|err| panic!("{} * {}: {}", self, other, err))
    }
}

impl Div for Fraction {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if `other` is zero or the quotient does not fit in a `Fraction`.
    fn div(self, other: Self) -> Self {
        self.divide_by(other)
            .unwrap_or_else(|err| panic!("{} / {}: {}", self, other, err))
    }
}

impl Neg for Fraction {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}

impl Sum for Fraction {
    fn sum<I: Iterator<Item = Fraction>>(iter: I) -> Self {
        iter.fold(Fraction::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Fraction> for Fraction {
    fn sum<I: Iterator<Item = &'a Fraction>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Product for Fraction {
    fn product<I: Iterator<Item = Fraction>>(iter: I) -> Self {
        iter.fold(Fraction::ONE, Mul::mul)
    }
}
