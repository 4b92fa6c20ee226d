use crate::error::{FractionError, Result};
use std::fmt;

/// Exact rational number over 64-bit integers
///
/// A `Fraction` is always kept in lowest terms with a positive denominator,
/// so two fractions are equal exactly when their fields are equal. The
/// numerator is never `i64::MIN`, which keeps negation and inversion total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fraction {
    numerator: i64,
    denominator: i64,
}

impl Fraction {
    pub const ZERO: Fraction = Fraction {
        numerator: 0,
        denominator: 1,
    };

    pub const ONE: Fraction = Fraction {
        numerator: 1,
        denominator: 1,
    };

    /// Create a new fraction and simplify it
    ///
    /// Fails with [`FractionError::DivisionByZero`] when `denominator` is zero.
    pub fn new(numerator: i64, denominator: i64) -> Result<Self> {
        Self::reduce(numerator as i128, denominator as i128)
    }

    /// Create a fraction from a whole number
    pub fn from_integer(n: i64) -> Result<Self> {
        Self::new(n, 1)
    }

    /// Approximate `value` by a fraction with the given denominator
    ///
    /// The numerator is `value * denominator` rounded to the nearest integer,
    /// with halves rounded up (`-2.5` becomes `-2`). The result is then
    /// simplified, so the returned denominator may be a divisor of the
    /// requested one.
    pub fn from_f64(value: f64, denominator: i64) -> Result<Self> {
        if denominator == 0 {
            return Err(FractionError::DivisionByZero);
        }
        let scaled = (value * denominator as f64 + 0.5).floor();
        if !scaled.is_finite() {
            tracing::trace!(value, denominator, "Cannot approximate non-finite value");
            return Err(FractionError::NonFinite);
        }
        // i64::MAX as f64 rounds up to 2^63
        if scaled < i64::MIN as f64 || scaled >= i64::MAX as f64 {
            tracing::trace!(value, denominator, "Approximation outside of i64 range");
            return Err(FractionError::Overflow);
        }
        Self::new(scaled as i64, denominator)
    }

    /// Single normalization path for every computed fraction.
    ///
    /// Moves the sign into the numerator, divides out the gcd and narrows to
    /// `i64`. Only the reduced pair has to fit.
    pub(crate) fn reduce(mut numerator: i128, mut denominator: i128) -> Result<Self> {
        if denominator == 0 {
            tracing::trace!(%numerator, "Fraction with zero denominator");
            return Err(FractionError::DivisionByZero);
        }
        if denominator < 0 {
            numerator = -numerator;
            denominator = -denominator;
        }

        let gcd = Self::gcd(numerator, denominator);
        numerator /= gcd;
        denominator /= gcd;

        match (i64::try_from(numerator), i64::try_from(denominator)) {
            (Ok(numerator), Ok(denominator)) if numerator != i64::MIN => Ok(Fraction {
                numerator,
                denominator,
            }),
            _ => {
                tracing::trace!(%numerator, %denominator, "Reduced fraction does not fit in i64");
                Err(FractionError::Overflow)
            }
        }
    }

    /// Wrap a pair that is already in lowest terms.
    ///
    /// Used where the pair is derived from a normalized fraction by a sign
    /// change or a remainder, neither of which introduces a common factor.
    pub(crate) fn from_reduced(numerator: i64, denominator: i64) -> Self {
        debug_assert!(denominator > 0);
        debug_assert!(numerator != i64::MIN);
        debug_assert_eq!(Self::gcd(numerator as i128, denominator as i128), 1);
        Fraction {
            numerator,
            denominator,
        }
    }

    /// Greatest common divisor, always non-negative. `gcd(0, d) == |d|`.
    fn gcd(mut a: i128, mut b: i128) -> i128 {
        while b != 0 {
            let temp = b;
            b = a % b;
            a = temp;
        }
        a.abs()
    }

    pub fn numerator(&self) -> i64 {
        self.numerator
    }

    /// Always positive.
    pub fn denominator(&self) -> i64 {
        self.denominator
    }

    /// Check if fraction is zero
    pub fn is_zero(&self) -> bool {
        self.numerator == 0
    }

    /// Check if fraction is negative
    pub fn is_negative(&self) -> bool {
        self.numerator < 0
    }

    pub fn is_positive(&self) -> bool {
        self.numerator > 0
    }

    /// Check if the denominator is one
    pub fn is_integer(&self) -> bool {
        self.denominator == 1
    }

    /// `-1`, `0` or `1`
    pub fn signum(&self) -> i64 {
        self.numerator.signum()
    }

    /// Absolute value
    pub fn abs(self) -> Self {
        Fraction::from_reduced(self.numerator.abs(), self.denominator)
    }

    /// Integer part, truncated toward zero
    pub fn integer_part(self) -> i64 {
        self.numerator / self.denominator
    }

    /// What remains after removing the integer part.
    ///
    /// Has the sign of `self` (or is zero) and is strictly between -1 and 1.
    pub fn fraction_part(self) -> Self {
        Fraction::from_reduced(self.numerator % self.denominator, self.denominator)
    }

    /// Floor - round down to nearest integer
    pub fn floor(self) -> i64 {
        self.numerator.div_euclid(self.denominator)
    }

    /// Ceiling - round up to nearest integer
    pub fn ceil(self) -> i64 {
        -((-self.numerator).div_euclid(self.denominator))
    }

    /// Convert to float. Lossy for most fractions.
    pub fn to_f64(self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }
}

impl Default for Fraction {
    fn default() -> Self {
        Fraction::ZERO
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl From<i32> for Fraction {
    fn from(n: i32) -> Self {
        Fraction::from_reduced(n as i64, 1)
    }
}

impl TryFrom<i64> for Fraction {
    type Error = FractionError;

    fn try_from(n: i64) -> Result<Self> {
        Fraction::from_integer(n)
    }
}

impl TryFrom<(i64, i64)> for Fraction {
    type Error = FractionError;

    fn try_from((num, den): (i64, i64)) -> Result<Self> {
        Fraction::new(num, den)
    }
}
