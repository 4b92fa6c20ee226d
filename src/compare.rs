use crate::Fraction;
use std::cmp::Ordering;

impl Fraction {
    /// Total order by value.
    ///
    /// Cross-multiplies in `i128`, which is exact for any two fractions since
    /// both denominators are positive.
    pub fn compare(&self, other: &Fraction) -> Ordering {
        let lhs = self.numerator() as i128 * other.denominator() as i128;
        let rhs = other.numerator() as i128 * self.denominator() as i128;
        lhs.cmp(&rhs)
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}
