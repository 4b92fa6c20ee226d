use crate::error::{FractionError, ParseFractionError, Result};
use crate::Fraction;
use std::str::FromStr;

impl Fraction {
    /// Read a fraction from the `n/d` form produced by `Display`.
    ///
    /// Both sides must be base 10 integer literals without surrounding
    /// whitespace. The result is simplified, so `"2/4"` reads as `1/2`.
    pub fn parse(text: &str) -> Result<Fraction> {
        let mut parts = text.split('/');
        let (numerator, denominator) = match (parts.next(), parts.next(), parts.next()) {
            (Some(numerator), Some(denominator), None) => (numerator, denominator),
            _ => {
                tracing::trace!(text, "Fraction text is not of the form n/d");
                return Err(ParseFractionError::shape(text).into());
            }
        };
        Fraction::new(parse_integer(numerator)?, parse_integer(denominator)?)
    }
}

fn parse_integer(part: &str) -> Result<i64> {
    part.parse::<i64>().map_err(|source| {
        tracing::trace!(part, "Invalid integer in fraction text");
        FractionError::from(ParseFractionError::invalid_integer(part, source))
    })
}

impl FromStr for Fraction {
    type Err = FractionError;

    fn from_str(s: &str) -> Result<Self> {
        Fraction::parse(s)
    }
}
