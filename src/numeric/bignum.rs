// ============================================================================
// Arbitrary-Precision Backend
// Fixed-point decimal over bigdecimal::BigDecimal with a pinned scale
// ============================================================================

use super::errors::{NumericError, NumericResult};
use bigdecimal::{BigDecimal, RoundingMode, Zero};
use std::fmt;
use std::str::FromStr;

/// Fixed-point decimal backed by an arbitrary-precision integer.
///
/// The wrapped `BigDecimal` is kept at exactly `scale` fractional digits,
/// so rendering is always zero-padded to the scale. Unlike the integer-scaled
/// backend this one never fails with `Overflow`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BigNumDecimal {
    value: BigDecimal,
    scale: u32,
}

impl BigNumDecimal {
    /// Zero at the given scale.
    pub fn zero(scale: u32) -> Self {
        Self {
            value: BigDecimal::zero().with_scale(i64::from(scale)),
            scale,
        }
    }

    /// Parse a decimal string at the given scale.
    ///
    /// Same grammar as the integer-scaled backend: optional leading `-`,
    /// integer digits, optional `.`, fractional digits. Excess fractional
    /// digits round half-up.
    pub fn parse(text: &str, scale: u32) -> NumericResult<Self> {
        let text = text.trim();

        let (negative, digits) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };

        let (int_str, frac_str) = match digits.split_once('.') {
            Some((i, f)) => (i, f),
            None => (digits, ""),
        };

        if int_str.is_empty() && frac_str.is_empty() {
            return Err(NumericError::ParseError);
        }
        if !int_str.bytes().all(|b| b.is_ascii_digit())
            || !frac_str.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(NumericError::ParseError);
        }

        let normalized = format!(
            "{}{}.{}",
            if negative { "-" } else { "" },
            if int_str.is_empty() { "0" } else { int_str },
            if frac_str.is_empty() { "0" } else { frac_str },
        );
        let value = BigDecimal::from_str(&normalized).map_err(|_| NumericError::ParseError)?;

        Ok(Self::pinned(value, scale))
    }

    #[inline]
    pub const fn scale(&self) -> u32 {
        self.scale
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Exact addition at the maximum of the two scales.
    pub fn add(&self, other: &Self) -> NumericResult<Self> {
        let scale = self.scale.max(other.scale);

        Ok(Self::pinned(&self.value + &other.value, scale))
    }

    /// Exact subtraction at the maximum of the two scales.
    pub fn sub(&self, other: &Self) -> NumericResult<Self> {
        let scale = self.scale.max(other.scale);

        Ok(Self::pinned(&self.value - &other.value, scale))
    }

    /// Multiply by a real factor, rounding half-up at this value's scale.
    pub fn mul(&self, factor: f64) -> NumericResult<Self> {
        let factor = Self::real_operand(factor)?;

        Ok(Self::pinned(&self.value * &factor, self.scale))
    }

    /// Divide by a real divisor, rounding half-up at this value's scale.
    ///
    /// # Errors
    /// Fails with `DivisionByZero` when the divisor is zero.
    pub fn div(&self, divisor: f64) -> NumericResult<Self> {
        if divisor == 0.0 {
            return Err(NumericError::DivisionByZero);
        }
        let divisor = Self::real_operand(divisor)?;

        Ok(Self::pinned(&self.value / &divisor, self.scale))
    }

    /// Re-render at a new scale: exact zero-padding upward, round-half-up
    /// downward.
    pub fn with_scale(&self, new_scale: u32) -> NumericResult<Self> {
        if new_scale == self.scale {
            return Ok(self.clone());
        }

        Ok(Self::pinned(self.value.clone(), new_scale))
    }

    /// Pin a raw value to a scale, rounding half-up (ties away from zero).
    fn pinned(value: BigDecimal, scale: u32) -> Self {
        Self {
            value: value.with_scale_round(i64::from(scale), RoundingMode::HalfUp),
            scale,
        }
    }

    /// Convert an f64 multiplier/divisor into its exact decimal expansion.
    fn real_operand(operand: f64) -> NumericResult<BigDecimal> {
        if !operand.is_finite() {
            return Err(NumericError::ParseError);
        }

        BigDecimal::try_from(operand).map_err(|_| NumericError::ParseError)
    }
}

impl fmt::Display for BigNumDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let x = BigNumDecimal::parse("123.45", 2).unwrap();
        assert_eq!(x.to_string(), "123.45");
        assert_eq!(x.scale(), 2);

        let neg = BigNumDecimal::parse("-123.45", 2).unwrap();
        assert_eq!(neg.to_string(), "-123.45");
    }

    #[test]
    fn test_parse_zero_padding() {
        let x = BigNumDecimal::parse(".00100", 5).unwrap();
        assert_eq!(x.to_string(), "0.00100");
    }

    #[test]
    fn test_parse_rounds_half_up() {
        let x = BigNumDecimal::parse("0.999999", 2).unwrap();
        assert_eq!(x.to_string(), "1.00");

        let y = BigNumDecimal::parse("1.235", 2).unwrap();
        assert_eq!(y.to_string(), "1.24");

        let n = BigNumDecimal::parse("-0.005", 2).unwrap();
        assert_eq!(n.to_string(), "-0.01");
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(
            BigNumDecimal::parse("12,34", 2),
            Err(NumericError::ParseError)
        );
        assert_eq!(BigNumDecimal::parse("1e5", 2), Err(NumericError::ParseError));
        assert_eq!(BigNumDecimal::parse("", 2), Err(NumericError::ParseError));
    }

    #[test]
    fn test_no_overflow_on_huge_magnitudes() {
        // Far beyond i64 range
        let x = BigNumDecimal::parse("92233720368547758089999.55", 2).unwrap();
        let sum = x.add(&x).unwrap();
        assert_eq!(sum.to_string(), "184467440737095516179999.10");

        // Real-operand ops stay exact past the f64 integer range too
        let y = BigNumDecimal::parse("9007199254740993", 0).unwrap();
        assert_eq!(y.mul(1.0).unwrap().to_string(), "9007199254740993");
    }

    #[test]
    fn test_add_sub() {
        let x = BigNumDecimal::parse("12.34", 2).unwrap();
        let sum = x.add(&x).unwrap();
        assert_eq!(sum.to_string(), "24.68");

        let cent = BigNumDecimal::parse("0.01", 2).unwrap();
        assert_eq!(sum.add(&cent).unwrap().to_string(), "24.69");

        let zero = x.sub(&x).unwrap();
        assert_eq!(zero.to_string(), "0.00");
        assert_eq!(zero.sub(&x).unwrap().to_string(), "-12.34");
    }

    #[test]
    fn test_add_mixed_scales() {
        let x = BigNumDecimal::parse("1.5", 1).unwrap();
        let y = BigNumDecimal::parse("0.25", 2).unwrap();
        let sum = x.add(&y).unwrap();
        assert_eq!(sum.scale(), 2);
        assert_eq!(sum.to_string(), "1.75");
    }

    #[test]
    fn test_mul_div() {
        let x = BigNumDecimal::parse("12.34", 2).unwrap();
        assert_eq!(x.mul(2.0).unwrap().to_string(), "24.68");

        let ten = BigNumDecimal::parse("10.00", 2).unwrap();
        assert_eq!(ten.div(3.0).unwrap().to_string(), "3.33");
        assert_eq!(ten.div(0.0), Err(NumericError::DivisionByZero));
    }

    #[test]
    fn test_with_scale() {
        let x = BigNumDecimal::parse("1.25", 2).unwrap();
        assert_eq!(x.with_scale(4).unwrap().to_string(), "1.2500");
        assert_eq!(x.with_scale(1).unwrap().to_string(), "1.3");
    }

    #[test]
    fn test_non_finite_operand() {
        let x = BigNumDecimal::parse("1.00", 2).unwrap();
        assert_eq!(x.mul(f64::NAN), Err(NumericError::ParseError));
        assert_eq!(x.div(f64::INFINITY), Err(NumericError::ParseError));
    }
}
