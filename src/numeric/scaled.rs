// ============================================================================
// Integer-Scaled Backend
// Fixed-point decimal stored as i64 units at a runtime scale
// ============================================================================

use super::errors::{NumericError, NumericResult};
use std::fmt;

/// Highest scale whose unit factor (10^scale) fits in an i64.
const MAX_SCALE: u32 = 18;

/// Absolute bound of the i64 range as f64, for pre-cast range checks.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Largest units magnitude an f64 represents exactly (2^53).
const MAX_EXACT_UNITS: u64 = 1 << 53;

/// Fixed-point decimal backed by an i64.
///
/// Internally stores `value × 10^scale` as an i64, so the representable
/// magnitude shrinks as the scale grows. Operations that would leave the
/// i64 range fail with `Overflow` instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScaledDecimal {
    units: i64,
    scale: u32,
}

/// 10^scale as an i64, or `Overflow` when the factor itself does not fit.
fn pow10(scale: u32) -> NumericResult<i64> {
    if scale > MAX_SCALE {
        return Err(NumericError::Overflow);
    }
    Ok(10i64.pow(scale))
}

/// Round a scaled f64 product half-up, ties away from zero.
fn round_half_up(x: f64) -> f64 {
    if x >= 0.0 {
        (x + 0.5).floor()
    } else {
        (x - 0.5).ceil()
    }
}

impl ScaledDecimal {
    /// Zero at the given scale.
    pub fn zero(scale: u32) -> NumericResult<Self> {
        pow10(scale)?;
        Ok(Self { units: 0, scale })
    }

    /// Parse a decimal string at the given scale.
    ///
    /// Accepts an optional leading `-`, integer digits, an optional `.` and
    /// fractional digits. Fractional digits beyond `scale` are dropped with
    /// round-half-up applied from the first excess digit; missing digits are
    /// zero-padded.
    ///
    /// # Errors
    /// - `ParseError` for malformed text
    /// - `Overflow` when the scaled magnitude does not fit in an i64
    pub fn parse(text: &str, scale: u32) -> NumericResult<Self> {
        let factor = pow10(scale)?;
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

        // Digits are pre-validated, so a parse failure here is a range issue.
        let int_part: i128 = if int_str.is_empty() {
            0
        } else {
            int_str.parse().map_err(|_| NumericError::Overflow)?
        };

        let kept = &frac_str[..frac_str.len().min(scale as usize)];
        let mut frac_part: i128 = if kept.is_empty() {
            0
        } else {
            // At most MAX_SCALE digits, cannot fail
            kept.parse().map_err(|_| NumericError::ParseError)?
        };
        frac_part *= 10i128.pow(scale - kept.len() as u32);

        if frac_str.len() > scale as usize && frac_str.as_bytes()[scale as usize] >= b'5' {
            frac_part += 1;
        }

        let mut magnitude = int_part
            .checked_mul(factor as i128)
            .and_then(|m| m.checked_add(frac_part))
            .ok_or(NumericError::Overflow)?;
        if negative {
            magnitude = -magnitude;
        }

        let units = i64::try_from(magnitude).map_err(|_| NumericError::Overflow)?;

        Ok(Self { units, scale })
    }

    /// The number of fractional digits this value renders with.
    #[inline]
    pub const fn scale(&self) -> u32 {
        self.scale
    }

    /// The raw scaled magnitude (`value × 10^scale`).
    #[inline]
    pub const fn units(&self) -> i64 {
        self.units
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.units == 0
    }

    /// Exact addition at the maximum of the two scales.
    pub fn add(&self, other: &Self) -> NumericResult<Self> {
        let scale = self.scale.max(other.scale);
        let left = self.upscaled_units(scale)?;
        let right = other.upscaled_units(scale)?;
        let units = left.checked_add(right).ok_or(NumericError::Overflow)?;

        Ok(Self { units, scale })
    }

    /// Exact subtraction at the maximum of the two scales.
    pub fn sub(&self, other: &Self) -> NumericResult<Self> {
        let negated = Self {
            units: other.units.checked_neg().ok_or(NumericError::Overflow)?,
            scale: other.scale,
        };

        self.add(&negated)
    }

    /// Multiply by a real factor, rounding half-up at this value's scale.
    ///
    /// # Errors
    /// Fails with `Overflow` when the units magnitude exceeds the exact f64
    /// range (2^53); the arbitrary-precision backend handles such values.
    pub fn mul(&self, factor: f64) -> NumericResult<Self> {
        if !factor.is_finite() {
            return Err(NumericError::ParseError);
        }

        self.from_product(self.units_as_f64()? * factor)
    }

    /// Divide by a real divisor, rounding half-up at this value's scale.
    ///
    /// # Errors
    /// Fails with `DivisionByZero` when the divisor is zero and with
    /// `Overflow` when the units magnitude exceeds the exact f64 range.
    pub fn div(&self, divisor: f64) -> NumericResult<Self> {
        if !divisor.is_finite() {
            return Err(NumericError::ParseError);
        }
        if divisor == 0.0 {
            return Err(NumericError::DivisionByZero);
        }

        self.from_product(self.units_as_f64()? / divisor)
    }

    /// Re-render at a new scale: exact zero-padding upward, round-half-up
    /// downward.
    pub fn with_scale(&self, new_scale: u32) -> NumericResult<Self> {
        pow10(new_scale)?;
        if new_scale == self.scale {
            return Ok(*self);
        }

        if new_scale > self.scale {
            let factor = pow10(new_scale - self.scale)?;
            let units = self
                .units
                .checked_mul(factor)
                .ok_or(NumericError::Overflow)?;
            return Ok(Self {
                units,
                scale: new_scale,
            });
        }

        let factor = pow10(self.scale - new_scale)?;
        let mut quotient = self.units / factor;
        let remainder = self.units % factor;
        if remainder.abs() >= factor / 2 {
            quotient += self.units.signum();
        }

        Ok(Self {
            units: quotient,
            scale: new_scale,
        })
    }

    /// Scaled magnitude at `scale >= self.scale`, multiplied up exactly.
    fn upscaled_units(&self, scale: u32) -> NumericResult<i64> {
        let factor = pow10(scale - self.scale)?;
        self.units.checked_mul(factor).ok_or(NumericError::Overflow)
    }

    /// Units as an f64, failing loudly rather than losing integer precision.
    fn units_as_f64(&self) -> NumericResult<f64> {
        if self.units.unsigned_abs() > MAX_EXACT_UNITS {
            return Err(NumericError::Overflow);
        }

        Ok(self.units as f64)
    }

    /// Build a value at this scale from a raw scaled f64 product.
    fn from_product(&self, product: f64) -> NumericResult<Self> {
        let rounded = round_half_up(product);
        if !rounded.is_finite() || rounded >= I64_BOUND || rounded < -I64_BOUND {
            return Err(NumericError::Overflow);
        }

        Ok(Self {
            units: rounded as i64,
            scale: self.scale,
        })
    }
}

impl fmt::Display for ScaledDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.scale == 0 {
            return write!(f, "{}", self.units);
        }

        // scale <= MAX_SCALE is a construction invariant
        let factor = 10i64.pow(self.scale);
        let int_part = self.units / factor;
        let frac_part = (self.units % factor).unsigned_abs();

        if self.units < 0 && int_part == 0 {
            // Sign lives on a zero integer part
            write!(f, "-0.{:0>width$}", frac_part, width = self.scale as usize)
        } else {
            write!(
                f,
                "{}.{:0>width$}",
                int_part,
                frac_part,
                width = self.scale as usize
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let x = ScaledDecimal::parse("123.45", 2).unwrap();
        assert_eq!(x.to_string(), "123.45");
        assert_eq!(x.scale(), 2);
        assert_eq!(x.units(), 12345);
    }

    #[test]
    fn test_parse_negative() {
        let x = ScaledDecimal::parse("-123.45", 2).unwrap();
        assert_eq!(x.to_string(), "-123.45");
        assert_eq!(x.units(), -12345);
    }

    #[test]
    fn test_parse_zero_padding() {
        let x = ScaledDecimal::parse(".00100", 5).unwrap();
        assert_eq!(x.to_string(), "0.00100");

        let y = ScaledDecimal::parse("7", 3).unwrap();
        assert_eq!(y.to_string(), "7.000");
    }

    #[test]
    fn test_parse_rounds_half_up() {
        // Carry propagates across the decimal point
        let x = ScaledDecimal::parse("0.999999", 2).unwrap();
        assert_eq!(x.to_string(), "1.00");

        let y = ScaledDecimal::parse("1.234", 2).unwrap();
        assert_eq!(y.to_string(), "1.23");

        let z = ScaledDecimal::parse("1.235", 2).unwrap();
        assert_eq!(z.to_string(), "1.24");

        let n = ScaledDecimal::parse("-0.005", 2).unwrap();
        assert_eq!(n.to_string(), "-0.01");
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(
            ScaledDecimal::parse("not_a_number", 2),
            Err(NumericError::ParseError)
        );
        assert_eq!(ScaledDecimal::parse("", 2), Err(NumericError::ParseError));
        assert_eq!(
            ScaledDecimal::parse("1.2.3", 2),
            Err(NumericError::ParseError)
        );
        assert_eq!(ScaledDecimal::parse("-", 2), Err(NumericError::ParseError));
    }

    #[test]
    fn test_parse_overflow() {
        assert_eq!(
            ScaledDecimal::parse("9223372036854775808", 0),
            Err(NumericError::Overflow)
        );
        // 10^19 units do not fit in an i64
        assert_eq!(ScaledDecimal::parse("1", 19), Err(NumericError::Overflow));

        let x = ScaledDecimal::parse("1.00", 2).unwrap();
        assert_eq!(x.with_scale(19), Err(NumericError::Overflow));
    }

    #[test]
    fn test_add_exact() {
        let x = ScaledDecimal::parse("12.34", 2).unwrap();
        let sum = x.add(&x).unwrap();
        assert_eq!(sum.to_string(), "24.68");

        let cent = ScaledDecimal::parse("0.01", 2).unwrap();
        assert_eq!(sum.add(&cent).unwrap().to_string(), "24.69");
    }

    #[test]
    fn test_add_mixed_scales() {
        let x = ScaledDecimal::parse("1.5", 1).unwrap();
        let y = ScaledDecimal::parse("0.25", 2).unwrap();
        let sum = x.add(&y).unwrap();
        assert_eq!(sum.scale(), 2);
        assert_eq!(sum.to_string(), "1.75");
    }

    #[test]
    fn test_sub() {
        let x = ScaledDecimal::parse("12.34", 2).unwrap();
        let zero = x.sub(&x).unwrap();
        assert_eq!(zero.to_string(), "0.00");

        let neg = zero.sub(&x).unwrap();
        assert_eq!(neg.to_string(), "-12.34");
    }

    #[test]
    fn test_mul() {
        let x = ScaledDecimal::parse("12.34", 2).unwrap();
        assert_eq!(x.mul(2.0).unwrap().to_string(), "24.68");
        assert_eq!(x.mul(0.0).unwrap().to_string(), "0.00");

        let principal = ScaledDecimal::parse("1000.00", 2).unwrap();
        assert_eq!(principal.mul(0.01).unwrap().to_string(), "10.00");
    }

    #[test]
    fn test_div_rounds() {
        let x = ScaledDecimal::parse("10.00", 2).unwrap();
        assert_eq!(x.div(2.0).unwrap().to_string(), "5.00");
        assert_eq!(x.div(3.0).unwrap().to_string(), "3.33");
    }

    #[test]
    fn test_div_by_zero() {
        let x = ScaledDecimal::parse("10.00", 2).unwrap();
        assert_eq!(x.div(0.0), Err(NumericError::DivisionByZero));
    }

    #[test]
    fn test_with_scale() {
        let x = ScaledDecimal::parse("1.25", 2).unwrap();
        assert_eq!(x.with_scale(4).unwrap().to_string(), "1.2500");
        assert_eq!(x.with_scale(1).unwrap().to_string(), "1.3");
        assert_eq!(x.with_scale(2).unwrap(), x);

        let n = ScaledDecimal::parse("-1.25", 2).unwrap();
        assert_eq!(n.with_scale(1).unwrap().to_string(), "-1.3");
    }

    #[test]
    fn test_mul_overflow() {
        let x = ScaledDecimal::parse("9000000000000000000", 0).unwrap();
        assert_eq!(x.mul(10.0), Err(NumericError::Overflow));
    }

    #[test]
    fn test_real_ops_fail_beyond_exact_f64_range() {
        // 2^53 + 1 has no exact f64 representation; a silent round-trip
        // through f64 would render 9007199254740992 here
        let x = ScaledDecimal::parse("9007199254740993", 0).unwrap();
        assert_eq!(x.mul(1.0), Err(NumericError::Overflow));
        assert_eq!(x.div(1.0), Err(NumericError::Overflow));

        // 2^53 itself is still exact
        let y = ScaledDecimal::parse("9007199254740992", 0).unwrap();
        assert_eq!(y.mul(1.0).unwrap().to_string(), "9007199254740992");
        assert_eq!(y.div(1.0).unwrap().to_string(), "9007199254740992");
    }

    #[test]
    fn test_negative_zero_renders_unsigned() {
        let x = ScaledDecimal::parse("-0.001", 2).unwrap();
        assert_eq!(x.to_string(), "0.00");
    }

    #[test]
    fn test_scale_zero_display() {
        let x = ScaledDecimal::parse("123.7", 0).unwrap();
        assert_eq!(x.to_string(), "124");
    }
}
