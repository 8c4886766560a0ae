// ============================================================================
// Decimal Value and Factory
// Backend selection and uniform dispatch over the two implementations
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::scaled::ScaledDecimal;
use std::fmt;

#[cfg(feature = "bignum")]
use super::bignum::BigNumDecimal;

// ============================================================================
// Backend Selection
// ============================================================================

/// The arithmetic backend a factory produces values with.
///
/// Selection happens once at startup; every value a factory creates uses the
/// same backend from then on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// i64 units at a runtime scale. Fast, limited to the i64 range.
    ScaledInt,
    /// Arbitrary-precision digits via the bigdecimal crate. Never overflows.
    #[cfg(feature = "bignum")]
    BigNum,
}

impl Backend {
    /// Pure capability query: the arbitrary-precision backend when compiled
    /// in, the integer-scaled backend otherwise.
    pub fn detect() -> Self {
        #[cfg(feature = "bignum")]
        {
            Backend::BigNum
        }
        #[cfg(not(feature = "bignum"))]
        {
            Backend::ScaledInt
        }
    }
}

// ============================================================================
// Decimal Value
// ============================================================================

/// Immutable fixed-point decimal with an explicit scale.
///
/// Every arithmetic operation returns a new value; nothing is mutated in
/// place. The two backends render identical inputs to identical text, so
/// values from different factories still interoperate: mixed-backend `add`
/// and `sub` go through the textual contract of the right-hand operand.
#[derive(Debug, Clone)]
pub enum DecimalValue {
    Scaled(ScaledDecimal),
    #[cfg(feature = "bignum")]
    Big(BigNumDecimal),
}

impl DecimalValue {
    /// The number of fractional digits this value renders with.
    pub fn scale(&self) -> u32 {
        match self {
            DecimalValue::Scaled(v) => v.scale(),
            #[cfg(feature = "bignum")]
            DecimalValue::Big(v) => v.scale(),
        }
    }

    pub fn is_zero(&self) -> bool {
        match self {
            DecimalValue::Scaled(v) => v.is_zero(),
            #[cfg(feature = "bignum")]
            DecimalValue::Big(v) => v.is_zero(),
        }
    }

    /// Zero at this value's backend and scale.
    pub fn zeroed(&self) -> NumericResult<Self> {
        match self {
            DecimalValue::Scaled(v) => ScaledDecimal::zero(v.scale()).map(DecimalValue::Scaled),
            #[cfg(feature = "bignum")]
            DecimalValue::Big(v) => Ok(DecimalValue::Big(BigNumDecimal::zero(v.scale()))),
        }
    }

    /// Textual rendering with exactly `scale` fractional digits.
    pub fn to_plain_string(&self) -> String {
        self.to_string()
    }

    /// Exact addition; the result carries the maximum of the two scales.
    pub fn add(&self, other: &Self) -> NumericResult<Self> {
        match (self, other) {
            (DecimalValue::Scaled(a), DecimalValue::Scaled(b)) => {
                a.add(b).map(DecimalValue::Scaled)
            },
            #[cfg(feature = "bignum")]
            (DecimalValue::Big(a), DecimalValue::Big(b)) => a.add(b).map(DecimalValue::Big),
            #[cfg(feature = "bignum")]
            (DecimalValue::Scaled(a), DecimalValue::Big(b)) => {
                let b = ScaledDecimal::parse(&b.to_string(), b.scale())?;
                a.add(&b).map(DecimalValue::Scaled)
            },
            #[cfg(feature = "bignum")]
            (DecimalValue::Big(a), DecimalValue::Scaled(b)) => {
                let b = BigNumDecimal::parse(&b.to_string(), b.scale())?;
                a.add(&b).map(DecimalValue::Big)
            },
        }
    }

    /// Exact subtraction; the result carries the maximum of the two scales.
    pub fn sub(&self, other: &Self) -> NumericResult<Self> {
        match (self, other) {
            (DecimalValue::Scaled(a), DecimalValue::Scaled(b)) => {
                a.sub(b).map(DecimalValue::Scaled)
            },
            #[cfg(feature = "bignum")]
            (DecimalValue::Big(a), DecimalValue::Big(b)) => a.sub(b).map(DecimalValue::Big),
            #[cfg(feature = "bignum")]
            (DecimalValue::Scaled(a), DecimalValue::Big(b)) => {
                let b = ScaledDecimal::parse(&b.to_string(), b.scale())?;
                a.sub(&b).map(DecimalValue::Scaled)
            },
            #[cfg(feature = "bignum")]
            (DecimalValue::Big(a), DecimalValue::Scaled(b)) => {
                let b = BigNumDecimal::parse(&b.to_string(), b.scale())?;
                a.sub(&b).map(DecimalValue::Big)
            },
        }
    }

    /// Multiply by a real factor, rounding half-up at this value's scale.
    pub fn mul(&self, factor: f64) -> NumericResult<Self> {
        match self {
            DecimalValue::Scaled(v) => v.mul(factor).map(DecimalValue::Scaled),
            #[cfg(feature = "bignum")]
            DecimalValue::Big(v) => v.mul(factor).map(DecimalValue::Big),
        }
    }

    /// Divide by a real divisor, rounding half-up at this value's scale.
    pub fn div(&self, divisor: f64) -> NumericResult<Self> {
        match self {
            DecimalValue::Scaled(v) => v.div(divisor).map(DecimalValue::Scaled),
            #[cfg(feature = "bignum")]
            DecimalValue::Big(v) => v.div(divisor).map(DecimalValue::Big),
        }
    }

    /// Re-render at a new scale: exact zero-padding upward, round-half-up
    /// downward. An unchanged scale is a cheap clone.
    pub fn with_scale(&self, new_scale: u32) -> NumericResult<Self> {
        match self {
            DecimalValue::Scaled(v) => v.with_scale(new_scale).map(DecimalValue::Scaled),
            #[cfg(feature = "bignum")]
            DecimalValue::Big(v) => v.with_scale(new_scale).map(DecimalValue::Big),
        }
    }
}

// Values compare by scale and rendering, so equal numbers from different
// backends are equal.
impl PartialEq for DecimalValue {
    fn eq(&self, other: &Self) -> bool {
        self.scale() == other.scale() && self.to_string() == other.to_string()
    }
}

impl Eq for DecimalValue {}

impl fmt::Display for DecimalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecimalValue::Scaled(v) => v.fmt(f),
            #[cfg(feature = "bignum")]
            DecimalValue::Big(v) => v.fmt(f),
        }
    }
}

// ============================================================================
// Factory
// ============================================================================

/// Produces `DecimalValue`s with one backend chosen at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecimalFactory {
    backend: Backend,
}

impl DecimalFactory {
    pub const fn new(backend: Backend) -> Self {
        Self { backend }
    }

    /// Factory with the backend `Backend::detect()` picks for this build.
    pub fn auto() -> Self {
        Self::new(Backend::detect())
    }

    pub const fn backend(&self) -> Backend {
        self.backend
    }

    /// Parse `text` at `scale` fractional digits.
    ///
    /// # Errors
    /// - `InvalidScale` when `scale` is negative
    /// - `ParseError` for malformed text
    /// - `Overflow` when the integer-scaled backend cannot hold the magnitude
    pub fn create(&self, text: &str, scale: i32) -> NumericResult<DecimalValue> {
        if scale < 0 {
            return Err(NumericError::InvalidScale);
        }
        let scale = scale as u32;

        match self.backend {
            Backend::ScaledInt => ScaledDecimal::parse(text, scale).map(DecimalValue::Scaled),
            #[cfg(feature = "bignum")]
            Backend::BigNum => BigNumDecimal::parse(text, scale).map(DecimalValue::Big),
        }
    }
}

impl Default for DecimalFactory {
    fn default() -> Self {
        Self::auto()
    }
}
