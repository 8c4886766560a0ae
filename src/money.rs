// ============================================================================
// Money
// A decimal amount bound to a currency, with same-currency arithmetic
// ============================================================================

use crate::currency::{Currency, CurrencyMatch};
use crate::numeric::{DecimalFactory, DecimalValue, NumericError};
use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Serialize, Serializer};

/// Fallback fractional-digit count for currencies without a canonical scale.
pub const DEFAULT_PRECISION: u32 = 8;

// ============================================================================
// Errors
// ============================================================================

/// Errors from money construction and arithmetic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyError {
    /// The underlying decimal operation failed
    Numeric(NumericError),
    /// Arithmetic between two different currencies
    CurrencyMismatch { left: String, right: String },
}

impl fmt::Display for MoneyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyError::Numeric(err) => err.fmt(f),
            MoneyError::CurrencyMismatch { left, right } => {
                write!(f, "currency mismatch: {} != {}", left, right)
            },
        }
    }
}

impl std::error::Error for MoneyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoneyError::Numeric(err) => Some(err),
            MoneyError::CurrencyMismatch { .. } => None,
        }
    }
}

impl From<NumericError> for MoneyError {
    fn from(err: NumericError) -> Self {
        MoneyError::Numeric(err)
    }
}

// ============================================================================
// Money
// ============================================================================

/// Immutable monetary amount.
///
/// The amount's scale always equals the currency's canonical digit count
/// (or `DEFAULT_PRECISION` when the currency has none); construction
/// normalizes and every operation preserves it. `add`/`sub` require the same
/// currency under the value's matching policy.
#[derive(Debug, Clone)]
pub struct Money {
    amount: DecimalValue,
    currency: Arc<Currency>,
    matching: CurrencyMatch,
}

impl Money {
    /// Bind an amount to a currency, rescaling it to the canonical digits.
    pub fn new(
        amount: DecimalValue,
        currency: Arc<Currency>,
        matching: CurrencyMatch,
    ) -> Result<Self, MoneyError> {
        let scale = currency.decimal_digits().unwrap_or(DEFAULT_PRECISION);
        let amount = amount.with_scale(scale)?;

        Ok(Self {
            amount,
            currency,
            matching,
        })
    }

    pub fn amount(&self) -> &DecimalValue {
        &self.amount
    }

    pub fn currency(&self) -> &Arc<Currency> {
        &self.currency
    }

    /// Add another amount of the same currency.
    pub fn add(&self, other: &Money) -> Result<Money, MoneyError> {
        self.check_same_currency(other)?;

        self.rewrap(self.amount.add(&other.amount)?)
    }

    /// Subtract another amount of the same currency.
    pub fn sub(&self, other: &Money) -> Result<Money, MoneyError> {
        self.check_same_currency(other)?;

        self.rewrap(self.amount.sub(&other.amount)?)
    }

    /// Multiply by a real factor (rate application), rounding at the
    /// currency's scale.
    pub fn mul(&self, factor: f64) -> Result<Money, MoneyError> {
        self.rewrap(self.amount.mul(factor)?)
    }

    /// Divide by a real divisor (equal splits), rounding at the currency's
    /// scale.
    pub fn div(&self, divisor: f64) -> Result<Money, MoneyError> {
        self.rewrap(self.amount.div(divisor)?)
    }

    /// Zero in this money's currency, backend and scale.
    pub fn zeroed(&self) -> Result<Money, MoneyError> {
        self.rewrap(self.amount.zeroed()?)
    }

    fn rewrap(&self, amount: DecimalValue) -> Result<Money, MoneyError> {
        Money::new(amount, Arc::clone(&self.currency), self.matching)
    }

    fn check_same_currency(&self, other: &Money) -> Result<(), MoneyError> {
        if self.currency.matches(&other.currency, self.matching) {
            Ok(())
        } else {
            Err(MoneyError::CurrencyMismatch {
                left: self.currency.code().to_string(),
                right: other.currency.code().to_string(),
            })
        }
    }
}

// Equality is record identity of the currency plus amount equality; the
// matching policy does not take part.
impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.currency.id() == other.currency.id() && self.amount == other.amount
    }
}

impl Eq for Money {}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.currency.code(), self.amount)
    }
}

#[cfg(feature = "serde")]
impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ============================================================================
// Factory
// ============================================================================

/// Builds `Money` from textual amounts with one bound currency and decimal
/// backend.
#[derive(Debug, Clone)]
pub struct MoneyFactory {
    decimals: DecimalFactory,
    currency: Arc<Currency>,
    matching: CurrencyMatch,
}

impl MoneyFactory {
    pub fn new(decimals: DecimalFactory, currency: Arc<Currency>) -> Self {
        Self {
            decimals,
            currency,
            matching: CurrencyMatch::default(),
        }
    }

    /// Override the currency matching policy (default: strict identity).
    pub fn with_matching(mut self, matching: CurrencyMatch) -> Self {
        self.matching = matching;
        self
    }

    pub fn currency(&self) -> &Arc<Currency> {
        &self.currency
    }

    /// Parse `text` at the currency's canonical scale and wrap it.
    pub fn create(&self, text: &str) -> Result<Money, MoneyError> {
        let scale = self
            .currency
            .decimal_digits()
            .unwrap_or(DEFAULT_PRECISION);
        let amount = self.decimals.create(text, scale as i32)?;

        Money::new(amount, Arc::clone(&self.currency), self.matching)
    }
}
