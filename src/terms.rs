// ============================================================================
// Loan Terms
// Request-level loan parameters and their conversion into generator inputs
// ============================================================================

use crate::money::{Money, MoneyError, MoneyFactory};
use crate::schedule::{create_generator, ScheduleKind, ScheduleRow};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Raw loan request: amount text, annual interest rate and fee as
/// percentages, duration in months and the amortization method.
///
/// The engine works in per-period fractions and fee-adjusted principal;
/// this type owns those conversions so callers hand over request-style
/// numbers unchanged.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LoanTerms {
    /// Requested loan amount, decimal text
    pub amount: String,
    /// Annual interest rate in percent, e.g. 12.0 for 12%
    pub annual_rate_pct: f64,
    /// One-time loan fee in percent of the amount
    pub fee_pct: f64,
    /// Duration in months
    pub months: u32,
    /// Amortization method
    pub kind: ScheduleKind,
}

impl LoanTerms {
    pub fn new(
        amount: impl Into<String>,
        annual_rate_pct: f64,
        months: u32,
        kind: ScheduleKind,
    ) -> Self {
        Self {
            amount: amount.into(),
            annual_rate_pct,
            fee_pct: 0.0,
            months,
            kind,
        }
    }

    /// Builder method: set the loan fee percentage
    pub fn with_fee(mut self, fee_pct: f64) -> Self {
        self.fee_pct = fee_pct;
        self
    }

    /// Validate the request before generating a schedule.
    pub fn validate(&self) -> Result<(), String> {
        if self.amount.trim().is_empty() {
            return Err("Loan amount cannot be empty".to_string());
        }
        if !self.annual_rate_pct.is_finite() || self.annual_rate_pct <= 0.0 {
            return Err("Annual interest rate must be positive".to_string());
        }
        if !self.fee_pct.is_finite() || self.fee_pct < 0.0 {
            return Err("Loan fee cannot be negative".to_string());
        }
        if self.months == 0 {
            return Err("Duration must be at least one month".to_string());
        }

        Ok(())
    }

    /// Per-period (monthly) rate as a fraction.
    pub fn rate_per_period(&self) -> f64 {
        self.annual_rate_pct / 12.0 / 100.0
    }

    /// Fee-adjusted principal, computed in Money arithmetic at the
    /// currency's scale.
    pub fn principal(&self, money: &MoneyFactory) -> Result<Money, MoneyError> {
        let amount = money.create(&self.amount)?;
        if self.fee_pct == 0.0 {
            return Ok(amount);
        }

        amount.mul(1.0 + self.fee_pct / 100.0)
    }

    /// Generate the amortization schedule for these terms.
    ///
    /// Call `validate` first; like the generators themselves, this does not
    /// re-check that rate and duration are positive.
    pub fn schedule(&self, money: &MoneyFactory) -> Result<Vec<ScheduleRow>, MoneyError> {
        let principal = self.principal(money)?;
        let generator = create_generator(self.kind, money.clone());

        generator.generate(
            &principal.amount().to_plain_string(),
            self.rate_per_period(),
            self.months,
        )
    }
}
