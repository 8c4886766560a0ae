// ============================================================================
// Annuity Schedule
// Fixed total payment per period; interest/principal split varies
// ============================================================================

use super::{ScheduleGenerator, ScheduleRow};
use crate::money::{MoneyError, MoneyFactory};

/// Annuity amortization: one payment amount for every period, derived from
/// the annuity factor `r(1+r)^N / ((1+r)^N - 1)`.
pub struct AnnuityGenerator {
    money: MoneyFactory,
}

impl AnnuityGenerator {
    pub fn new(money: MoneyFactory) -> Self {
        Self { money }
    }
}

impl ScheduleGenerator for AnnuityGenerator {
    fn generate(
        &self,
        principal: &str,
        rate_per_period: f64,
        periods: u32,
    ) -> Result<Vec<ScheduleRow>, MoneyError> {
        let principal = self.money.create(principal)?;

        // The factor only derives a multiplier, never a ledger balance, so
        // real-number math is acceptable here.
        let growth = (1.0 + rate_per_period).powi(periods as i32);
        let annuity_factor = rate_per_period * growth / (growth - 1.0);

        // Rounded once, at the principal's scale
        let payment_per_period = principal.mul(annuity_factor)?;

        let mut schedule = Vec::with_capacity(periods as usize);
        let mut balance = principal;
        for n in 1..=periods {
            let interest = balance.mul(rate_per_period)?;
            let mut payment = payment_per_period.clone();
            let mut balance_end = balance.add(&interest)?.sub(&payment)?;
            if n == periods {
                // Close the ledger at exactly zero despite rounding drift
                payment = payment.add(&balance_end)?;
                balance_end = balance_end.zeroed()?;
            }
            schedule.push(ScheduleRow {
                balance_start: balance,
                interest,
                payment,
                balance_end: balance_end.clone(),
            });
            balance = balance_end;
        }

        tracing::debug!(
            algorithm = self.name(),
            periods,
            "generated amortization schedule"
        );

        Ok(schedule)
    }

    fn name(&self) -> &'static str {
        "annuity"
    }
}
