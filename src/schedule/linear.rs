// ============================================================================
// Linear Schedule
// Fixed principal repayment per period; total payment declines with interest
// ============================================================================

use super::{ScheduleGenerator, ScheduleRow};
use crate::money::{MoneyError, MoneyFactory};

/// Linear amortization: every period repays an equal share of the principal
/// plus the interest accrued on the remaining balance.
pub struct LinearGenerator {
    money: MoneyFactory,
}

impl LinearGenerator {
    pub fn new(money: MoneyFactory) -> Self {
        Self { money }
    }
}

impl ScheduleGenerator for LinearGenerator {
    fn generate(
        &self,
        principal: &str,
        rate_per_period: f64,
        periods: u32,
    ) -> Result<Vec<ScheduleRow>, MoneyError> {
        let principal = self.money.create(principal)?;

        let mut schedule = Vec::with_capacity(periods as usize);
        let mut balance = principal.clone();
        for n in 1..=periods {
            let interest = balance.mul(rate_per_period)?;
            // Recomputed each period; the closing correction absorbs any
            // division-rounding drift
            let mut payment = principal.div(f64::from(periods))?.add(&interest)?;
            let mut balance_end = balance.add(&interest)?.sub(&payment)?;
            if n == periods {
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
        "linear"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::CurrencyRegistry;
    use crate::numeric::DecimalFactory;

    fn generator() -> LinearGenerator {
        let registry = CurrencyRegistry::with_iso_defaults();
        let money = MoneyFactory::new(DecimalFactory::auto(), registry.get("USD").unwrap());
        LinearGenerator::new(money)
    }

    #[test]
    fn test_reference_scenario() {
        // 1000.00 at 1% monthly over 12 periods
        let schedule = generator().generate("1000.00", 0.01, 12).unwrap();
        assert_eq!(schedule.len(), 12);

        let first = &schedule[0];
        assert_eq!(first.balance_start.to_string(), "USD 1000.00");
        assert_eq!(first.interest.to_string(), "USD 10.00");
        assert_eq!(first.payment.to_string(), "USD 93.33");
        assert_eq!(first.balance_end.to_string(), "USD 916.67");

        let last = &schedule[11];
        assert_eq!(last.payment.to_string(), "USD 84.20");
        assert_eq!(last.balance_end.to_string(), "USD 0.00");
    }

    #[test]
    fn test_payments_decline() {
        let schedule = generator().generate("1000.00", 0.01, 12).unwrap();

        // Interest shrinks with the balance, so each regular payment is no
        // larger than the one before it
        for pair in schedule[..11].windows(2) {
            let step = pair[0].payment.sub(&pair[1].payment).unwrap();
            assert!(!step.amount().to_plain_string().starts_with('-'));
        }
    }

    #[test]
    fn test_payments_minus_interest_equals_principal() {
        let schedule = generator().generate("1000.00", 0.01, 12).unwrap();

        let mut paid = schedule[0].payment.zeroed().unwrap();
        let mut interest = paid.clone();
        for row in &schedule {
            paid = paid.add(&row.payment).unwrap();
            interest = interest.add(&row.interest).unwrap();
        }

        assert_eq!(paid.sub(&interest).unwrap().to_string(), "USD 1000.00");
    }

    #[test]
    fn test_balances_chain() {
        let schedule = generator().generate("777.77", 0.015, 7).unwrap();

        for pair in schedule.windows(2) {
            assert_eq!(pair[0].balance_end, pair[1].balance_start);
        }
        assert_eq!(schedule[6].balance_end.to_string(), "USD 0.00");
    }

    #[test]
    fn test_single_period() {
        let schedule = generator().generate("1000.00", 0.01, 1).unwrap();
        assert_eq!(schedule.len(), 1);

        let row = &schedule[0];
        assert_eq!(row.payment.to_string(), "USD 1010.00");
        assert_eq!(row.balance_end.to_string(), "USD 0.00");
    }
}
