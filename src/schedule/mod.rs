// ============================================================================
// Schedule Module
// Period-by-period loan amortization schedules over Money arithmetic
// ============================================================================
//
// This module provides:
// - ScheduleRow: one period of an amortization schedule
// - ScheduleGenerator: strategy trait for the per-period algorithms
// - AnnuityGenerator (fixed total payment) and LinearGenerator (fixed
//   principal repayment)
// - ScheduleKind + create_generator: kind-driven construction
//
// Every generator closes the ledger at exactly zero on the final period by
// folding the residual balance into the last payment; without that
// correction the cumulative fixed-point rounding leaves a residue.

mod annuity;
mod factory;
mod linear;

pub use annuity::AnnuityGenerator;
pub use factory::{create_generator, ScheduleKind};
pub use linear::LinearGenerator;

use crate::money::{Money, MoneyError};

#[cfg(feature = "serde")]
use serde::Serialize;

/// One period of an amortization schedule. All four amounts share the
/// schedule's currency; rows are ordered 1..N and immutable once generated.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ScheduleRow {
    pub balance_start: Money,
    pub interest: Money,
    pub payment: Money,
    pub balance_end: Money,
}

/// Strategy interface for amortization algorithms.
///
/// Each call is a pure function of its inputs: generators keep no state
/// between invocations. `rate_per_period` and `periods` are caller-validated
/// to be positive; the generator does not re-validate them.
pub trait ScheduleGenerator: Send + Sync {
    /// Produce the full schedule for a textual principal amount, a
    /// per-period rate fraction and a period count.
    fn generate(
        &self,
        principal: &str,
        rate_per_period: f64,
        periods: u32,
    ) -> Result<Vec<ScheduleRow>, MoneyError>;

    /// Algorithm name for logging
    fn name(&self) -> &'static str;
}
