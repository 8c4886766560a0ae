// ============================================================================
// Schedule Factory
// Creates amortization generators from a schedule kind
// ============================================================================

use super::{AnnuityGenerator, LinearGenerator, ScheduleGenerator};
use crate::money::MoneyFactory;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The two supported amortization methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ScheduleKind {
    /// Fixed total payment per period
    Annuity,
    /// Fixed principal repayment per period
    Linear,
}

impl FromStr for ScheduleKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "annuity" => Ok(ScheduleKind::Annuity),
            "linear" => Ok(ScheduleKind::Linear),
            other => Err(format!("unknown schedule kind: {}", other)),
        }
    }
}

/// Creates the generator for the requested schedule kind, bound to one
/// money factory.
pub fn create_generator(kind: ScheduleKind, money: MoneyFactory) -> Box<dyn ScheduleGenerator> {
    match kind {
        ScheduleKind::Annuity => Box::new(AnnuityGenerator::new(money)),
        ScheduleKind::Linear => Box::new(LinearGenerator::new(money)),
    }
}
