// ============================================================================
// Amortization Engine Library
// Deterministic fixed-point money arithmetic and loan schedules
// ============================================================================

//! # Amortization Engine
//!
//! A deterministic, currency-safe decimal engine with loan amortization
//! schedules built on top of it.
//!
//! ## Features
//!
//! - **No binary floating point** for ledger balances; every amount is a
//!   fixed-point decimal with an explicit scale and round-half-up rounding
//! - **Interchangeable arithmetic backends** behind one contract: an
//!   integer-scaled i64 backend and an arbitrary-precision backend
//!   (feature `bignum`, enabled by default)
//! - **Currency-safe `Money`** normalized to the currency's canonical digit
//!   count; arithmetic across currencies fails instead of mixing units
//! - **Annuity and linear schedules** whose final period always closes the
//!   balance at exactly zero, regardless of accumulated rounding
//!
//! ## Example
//!
//! ```rust
//! use amortization_engine::prelude::*;
//!
//! # fn main() -> Result<(), MoneyError> {
//! let registry = CurrencyRegistry::with_iso_defaults();
//! let currency = registry.get("USD").expect("stock registry has USD");
//! let money = MoneyFactory::new(DecimalFactory::auto(), currency);
//!
//! // 1000.00 at 1% per month over 12 months, fixed-payment method
//! let generator = create_generator(ScheduleKind::Annuity, money);
//! let schedule = generator.generate("1000.00", 0.01, 12)?;
//!
//! assert_eq!(schedule[0].payment.to_string(), "USD 88.85");
//! assert_eq!(schedule[11].balance_end.to_string(), "USD 0.00");
//! # Ok(())
//! # }
//! ```

pub mod currency;
pub mod money;
pub mod numeric;
pub mod schedule;
pub mod terms;

// Re-exports for convenience
pub mod prelude {
    pub use crate::currency::{Currency, CurrencyId, CurrencyMatch, CurrencyRegistry};
    pub use crate::money::{Money, MoneyError, MoneyFactory, DEFAULT_PRECISION};
    pub use crate::numeric::{Backend, DecimalFactory, DecimalValue, NumericError};
    pub use crate::schedule::{
        create_generator, AnnuityGenerator, LinearGenerator, ScheduleGenerator, ScheduleKind,
        ScheduleRow,
    };
    pub use crate::terms::LoanTerms;
}
