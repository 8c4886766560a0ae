// ============================================================================
// Numeric Module
// Fixed-point decimal arithmetic for currency-safe calculations
// ============================================================================
//
// This module provides:
// - DecimalValue: immutable fixed-point decimal with an explicit scale
// - Two interchangeable backends behind one contract:
//   ScaledDecimal (i64 units, fails with Overflow at the i64 range) and
//   BigNumDecimal (arbitrary precision, feature "bignum", never overflows)
// - DecimalFactory / Backend: one-shot backend selection at startup
// - NumericError: error taxonomy for decimal operations
//
// Design principles:
// - No floating-point ledger state; real-number operands only as multipliers
// - Rounding is always round-half-up, ties away from zero
// - All arithmetic returns Result (no panics)

mod errors;
mod scaled;
mod value;

#[cfg(feature = "bignum")]
mod bignum;

pub use errors::{NumericError, NumericResult};
pub use scaled::ScaledDecimal;
pub use value::{Backend, DecimalFactory, DecimalValue};

#[cfg(feature = "bignum")]
pub use bignum::BigNumDecimal;
