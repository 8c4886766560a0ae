// ============================================================================
// Currency
// Static currency descriptors, identity rules and the lookup registry
// ============================================================================

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Process-wide counter backing `CurrencyId`. Identity is per constructed
/// record, never per code.
static NEXT_CURRENCY_ID: AtomicU64 = AtomicU64::new(0);

/// Opaque identity handle of one constructed `Currency` record.
///
/// Two records built independently for the same alphabetic code receive
/// different ids, so strict matching treats them as different currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct CurrencyId(u64);

/// How `Money` decides whether two currencies are the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CurrencyMatch {
    /// Record identity: only the very same registered instance matches.
    #[default]
    Strict,
    /// Alphabetic-code equality: independently built records for one code
    /// are interchangeable.
    ByCode,
}

/// Immutable currency descriptor.
///
/// `decimal_digits` may be unset for units with no fixed fractional-digit
/// convention (precious metals, cryptocurrencies); `Money` then falls back to
/// its default precision.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Currency {
    id: CurrencyId,
    code: String,
    numeric_code: Option<u16>,
    decimal_digits: Option<u32>,
    name: String,
}

impl Currency {
    pub fn new(
        code: impl Into<String>,
        numeric_code: Option<u16>,
        decimal_digits: Option<u32>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id: CurrencyId(NEXT_CURRENCY_ID.fetch_add(1, Ordering::Relaxed)),
            code: code.into(),
            numeric_code,
            decimal_digits,
            name: name.into(),
        }
    }

    pub fn id(&self) -> CurrencyId {
        self.id
    }

    /// ISO-like alphabetic code, e.g. "USD".
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn numeric_code(&self) -> Option<u16> {
        self.numeric_code
    }

    /// Canonical fractional-digit count, when the currency has one.
    pub fn decimal_digits(&self) -> Option<u32> {
        self.decimal_digits
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether `other` counts as the same currency under `mode`.
    pub fn matches(&self, other: &Currency, mode: CurrencyMatch) -> bool {
        match mode {
            CurrencyMatch::Strict => self.id == other.id,
            CurrencyMatch::ByCode => self.code == other.code,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

// ============================================================================
// Registry
// ============================================================================

/// Enumerated set of known currencies; read-only after construction.
#[derive(Debug, Clone, Default)]
pub struct CurrencyRegistry {
    entries: Vec<Arc<Currency>>,
}

impl CurrencyRegistry {
    /// Empty registry; populate with `register`.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Registry with the stock ISO 4217 table: the major fiat currencies,
    /// precious metals without a canonical digit count and Bitcoin.
    pub fn with_iso_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(Currency::new("UAH", Some(980), Some(2), "Ukrainian hryvnia"));
        registry.register(Currency::new("USD", Some(840), Some(2), "United States dollar"));
        registry.register(Currency::new("EUR", Some(978), Some(2), "Euro"));
        registry.register(Currency::new("GBP", Some(826), Some(2), "Pound sterling"));
        registry.register(Currency::new("JPY", Some(392), Some(0), "Japanese yen"));
        registry.register(Currency::new("CHF", Some(756), Some(2), "Swiss franc"));
        registry.register(Currency::new("CAD", Some(124), Some(2), "Canadian dollar"));
        registry.register(Currency::new("CNY", Some(156), Some(2), "Chinese yuan"));
        registry.register(Currency::new("XAU", Some(959), None, "Gold"));
        registry.register(Currency::new("XAG", Some(961), None, "Silver"));
        registry.register(Currency::new("XBT", None, Some(8), "Bitcoin"));

        registry
    }

    /// Add a currency record and hand back its shared instance.
    pub fn register(&mut self, currency: Currency) -> Arc<Currency> {
        let entry = Arc::new(currency);
        self.entries.push(Arc::clone(&entry));

        entry
    }

    /// Look up by alphabetic code. The first registration wins when a code
    /// was registered more than once.
    pub fn get(&self, code: &str) -> Option<Arc<Currency>> {
        self.entries
            .iter()
            .find(|c| c.code() == code)
            .map(Arc::clone)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Currency>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_is_per_record() {
        let a = Currency::new("USD", Some(840), Some(2), "United States dollar");
        let b = Currency::new("USD", Some(840), Some(2), "United States dollar");

        assert_ne!(a.id(), b.id());
        assert!(!a.matches(&b, CurrencyMatch::Strict));
        assert!(a.matches(&b, CurrencyMatch::ByCode));
        assert!(a.matches(&a, CurrencyMatch::Strict));
    }

    #[test]
    fn test_iso_defaults() {
        let registry = CurrencyRegistry::with_iso_defaults();
        assert_eq!(registry.len(), 11);

        let usd = registry.get("USD").unwrap();
        assert_eq!(usd.numeric_code(), Some(840));
        assert_eq!(usd.decimal_digits(), Some(2));

        let yen = registry.get("JPY").unwrap();
        assert_eq!(yen.decimal_digits(), Some(0));

        let gold = registry.get("XAU").unwrap();
        assert_eq!(gold.decimal_digits(), None);

        let bitcoin = registry.get("XBT").unwrap();
        assert_eq!(bitcoin.numeric_code(), None);
        assert_eq!(bitcoin.decimal_digits(), Some(8));

        assert!(registry.get("ZZZ").is_none());
    }

    #[test]
    fn test_register_returns_shared_instance() {
        let mut registry = CurrencyRegistry::new();
        let registered = registry.register(Currency::new("EUR", Some(978), Some(2), "Euro"));
        let fetched = registry.get("EUR").unwrap();

        assert!(registered.matches(&fetched, CurrencyMatch::Strict));
    }

    #[test]
    fn test_display_is_code() {
        let chf = Currency::new("CHF", Some(756), Some(2), "Swiss franc");
        assert_eq!(chf.to_string(), "CHF");
    }
}
