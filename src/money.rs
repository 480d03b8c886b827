// 💵 Money - Integer minor units
// Amounts are carried as whole cents so divisibility checks never drift

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// `D.CC` exactly: one or more digits, a point, two digits. Nothing else.
static AMOUNT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+\.[0-9]{2}$").expect("amount pattern is valid"));

/// Non-negative monetary amount in cents
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Cents(pub u64);

impl Cents {
    /// Parse a submitted amount like `"12.50"` straight into cents.
    ///
    /// Returns `None` for anything that is not exactly `D.CC`
    /// (`"12.5"`, `"12.500"`, `"-1.00"`, `" 1.00"`) or that overflows.
    pub fn parse(raw: &str) -> Option<Cents> {
        if !AMOUNT_RE.is_match(raw) {
            return None;
        }

        let (dollars, cents) = raw.split_once('.')?;
        let dollars: u64 = dollars.parse().ok()?;
        let cents: u64 = cents.parse().ok()?;

        dollars.checked_mul(100)?.checked_add(cents).map(Cents)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    pub fn is_multiple_of(&self, cents: u64) -> bool {
        self.0 % cents == 0
    }
}

impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_amounts() {
        assert_eq!(Cents::parse("12.50"), Some(Cents(1250)));
        assert_eq!(Cents::parse("0.00"), Some(Cents(0)));
        assert_eq!(Cents::parse("35.35"), Some(Cents(3535)));
        assert_eq!(Cents::parse("007.05"), Some(Cents(705)));
    }

    #[test]
    fn test_parse_rejects_wrong_shape() {
        assert_eq!(Cents::parse("12.5"), None);
        assert_eq!(Cents::parse("12.500"), None);
        assert_eq!(Cents::parse("-1.00"), None);
        assert_eq!(Cents::parse("12"), None);
        assert_eq!(Cents::parse(".50"), None);
        assert_eq!(Cents::parse(""), None);
        assert_eq!(Cents::parse("12.50abc"), None);
        assert_eq!(Cents::parse("abc12.50"), None);
        assert_eq!(Cents::parse("12.50\n"), None);
        assert_eq!(Cents::parse("١٢.٥٠"), None);
    }

    #[test]
    fn test_parse_rejects_overflow() {
        assert_eq!(Cents::parse("99999999999999999999.00"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Cents(1250).to_string(), "12.50");
        assert_eq!(Cents(5).to_string(), "0.05");
        assert_eq!(Cents(10000).to_string(), "100.00");
    }

    #[test]
    fn test_multiples() {
        assert!(Cents(10000).is_multiple_of(100));
        assert!(Cents(10000).is_multiple_of(25));
        assert!(Cents(925).is_multiple_of(25));
        assert!(!Cents(3535).is_multiple_of(25));
        assert!(!Cents(3535).is_multiple_of(100));
    }
}
