//! Strongly-typed ID wrapper for expenses
//!
//! Using a newtype prevents accidentally mixing up expense ids with list
//! indices or other integers at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Session-unique identifier of an expense
///
/// Ids are handed out by [`crate::services::BudgetState`] from a monotonic
/// counter and are never reused within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(u64);

impl ExpenseId {
    /// Wrap a raw id value
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw id value
    pub const fn get(&self) -> u64 {
        self.0
    }

    /// The id that follows this one
    pub(crate) const fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl FromStr for ExpenseId {
    type Err = ParseIntError;

    /// Accepts both "7" and "#7"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let digits = s.strip_prefix('#').unwrap_or(s);
        digits.parse::<u64>().map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(ExpenseId::new(7).to_string(), "#7");
    }

    #[test]
    fn test_parse() {
        assert_eq!("7".parse::<ExpenseId>().unwrap(), ExpenseId::new(7));
        assert_eq!("#12".parse::<ExpenseId>().unwrap(), ExpenseId::new(12));
        assert!("seven".parse::<ExpenseId>().is_err());
        assert!("-1".parse::<ExpenseId>().is_err());
    }

    #[test]
    fn test_next_is_monotonic() {
        let id = ExpenseId::new(1);
        assert!(id.next() > id);
        assert_eq!(id.next().get(), 2);
    }
}
