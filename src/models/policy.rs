//! Amount validation policy
//!
//! Decides whether zero is an acceptable budget or expense amount. Negative
//! amounts are rejected under every policy.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Threshold applied to every budget and expense amount
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum AmountPolicy {
    /// Zero is accepted, negatives are rejected
    NonNegative,
    /// Only amounts greater than zero are accepted
    #[default]
    StrictlyPositive,
}

impl AmountPolicy {
    /// Check whether an amount passes this policy
    pub fn accepts(&self, amount: Money) -> bool {
        match self {
            Self::NonNegative => !amount.is_negative(),
            Self::StrictlyPositive => amount.is_positive(),
        }
    }

    /// Human-readable requirement, used in validation messages
    pub fn requirement(&self) -> &'static str {
        match self {
            Self::NonNegative => "cannot be negative",
            Self::StrictlyPositive => "must be greater than zero",
        }
    }
}

impl fmt::Display for AmountPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonNegative => write!(f, "non-negative"),
            Self::StrictlyPositive => write!(f, "strictly-positive"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_negative_allows_zero() {
        let policy = AmountPolicy::NonNegative;
        assert!(policy.accepts(Money::zero()));
        assert!(policy.accepts(Money::from_cents(1)));
        assert!(!policy.accepts(Money::from_cents(-1)));
    }

    #[test]
    fn test_strictly_positive_rejects_zero() {
        let policy = AmountPolicy::StrictlyPositive;
        assert!(!policy.accepts(Money::zero()));
        assert!(policy.accepts(Money::from_cents(1)));
        assert!(!policy.accepts(Money::from_cents(-1)));
    }

    #[test]
    fn test_default_and_serde_names() {
        assert_eq!(AmountPolicy::default(), AmountPolicy::StrictlyPositive);
        assert_eq!(
            serde_json::to_string(&AmountPolicy::NonNegative).unwrap(),
            "\"non-negative\""
        );
        let parsed: AmountPolicy = serde_json::from_str("\"strictly-positive\"").unwrap();
        assert_eq!(parsed, AmountPolicy::StrictlyPositive);
    }
}
