//! Expense model
//!
//! A titled, amount-valued entry counted against the budget.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ExpenseId;
use super::money::Money;
use super::policy::AmountPolicy;

/// A single recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier, assigned by the budget state
    pub id: ExpenseId,

    /// Trimmed title with its original casing
    pub title: String,

    /// Amount counted against the budget
    pub amount: Money,

    /// When the expense was recorded
    pub created_at: DateTime<Utc>,

    /// When the title or amount last changed
    pub updated_at: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense; the title is stored trimmed
    pub(crate) fn new(id: ExpenseId, title: &str, amount: Money) -> Self {
        let now = Utc::now();
        Self {
            id,
            title: title.trim().to_string(),
            amount,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace title and amount, keeping the id
    pub(crate) fn revise(&mut self, title: &str, amount: Money) {
        self.title = title.trim().to_string();
        self.amount = amount;
        self.updated_at = Utc::now();
    }

    /// Title as list views show it
    pub fn display_title(&self, uppercase: bool) -> String {
        if uppercase {
            self.title.to_uppercase()
        } else {
            self.title.clone()
        }
    }

    /// Check a candidate title and amount before they reach an expense
    pub fn validate_fields(
        title: &str,
        amount: Money,
        policy: AmountPolicy,
    ) -> Result<(), ExpenseValidationError> {
        if title.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyTitle);
        }

        if !policy.accepts(amount) {
            return Err(ExpenseValidationError::AmountRejected { amount, policy });
        }

        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.id, self.title, self.amount)
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyTitle,
    AmountRejected { amount: Money, policy: AmountPolicy },
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "Expense title cannot be empty"),
            Self::AmountRejected { amount, policy } => {
                write!(f, "Expense amount {} (got {})", policy.requirement(), amount)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_title() {
        let expense = Expense::new(ExpenseId::new(1), "  Coffee ", Money::from_cents(450));
        assert_eq!(expense.title, "Coffee");
        assert_eq!(expense.created_at, expense.updated_at);
    }

    #[test]
    fn test_revise_keeps_id() {
        let mut expense = Expense::new(ExpenseId::new(3), "Book", Money::from_cents(2000));
        expense.revise("Textbook ", Money::from_cents(2500));
        assert_eq!(expense.id, ExpenseId::new(3));
        assert_eq!(expense.title, "Textbook");
        assert_eq!(expense.amount, Money::from_cents(2500));
        assert!(expense.updated_at >= expense.created_at);
    }

    #[test]
    fn test_display_title() {
        let expense = Expense::new(ExpenseId::new(1), "Rent", Money::from_cents(100));
        assert_eq!(expense.display_title(true), "RENT");
        assert_eq!(expense.display_title(false), "Rent");
    }

    #[test]
    fn test_validate_fields() {
        let policy = AmountPolicy::StrictlyPositive;
        assert!(Expense::validate_fields("Tea", Money::from_cents(1), policy).is_ok());
        assert_eq!(
            Expense::validate_fields("   ", Money::from_cents(1), policy),
            Err(ExpenseValidationError::EmptyTitle)
        );
        assert!(matches!(
            Expense::validate_fields("Tea", Money::zero(), policy),
            Err(ExpenseValidationError::AmountRejected { .. })
        ));
        assert!(Expense::validate_fields("Tea", Money::zero(), AmountPolicy::NonNegative).is_ok());
    }

    #[test]
    fn test_validation_message() {
        let err = ExpenseValidationError::AmountRejected {
            amount: Money::from_cents(-10000),
            policy: AmountPolicy::NonNegative,
        };
        assert_eq!(err.to_string(), "Expense amount cannot be negative (got -$100.00)");
    }
}
