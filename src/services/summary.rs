//! Derived totals
//!
//! A point-in-time snapshot of budget, total expenses, and balance that views
//! render after every change.

use serde::Serialize;
use std::fmt;

use crate::models::Money;

/// Sign of the balance, used by views to pick a colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BalanceStatus {
    /// Money left over
    Surplus,
    /// Exactly on budget
    Even,
    /// Overspent
    Deficit,
}

impl BalanceStatus {
    /// Classify a balance
    pub fn of(balance: Money) -> Self {
        if balance.is_negative() {
            Self::Deficit
        } else if balance.is_zero() {
            Self::Even
        } else {
            Self::Surplus
        }
    }
}

impl fmt::Display for BalanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Surplus => write!(f, "Surplus"),
            Self::Even => write!(f, "Even"),
            Self::Deficit => write!(f, "Deficit"),
        }
    }
}

/// Budget, expenses, and balance at one moment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BudgetSummary {
    pub budget: Money,
    pub total_expenses: Money,
    pub balance: Money,
    pub expense_count: usize,
    pub status: BalanceStatus,
}

impl BudgetSummary {
    /// Build a summary; the balance is derived from the other two amounts
    pub fn new(budget: Money, total_expenses: Money, expense_count: usize) -> Self {
        let balance = budget - total_expenses;
        Self {
            budget,
            total_expenses,
            balance,
            expense_count,
            status: BalanceStatus::of(balance),
        }
    }
}
