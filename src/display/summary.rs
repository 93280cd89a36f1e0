//! Summary display formatting

use crate::services::{BalanceStatus, BudgetSummary};

/// Format budget, expenses, and balance as three aligned lines
pub fn format_summary(summary: &BudgetSummary, symbol: &str) -> String {
    let marker = match summary.status {
        BalanceStatus::Surplus => "",
        BalanceStatus::Even => " (even)",
        BalanceStatus::Deficit => " (over budget)",
    };

    format!(
        "Budget:   {:>12}\nExpenses: {:>12}\nBalance:  {:>12}{}\n",
        summary.budget.format_with_symbol(symbol),
        summary.total_expenses.format_with_symbol(symbol),
        summary.balance.format_with_symbol(symbol),
        marker,
    )
}
