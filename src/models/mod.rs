//! Core data models for the budget tracker
//!
//! This module contains the data structures of the budgeting domain:
//! money amounts, expense ids, expenses, and the amount validation policy.

pub mod expense;
pub mod ids;
pub mod money;
pub mod policy;

pub use expense::{Expense, ExpenseValidationError};
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError};
pub use policy::AmountPolicy;
