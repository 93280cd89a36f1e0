//! Service layer for the budget tracker
//!
//! The service layer holds the business rules: validation of budget and
//! expense input, the single edit slot, and derived totals. Presentation
//! layers call into it and render what it returns.

pub mod budget_state;
pub mod summary;

pub use budget_state::{BudgetState, DeleteOutcome, EditMode};
pub use summary::{BalanceStatus, BudgetSummary};
