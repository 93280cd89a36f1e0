//! Display formatting for terminal output
//!
//! Provides plain-text formatting of the budget summary and expense list for
//! the line-oriented shell.

pub mod expense;
pub mod summary;

pub use expense::{format_edit_prompt, format_expense_list};
pub use summary::format_summary;
