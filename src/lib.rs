//! Budget Tracker - a single-session personal budget tracker
//!
//! Set one budget amount, record expenses against it, and watch total
//! expenses and the remaining balance update after every change. Expenses
//! can be edited in place or deleted.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Money, expense ids, expenses, and the amount policy
//! - `services`: `BudgetState`, the session's single source of truth
//! - `config`: Configuration and path management
//! - `logging`: tracing subscriber setup
//! - `display`: Plain-text formatting for the shell
//! - `cli`: The line-oriented shell
//! - `tui`: The ratatui front end
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust
//! use budget_tracker::services::BudgetState;
//!
//! let mut state = BudgetState::default();
//! state.set_budget("500").unwrap();
//! state.submit_expense("Coffee", "4.50").unwrap();
//! assert_eq!(state.balance().to_string(), "$495.50");
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod tui;

pub use error::{TrackerError, TrackerResult};
