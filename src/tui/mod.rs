//! Terminal User Interface module
//!
//! A single-screen ratatui front end: budget form, expense form, live
//! summary, and an expense list with edit and delete.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
