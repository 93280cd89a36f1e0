//! Layout definitions for the TUI
//!
//! Summary header on top, the two forms side by side, the expense list below
//! them, and a one-line status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Budget, total expenses, balance
    pub summary: Rect,
    /// Budget entry form
    pub budget_form: Rect,
    /// Expense add/edit form
    pub expense_form: Rect,
    /// Expense table
    pub expenses: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Summary
                Constraint::Length(4), // Forms
                Constraint::Min(3),    // Expense list
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let forms = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(35), // Budget form
                Constraint::Percentage(65), // Expense form
            ])
            .split(vertical[1]);

        Self {
            summary: vertical[0],
            budget_form: forms[0],
            expense_form: forms[1],
            expenses: vertical[2],
            status_bar: vertical[3],
        }
    }
}

/// Split a form block's inner area into one row per field
pub fn form_rows(area: Rect, fields: usize) -> Vec<Rect> {
    let constraints = vec![Constraint::Length(1); fields];
    Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area)
        .to_vec()
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
