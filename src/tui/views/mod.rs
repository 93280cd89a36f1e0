//! TUI Views module
//!
//! Contains the screen sections: summary header, entry forms, expense list
//! and status bar.

pub mod expense_list;
pub mod forms;
pub mod status_bar;
pub mod summary;

use ratatui::{layout::Rect, Frame};

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;
use super::widgets::NotificationWidget;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    summary::render(frame, app, layout.summary);
    forms::render_budget_form(frame, app, layout.budget_form);
    forms::render_expense_form(frame, app, layout.expense_form);
    expense_list::render(frame, app, layout.expenses);
    status_bar::render(frame, app, layout.status_bar);

    if app.has_dialog() {
        render_dialog(frame, app);
    }

    render_notification(frame, app);
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &mut App) {
    match app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame, app),
        ActiveDialog::None => {}
    }
}

/// Render the newest feedback message in the top-right corner
fn render_notification(frame: &mut Frame, app: &App) {
    let Some(notification) = app.notifications.current() else {
        return;
    };

    let screen = frame.area();
    let width = 44.min(screen.width);
    let height = 4.min(screen.height);
    let area = Rect::new(screen.right().saturating_sub(width), screen.y, width, height);

    frame.render_widget(NotificationWidget::new(notification), area);
}
