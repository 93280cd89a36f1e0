//! Application state for the TUI
//!
//! The App struct holds everything needed for rendering and handling events:
//! the injected budget state, the raw text of each input field, focus, list
//! selection, and feedback notifications. Business rules stay in
//! [`BudgetState`]; the App only forwards input and shows results.

use tracing::debug;

use crate::config::Settings;
use crate::models::{Expense, ExpenseId, Money};
use crate::services::BudgetState;

use super::widgets::{Notification, NotificationQueue, TextInput};

/// Which part of the screen receives key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Budget,
    Title,
    Amount,
    ExpenseList,
}

impl Focus {
    /// Next focus target in Tab order
    pub fn next(self) -> Self {
        match self {
            Self::Budget => Self::Title,
            Self::Title => Self::Amount,
            Self::Amount => Self::ExpenseList,
            Self::ExpenseList => Self::Budget,
        }
    }

    /// Previous focus target in Tab order
    pub fn prev(self) -> Self {
        match self {
            Self::Budget => Self::ExpenseList,
            Self::Title => Self::Budget,
            Self::Amount => Self::Title,
            Self::ExpenseList => Self::Amount,
        }
    }

    /// True for the text fields
    pub fn is_input(self) -> bool {
        !matches!(self, Self::ExpenseList)
    }
}

/// Currently active overlay (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
}

/// Main application state
pub struct App<'a> {
    /// The session's budget
    pub state: &'a mut BudgetState,

    /// Application settings
    pub settings: &'a Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Which field or panel has focus
    pub focus: Focus,

    /// Currently active overlay
    pub active_dialog: ActiveDialog,

    /// Budget form input
    pub budget_input: TextInput,

    /// Expense form title input
    pub title_input: TextInput,

    /// Expense form amount input
    pub amount_input: TextInput,

    /// Selected row in the expense list
    pub selected_index: usize,

    /// Feedback messages
    pub notifications: NotificationQueue,
}

impl<'a> App<'a> {
    /// Create a new App around an existing budget state
    pub fn new(state: &'a mut BudgetState, settings: &'a Settings) -> Self {
        let mut app = Self {
            state,
            settings,
            should_quit: false,
            focus: Focus::Budget,
            active_dialog: ActiveDialog::None,
            budget_input: TextInput::new()
                .label("Budget")
                .placeholder("Please enter your budget"),
            title_input: TextInput::new()
                .label("Title")
                .placeholder("Please enter your expense"),
            amount_input: TextInput::new()
                .label("Amount")
                .placeholder("Please enter expense amount"),
            selected_index: 0,
            notifications: NotificationQueue::new(),
        };
        app.set_focus(Focus::Budget);
        app
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Move focus forward
    pub fn focus_next(&mut self) {
        self.set_focus(self.focus.next());
    }

    /// Move focus backward
    pub fn focus_prev(&mut self) {
        self.set_focus(self.focus.prev());
    }

    /// Focus a specific field or panel
    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        self.budget_input.focused = focus == Focus::Budget;
        self.title_input.focused = focus == Focus::Title;
        self.amount_input.focused = focus == Focus::Amount;
    }

    /// The input that receives typed characters, if focus is on a field
    pub fn focused_input_mut(&mut self) -> Option<&mut TextInput> {
        match self.focus {
            Focus::Budget => Some(&mut self.budget_input),
            Focus::Title => Some(&mut self.title_input),
            Focus::Amount => Some(&mut self.amount_input),
            Focus::ExpenseList => None,
        }
    }

    /// Open an overlay
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    /// Close the current overlay
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if an overlay is active
    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// Show a success message
    pub fn notify_success(&mut self, message: impl Into<String>) {
        let secs = self.settings.feedback_dismiss_secs;
        self.notifications
            .push(Notification::success(message).with_duration(secs));
    }

    /// Show a neutral message
    pub fn notify_info(&mut self, message: impl Into<String>) {
        let secs = self.settings.feedback_dismiss_secs;
        self.notifications
            .push(Notification::info(message).with_duration(secs));
    }

    /// Show a rejected-input message
    pub fn notify_error(&mut self, message: impl Into<String>) {
        let secs = self.settings.feedback_dismiss_secs;
        self.notifications
            .push(Notification::error(message).with_duration(secs));
    }

    /// Periodic housekeeping: drop expired feedback
    pub fn tick(&mut self) {
        self.notifications.remove_expired();
    }

    /// Format an amount with the configured currency symbol
    pub fn format_money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.settings.currency_symbol)
    }

    /// Submit the budget form
    pub fn submit_budget(&mut self) {
        match self.state.set_budget(self.budget_input.value()) {
            Ok(budget) => {
                self.budget_input.clear();
                let text = format!("Budget set to {}", self.format_money(budget));
                self.notify_success(text);
            }
            Err(e) => self.notify_error(e.to_string()),
        }
    }

    /// Submit the expense form: adds, or saves the expense being edited
    pub fn submit_expense(&mut self) {
        let was_editing = self.state.editing_id().is_some();
        let result = self
            .state
            .submit_expense(self.title_input.value(), self.amount_input.value());

        match result {
            Ok(expense) => {
                self.clear_expense_form();
                if let Some(index) = self.state.position(expense.id) {
                    self.selected_index = index;
                }
                let verb = if was_editing { "Updated" } else { "Added" };
                let text = format!(
                    "{} {} ({})",
                    verb,
                    expense.title,
                    self.format_money(expense.amount)
                );
                self.notify_success(text);
                self.set_focus(Focus::Title);
            }
            Err(e) => self.notify_error(e.to_string()),
        }
    }

    /// The expense under the list cursor
    pub fn selected_expense(&self) -> Option<&Expense> {
        self.state.expenses().get(self.selected_index)
    }

    fn selected_id(&self) -> Option<ExpenseId> {
        self.selected_expense().map(|e| e.id)
    }

    /// Begin editing the selected expense and load it into the form
    pub fn edit_selected(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };

        match self.state.begin_edit(id) {
            Ok(expense) => {
                self.title_input.set_content(expense.title);
                self.amount_input
                    .set_content(expense.amount.to_input_string());
                self.set_focus(Focus::Title);
                debug!(%id, "expense loaded into form");
            }
            Err(e) => self.notify_error(e.to_string()),
        }
    }

    /// Delete the selected expense
    pub fn delete_selected(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };

        let outcome = self.state.delete_expense(id);
        if outcome.edit_cancelled {
            self.clear_expense_form();
        }
        if let Some(expense) = outcome.removed {
            let text = format!("Deleted {}", expense.title);
            self.notify_success(text);
        }
        self.clamp_selection();
    }

    /// Abandon the edit in progress and clear the form
    pub fn cancel_edit(&mut self) {
        if let Some(id) = self.state.editing_id() {
            self.state.cancel_edit();
            self.clear_expense_form();
            self.notify_info(format!("Edit of {} cancelled", id));
        }
    }

    /// Title shown above the expense form
    pub fn expense_form_title(&self) -> String {
        match self.state.editing_id() {
            Some(id) => format!(" Edit Expense {} ", id),
            None => " Add Expense ".to_string(),
        }
    }

    /// Move selection up in the expense list
    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Move selection down in the expense list
    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.state.len() {
            self.selected_index += 1;
        }
    }

    fn clamp_selection(&mut self) {
        self.selected_index = self.selected_index.min(self.state.len().saturating_sub(1));
    }

    fn clear_expense_form(&mut self) {
        self.title_input.clear();
        self.amount_input.clear();
    }
}
