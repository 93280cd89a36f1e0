//! Budget and expense entry forms

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
    Frame,
};

use crate::tui::app::{App, Focus};
use crate::tui::layout::form_rows;

fn form_block(title: String, focused: bool, editing: bool) -> Block<'static> {
    let border_color = if editing {
        Color::Yellow
    } else if focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    Block::default()
        .title(title)
        .title_style(Style::default().fg(border_color).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
}

/// Render the budget form
pub fn render_budget_form(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = form_block(
        " Set Budget ".to_string(),
        app.focus == Focus::Budget,
        false,
    );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = form_rows(inner, 2);
    frame.render_widget(app.budget_input.clone(), rows[0]);
}

/// Render the expense form; its title shows whether Enter adds or saves
pub fn render_expense_form(frame: &mut Frame, app: &mut App, area: Rect) {
    let focused = matches!(app.focus, Focus::Title | Focus::Amount);
    let editing = app.state.editing_id().is_some();
    let block = form_block(app.expense_form_title(), focused, editing);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = form_rows(inner, 2);
    frame.render_widget(app.title_input.clone(), rows[0]);
    frame.render_widget(app.amount_input.clone(), rows[1]);
}
