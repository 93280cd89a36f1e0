//! Expense list view
//!
//! One row per expense in insertion order. The row under edit is marked.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::tui::app::{App, Focus};

/// Render the expense list
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let is_focused = app.focus == Focus::ExpenseList;
    let border_color = if is_focused { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .title(format!(" Expenses ({}) ", app.state.len()))
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    if app.state.is_empty() {
        let text = Paragraph::new("No expenses yet. Fill in the expense form and press Enter.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let widths = [
        Constraint::Length(2),  // Edit marker
        Constraint::Length(6),  // ID
        Constraint::Min(20),    // Title
        Constraint::Length(14), // Amount
    ];

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let header = Row::new(vec![
        Cell::from(""),
        Cell::from("ID").style(bold),
        Cell::from("Title").style(bold),
        Cell::from("Amount").style(bold),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let uppercase = app.settings.uppercase_titles;
    let rows: Vec<Row> = app
        .state
        .expenses()
        .iter()
        .map(|expense| {
            let editing = app.state.is_editing(expense.id);
            let (marker, style) = if editing {
                ("✎", Style::default().fg(Color::Yellow))
            } else {
                ("", Style::default().fg(Color::White))
            };

            Row::new(vec![
                Cell::from(marker),
                Cell::from(expense.id.to_string()).style(Style::default().fg(Color::DarkGray)),
                Cell::from(expense.display_title(uppercase)),
                Cell::from(app.format_money(expense.amount)),
            ])
            .style(style)
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    if is_focused {
        state.select(Some(app.selected_index));
    }

    frame.render_stateful_widget(table, area, &mut state);
}
