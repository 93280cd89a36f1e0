//! Summary header
//!
//! Budget, total expenses and balance, recomputed on every draw

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::services::BalanceStatus;
use crate::tui::app::App;

/// Color used for a balance
pub fn balance_color(status: BalanceStatus) -> Color {
    match status {
        BalanceStatus::Surplus => Color::Green,
        BalanceStatus::Even => Color::Yellow,
        BalanceStatus::Deficit => Color::Red,
    }
}

/// Render the summary header
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let summary = app.state.summary();

    let block = Block::default()
        .title(" Budget Tracker ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let label = Style::default().fg(Color::White);
    let line = Line::from(vec![
        Span::styled(" Budget: ", label),
        Span::styled(
            app.format_money(summary.budget),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  │  "),
        Span::styled("Expenses: ", label),
        Span::styled(
            app.format_money(summary.total_expenses),
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  │  "),
        Span::styled("Balance: ", label),
        Span::styled(
            app.format_money(summary.balance),
            Style::default()
                .fg(balance_color(summary.status))
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}
