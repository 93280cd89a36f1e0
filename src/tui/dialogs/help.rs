//! Help dialog
//!
//! Shows keyboard shortcuts

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = centered_rect(60, 70, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines(app))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn heading(text: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(
        text,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    )])
}

/// Help lines, including the amount rule currently in force
fn help_lines(app: &App) -> Vec<Line<'static>> {
    vec![
        heading("Global Keys"),
        Line::from(""),
        key_line("Tab", "Next field"),
        key_line("Shift+Tab", "Previous field"),
        key_line("Esc", "Cancel edit / leave field"),
        key_line("F1", "Show help"),
        key_line("Ctrl+c", "Quit application"),
        Line::from(""),
        heading("Forms"),
        Line::from(""),
        key_line("Enter", "Set budget / add or save expense"),
        key_line("←/→", "Move cursor"),
        key_line("Home/End", "Jump to start/end"),
        Line::from(""),
        heading("Expense List"),
        Line::from(""),
        key_line("j/k", "Move selection down/up"),
        key_line("g/G", "Go to top/bottom"),
        key_line("e/Enter", "Edit expense"),
        key_line("d/Del", "Delete expense"),
        key_line("a/n", "Add expense"),
        key_line("b", "Set budget"),
        key_line("q", "Quit application"),
        key_line("?", "Show help"),
        Line::from(""),
        Line::from(vec![Span::styled(
            format!("Amounts {}.", app.state.policy().requirement()),
            Style::default().fg(Color::White),
        )]),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().fg(Color::DarkGray),
        )]),
    ]
}

/// Create a formatted key line
fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}
