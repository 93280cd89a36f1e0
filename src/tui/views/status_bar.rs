//! Status bar view
//!
//! Shows the amount policy, edit state, and key hints for the focused area

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{App, Focus};

/// Key hints for the focused area
pub fn hints_for(focus: Focus) -> &'static str {
    match focus {
        Focus::Budget | Focus::Title | Focus::Amount => " Enter:Submit  Tab:Next  Esc:Cancel  F1:Help ",
        Focus::ExpenseList => " e:Edit  d:Delete  a:Add  q:Quit  ?:Help ",
    }
}

/// Render the status bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let mut spans = vec![
        Span::styled(" Policy: ", Style::default().fg(Color::White)),
        Span::styled(
            app.state.policy().to_string(),
            Style::default().fg(Color::Cyan),
        ),
    ];

    if let Some(id) = app.state.editing_id() {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            format!("Editing {}", id),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
    }

    // Key hints (right-aligned)
    let hints = hints_for(app.focus);

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize).saturating_sub(left_len + hints.chars().count());
    let padding = " ".repeat(padding_len.max(1));

    spans.push(Span::raw(padding));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
