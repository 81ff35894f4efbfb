use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, InputMode};

pub fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let mut spans = Vec::new();

    // Left side: status message
    if !app.status_message.is_empty() {
        let status_text = format!(" {} ", app.status_message);
        spans.push(Span::styled(status_text, Style::default().fg(Color::Cyan)));
    }

    // Right side: cursor position while editing, line count otherwise
    let position_text = match app.input_mode {
        InputMode::Insert => format!("{}:{} ", app.cursor_line + 1, app.cursor_col + 1),
        _ => format!("{} lines ", app.wrapped.len()),
    };

    let status_width = if !app.status_message.is_empty() {
        app.status_message.len() + 2
    } else {
        0
    };
    let position_width = position_text.len();
    let available_width = area.width as usize;

    if available_width > status_width + position_width {
        let padding_width = available_width - status_width - position_width;
        spans.push(Span::raw(" ".repeat(padding_width)));
    }

    spans.push(Span::styled(
        position_text,
        Style::default().fg(Color::DarkGray),
    ));

    let status_widget = Paragraph::new(Line::from(spans)).alignment(Alignment::Left);

    f.render_widget(status_widget, area);
}
