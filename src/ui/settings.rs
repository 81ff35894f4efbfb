use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::App;

pub fn render_settings(f: &mut Frame, app: &App, area: Rect) {
    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::Cyan);
    let hint = Style::default().fg(Color::DarkGray);

    let row = |name: &str, val: String, keys: &str| {
        Line::from(vec![
            Span::styled(format!("{:<16}", name), label),
            Span::styled(format!("{:<22}", val), value),
            Span::styled(keys.to_string(), hint),
        ])
    };

    let rows = vec![
        row("Font", app.settings.font().name.to_string(), "f cycles"),
        row("Blank lines", app.settings.blank_lines.to_string(), "+ / -"),
        row(
            "Max characters",
            app.settings.max_characters.to_string(),
            "[ / ]",
        ),
        row(
            "Word spacing",
            app.settings.word_spacing.to_string(),
            "{ / }",
        ),
        row("Darkness", app.settings.darkness.to_string(), "( / )"),
    ];

    let widget = Paragraph::new(rows).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" settings "),
    );
    f.render_widget(widget, area);
}
