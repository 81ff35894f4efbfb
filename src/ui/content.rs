use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::{App, InputMode};
use crate::sheet::{self, SheetLine};

pub fn render_content(f: &mut Frame, app: &mut App, area: Rect) {
    let name = match &app.file_path {
        Some(path) => path.display().to_string(),
        None => "worksheet".to_string(),
    };
    let title = if app.is_modified {
        format!(" {} [+] ", name)
    } else {
        format!(" {} ", name)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title);

    let inner_width = area.width.saturating_sub(2);
    let inner_height = area.height.saturating_sub(2);
    // Remember the measured area for scroll math elsewhere
    app.content_width = inner_width;
    app.visible_height = inner_height;

    let rows = if app.input_mode == InputMode::Insert {
        editor_rows(app, inner_width, inner_height)
    } else {
        preview_rows(app, inner_width, inner_height)
    };

    let widget = Paragraph::new(rows).block(block);
    f.render_widget(widget, area);
}

/// Worksheet preview: text rows tinted by darkness, blank rows drawn as
/// underlined rules the width of the wrap setting.
fn preview_rows(app: &mut App, width: u16, height: u16) -> Vec<Line<'static>> {
    app.max_scroll = (app.sheet.len() as u16).saturating_sub(height.max(1));
    if app.scroll > app.max_scroll {
        app.scroll = app.max_scroll;
    }

    // The terminal draws light-on-dark, so darkness maps to brightness
    let level = (u16::from(app.settings.darkness) * 255 / 100) as u8;
    let ink = Style::default().fg(Color::Rgb(level, level, level));
    let rule = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::UNDERLINED);
    let rule_width = app.settings.max_characters.min(width as usize);

    app.sheet
        .iter()
        .skip(app.scroll as usize)
        .take(height as usize)
        .map(|row| match row {
            SheetLine::Text(line) => {
                let visible = sheet::truncate_columns(line, width as usize).to_string();
                Line::from(Span::styled(visible, ink))
            }
            SheetLine::Blank => Line::from(Span::styled(" ".repeat(rule_width), rule)),
        })
        .collect()
}

/// Raw practice text with a block cursor, shown while editing.
fn editor_rows(app: &mut App, width: u16, height: u16) -> Vec<Line<'static>> {
    let lines: Vec<String> = app.text.split('\n').map(|s| s.to_string()).collect();
    let height = height.max(1) as usize;

    // Keep the cursor row in view
    if app.cursor_line < app.scroll as usize {
        app.scroll = app.cursor_line as u16;
    } else if app.cursor_line >= app.scroll as usize + height {
        app.scroll = (app.cursor_line + 1 - height) as u16;
    }
    app.max_scroll = (lines.len() as u16).saturating_sub(height as u16);

    let text_style = Style::default().fg(Color::Gray);
    let cursor_style = Style::default().add_modifier(Modifier::REVERSED);

    lines
        .iter()
        .enumerate()
        .skip(app.scroll as usize)
        .take(height)
        .map(|(i, line)| {
            if i == app.cursor_line {
                cursor_row(line, app.cursor_col, width as usize, text_style, cursor_style)
            } else {
                Line::from(Span::styled(
                    sheet::truncate_columns(line, width as usize).to_string(),
                    text_style,
                ))
            }
        })
        .collect()
}

fn cursor_row(
    line: &str,
    col: usize,
    width: usize,
    text_style: Style,
    cursor_style: Style,
) -> Line<'static> {
    let visible = sheet::truncate_columns(line, width.max(1));
    let chars: Vec<char> = visible.chars().collect();
    let col = col.min(chars.len());

    let before: String = chars[..col].iter().collect();
    let under: String = chars
        .get(col)
        .map(|c| c.to_string())
        .unwrap_or_else(|| " ".to_string());
    let after: String = if col < chars.len() {
        chars[col + 1..].iter().collect()
    } else {
        String::new()
    };

    Line::from(vec![
        Span::styled(before, text_style),
        Span::styled(under, cursor_style),
        Span::styled(after, text_style),
    ])
}
