mod content;
mod settings;
mod status_bar;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::App;

use content::render_content;
use settings::render_settings;
use status_bar::render_status_bar;

pub fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(f.area());

    // Settings panel sits above the worksheet when open
    let content_area = if app.settings_open {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(7), Constraint::Min(0)])
            .split(chunks[0]);

        render_settings(f, app, vertical[0]);
        vertical[1]
    } else {
        chunks[0]
    };

    render_content(f, app, content_area);
    render_status_bar(f, app, chunks[1]);
}
