use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use crate::app::{App, InputMode};

pub fn handle_normal_mode(app: &mut App, key: KeyEvent) -> Result<bool> {
    // Any key other than 'g' interrupts a pending multi-key sequence
    if !matches!(key.code, KeyCode::Char('g')) {
        app.vim_buffer.clear();
    }

    match key.code {
        KeyCode::Char('q') => return Ok(true),
        KeyCode::Char('i') => {
            app.input_mode = InputMode::Insert;
            app.set_status("-- INSERT --");
        }
        KeyCode::Char(':') => {
            app.input_mode = InputMode::Command;
            app.command_buffer.clear();
            app.set_status(":");
        }
        KeyCode::Char('j') | KeyCode::Down => app.scroll_down(1),
        KeyCode::Char('k') | KeyCode::Up => app.scroll_up(1),
        KeyCode::Char('g') => {
            app.handle_vim_input('g');
        }
        KeyCode::Char('G') => app.scroll_to_bottom(),
        KeyCode::Char('s') => app.toggle_settings(),
        KeyCode::Char('f') => app.cycle_font(),
        KeyCode::Char('+') => app.adjust_blank_lines(1),
        KeyCode::Char('-') => app.adjust_blank_lines(-1),
        KeyCode::Char(']') => app.adjust_max_characters(1),
        KeyCode::Char('[') => app.adjust_max_characters(-1),
        KeyCode::Char('}') => app.adjust_word_spacing(1),
        KeyCode::Char('{') => app.adjust_word_spacing(-1),
        KeyCode::Char(')') => app.adjust_darkness(5),
        KeyCode::Char('(') => app.adjust_darkness(-5),
        KeyCode::Char('p') => app.paste_from_clipboard(),
        KeyCode::Char('y') => app.copy_sheet_to_clipboard(),
        KeyCode::Char('e') => match app.export_pdf(None) {
            Ok(path) => app.set_status(&format!("Exported: {}", path)),
            Err(msg) => app.set_status(&msg),
        },
        KeyCode::Char('?') => {
            app.set_status(
                "i edit  : cmd  f font  +/- blanks  [/] width  {/} spacing  (/) darkness  e pdf  q quit",
            );
        }
        _ => {}
    }

    Ok(false)
}
