use std::{
    path::PathBuf,
    time::{Duration, Instant},
};

use crate::config::{Settings, FONTS};
use crate::sheet::{self, SheetLine};
use crate::wrap;

#[derive(Clone, Copy, PartialEq)]
pub enum InputMode {
    Normal,
    Insert,  // editing the practice text
    Command, // vim-style commands like :w, :pdf
}

pub struct App {
    pub input_mode: InputMode,
    /// The practice text as typed; wrapping sees it trimmed.
    pub text: String,
    pub settings: Settings,
    /// Wrapped display lines, regenerated on every text or settings change.
    pub wrapped: Vec<String>,
    /// Worksheet rows derived from `wrapped` plus the blank-line setting.
    pub sheet: Vec<SheetLine>,
    pub scroll: u16,
    pub max_scroll: u16,
    pub status_message: String,
    pub status_time: Option<Instant>,
    pub file_path: Option<PathBuf>,
    pub file_path_changed: bool,
    pub command_buffer: String,
    pub vim_buffer: String,
    pub is_modified: bool,
    // Cursor into the raw text while editing (line, char column)
    pub cursor_line: usize,
    pub cursor_col: usize,
    pub settings_open: bool,
    pub auto_reload: bool,
    pub last_save_time: Option<Instant>,
    // Last measured content area, set by the renderer
    pub content_width: u16,
    pub visible_height: u16,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        let mut app = Self {
            input_mode: InputMode::Normal,
            text: String::new(),
            settings,
            wrapped: Vec::new(),
            sheet: Vec::new(),
            scroll: 0,
            max_scroll: 0,
            status_message: String::new(),
            status_time: None,
            file_path: None,
            file_path_changed: false,
            command_buffer: String::new(),
            vim_buffer: String::new(),
            is_modified: false,
            cursor_line: 0,
            cursor_col: 0,
            settings_open: true,
            auto_reload: true,
            last_save_time: None,
            content_width: 0,
            visible_height: 0,
        };
        app.regenerate();
        app
    }

    /// Recompute the wrapped lines and worksheet rows from the current text
    /// and settings. Called on every change; the wrapper itself is pure and
    /// keeps no state between calls.
    pub fn regenerate(&mut self) {
        match wrap::wrap(self.text.trim(), self.settings.max_characters) {
            Ok(lines) => {
                self.sheet = sheet::build_sheet(&lines, self.settings.blank_lines);
                self.wrapped = lines;
            }
            Err(e) => {
                // Unreachable through configuration (widths are sanitized at
                // every edge), but the struct fields are public.
                self.wrapped.clear();
                self.sheet.clear();
                self.set_status(&e.to_string());
            }
        }
    }

    pub fn set_status(&mut self, message: &str) {
        self.status_message = message.to_string();
        self.status_time = Some(Instant::now());
    }

    /// Expire the status line. Command mode keeps its `:` echo visible.
    pub fn update_status(&mut self) {
        if self.input_mode == InputMode::Command {
            return;
        }
        if let Some(time) = self.status_time {
            if time.elapsed() > Duration::from_secs(5) {
                self.status_message.clear();
                self.status_time = None;
            }
        }
    }

    pub fn scroll_down(&mut self, n: u16) {
        self.scroll = self.scroll.saturating_add(n).min(self.max_scroll);
    }

    pub fn scroll_up(&mut self, n: u16) {
        self.scroll = self.scroll.saturating_sub(n);
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll = self.max_scroll;
    }

    pub fn toggle_settings(&mut self) {
        self.settings_open = !self.settings_open;
    }

    pub fn cycle_font(&mut self) {
        let idx = FONTS
            .iter()
            .position(|f| f.name == self.settings.font_family)
            .unwrap_or(0);
        let next = &FONTS[(idx + 1) % FONTS.len()];
        self.settings.font_family = next.name.to_string();
        self.set_status(&format!("Font: {}", next.name));
    }

    pub fn adjust_blank_lines(&mut self, delta: i64) {
        self.settings.blank_lines = (self.settings.blank_lines as i64 + delta).max(0) as usize;
        self.regenerate();
        self.set_status(&format!("Blank lines: {}", self.settings.blank_lines));
    }

    pub fn adjust_max_characters(&mut self, delta: i64) {
        self.settings.max_characters =
            (self.settings.max_characters as i64 + delta).max(1) as usize;
        self.regenerate();
        self.set_status(&format!("Max characters: {}", self.settings.max_characters));
    }

    pub fn adjust_word_spacing(&mut self, delta: i64) {
        self.settings.word_spacing = (self.settings.word_spacing as i64 + delta).max(0) as usize;
        self.set_status(&format!("Word spacing: {}", self.settings.word_spacing));
    }

    pub fn adjust_darkness(&mut self, delta: i64) {
        self.settings.darkness = (i64::from(self.settings.darkness) + delta).clamp(1, 100) as u8;
        self.set_status(&format!("Darkness: {}", self.settings.darkness));
    }
}
