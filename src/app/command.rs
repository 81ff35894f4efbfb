use super::App;
use std::path::PathBuf;

impl App {
    /// Multi-key sequences in Normal mode. Returns true when the buffer was
    /// consumed as a complete sequence.
    pub fn handle_vim_input(&mut self, c: char) -> bool {
        self.vim_buffer.push(c);

        if self.vim_buffer == "gg" {
            self.scroll_to_top();
            self.vim_buffer.clear();
            return true;
        } else if self.vim_buffer.len() >= 2 {
            self.vim_buffer.clear();
        }

        false
    }

    /// Execute the pending `:` command. Returns true when the application
    /// should quit.
    pub fn execute_command(&mut self) -> bool {
        let cmd = self.command_buffer.clone();
        let cmd = cmd.trim();

        if cmd.is_empty() {
            self.set_status("");
        } else if cmd == "q" {
            if self.is_modified {
                self.set_status("No write since last change (use :q! to override)");
            } else {
                return true;
            }
        } else if cmd == "q!" {
            return true;
        } else if cmd == "w" {
            match self.save_file() {
                Ok(msg) => self.set_status(&msg),
                Err(msg) => self.set_status(&msg),
            }
        } else if let Some(filename) = cmd.strip_prefix("w ") {
            let path = PathBuf::from(filename.trim());
            match self.save_file_as(path) {
                Ok(msg) => self.set_status(&msg),
                Err(msg) => self.set_status(&msg),
            }
        } else if cmd == "wq" || cmd == "x" {
            match self.save_file() {
                Ok(_) => return true,
                Err(msg) => self.set_status(&msg),
            }
        } else if let Some(filename) = cmd.strip_prefix("e ") {
            self.load_file(PathBuf::from(filename.trim()));
        } else if cmd == "pdf" {
            match self.export_pdf(None) {
                Ok(path) => self.set_status(&format!("Exported: {}", path)),
                Err(msg) => self.set_status(&msg),
            }
        } else if let Some(filename) = cmd.strip_prefix("pdf ") {
            match self.export_pdf(Some(PathBuf::from(filename.trim()))) {
                Ok(path) => self.set_status(&format!("Exported: {}", path)),
                Err(msg) => self.set_status(&msg),
            }
        } else if let Some(assignment) = cmd.strip_prefix("set ") {
            self.execute_set(assignment.trim());
        } else if let Some(name) = cmd.strip_prefix("font ") {
            match self.settings.set_option("font", name.trim()) {
                Ok(()) => {
                    let name = self.settings.font().name;
                    self.set_status(&format!("Font: {}", name));
                }
                Err(msg) => self.set_status(&msg),
            }
        } else if cmd == "paste" {
            self.paste_from_clipboard();
        } else if cmd == "copy" {
            self.copy_sheet_to_clipboard();
        } else {
            self.set_status(&format!("Not a command: {}", cmd));
        }

        false
    }

    fn execute_set(&mut self, assignment: &str) {
        let Some((key, value)) = assignment.split_once('=') else {
            self.set_status("Usage: set KEY=VALUE (font, blank, width, spacing, darkness)");
            return;
        };
        match self.settings.set_option(key.trim(), value) {
            Ok(()) => {
                self.regenerate();
                self.set_status(&format!("set {}", assignment));
            }
            Err(msg) => self.set_status(&msg),
        }
    }
}
