use super::App;
use crate::sheet;
use arboard::Clipboard;

impl App {
    /// Insert clipboard text at the cursor.
    pub fn paste_from_clipboard(&mut self) {
        match Clipboard::new().and_then(|mut clipboard| clipboard.get_text()) {
            Ok(text) => {
                let count = text.chars().count();
                self.insert_text(&text);
                self.is_modified = true;
                self.set_status(&format!("Pasted {} characters", count));
            }
            Err(e) => self.set_status(&format!("Clipboard error: {}", e)),
        }
    }

    /// Copy the rendered worksheet (text rows plus blank rows) as plain text.
    pub fn copy_sheet_to_clipboard(&mut self) {
        if self.sheet.is_empty() {
            self.set_status("Nothing to copy");
            return;
        }
        let rendered = sheet::sheet_to_text(&self.sheet);
        match Clipboard::new().and_then(|mut clipboard| clipboard.set_text(rendered)) {
            Ok(()) => self.set_status("Worksheet copied to clipboard"),
            Err(e) => self.set_status(&format!("Clipboard error: {}", e)),
        }
    }
}
