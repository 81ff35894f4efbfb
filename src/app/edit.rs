use super::App;

impl App {
    fn line_list(&self) -> Vec<String> {
        self.text.split('\n').map(|s| s.to_string()).collect()
    }

    fn commit_lines(&mut self, lines: Vec<String>) {
        self.text = lines.join("\n");
        self.regenerate();
    }

    // Byte offset of char column `col`, clamped to the end of the line
    fn byte_col(line: &str, col: usize) -> usize {
        line.char_indices()
            .nth(col)
            .map(|(i, _)| i)
            .unwrap_or(line.len())
    }

    fn char_len(line: &str) -> usize {
        line.chars().count()
    }

    pub fn clamp_cursor(&mut self) {
        let lines = self.line_list();
        if self.cursor_line >= lines.len() {
            self.cursor_line = lines.len().saturating_sub(1);
        }
        let len = Self::char_len(&lines[self.cursor_line]);
        if self.cursor_col > len {
            self.cursor_col = len;
        }
    }

    pub fn insert_char(&mut self, c: char) {
        let mut buf = [0u8; 4];
        self.insert_text(c.encode_utf8(&mut buf));
    }

    pub fn insert_newline(&mut self) {
        self.insert_text("\n");
    }

    /// Splice `s` (which may contain newlines) into the text at the cursor
    /// and leave the cursor just past the inserted content.
    pub fn insert_text(&mut self, s: &str) {
        self.clamp_cursor();
        let mut lines = self.line_list();
        let at_line = self.cursor_line;

        let line = lines[at_line].clone();
        let at = Self::byte_col(&line, self.cursor_col);
        let (before, after) = line.split_at(at);
        let combined = format!("{}{}{}", before, s, after);
        let segments: Vec<String> = combined.split('\n').map(|x| x.to_string()).collect();

        let inserted: Vec<&str> = s.split('\n').collect();
        if inserted.len() == 1 {
            self.cursor_col += Self::char_len(inserted[0]);
        } else {
            self.cursor_line = at_line + inserted.len() - 1;
            self.cursor_col = Self::char_len(inserted[inserted.len() - 1]);
        }

        lines.splice(at_line..=at_line, segments);
        self.commit_lines(lines);
    }

    pub fn backspace(&mut self) {
        self.clamp_cursor();
        let mut lines = self.line_list();
        if self.cursor_col > 0 {
            let line = &mut lines[self.cursor_line];
            let at = Self::byte_col(line, self.cursor_col - 1);
            line.remove(at);
            self.cursor_col -= 1;
        } else if self.cursor_line > 0 {
            let tail = lines.remove(self.cursor_line);
            self.cursor_line -= 1;
            self.cursor_col = Self::char_len(&lines[self.cursor_line]);
            lines[self.cursor_line].push_str(&tail);
        } else {
            return;
        }
        self.commit_lines(lines);
    }

    pub fn delete_char(&mut self) {
        self.clamp_cursor();
        let mut lines = self.line_list();
        let len = Self::char_len(&lines[self.cursor_line]);
        if self.cursor_col < len {
            let at = Self::byte_col(&lines[self.cursor_line], self.cursor_col);
            lines[self.cursor_line].remove(at);
        } else if self.cursor_line + 1 < lines.len() {
            let tail = lines.remove(self.cursor_line + 1);
            lines[self.cursor_line].push_str(&tail);
        } else {
            return;
        }
        self.commit_lines(lines);
    }

    pub fn move_cursor_left(&mut self) {
        self.clamp_cursor();
        if self.cursor_col > 0 {
            self.cursor_col -= 1;
        } else if self.cursor_line > 0 {
            let lines = self.line_list();
            self.cursor_line -= 1;
            self.cursor_col = Self::char_len(&lines[self.cursor_line]);
        }
    }

    pub fn move_cursor_right(&mut self) {
        self.clamp_cursor();
        let lines = self.line_list();
        if self.cursor_col < Self::char_len(&lines[self.cursor_line]) {
            self.cursor_col += 1;
        } else if self.cursor_line + 1 < lines.len() {
            self.cursor_line += 1;
            self.cursor_col = 0;
        }
    }

    pub fn move_cursor_up(&mut self) {
        if self.cursor_line > 0 {
            self.cursor_line -= 1;
        }
        self.clamp_cursor();
    }

    pub fn move_cursor_down(&mut self) {
        let lines = self.line_list();
        if self.cursor_line + 1 < lines.len() {
            self.cursor_line += 1;
        }
        self.clamp_cursor();
    }
}
