use super::App;
use std::{fs, path::PathBuf, time::Instant};

impl App {
    pub fn load_file(&mut self, path: PathBuf) {
        // Strip quotes that come along with shell-pasted paths
        let cleaned = path
            .display()
            .to_string()
            .trim()
            .trim_matches('"')
            .trim_matches('\'')
            .trim()
            .to_string();
        let path = PathBuf::from(cleaned);

        match fs::read_to_string(&path) {
            Ok(content) => {
                self.text = content;
                self.after_load(path.clone());
                self.set_status(&format!("Loaded: {}", path.display()));
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                // Start an empty worksheet; :w will create the file
                self.text.clear();
                self.after_load(path.clone());
                self.set_status(&format!("New file: {}", path.display()));
            }
            Err(e) => {
                self.set_status(&format!("Cannot read {}: {}", path.display(), e));
            }
        }
    }

    fn after_load(&mut self, path: PathBuf) {
        let path_changed = self.file_path.as_ref() != Some(&path);
        self.file_path = Some(path);
        if path_changed {
            self.file_path_changed = true;
        }
        self.is_modified = false;
        self.cursor_line = 0;
        self.cursor_col = 0;
        self.scroll = 0;
        self.regenerate();
    }

    /// Re-read the loaded file after an external change.
    pub fn reload_file(&mut self) {
        let Some(path) = self.file_path.clone() else {
            return;
        };
        match fs::read_to_string(&path) {
            Ok(content) => {
                self.text = content;
                self.regenerate();
                self.clamp_cursor();
                self.set_status(&format!("Reloaded: {}", path.display()));
            }
            Err(e) => {
                self.set_status(&format!("Cannot reload {}: {}", path.display(), e));
            }
        }
    }

    pub fn save_file(&mut self) -> Result<String, String> {
        let Some(path) = self.file_path.clone() else {
            return Err("No file name (use :w FILE)".to_string());
        };
        self.save_to(path)
    }

    pub fn save_file_as(&mut self, path: PathBuf) -> Result<String, String> {
        let path_changed = self.file_path.as_ref() != Some(&path);
        self.file_path = Some(path.clone());
        if path_changed {
            self.file_path_changed = true;
        }
        self.save_to(path)
    }

    fn save_to(&mut self, path: PathBuf) -> Result<String, String> {
        fs::write(&path, &self.text)
            .map_err(|e| format!("Cannot write {}: {}", path.display(), e))?;
        self.is_modified = false;
        self.last_save_time = Some(Instant::now());
        Ok(format!(
            "Written: {} ({} lines)",
            path.display(),
            self.wrapped.len()
        ))
    }
}
