use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use super::fonts::FontSpec;

pub const DEFAULT_MAX_CHARACTERS: usize = 45;
pub const DEFAULT_BLANK_LINES: usize = 1;
pub const DEFAULT_WORD_SPACING: usize = 7;
pub const DEFAULT_DARKNESS: u8 = 100;

/// Worksheet settings. Everything here is caller-side configuration: the
/// wrapping core only ever sees `max_characters`, and the rest is cosmetic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub font_family: String,
    pub blank_lines: usize,
    pub max_characters: usize,
    pub word_spacing: usize,
    /// Ink darkness, 1-100. 100 is full black on paper.
    pub darkness: u8,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            font_family: FontSpec::fallback().name.to_string(),
            blank_lines: DEFAULT_BLANK_LINES,
            max_characters: DEFAULT_MAX_CHARACTERS,
            word_spacing: DEFAULT_WORD_SPACING,
            darkness: DEFAULT_DARKNESS,
        }
    }
}

impl Settings {
    /// Load persisted settings, falling back to defaults when the file is
    /// missing or unreadable. Values are sanitized after deserializing so a
    /// hand-edited file cannot smuggle a zero width into the wrapper.
    pub fn load() -> Self {
        let mut settings: Settings = Self::settings_path()
            .and_then(|path| fs::read_to_string(path).ok())
            .and_then(|contents| serde_json::from_str(&contents).ok())
            .unwrap_or_default();
        settings.sanitize();
        settings
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::settings_path().context("no config directory")?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(&path, contents).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    fn settings_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut path| {
            path.push("copybook");
            path.push("settings.json");
            path
        })
    }

    pub fn sanitize(&mut self) {
        if self.max_characters == 0 {
            self.max_characters = DEFAULT_MAX_CHARACTERS;
        }
        self.darkness = self.darkness.clamp(1, 100);
    }

    /// The font preset this configuration selects, first preset when the
    /// configured name matches nothing.
    pub fn font(&self) -> &'static FontSpec {
        FontSpec::by_name(&self.font_family).unwrap_or_else(FontSpec::fallback)
    }

    /// Apply string overrides (CLI flags). Parsing is lenient: unparsable
    /// values keep the current setting, and a zero width or darkness falls
    /// back to the default rather than producing an unusable worksheet.
    pub fn apply_overrides(
        &mut self,
        font: Option<&str>,
        blank_lines: Option<&str>,
        max_characters: Option<&str>,
        word_spacing: Option<&str>,
        darkness: Option<&str>,
    ) {
        if let Some(name) = font {
            self.font_family = name.trim().to_string();
        }
        if let Some(v) = blank_lines {
            if let Ok(n) = v.trim().parse::<usize>() {
                self.blank_lines = n;
            }
        }
        if let Some(v) = max_characters {
            if let Ok(n) = v.trim().parse::<usize>() {
                self.max_characters = if n == 0 { DEFAULT_MAX_CHARACTERS } else { n };
            }
        }
        if let Some(v) = word_spacing {
            if let Ok(n) = v.trim().parse::<usize>() {
                self.word_spacing = n;
            }
        }
        if let Some(v) = darkness {
            if let Ok(n) = v.trim().parse::<u32>() {
                self.darkness = if n == 0 {
                    DEFAULT_DARKNESS
                } else {
                    n.min(100) as u8
                };
            }
        }
    }

    /// Apply one `key=value` pair from a `:set` command. Unlike the lenient
    /// CLI path this reports what it rejects.
    pub fn set_option(&mut self, key: &str, value: &str) -> Result<(), String> {
        let value = value.trim();
        match key {
            "font" => {
                if FontSpec::by_name(value).is_some() {
                    self.font_family = value.to_string();
                    Ok(())
                } else {
                    Err(format!("Unknown font: {}", value))
                }
            }
            "blank" | "blanklines" => match value.parse::<usize>() {
                Ok(n) => {
                    self.blank_lines = n;
                    Ok(())
                }
                Err(_) => Err(format!("Not a number: {}", value)),
            },
            "width" | "maxchars" => match value.parse::<usize>() {
                Ok(n) if n >= 1 => {
                    self.max_characters = n;
                    Ok(())
                }
                Ok(_) => Err("Width must be at least 1".to_string()),
                Err(_) => Err(format!("Not a number: {}", value)),
            },
            "spacing" | "wordspacing" => match value.parse::<usize>() {
                Ok(n) => {
                    self.word_spacing = n;
                    Ok(())
                }
                Err(_) => Err(format!("Not a number: {}", value)),
            },
            "darkness" => match value.parse::<u32>() {
                Ok(n) if (1..=100).contains(&n) => {
                    self.darkness = n as u8;
                    Ok(())
                }
                Ok(_) => Err("Darkness must be 1-100".to_string()),
                Err(_) => Err(format!("Not a number: {}", value)),
            },
            _ => Err(format!("Unknown option: {}", key)),
        }
    }
}
