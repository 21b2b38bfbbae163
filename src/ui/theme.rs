use crate::ui::surface::RowStyle;
use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::warn;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub base: Color,
    pub surface: Color,
    pub overlay: Color,
    pub text: Color,
    pub red: Color,
    pub green: Color,
    pub yellow: Color,
    pub blue: Color,
    pub magenta: Color,
    pub cyan: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            base: Color::Rgb(30, 30, 46),
            surface: Color::Rgb(49, 50, 68),
            overlay: Color::Rgb(108, 112, 134),
            text: Color::Rgb(205, 214, 244),
            red: Color::Rgb(243, 139, 168),
            green: Color::Rgb(166, 227, 161),
            yellow: Color::Rgb(249, 226, 175),
            blue: Color::Rgb(137, 180, 250),
            magenta: Color::Rgb(203, 166, 247),
            cyan: Color::Rgb(148, 226, 213),
        }
    }
}

impl Theme {
    pub fn style(&self, role: RowStyle) -> Style {
        let fg = |c: Color| Style::default().fg(c);
        match role {
            RowStyle::Normal => fg(self.text),
            RowStyle::Dim => fg(self.overlay),
            RowStyle::Logo => fg(self.magenta).add_modifier(Modifier::BOLD),
            RowStyle::Title => fg(self.text).add_modifier(Modifier::BOLD),
            RowStyle::Hint => fg(self.overlay),
            RowStyle::Artist => fg(self.blue),
            RowStyle::Selected => fg(self.text).add_modifier(Modifier::REVERSED),
            RowStyle::Enqueued => fg(self.green),
            RowStyle::SelectedEnqueued => fg(self.green).add_modifier(Modifier::REVERSED),
            RowStyle::NowPlaying => fg(self.yellow).add_modifier(Modifier::BOLD),
            RowStyle::Status => fg(self.overlay),
            RowStyle::Progress => fg(self.cyan),
        }
    }
}

// Helper for serialization/deserialization
#[derive(Serialize, Deserialize)]
struct ThemeFile {
    theme: Theme,
}

pub fn load_theme(path: &Path) -> Theme {
    if path.exists() {
        if let Ok(content) = fs::read_to_string(path) {
            // Try parsing as nested [theme] first
            if let Ok(wrapper) = toml::from_str::<ThemeFile>(&content) {
                return wrapper.theme;
            }
            // Fallback: flat file
            if let Ok(theme) = toml::from_str::<Theme>(&content) {
                return theme;
            }
        }
        warn!("unreadable theme at {}, using defaults", path.display());
    } else {
        // Auto-create default theme file if it doesn't exist
        let default_theme = Theme::default();
        let wrapper = ThemeFile {
            theme: default_theme.clone(),
        };

        if let Some(parent) = path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        if let Ok(toml_str) = toml::to_string_pretty(&wrapper) {
            let _ = fs::write(path, toml_str);
        }

        return default_theme;
    }

    Theme::default()
}
