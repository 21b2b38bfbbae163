use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyConfig {
    // Global
    pub quit: String,
    pub quit_alt: String,
    pub play_pause: String,
    pub repeat: String,
    pub shuffle: String,

    // View Switching
    pub view_playlist: String,
    pub view_library: String,
    pub view_track: String,
    pub view_search: String,
    pub view_keybindings: String,
    pub tab_next: String,

    // Navigation (Shared)
    pub nav_up: String,
    pub nav_up_alt: String,
    pub nav_down: String,
    pub nav_down_alt: String,
    pub page_up: String,
    pub page_down: String,

    // Lists
    pub enter: String,
    pub add_to_queue: String,
    pub delete_item: String,
    pub update_library: String,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            quit: "Esc".to_string(),
            quit_alt: "q".to_string(),
            play_pause: "Space".to_string(),
            repeat: "r".to_string(),
            shuffle: "s".to_string(),

            view_playlist: "F2".to_string(),
            view_library: "F3".to_string(),
            view_track: "F4".to_string(),
            view_search: "F5".to_string(),
            view_keybindings: "F6".to_string(),
            tab_next: "Tab".to_string(),

            nav_up: "k".to_string(),
            nav_up_alt: "Up".to_string(),
            nav_down: "j".to_string(),
            nav_down_alt: "Down".to_string(),
            page_up: "PageUp".to_string(),
            page_down: "PageDown".to_string(),

            enter: "Enter".to_string(),
            add_to_queue: "a".to_string(),
            delete_item: "Delete".to_string(),
            update_library: "u".to_string(),
        }
    }
}

impl KeyConfig {
    pub fn matches(&self, event: KeyEvent, key_str: &str) -> bool {
        match key_str {
            "Space" => event.code == KeyCode::Char(' '),
            "Enter" => event.code == KeyCode::Enter,
            "Backspace" => event.code == KeyCode::Backspace,
            "Esc" => event.code == KeyCode::Esc,
            "Tab" => event.code == KeyCode::Tab,
            "BackTab" => event.code == KeyCode::BackTab,
            "Up" => event.code == KeyCode::Up,
            "Down" => event.code == KeyCode::Down,
            "Left" => event.code == KeyCode::Left,
            "Right" => event.code == KeyCode::Right,
            "PageUp" => event.code == KeyCode::PageUp,
            "PageDown" => event.code == KeyCode::PageDown,
            "Home" => event.code == KeyCode::Home,
            "End" => event.code == KeyCode::End,
            "Delete" => event.code == KeyCode::Delete,
            s if s.len() > 1 && s.starts_with('F') => s[1..]
                .parse::<u8>()
                .is_ok_and(|n| event.code == KeyCode::F(n)),
            s if s.chars().count() == 1 => {
                if let Some(ch) = s.chars().next() {
                    // Check for shift modifier if char is uppercase
                    if ch.is_uppercase() {
                        event.code == KeyCode::Char(ch)
                            || (event.code == KeyCode::Char(ch.to_ascii_lowercase())
                                && event.modifiers.contains(KeyModifiers::SHIFT))
                    } else {
                        event.code == KeyCode::Char(ch)
                    }
                } else {
                    false
                }
            }
            _ => false,
        }
    }

    // Helper for UI display
    pub fn display(&self, key_str: &str) -> String {
        match key_str {
            "Up" => "↑".to_string(),
            "Down" => "↓".to_string(),
            "Left" => "←".to_string(),
            "Right" => "→".to_string(),
            "BackTab" => "S-Tab".to_string(), // Shift+Tab
            "Backspace" => "Bksp".to_string(),
            "PageUp" => "PgUp".to_string(),
            "PageDown" => "PgDn".to_string(),
            "Delete" => "Del".to_string(),
            _ => key_str.to_string(),
        }
    }

    /// (keys, action) pairs for the key bindings panel.
    pub fn bindings(&self) -> Vec<(String, &'static str)> {
        let pair = |a: &str, b: &str| format!("{}, {}", self.display(a), self.display(b));
        vec![
            (self.display(&self.view_playlist), "Show/hide playlist"),
            (self.display(&self.view_library), "Show/hide library"),
            (self.display(&self.view_track), "Show now playing"),
            (self.display(&self.view_search), "Show/hide search"),
            (self.display(&self.view_keybindings), "Show/hide key bindings"),
            (self.display(&self.tab_next), "Cycle panels"),
            (pair(&self.nav_up, &self.nav_up_alt), "Move up"),
            (pair(&self.nav_down, &self.nav_down_alt), "Move down"),
            (pair(&self.page_up, &self.page_down), "Page up / down"),
            (self.display(&self.enter), "Open directory / play / enqueue"),
            (self.display(&self.add_to_queue), "Add or remove from playlist"),
            (self.display(&self.delete_item), "Remove from playlist"),
            (self.display(&self.play_pause), "Pause / resume"),
            (self.display(&self.repeat), "Toggle repeat"),
            (self.display(&self.shuffle), "Toggle shuffle"),
            (self.display(&self.update_library), "Update library"),
            (pair(&self.quit, &self.quit_alt), "Quit"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_named_and_function_keys() {
        let keys = KeyConfig::default();
        assert!(keys.matches(key(KeyCode::F(2)), &keys.view_playlist));
        assert!(!keys.matches(key(KeyCode::F(3)), &keys.view_playlist));
        assert!(keys.matches(key(KeyCode::F(12)), "F12"));
        assert!(keys.matches(key(KeyCode::PageDown), &keys.page_down));
        assert!(keys.matches(key(KeyCode::Delete), &keys.delete_item));
        assert!(!keys.matches(key(KeyCode::Char('F')), "F2"));
    }

    #[test]
    fn test_char_keys_and_shift() {
        let keys = KeyConfig::default();
        assert!(keys.matches(key(KeyCode::Char('a')), &keys.add_to_queue));
        assert!(keys.matches(
            KeyEvent::new(KeyCode::Char('j'), KeyModifiers::SHIFT),
            "J"
        ));
        assert!(keys.matches(key(KeyCode::Char('F')), "F"));
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let keys: KeyConfig = toml::from_str("quit_alt = \"x\"").unwrap();
        assert_eq!(keys.quit_alt, "x");
        assert_eq!(keys.view_library, "F3");
        assert_eq!(keys.bindings().len(), 17);
    }
}
