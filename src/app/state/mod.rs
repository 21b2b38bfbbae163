pub mod browser;
pub mod ui;
pub mod window;

pub use browser::{Activation, BrowserFrame, BrowserMode, BrowserRow, LibraryBrowser};
pub use ui::{Transition, View, ViewState};
pub use window::WindowState;

/// Playlist panel cursor 🎶
#[derive(Debug, Clone)]
pub struct PlaylistPanel {
    pub window: WindowState,
    /// Next render jumps the cursor to the playing entry.
    pub first_render: bool,
}

impl Default for PlaylistPanel {
    fn default() -> Self {
        Self {
            window: WindowState::default(),
            first_render: true,
        }
    }
}

/// Search panel cursor 🔍
#[derive(Debug, Clone, Default)]
pub struct SearchPanel {
    pub window: WindowState,
    /// Result generation the window was last reset for.
    pub seen_generation: u64,
}
