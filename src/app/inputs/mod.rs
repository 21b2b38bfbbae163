use crate::app::state::ui::View;
use crate::app::App;
use crossterm::event::{KeyEvent, KeyEventKind};

pub mod common;
pub mod library;
pub mod lists;

/// Routes one key press. Returns true when something handled it; handled
/// keys leave the view dirty.
pub fn handle_event(key: KeyEvent, app: &mut App) -> bool {
    if key.kind == KeyEventKind::Release {
        return false;
    }

    // 1. Search captures text before any single-letter shortcut
    if app.view.current() == View::Search && lists::handle_search_text(key, app) {
        app.view.mark_dirty();
        return true;
    }

    // 2. Common/Global Keys (Quit, views, transport)
    // 3. Context Specific Handlers
    let consumed = common::handle_common_events(key, app)
        || match app.view.current() {
            View::Library => library::handle_library_events(key, app),
            View::Playlist => lists::handle_playlist_events(key, app),
            View::Search => lists::handle_search_events(key, app),
            View::KeyBindings => lists::handle_keybindings_events(key, app),
            View::NowPlaying => false,
        };

    if consumed {
        app.view.mark_dirty();
    }
    consumed
}
