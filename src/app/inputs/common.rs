use crate::app::keys::KeyConfig;
use crate::app::state::ui::View;
use crate::app::App;
use crossterm::event::KeyEvent;
use tracing::{info, warn};

/// Cursor motion shared by every list panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    Up,
    Down,
    PageUp,
    PageDown,
}

pub fn nav_of(keys: &KeyConfig, key: KeyEvent) -> Option<Nav> {
    if keys.matches(key, &keys.nav_up) || keys.matches(key, &keys.nav_up_alt) {
        Some(Nav::Up)
    } else if keys.matches(key, &keys.nav_down) || keys.matches(key, &keys.nav_down_alt) {
        Some(Nav::Down)
    } else if keys.matches(key, &keys.page_up) {
        Some(Nav::PageUp)
    } else if keys.matches(key, &keys.page_down) {
        Some(Nav::PageDown)
    } else {
        None
    }
}

pub fn handle_common_events(key: KeyEvent, app: &mut App) -> bool {
    let keys = app.keys.clone(); // Clone keys to avoid borrowing app

    if keys.matches(key, &keys.quit) || keys.matches(key, &keys.quit_alt) {
        app.is_running = false;
        return true;
    }

    // View Switchers
    if keys.matches(key, &keys.view_playlist) {
        app.toggle_view(View::Playlist);
        return true;
    }
    if keys.matches(key, &keys.view_library) {
        app.toggle_view(View::Library);
        return true;
    }
    if keys.matches(key, &keys.view_search) {
        app.toggle_view(View::Search);
        return true;
    }
    if keys.matches(key, &keys.view_keybindings) {
        app.toggle_view(View::KeyBindings);
        return true;
    }
    if keys.matches(key, &keys.view_track) {
        if app.has_song() {
            app.show_view(View::NowPlaying);
        }
        return true;
    }
    if keys.matches(key, &keys.tab_next) {
        app.tab_next();
        return true;
    }

    // Global Player Controls
    if keys.matches(key, &keys.play_pause) {
        if let Err(e) = app.player.play_pause() {
            warn!("pause failed: {}", e);
        }
        return true;
    }
    if keys.matches(key, &keys.repeat) {
        match app.player.toggle_repeat() {
            Ok(mode) => info!("repeat {:?}", mode),
            Err(e) => warn!("repeat failed: {}", e),
        }
        return true;
    }
    if keys.matches(key, &keys.shuffle) {
        match app.player.toggle_shuffle() {
            Ok(on) => info!("shuffle {}", on),
            Err(e) => warn!("shuffle failed: {}", e),
        }
        return true;
    }
    if keys.matches(key, &keys.update_library) {
        if let Err(e) = app.reload_library() {
            warn!("library update failed: {:#}", e);
        }
        return true;
    }

    false
}
