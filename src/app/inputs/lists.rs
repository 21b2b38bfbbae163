use super::common::{nav_of, Nav};
use crate::app::state::window::WindowState;
use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn apply_nav(window: &mut WindowState, nav: Nav) {
    match nav {
        Nav::Up => window.move_prev(),
        Nav::Down => window.move_next(),
        Nav::PageUp => window.page_prev(),
        Nav::PageDown => window.page_next(),
    }
}

pub fn handle_playlist_events(key: KeyEvent, app: &mut App) -> bool {
    let keys = &app.keys;

    if let Some(nav) = nav_of(keys, key) {
        apply_nav(&mut app.playlist_panel.window, nav);
        return true;
    }
    if keys.matches(key, &keys.enter) {
        app.play_selected_playlist_entry();
        return true;
    }
    if keys.matches(key, &keys.delete_item) {
        app.remove_selected_playlist_entry();
        return true;
    }
    false
}

/// Query editing: printable characters and Backspace.
pub fn handle_search_text(key: KeyEvent, app: &mut App) -> bool {
    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return false;
    }
    match key.code {
        KeyCode::Char(ch) => {
            app.search_push(ch);
            true
        }
        KeyCode::Backspace => {
            app.search_pop();
            true
        }
        _ => false,
    }
}

pub fn handle_search_events(key: KeyEvent, app: &mut App) -> bool {
    let keys = &app.keys;

    // Letters belong to the query here, so only non-printing keys move.
    let nav = match key.code {
        KeyCode::Up => Some(Nav::Up),
        KeyCode::Down => Some(Nav::Down),
        _ => nav_of(keys, key).filter(|n| matches!(n, Nav::PageUp | Nav::PageDown)),
    };
    if let Some(nav) = nav {
        apply_nav(&mut app.search_panel.window, nav);
        return true;
    }
    if keys.matches(key, &keys.enter) {
        app.toggle_selected_search_result();
        return true;
    }
    false
}

pub fn handle_keybindings_events(key: KeyEvent, app: &mut App) -> bool {
    match nav_of(&app.keys, key) {
        Some(nav) => {
            apply_nav(&mut app.bindings, nav);
            true
        }
        None => false,
    }
}
