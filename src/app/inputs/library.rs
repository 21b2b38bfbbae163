use super::common::{nav_of, Nav};
use crate::app::App;
use crossterm::event::KeyEvent;

pub fn handle_library_events(key: KeyEvent, app: &mut App) -> bool {
    let keys = &app.keys;

    if let Some(nav) = nav_of(keys, key) {
        match nav {
            Nav::Up => app.browser.move_prev(),
            Nav::Down => app.browser.move_next(),
            Nav::PageUp => app.browser.page_prev(),
            Nav::PageDown => app.browser.page_next(),
        }
        return true;
    }

    if keys.matches(key, &keys.enter) {
        app.activate_library();
        return true;
    }

    if keys.matches(key, &keys.add_to_queue) {
        app.toggle_selected_in_library();
        return true;
    }

    false
}
