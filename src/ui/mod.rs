//! Render dispatcher. Decides per tick whether anything has to be composed,
//! composes the active panel and hands rows to a [`TerminalSurface`].

pub mod layout;
pub mod surface;
pub mod terminal;
pub mod theme;
pub mod utils;
pub mod widgets;

pub use surface::{PanelFrame, RowStyle, StyledRow, TerminalSurface, Ticker};
pub use theme::Theme;

use crate::app::state::ui::View;
use crate::app::App;
use crate::player::PlaybackSnapshot;
use anyhow::Result;
use layout::{help_fits, metadata_height, window_capacity, FOOTER_ROWS};
use tracing::debug;

/// Compose passes allowed per tick: the first may repair a cursor, the
/// second shows the repaired state.
pub const MAX_PASSES: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing changed.
    Idle,
    /// Only the time-driven now-playing rows were redrawn.
    Ticker,
    /// A full frame was drawn after `passes` compose passes.
    Redrawn { passes: usize },
}

pub fn tick(app: &mut App, surface: &mut dyn TerminalSurface) -> Result<TickOutcome> {
    if app.view.current() == View::NowPlaying && !app.has_song() {
        app.show_view(View::Library);
    }

    // New result set: the search cursor starts over.
    let generation = app.search.generation();
    if generation != app.search_panel.seen_generation {
        app.search_panel.seen_generation = generation;
        app.search_panel.window.reset(app.search.len());
        if app.view.current() == View::Search {
            app.view.mark_dirty();
        }
    }

    if !app.view.is_dirty() {
        if app.view.current() != View::NowPlaying {
            return Ok(TickOutcome::Idle);
        }
        let (width, height) = surface.size()?;
        let snapshot = app.snapshot();
        let ticker = Ticker {
            rows: ticker_rows(app, &snapshot, width, height),
            status: widgets::status::row(&snapshot, width, height, app.config.ui.nerd_fonts),
        };
        surface.draw_ticker(&ticker)?;
        return Ok(TickOutcome::Ticker);
    }

    let mut passes = 0;
    let frame = loop {
        passes += 1;
        app.view.clear_dirty();
        let (width, height) = surface.size()?;
        let (frame, corrected) = compose(app, width, height);
        if corrected {
            debug!("cursor corrected on pass {}", passes);
            app.view.mark_dirty();
        }
        if app.view.is_dirty() && passes < MAX_PASSES {
            continue;
        }
        break frame;
    };

    surface.draw_frame(&frame)?;
    Ok(TickOutcome::Redrawn { passes })
}

fn ticker_rows(app: &App, snapshot: &PlaybackSnapshot, width: u16, height: u16) -> Vec<StyledRow> {
    let header = widgets::header::rows(&app.config.ui, snapshot, width).len();
    let (title, artist, album) = snapshot
        .track
        .as_ref()
        .map(|t| (t.name.as_str(), t.artist.as_str(), t.album.as_str()))
        .unwrap_or(("", "", ""));
    let reserved = header + metadata_height(title, artist, album, width) + FOOTER_ROWS;

    let mut rows = widgets::now_playing::ticker_rows(snapshot, width);
    rows.truncate(window_capacity(height, reserved));
    rows
}

/// Builds the active panel. The flag is set when a panel had to repair its
/// cursor and wants another pass.
pub fn compose(app: &mut App, width: u16, height: u16) -> (PanelFrame, bool) {
    let snapshot = app.snapshot();
    let view = app.view.current();
    let ui = app.config.ui.clone();

    let mut header = widgets::header::rows(&ui, &snapshot, width);
    let status = widgets::status::row(&snapshot, width, height, ui.nerd_fonts);
    let mut ticker = Vec::new();

    let (body, corrected) = match view {
        View::NowPlaying => {
            ticker = ticker_rows(app, &snapshot, width, height);
            (widgets::now_playing::metadata_rows(&snapshot, width), false)
        }
        View::Library => {
            if help_fits(view, width, ui.hide_help) {
                header.extend(widgets::library::help_rows());
            }
            let capacity = window_capacity(height, header.len() + FOOTER_ROWS);
            widgets::library::body(
                &mut app.browser,
                app.library.as_ref(),
                &snapshot,
                capacity,
                width,
            )
        }
        View::Playlist => {
            if help_fits(view, width, ui.hide_help) {
                header.extend(widgets::playlist::help_rows());
            }
            let capacity = window_capacity(height, header.len() + FOOTER_ROWS);
            widgets::playlist::body(
                &mut app.playlist_panel,
                app.playlist.as_ref(),
                &snapshot,
                capacity,
                width,
            )
        }
        View::Search => {
            header.extend(widgets::search::query_rows(app.search.query()));
            let capacity = window_capacity(height, header.len() + FOOTER_ROWS);
            widgets::search::body(
                &mut app.search_panel,
                app.search.as_ref(),
                app.library.as_ref(),
                capacity,
                width,
            )
        }
        View::KeyBindings => {
            header.extend(widgets::keybindings::about_rows());
            let capacity = window_capacity(height, header.len() + FOOTER_ROWS);
            widgets::keybindings::body(&mut app.bindings, &app.keys, capacity, width)
        }
    };

    let frame = PanelFrame {
        header,
        body,
        ticker,
        status,
    };
    (frame, corrected)
}
