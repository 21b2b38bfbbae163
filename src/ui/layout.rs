use crate::app::state::ui::View;
use crate::ui::utils::wrap;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Blank spacer plus the status line.
pub const FOOTER_ROWS: usize = 2;
pub const STATUS_MIN_WIDTH: u16 = 68;
pub const PROGRESS_MIN_WIDTH: u16 = 39;
const LIBRARY_HELP_MIN_WIDTH: u16 = 61;
const PLAYLIST_HELP_MIN_WIDTH: u16 = 53;

/// Rows left for the list once the header and footer are placed. Zero on
/// tiny terminals; callers then draw no list rows at all.
pub fn window_capacity(term_height: u16, reserved_rows: usize) -> usize {
    (term_height as usize).saturating_sub(reserved_rows)
}

/// Columns a metadata field wraps at: one is taken by the leading space.
pub fn metadata_wrap_width(width: u16) -> usize {
    (width as usize).saturating_sub(1).max(1)
}

/// Rows the track metadata block needs: each field wrapped like the panel
/// draws it, plus a line for the year.
pub fn metadata_height(title: &str, artist: &str, album: &str, width: u16) -> usize {
    if title.is_empty() {
        return 4;
    }
    let width = metadata_wrap_width(width);
    let rows = |s: &str| wrap(s, width).len();
    rows(title) + rows(artist) + rows(album) + 1
}

pub fn status_fits(width: u16, height: u16) -> bool {
    width >= STATUS_MIN_WIDTH && height >= 1
}

pub fn progress_fits(width: u16) -> bool {
    width >= PROGRESS_MIN_WIDTH
}

/// Whether a panel has room for its help rows.
pub fn help_fits(view: View, width: u16, hide_help: bool) -> bool {
    if hide_help {
        return false;
    }
    match view {
        View::Library => width >= LIBRARY_HELP_MIN_WIDTH,
        View::Playlist => width >= PLAYLIST_HELP_MIN_WIDTH,
        _ => false,
    }
}

pub struct MainLayout {
    pub header_area: Rect,
    pub body_area: Rect,
    pub footer_area: Rect,
}

pub fn get_main_layout(area: Rect, header_rows: u16) -> MainLayout {
    // Footer needs 1 line at the bottom always.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_rows), // Header
            Constraint::Min(0),              // Body
            Constraint::Length(1),           // Spacer
            Constraint::Length(1),           // Footer
        ])
        .split(area);

    MainLayout {
        header_area: chunks[0],
        body_area: chunks[1],
        footer_area: chunks[3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_never_underflows() {
        assert_eq!(window_capacity(40, 7), 33);
        assert_eq!(window_capacity(5, 7), 0);
        assert_eq!(window_capacity(0, 0), 0);
    }

    #[test]
    fn test_metadata_height_wraps_fields() {
        assert_eq!(metadata_height("", "", "", 80), 4);
        assert_eq!(metadata_height("Time", "Pink Floyd", "Dark Side", 80), 4);
        let long = "x".repeat(81);
        assert_eq!(metadata_height(&long, "a", "b", 80), 5);
        assert_eq!(metadata_height("abc", "a", "b", 0), 6);
    }

    #[test]
    fn test_title_as_wide_as_the_terminal_takes_two_rows() {
        let title = "x".repeat(80);
        assert_eq!(metadata_height(&title, "a", "b", 80), 5);
        assert_eq!(metadata_height(&"x".repeat(79), "a", "b", 80), 4);
    }

    #[test]
    fn test_thresholds() {
        assert!(status_fits(68, 1));
        assert!(!status_fits(67, 40));
        assert!(!status_fits(100, 0));
        assert!(progress_fits(39));
        assert!(!progress_fits(38));
        assert!(help_fits(View::Library, 61, false));
        assert!(!help_fits(View::Library, 60, false));
        assert!(help_fits(View::Playlist, 53, false));
        assert!(!help_fits(View::Playlist, 80, true));
        assert!(!help_fits(View::Search, 200, false));
    }
}
