//! One module per panel. Each turns session state into `StyledRow`s; none of
//! them touches the terminal.

pub mod header;
pub mod keybindings;
pub mod library;
pub mod now_playing;
pub mod playlist;
pub mod search;
pub mod status;

use crate::ui::surface::RowStyle;

/// Row style from the cursor and enqueue state of an entry.
pub fn list_style(selected: bool, enqueued: bool, playing: bool) -> RowStyle {
    match (selected, enqueued) {
        (true, true) => RowStyle::SelectedEnqueued,
        (true, false) => RowStyle::Selected,
        _ if playing => RowStyle::NowPlaying,
        (false, true) => RowStyle::Enqueued,
        (false, false) => RowStyle::Normal,
    }
}
