use crate::player::{PlaybackSnapshot, RepeatMode};
use crate::ui::layout::status_fits;
use crate::ui::surface::{RowStyle, StyledRow};

const STATUS_TEXT: &str = " [F2 Playlist|F3 Library|F4 Track|F5 Search|F6 Help|Esc Quit]";

/// Bottom line: panel keys plus transport glyphs. `None` when it does not fit.
pub fn row(
    snapshot: &PlaybackSnapshot,
    width: u16,
    height: u16,
    nerd_fonts: bool,
) -> Option<StyledRow> {
    if !status_fits(width, height) {
        return None;
    }

    let mut text = STATUS_TEXT.to_string();
    let repeat = snapshot.repeat != RepeatMode::Off;
    if nerd_fonts {
        if snapshot.is_paused() {
            text.push_str(" \u{f04c}");
        }
        if repeat {
            text.push_str(" \u{f01e}");
        }
        if snapshot.shuffle {
            text.push_str(" \u{f074}");
        }
        if snapshot.fast_forwarding {
            text.push_str(" \u{f04e}");
        }
        if snapshot.rewinding {
            text.push_str(" \u{f04a}");
        }
    } else {
        if repeat {
            text.push_str(" R");
        }
        if snapshot.shuffle {
            text.push_str(" S");
        }
    }

    Some(StyledRow::new(text, RowStyle::Status))
}
