use super::list_style;
use crate::app::state::PlaylistPanel;
use crate::player::PlaybackSnapshot;
use crate::playlist::PlaylistStore;
use crate::ui::surface::{RowStyle, StyledRow};
use crate::ui::utils::truncate;

pub fn help_rows() -> Vec<StyledRow> {
    vec![
        StyledRow::new(" Use ↑, ↓ or k, j to choose. Enter to accept.", RowStyle::Hint),
        StyledRow::new(" Pg Up and Pg Dn to scroll. Del to remove entry.", RowStyle::Hint),
        StyledRow::blank(),
    ]
}

pub fn body(
    panel: &mut PlaylistPanel,
    playlist: &dyn PlaylistStore,
    snapshot: &PlaybackSnapshot,
    capacity: usize,
    width: u16,
) -> (Vec<StyledRow>, bool) {
    let total = playlist.len();

    if panel.first_render {
        panel.first_render = false;
        panel.window.set_total(total);
        if let Some(pos) = snapshot.current_path().and_then(|p| playlist.position_of(p)) {
            panel.window.select(pos);
        }
    }
    let corrected = panel.window.recompute(total, capacity);

    let text_width = (width as usize).saturating_sub(4);
    let rows = panel
        .window
        .visible_range()
        .filter_map(|i| {
            let entry = playlist.get(i)?;
            let playing = snapshot.is_current(&entry.path);
            let text = truncate(&format!(" {}. {}", i + 1, entry.title), text_width);
            Some(StyledRow::new(
                text,
                list_style(panel.window.is_selected(i), false, playing),
            ))
        })
        .collect();

    (rows, corrected)
}
