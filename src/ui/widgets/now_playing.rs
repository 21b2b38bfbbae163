use crate::player::PlaybackSnapshot;
use crate::ui::layout::{metadata_wrap_width, progress_fits};
use crate::ui::surface::{RowStyle, StyledRow};
use crate::ui::utils::{format_hms, truncate, wrap, year_of};

const MAX_BAR_COLUMNS: usize = 68;

/// Title, artist, album and year, each wrapped at the terminal width.
pub fn metadata_rows(snapshot: &PlaybackSnapshot, width: u16) -> Vec<StyledRow> {
    let Some(track) = &snapshot.track else {
        return Vec::new();
    };
    let width = metadata_wrap_width(width);

    let mut rows = Vec::new();
    let mut field = |text: &str, style: RowStyle| {
        for line in wrap(text, width) {
            rows.push(StyledRow::new(format!(" {}", line), style));
        }
    };
    field(&track.name, RowStyle::Title);
    field(&track.artist, RowStyle::Normal);
    field(&track.album, RowStyle::Normal);
    // Always one row, whatever the raw date looks like.
    rows.push(StyledRow::new(
        format!(" {}", truncate(year_of(&track.date), width)),
        RowStyle::Dim,
    ));
    rows
}

/// Progress line and elapsed bar; changes every tick.
pub fn ticker_rows(snapshot: &PlaybackSnapshot, width: u16) -> Vec<StyledRow> {
    let Some(track) = &snapshot.track else {
        return Vec::new();
    };

    let mut rows = Vec::new();
    if progress_fits(width) {
        let percent = (track.position_ms * 100)
            .checked_div(track.duration_ms)
            .unwrap_or(0);
        rows.push(StyledRow::new(
            format!(
                " {} / {} ({}%) Vol:{}%",
                format_hms(track.position_ms),
                format_hms(track.duration_ms),
                percent,
                track.volume
            ),
            RowStyle::Progress,
        ));
    }

    let cells = MAX_BAR_COLUMNS.min((width as usize).saturating_sub(2)) / 2;
    let elapsed = (track.position_ms as usize * cells)
        .checked_div(track.duration_ms as usize)
        .unwrap_or(0);
    let mut bar = String::from(" ");
    for i in 0..cells {
        bar.push_str(if i == 0 || i < elapsed { "■ " } else { "= " });
    }
    rows.push(StyledRow::new(bar, RowStyle::Progress));
    rows
}
