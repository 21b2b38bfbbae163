use super::list_style;
use crate::app::state::browser::{BrowserRow, LibraryBrowser};
use crate::library::Library;
use crate::player::PlaybackSnapshot;
use crate::ui::surface::{RowStyle, StyledRow};
use crate::ui::utils::{display_name, truncate};

pub fn help_rows() -> Vec<StyledRow> {
    vec![
        StyledRow::new(
            " Use ↑, ↓ or k, j to choose. Enter to enqueue/dequeue.",
            RowStyle::Hint,
        ),
        StyledRow::new(
            " Pg Up and Pg Dn to scroll. Press u to update the library.",
            RowStyle::Hint,
        ),
        StyledRow::blank(),
    ]
}

fn row_text(library: &Library, row: &BrowserRow, name_width: usize) -> Option<String> {
    let node = library.get(row.node)?;
    let indent = if row.depth >= 2 { "  " } else { "" };
    let marker = if node.is_enqueued { " * " } else { "   " };

    let name = if node.is_directory {
        let name = truncate(&node.name, name_width);
        if row.depth == 1 {
            name.to_uppercase()
        } else {
            name
        }
    } else {
        format!(" └─{}", truncate(display_name(&node.name), name_width))
    };

    Some(format!("{}{}{}", indent, marker, name))
}

/// Visible library rows. The flag reports a repaired cursor.
pub fn body(
    browser: &mut LibraryBrowser,
    library: Option<&Library>,
    snapshot: &PlaybackSnapshot,
    capacity: usize,
    width: u16,
) -> (Vec<StyledRow>, bool) {
    let frame = browser.render(library, capacity);
    let Some(library) = library else {
        return (Vec::new(), frame.corrected);
    };

    let name_width = (width as usize).saturating_sub(10);
    let window = browser.window();
    let rows = frame
        .rows
        .iter()
        .filter_map(|row| {
            let node = library.get(row.node)?;
            let text = row_text(library, row, name_width)?;
            let selected = window.is_selected(row.index);
            let playing = snapshot.is_current(&node.full_path);
            let style = match list_style(selected, node.is_enqueued, playing) {
                RowStyle::Normal if node.is_directory && row.depth == 1 => RowStyle::Artist,
                style => style,
            };
            Some(StyledRow::new(text, style))
        })
        .collect();

    (rows, frame.corrected)
}
