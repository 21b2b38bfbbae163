use super::list_style;
use crate::app::state::SearchPanel;
use crate::library::{Library, SearchIndex};
use crate::ui::surface::{RowStyle, StyledRow};
use crate::ui::utils::{display_name, truncate};

/// Hint, the query being typed, spacer.
pub fn query_rows(query: &str) -> Vec<StyledRow> {
    vec![
        StyledRow::new(" Use ↑, ↓ to choose. Enter to accept.", RowStyle::Hint),
        StyledRow::new(format!(" [Search]: {}█", query), RowStyle::Title),
        StyledRow::blank(),
    ]
}

pub fn body(
    panel: &mut SearchPanel,
    index: &dyn SearchIndex,
    library: Option<&Library>,
    capacity: usize,
    width: u16,
) -> (Vec<StyledRow>, bool) {
    let corrected = panel.window.recompute(index.len(), capacity);
    let Some(library) = library else {
        return (Vec::new(), corrected);
    };

    let text_width = (width as usize).saturating_sub(4);
    let rows = panel
        .window
        .visible_range()
        .filter_map(|i| {
            let result = index.results().get(i)?;
            let node = library.get(result.node)?;
            let dir = node
                .parent
                .and_then(|p| library.get(p))
                .map(|p| p.name.as_str())
                .unwrap_or("");
            let text = truncate(&format!("   {}  ({})", display_name(&node.name), dir), text_width);
            Some(StyledRow::new(
                text,
                list_style(panel.window.is_selected(i), node.is_enqueued, false),
            ))
        })
        .collect();

    (rows, corrected)
}
