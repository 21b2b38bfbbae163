use crate::app::keys::KeyConfig;
use crate::app::state::window::WindowState;
use crate::ui::surface::{RowStyle, StyledRow};
use crate::ui::utils::truncate;

pub fn about_rows() -> Vec<StyledRow> {
    vec![
        StyledRow::new(
            format!(" rasa version: {}", env!("CARGO_PKG_VERSION")),
            RowStyle::Title,
        ),
        StyledRow::blank(),
    ]
}

pub fn body(
    window: &mut WindowState,
    keys: &KeyConfig,
    capacity: usize,
    width: u16,
) -> (Vec<StyledRow>, bool) {
    let bindings = keys.bindings();
    let corrected = window.recompute(bindings.len(), capacity);

    let text_width = (width as usize).saturating_sub(2);
    let rows = window
        .visible_range()
        .filter_map(|i| {
            let (key, action) = bindings.get(i)?;
            let style = if window.is_selected(i) {
                RowStyle::Selected
            } else {
                RowStyle::Normal
            };
            Some(StyledRow::new(
                truncate(&format!(" {:<16}{}", key, action), text_width),
                style,
            ))
        })
        .collect();

    (rows, corrected)
}
