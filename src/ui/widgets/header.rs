use crate::app::config::UiConfig;
use crate::player::PlaybackSnapshot;
use crate::ui::surface::{RowStyle, StyledRow};
use crate::ui::utils::truncate;

const LOGO: [&str; 3] = ["┏━┓┏━┓┏━┓┏━┓", "┣┳┛┣━┫┗━┓┣━┫", "╹┗╸╹ ╹┗━┛╹ ╹"];

/// Logo (or a blank row), the playing title and a spacer.
pub fn rows(ui: &UiConfig, snapshot: &PlaybackSnapshot, width: u16) -> Vec<StyledRow> {
    let mut rows: Vec<StyledRow> = if ui.hide_logo {
        vec![StyledRow::blank()]
    } else {
        LOGO.iter()
            .map(|line| StyledRow::new(format!(" {}", line), RowStyle::Logo))
            .collect()
    };

    let title = match &snapshot.track {
        // Without the logo there is room to say who it is.
        Some(t) if ui.hide_logo && !t.artist.is_empty() => format!("{} - {}", t.artist, t.name),
        Some(t) => t.name.clone(),
        None => String::new(),
    };
    let budget = (width as usize).saturating_sub(4);
    rows.push(StyledRow::new(
        format!(" {}", truncate(&title, budget)),
        RowStyle::Title,
    ));
    rows.push(StyledRow::blank());
    rows
}
