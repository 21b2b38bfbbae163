//! What the panels hand to the terminal: plain text rows tagged with a role.
//! Colours and cursor placement are the surface's business.

use anyhow::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowStyle {
    #[default]
    Normal,
    Dim,
    Logo,
    Title,
    Hint,
    /// Top-level directory in the library.
    Artist,
    Selected,
    Enqueued,
    SelectedEnqueued,
    NowPlaying,
    Status,
    Progress,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyledRow {
    pub text: String,
    pub style: RowStyle,
}

impl StyledRow {
    pub fn new(text: impl Into<String>, style: RowStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn blank() -> Self {
        Self::default()
    }
}

/// Time-driven rows of the now-playing panel, redrawn every tick.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Ticker {
    pub rows: Vec<StyledRow>,
    pub status: Option<StyledRow>,
}

/// One full panel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PanelFrame {
    pub header: Vec<StyledRow>,
    pub body: Vec<StyledRow>,
    /// Drawn under the body; only the now-playing panel has one.
    pub ticker: Vec<StyledRow>,
    pub status: Option<StyledRow>,
}

pub trait TerminalSurface {
    /// (width, height) in cells.
    fn size(&self) -> Result<(u16, u16)>;
    fn draw_frame(&mut self, frame: &PanelFrame) -> Result<()>;
    /// Replaces only the ticker rows and status line of the last frame.
    fn draw_ticker(&mut self, ticker: &Ticker) -> Result<()>;
}
