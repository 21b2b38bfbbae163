use crate::ui::layout::get_main_layout;
use crate::ui::surface::{PanelFrame, StyledRow, TerminalSurface, Ticker};
use crate::ui::theme::Theme;
use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    text::{Line, Span},
    widgets::Paragraph,
    Terminal,
};
use std::io::{self, Stdout};

/// Real terminal behind the panels, drawn with ratatui 🖥️
pub struct RatatuiSurface {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    theme: Theme,
    last: PanelFrame,
}

impl RatatuiSurface {
    pub fn new(theme: Theme) -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;

        Ok(Self {
            terminal,
            theme,
            last: PanelFrame::default(),
        })
    }

    pub fn restore(&mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    fn lines<'a>(theme: &Theme, rows: impl Iterator<Item = &'a StyledRow>) -> Vec<Line<'a>> {
        rows.map(|row| Line::from(Span::styled(row.text.as_str(), theme.style(row.style))))
            .collect()
    }

    fn draw_last(&mut self) -> Result<()> {
        let theme = &self.theme;
        let frame = &self.last;

        self.terminal.draw(|f| {
            let area = f.area();
            let layout = get_main_layout(area, frame.header.len() as u16);

            f.render_widget(
                Paragraph::new(Self::lines(theme, frame.header.iter())),
                layout.header_area,
            );
            f.render_widget(
                Paragraph::new(Self::lines(theme, frame.body.iter().chain(frame.ticker.iter()))),
                layout.body_area,
            );
            if let Some(status) = &frame.status {
                f.render_widget(
                    Paragraph::new(Self::lines(theme, std::iter::once(status))),
                    layout.footer_area,
                );
            }
        })?;
        Ok(())
    }
}

impl TerminalSurface for RatatuiSurface {
    fn size(&self) -> Result<(u16, u16)> {
        let size = self.terminal.size()?;
        Ok((size.width, size.height))
    }

    fn draw_frame(&mut self, frame: &PanelFrame) -> Result<()> {
        self.last = frame.clone();
        self.draw_last()
    }

    fn draw_ticker(&mut self, ticker: &Ticker) -> Result<()> {
        // ratatui diffs against the previous buffer, so only these rows reach the tty.
        self.last.ticker = ticker.rows.clone();
        self.last.status = ticker.status.clone();
        self.draw_last()
    }
}
