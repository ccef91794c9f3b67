//! # TitleBar Component
//!
//! Top status bar: puzzle title, fill progress and the latest status message.
//!
//! Stateless. It receives all data as props and renders a single `Span`:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(title, Some(game.progress()), status);
//! title_bar.render(frame, area);
//! ```
//!
//! The text drops segments that have nothing to say:
//!
//! 1. **Loaded, with status**: `"Crossword: Five by Five | 3/21 | by Someone"`
//! 2. **Loaded, no status**: `"Crossword: Five by Five | 3/21"`
//! 3. **Idle**: `"Crossword | Loading puzzle..."`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

pub struct TitleBar {
    /// Puzzle title, or the app name while idle
    pub title: String,
    /// (filled, total) open cells; `None` while no puzzle is loaded
    pub progress: Option<(usize, usize)>,
    pub status_message: String,
}

impl TitleBar {
    pub fn new(title: String, progress: Option<(usize, usize)>, status_message: String) -> Self {
        Self {
            title,
            progress,
            status_message,
        }
    }

    fn text(&self) -> String {
        let mut text = match self.progress {
            Some((filled, total)) => format!("Crossword: {} | {filled}/{total}", self.title),
            None => self.title.clone(),
        };
        if !self.status_message.is_empty() {
            text.push_str(" | ");
            text.push_str(&self.status_message);
        }
        text
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = Style::default().add_modifier(Modifier::BOLD);
        frame.render_widget(Span::styled(self.text(), style), area);
    }
}
