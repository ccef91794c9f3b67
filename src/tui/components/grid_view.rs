//! # GridView Component
//!
//! Draws the puzzle as a bordered block of fixed-size cells:
//!
//! ```text
//! ┌────────────────────┐
//! │████1   2   3   ████│   top line: clue number
//! │████ A   C   E  ████│   bottom line: player letter
//! │4   ...             │
//! ```
//!
//! Each cell is [`CELL_WIDTH`] x [`CELL_HEIGHT`] characters. The same
//! geometry drives [`cell_at`], so mouse clicks map back to the cell that
//! was drawn under them.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};

use crate::core::game::{CellView, Game};
use crate::core::grid::Pos;
use crate::tui::component::Component;

pub const CELL_WIDTH: u16 = 4;
pub const CELL_HEIGHT: u16 = 2;

/// Outer size (including the border) of a grid with `size` cells per side.
pub fn grid_extent(size: usize) -> (u16, u16) {
    let side = u16::try_from(size).unwrap_or(u16::MAX);
    (
        side.saturating_mul(CELL_WIDTH).saturating_add(2),
        side.saturating_mul(CELL_HEIGHT).saturating_add(2),
    )
}

/// The cell under screen position (`column`, `row`), given the area the grid
/// was rendered into.
pub fn cell_at(area: Rect, size: usize, column: u16, row: u16) -> Option<Pos> {
    let inner = Block::bordered().inner(area);
    if !inner.contains(Position::new(column, row)) {
        return None;
    }
    let pos = Pos::new(
        usize::from((row - inner.y) / CELL_HEIGHT),
        usize::from((column - inner.x) / CELL_WIDTH),
    );
    (pos.row < size && pos.col < size).then_some(pos)
}

pub struct GridView<'a> {
    game: &'a Game,
}

impl<'a> GridView<'a> {
    pub fn new(game: &'a Game) -> Self {
        Self { game }
    }
}

fn cell_style(view: &CellView) -> Style {
    if view.blocked {
        Style::default().bg(Color::DarkGray)
    } else if view.selected {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else if view.highlighted {
        Style::default().fg(Color::Black).bg(Color::Cyan)
    } else {
        Style::default().fg(Color::White)
    }
}

fn cell_lines(view: &CellView) -> [Line<'static>; 2] {
    let number = view.number.map(|n| n.to_string()).unwrap_or_default();
    let letter = view.letter.unwrap_or(' ');
    [
        Line::from(format!("{number:<4}")).style(Style::default().add_modifier(Modifier::DIM)),
        Line::from(format!(" {letter}  ")),
    ]
}

impl Component for GridView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .title(" Grid ")
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let size = self.game.model().size();
        for row in 0..size {
            for col in 0..size {
                let pos = Pos::new(row, col);
                let Some(view) = self.game.cell_view(pos) else {
                    continue;
                };
                let Some(rect) = cell_rect(inner, pos) else {
                    continue;
                };
                let paragraph = Paragraph::new(Vec::from(cell_lines(&view))).style(cell_style(&view));
                frame.render_widget(paragraph, rect);
            }
        }

        if let Some(cursor) = self.game.cursor()
            && let Some(rect) = cell_rect(inner, cursor.pos)
            && rect.height >= CELL_HEIGHT
        {
            frame.set_cursor_position(Position::new(rect.x + 1, rect.y + 1));
        }
    }
}

/// Screen rect of a cell, clipped to `inner`; `None` if fully clipped.
fn cell_rect(inner: Rect, pos: Pos) -> Option<Rect> {
    let x = u16::try_from(pos.col)
        .ok()?
        .checked_mul(CELL_WIDTH)?
        .checked_add(inner.x)?;
    let y = u16::try_from(pos.row)
        .ok()?
        .checked_mul(CELL_HEIGHT)?
        .checked_add(inner.y)?;
    let rect = Rect::new(x, y, CELL_WIDTH, CELL_HEIGHT).intersection(inner);
    (!rect.is_empty()).then_some(rect)
}
