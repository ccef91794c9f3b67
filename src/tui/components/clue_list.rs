//! # ClueList Component
//!
//! One bordered list per direction, sorted by clue number, with the active
//! clue selected. Long clues wrap onto indented continuation lines.
//!
//! The list keeps a small state object between frames:
//!
//! - `list_state`: ratatui's selection + scroll offset
//! - `numbers` / `heights`: clue number and wrapped height of each item, as
//!   of the last render
//!
//! Mouse hit-testing walks `heights` from the current offset, so a click lands
//! on whatever was actually on screen.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Text};
use ratatui::widgets::{Block, List, ListItem, ListState};

use crate::core::game::Game;
use crate::core::grid::Direction;
use crate::tui::component::Component;

#[derive(Debug, Default)]
pub struct ClueListState {
    pub list_state: ListState,
    numbers: Vec<u32>,
    heights: Vec<u16>,
}

impl ClueListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clue number under screen position (`column`, `row`), given the area
    /// the list was rendered into.
    pub fn clue_at(&self, area: Rect, column: u16, row: u16) -> Option<u32> {
        let inner = Block::bordered().inner(area);
        if !inner.contains(Position::new(column, row)) {
            return None;
        }
        let mut remaining = row - inner.y;
        let offset = self.list_state.offset();
        for (index, &height) in self.heights.iter().enumerate().skip(offset) {
            if remaining < height {
                return self.numbers.get(index).copied();
            }
            remaining -= height;
        }
        None
    }
}

/// Wraps one clue as `" 4. text"`, continuation lines indented under the text.
fn wrap_clue(number: u32, clue: &str, width: usize) -> Vec<String> {
    let prefix = format!("{number:>2}. ");
    let indent = " ".repeat(prefix.len());
    let options = textwrap::Options::new(width.max(prefix.len() + 1))
        .initial_indent(&prefix)
        .subsequent_indent(&indent);
    textwrap::wrap(clue, options)
        .into_iter()
        .map(|line| line.into_owned())
        .collect()
}

pub struct ClueList<'a> {
    state: &'a mut ClueListState,
    game: &'a Game,
    direction: Direction,
}

impl<'a> ClueList<'a> {
    pub fn new(state: &'a mut ClueListState, game: &'a Game, direction: Direction) -> Self {
        Self {
            state,
            game,
            direction,
        }
    }
}

impl Component for ClueList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let active = self
            .game
            .current_word()
            .filter(|word| word.direction == self.direction)
            .map(|word| word.number);

        let block = Block::bordered()
            .title(format!(" {} ", self.direction.label()))
            .border_style(if active.is_some() {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::DarkGray)
            });
        let width = usize::from(block.inner(area).width);

        self.state.numbers.clear();
        self.state.heights.clear();
        let mut selected = None;
        let mut items = Vec::new();
        for (index, word) in self.game.model().words_by_number(self.direction).enumerate() {
            let lines: Vec<Line> = wrap_clue(word.number, &word.clue, width)
                .into_iter()
                .map(Line::from)
                .collect();
            if active == Some(word.number) {
                selected = Some(index);
            }
            self.state.numbers.push(word.number);
            self.state
                .heights
                .push(u16::try_from(lines.len()).unwrap_or(u16::MAX));
            items.push(ListItem::new(Text::from(lines)));
        }
        self.state.list_state.select(selected);

        let list = List::new(items).block(block).highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}
