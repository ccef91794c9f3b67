//! # Navigation
//!
//! The cursor state machine. A [`Navigator`] holds at most one [`Cursor`]
//! (position + direction) and reacts to discrete inputs:
//!
//! ```text
//!   arrow        → step one cell (clamped), force direction from the key
//!   tab          → flip direction, jump to the first word of that direction
//!   input        → write the letter, advance inside the current word
//!   click cell   → same cell: toggle direction; other cell: move there
//!   click clue   → jump to the clue's start with its direction
//! ```
//!
//! The current word is never stored. It is derived from the cursor on every
//! read, so it cannot drift out of sync with the cursor.
//!
//! A navigator without a cursor is idle. That only happens for puzzles with
//! no words at all.

use crate::core::answers::AnswerStore;
use crate::core::grid::{Direction, Pos, PuzzleModel, Word};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrow {
    Up,
    Down,
    Left,
    Right,
}

impl Arrow {
    /// Direction an arrow key forces on the cursor.
    pub fn direction(self) -> Direction {
        match self {
            Arrow::Up | Arrow::Down => Direction::Down,
            Arrow::Left | Arrow::Right => Direction::Across,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub pos: Pos,
    pub direction: Direction,
}

impl Cursor {
    fn at_start(word: &Word) -> Self {
        Self {
            pos: word.start,
            direction: word.direction,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Navigator {
    cursor: Option<Cursor>,
}

impl Navigator {
    /// Starts on the first down word, else the first word in source order.
    pub fn new(model: &PuzzleModel) -> Self {
        let cursor = model
            .first_word(Direction::Down)
            .or_else(|| model.first_word_overall())
            .map(Cursor::at_start);
        Self { cursor }
    }

    pub fn cursor(&self) -> Option<Cursor> {
        self.cursor
    }

    /// The word in the cursor's direction that covers the cursor.
    pub fn current_word<'m>(&self, model: &'m PuzzleModel) -> Option<&'m Word> {
        let cursor = self.cursor?;
        model.word_at(cursor.pos, cursor.direction)
    }

    pub fn is_highlighted(&self, model: &PuzzleModel, pos: Pos) -> bool {
        self.current_word(model).is_some_and(|word| word.contains(pos))
    }

    pub fn arrow(&mut self, model: &PuzzleModel, arrow: Arrow) {
        let Some(cursor) = self.cursor else {
            return;
        };
        let last = model.size().saturating_sub(1);
        let Pos { row, col } = cursor.pos;
        let candidate = match arrow {
            Arrow::Up => Pos::new(row.saturating_sub(1), col),
            Arrow::Down => Pos::new((row + 1).min(last), col),
            Arrow::Left => Pos::new(row, col.saturating_sub(1)),
            Arrow::Right => Pos::new(row, (col + 1).min(last)),
        };
        if !model.is_open(candidate) {
            return;
        }
        self.cursor = Some(Cursor {
            pos: candidate,
            direction: arrow.direction(),
        });
    }

    /// Flips direction and jumps to the first word of the new direction,
    /// ignoring the current position.
    pub fn tab(&mut self, model: &PuzzleModel) {
        let Some(cursor) = self.cursor else {
            return;
        };
        self.cursor = model
            .first_word(cursor.direction.opposite())
            .or_else(|| model.first_word_overall())
            .map(Cursor::at_start);
    }

    pub fn click_cell(&mut self, model: &PuzzleModel, pos: Pos) {
        let Some(cell) = model.cell(pos).filter(|cell| !cell.blocked) else {
            return;
        };
        match self.cursor {
            Some(cursor) if cursor.pos == pos => {
                self.cursor = Some(Cursor {
                    pos,
                    direction: cursor.direction.opposite(),
                });
            }
            previous => {
                // Down wins at intersections.
                let direction = if cell.down.is_some() {
                    Direction::Down
                } else if cell.across.is_some() {
                    Direction::Across
                } else {
                    previous.map_or(Direction::Across, |cursor| cursor.direction)
                };
                self.cursor = Some(Cursor { pos, direction });
            }
        }
    }

    pub fn click_clue(&mut self, model: &PuzzleModel, direction: Direction, number: u32) {
        if let Some(word) = model.word_by_number(direction, number) {
            self.cursor = Some(Cursor {
                pos: word.start,
                direction,
            });
        }
    }

    /// Writes `value` at `pos` (or clears it) and advances the cursor one
    /// cell, but only into the rest of the highlighted word.
    pub fn input(
        &mut self,
        model: &PuzzleModel,
        answers: &mut AnswerStore,
        pos: Pos,
        value: Option<char>,
    ) {
        if !model.is_open(pos) {
            return;
        }
        let Some(letter) = value else {
            answers.clear(pos);
            return;
        };
        answers.write(pos, letter);

        let (Some(cursor), Some(word)) = (self.cursor, self.current_word(model)) else {
            return;
        };
        if let Some(next) = cursor
            .direction
            .step(pos, model.size())
            .filter(|next| model.is_open(*next) && word.contains(*next))
        {
            self.cursor = Some(Cursor { pos: next, ..cursor });
        }
    }

    /// Keeps the position; switches direction only when the current one has
    /// no word here and the other does.
    pub fn reevaluate(&mut self, model: &PuzzleModel) {
        let Some(cursor) = self.cursor else {
            return;
        };
        let other = cursor.direction.opposite();
        if model.word_at(cursor.pos, cursor.direction).is_none()
            && model.word_at(cursor.pos, other).is_some()
        {
            self.cursor = Some(Cursor {
                direction: other,
                ..cursor
            });
        }
    }
}
