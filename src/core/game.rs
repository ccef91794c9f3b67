//! # Game
//!
//! One loaded puzzle: the immutable model plus the two pieces of session
//! state that change as the player works (cursor and answers).
//!
//! ```text
//! Game
//! ├── model: PuzzleModel      // built once, read-only
//! ├── navigator: Navigator    // cursor + direction
//! └── answers: AnswerStore    // player letters
//! ```
//!
//! Rendering only needs [`Game::cell_view`] and [`Game::current_word`].

use crate::core::answers::AnswerStore;
use crate::core::grid::{Direction, Pos, PuzzleModel, Word};
use crate::core::navigation::{Arrow, Cursor, Navigator};

/// Everything needed to draw one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    pub blocked: bool,
    pub number: Option<u32>,
    pub letter: Option<char>,
    pub highlighted: bool,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    model: PuzzleModel,
    navigator: Navigator,
    answers: AnswerStore,
}

impl Game {
    pub fn new(model: PuzzleModel) -> Self {
        let navigator = Navigator::new(&model);
        let answers = AnswerStore::new(model.size());
        Self {
            model,
            navigator,
            answers,
        }
    }

    pub fn model(&self) -> &PuzzleModel {
        &self.model
    }

    pub fn answers(&self) -> &AnswerStore {
        &self.answers
    }

    pub fn cursor(&self) -> Option<Cursor> {
        self.navigator.cursor()
    }

    pub fn current_word(&self) -> Option<&Word> {
        self.navigator.current_word(&self.model)
    }

    pub fn arrow(&mut self, arrow: Arrow) {
        self.navigator.arrow(&self.model, arrow);
    }

    pub fn tab(&mut self) {
        self.navigator.tab(&self.model);
    }

    pub fn click_cell(&mut self, pos: Pos) {
        self.navigator.click_cell(&self.model, pos);
    }

    pub fn click_clue(&mut self, direction: Direction, number: u32) {
        self.navigator.click_clue(&self.model, direction, number);
    }

    pub fn input(&mut self, pos: Pos, value: Option<char>) {
        self.navigator
            .input(&self.model, &mut self.answers, pos, value);
    }

    pub fn reset(&mut self) {
        self.answers.reset();
        self.navigator.reevaluate(&self.model);
    }

    pub fn reveal(&mut self) {
        self.answers.reveal(&self.model);
    }

    pub fn is_solved(&self) -> bool {
        self.answers.is_solved(&self.model)
    }

    /// (filled open cells, total open cells)
    pub fn progress(&self) -> (usize, usize) {
        (
            self.answers.filled(&self.model),
            self.model.open_cells().count(),
        )
    }

    pub fn cell_view(&self, pos: Pos) -> Option<CellView> {
        let cell = self.model.cell(pos)?;
        if cell.blocked {
            return Some(CellView {
                blocked: true,
                number: None,
                letter: None,
                highlighted: false,
                selected: false,
            });
        }
        Some(CellView {
            blocked: false,
            number: cell.number,
            letter: self.answers.get(pos),
            highlighted: self.navigator.is_highlighted(&self.model, pos),
            selected: self.cursor().is_some_and(|cursor| cursor.pos == pos),
        })
    }
}
