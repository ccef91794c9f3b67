//! # Answer Store
//!
//! The player's letters, one optional character per cell. Writes are
//! normalized to uppercase on the way in, so the solution check is a plain
//! equality test against the model.

use crate::core::grid::{Pos, PuzzleModel, normalize_letter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerStore {
    size: usize,
    entries: Vec<Option<char>>,
}

impl AnswerStore {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            entries: vec![None; size * size],
        }
    }

    fn index(&self, pos: Pos) -> Option<usize> {
        (pos.row < self.size && pos.col < self.size).then(|| pos.row * self.size + pos.col)
    }

    pub fn get(&self, pos: Pos) -> Option<char> {
        self.index(pos).and_then(|index| self.entries[index])
    }

    /// Overwrites the entry at `pos`. No check against the solution.
    pub fn write(&mut self, pos: Pos, letter: char) {
        if let Some(index) = self.index(pos) {
            self.entries[index] = Some(normalize_letter(letter));
        }
    }

    pub fn clear(&mut self, pos: Pos) {
        if let Some(index) = self.index(pos) {
            self.entries[index] = None;
        }
    }

    pub fn reset(&mut self) {
        self.entries.fill(None);
    }

    pub fn reveal(&mut self, model: &PuzzleModel) {
        for (pos, cell) in model.open_cells() {
            if let Some(letter) = cell.letter {
                self.write(pos, letter);
            }
        }
    }

    pub fn is_solved(&self, model: &PuzzleModel) -> bool {
        model
            .open_cells()
            .all(|(pos, cell)| self.get(pos) == cell.letter)
    }

    /// Open cells holding an entry, right or wrong.
    pub fn filled(&self, model: &PuzzleModel) -> usize {
        model
            .open_cells()
            .filter(|(pos, _)| self.get(*pos).is_some())
            .count()
    }
}
