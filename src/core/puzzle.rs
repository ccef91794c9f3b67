//! # Puzzle Documents
//!
//! Wire formats a loader can hand us. Both deserialize into
//! [`PuzzleDocument`]:
//!
//! - **Grid format** ([`PuzzleSource`]): flat `grid` / `gridnums` arrays plus
//!   clue and answer lists in discovery order. This is what
//!   [`PuzzleModel::build`] consumes.
//! - **Word-list format** ([`WordListSource`]): a side length and a list of
//!   placed words. It is laid out and numbered into a `PuzzleSource` first.
//!
//! ```json
//! { "size": 5, "words": [
//!     { "word": "ARENA", "clue": "Sports venue", "direction": "down",
//!       "startRow": 0, "startCol": 1 } ] }
//! ```

use serde::{Deserialize, Serialize};

use crate::core::grid::{
    BLOCK, Direction, MalformedPuzzle, Pos, PuzzleModel, check_size, normalize_letter,
    number_cells, word_starts,
};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSize {
    pub cols: usize,
    pub rows: usize,
}

/// A pair of values, one per direction.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ByDirection<T> {
    pub across: T,
    pub down: T,
}

impl<T> ByDirection<T> {
    pub fn get(&self, direction: Direction) -> &T {
        match direction {
            Direction::Across => &self.across,
            Direction::Down => &self.down,
        }
    }
}

/// Flat grid description, as served by the puzzle endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PuzzleSource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub size: GridSize,
    /// `size * size` entries, row-major; `"."` marks a block.
    pub grid: Vec<String>,
    /// `size * size` clue numbers, 0 for unnumbered cells.
    pub gridnums: Vec<i64>,
    pub clues: ByDirection<Vec<String>>,
    pub answers: ByDirection<Vec<String>>,
}

impl PuzzleSource {
    /// Side length of the square grid.
    pub fn side(&self) -> Result<usize, MalformedPuzzle> {
        if self.size.cols != self.size.rows {
            return Err(MalformedPuzzle::NotSquare {
                cols: self.size.cols,
                rows: self.size.rows,
            });
        }
        check_size(self.size.cols)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WordEntry {
    pub word: String,
    pub clue: String,
    pub direction: Direction,
    pub start_row: usize,
    pub start_col: usize,
}

/// Placed-word description of a puzzle.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WordListSource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub size: usize,
    pub words: Vec<WordEntry>,
}

impl WordListSource {
    /// Lays the words out on a grid, numbers it, and lists clues and answers
    /// in discovery order. Cells no word covers become blocks.
    pub fn into_source(self) -> Result<PuzzleSource, MalformedPuzzle> {
        let size = check_size(self.size)?;
        let mut letters: Vec<Option<char>> = vec![None; size * size];

        for entry in &self.words {
            let start = Pos::new(entry.start_row, entry.start_col);
            let mut next = Some(start).filter(|pos| pos.row < size && pos.col < size);
            for ch in entry.word.chars() {
                let Some(pos) = next else {
                    return Err(MalformedPuzzle::WordOutOfBounds {
                        word: entry.word.clone(),
                        start,
                    });
                };
                let found = normalize_letter(ch);
                let slot = &mut letters[pos.row * size + pos.col];
                match *slot {
                    Some(existing) if existing != found => {
                        return Err(MalformedPuzzle::ConflictingLetter {
                            pos,
                            existing,
                            found,
                        });
                    }
                    _ => *slot = Some(found),
                }
                next = entry.direction.step(pos, size);
            }
        }

        let blocked: Vec<bool> = letters.iter().map(Option::is_none).collect();
        let mut clues = ByDirection::<Vec<String>>::default();
        let mut answers = ByDirection::<Vec<String>>::default();
        for direction in [Direction::Across, Direction::Down] {
            let (clue_list, answer_list) = match direction {
                Direction::Across => (&mut clues.across, &mut answers.across),
                Direction::Down => (&mut clues.down, &mut answers.down),
            };
            for pos in word_starts(&blocked, size, direction) {
                let entry = self
                    .words
                    .iter()
                    .find(|entry| {
                        entry.direction == direction
                            && entry.start_row == pos.row
                            && entry.start_col == pos.col
                    })
                    .ok_or(MalformedPuzzle::UnlistedWord { pos, direction })?;
                clue_list.push(entry.clue.clone());
                answer_list.push(entry.word.clone());
            }
        }

        Ok(PuzzleSource {
            title: self.title,
            author: None,
            size: GridSize {
                cols: size,
                rows: size,
            },
            grid: letters
                .iter()
                .map(|letter| letter.map_or_else(|| BLOCK.to_string(), String::from))
                .collect(),
            gridnums: number_cells(&blocked, size),
            clues,
            answers,
        })
    }
}

/// Any puzzle description a loader may return.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum PuzzleDocument {
    Grid(PuzzleSource),
    WordList(WordListSource),
}

impl PuzzleDocument {
    /// Parses either format. A document carrying `words` but no `grid` is
    /// read as a word list, anything else as a grid, so a bad field is
    /// reported against the format the document was meant to be.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        let value: serde_json::Value = serde_json::from_str(body)?;
        if value.get("words").is_some() && value.get("grid").is_none() {
            serde_json::from_value(value).map(PuzzleDocument::WordList)
        } else {
            serde_json::from_value(value).map(PuzzleDocument::Grid)
        }
    }

    pub fn into_source(self) -> Result<PuzzleSource, MalformedPuzzle> {
        match self {
            PuzzleDocument::Grid(source) => Ok(source),
            PuzzleDocument::WordList(words) => words.into_source(),
        }
    }

    pub fn into_model(self) -> Result<PuzzleModel, MalformedPuzzle> {
        PuzzleModel::build(&self.into_source()?)
    }
}
