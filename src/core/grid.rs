//! # Grid Model
//!
//! Builds the immutable [`PuzzleModel`] from a [`PuzzleSource`]. Two passes
//! happen here:
//!
//! 1. **Layout**: the flat `grid` / `gridnums` sequences become a 2D array of
//!    [`Cell`]s (block flag, letter, number).
//! 2. **Indexing**: across spans are discovered row-major, down spans
//!    column-major. The k-th span found in a direction takes the k-th clue and
//!    answer of that direction, and every cell of a span is stamped with the
//!    span's [`WordId`].
//!
//! ```text
//!   grid: [".", "A", "C", ...]         ┌───┬───┬───┐
//!   gridnums: [0, 1, 2, ...]     →     │ ▓ │1A │2C │ ...
//!   clues / answers                    ├───┼───┼───┤
//!                                      │4A │ R │ E │ ...
//! ```
//!
//! Construction either succeeds completely or fails with [`MalformedPuzzle`].
//! There is no partially built model.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::puzzle::PuzzleSource;

/// Grid entry marking a blocked cell.
pub const BLOCK: &str = ".";

/// Largest accepted side length.
pub const MAX_SIZE: usize = 255;

/// Rejects side lengths the model and renderer cannot hold.
pub fn check_size(size: usize) -> Result<usize, MalformedPuzzle> {
    if size > MAX_SIZE {
        return Err(MalformedPuzzle::TooLarge { size });
    }
    Ok(size)
}

/// A cell coordinate, zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Across,
    Down,
}

impl Direction {
    pub fn opposite(self) -> Self {
        match self {
            Direction::Across => Direction::Down,
            Direction::Down => Direction::Across,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Direction::Across => "Across",
            Direction::Down => "Down",
        }
    }

    /// The next cell after `pos` in this direction, or `None` past the edge.
    pub fn step(self, pos: Pos, size: usize) -> Option<Pos> {
        let next = match self {
            Direction::Across => Pos::new(pos.row, pos.col + 1),
            Direction::Down => Pos::new(pos.row + 1, pos.col),
        };
        (next.row < size && next.col < size).then_some(next)
    }

    /// The cell before `pos` in this direction, or `None` on the leading edge.
    fn previous(self, pos: Pos) -> Option<Pos> {
        match self {
            Direction::Across => pos.col.checked_sub(1).map(|col| Pos::new(pos.row, col)),
            Direction::Down => pos.row.checked_sub(1).map(|row| Pos::new(row, pos.col)),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Identifies a word by direction and discovery index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WordId {
    pub direction: Direction,
    pub index: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    /// Solution letter. `None` only for blocks.
    pub letter: Option<char>,
    pub blocked: bool,
    pub number: Option<u32>,
    pub across: Option<WordId>,
    pub down: Option<WordId>,
}

impl Cell {
    pub fn word(&self, direction: Direction) -> Option<WordId> {
        match direction {
            Direction::Across => self.across,
            Direction::Down => self.down,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub id: WordId,
    pub number: u32,
    pub direction: Direction,
    pub start: Pos,
    pub length: usize,
    pub clue: String,
    pub answer: String,
}

impl Word {
    /// Cells covered by this word, start first.
    pub fn cells(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.length).map(move |offset| match self.direction {
            Direction::Across => Pos::new(self.start.row, self.start.col + offset),
            Direction::Down => Pos::new(self.start.row + offset, self.start.col),
        })
    }

    pub fn contains(&self, pos: Pos) -> bool {
        match self.direction {
            Direction::Across => {
                pos.row == self.start.row
                    && pos.col >= self.start.col
                    && pos.col < self.start.col + self.length
            }
            Direction::Down => {
                pos.col == self.start.col
                    && pos.row >= self.start.row
                    && pos.row < self.start.row + self.length
            }
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

/// Reasons a puzzle description cannot become a [`PuzzleModel`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedPuzzle {
    NotSquare { cols: usize, rows: usize },
    TooLarge { size: usize },
    GridLength { expected: usize, actual: usize },
    NumbersLength { expected: usize, actual: usize },
    /// A grid entry that is neither the block sentinel nor a single character.
    BadLetter { pos: Pos, value: String },
    UnnumberedStart { pos: Pos, direction: Direction },
    DuplicateNumber { number: u32, direction: Direction },
    /// A positive number on a cell that starts no word.
    StrayNumber { pos: Pos, number: u32 },
    ClueCount { direction: Direction, clues: usize, starts: usize },
    AnswerCount { direction: Direction, answers: usize, starts: usize },
    AnswerLength {
        number: u32,
        direction: Direction,
        expected: usize,
        actual: usize,
    },
    ConflictingLetter { pos: Pos, existing: char, found: char },
    WordOutOfBounds { word: String, start: Pos },
    /// A span in the laid-out grid that no listed word starts.
    UnlistedWord { pos: Pos, direction: Direction },
}

impl fmt::Display for MalformedPuzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedPuzzle::NotSquare { cols, rows } => {
                write!(f, "grid must be square, got {cols}x{rows}")
            }
            MalformedPuzzle::TooLarge { size } => {
                write!(f, "grid side {size} exceeds the limit of {MAX_SIZE}")
            }
            MalformedPuzzle::GridLength { expected, actual } => {
                write!(f, "expected {expected} grid entries, got {actual}")
            }
            MalformedPuzzle::NumbersLength { expected, actual } => {
                write!(f, "expected {expected} grid numbers, got {actual}")
            }
            MalformedPuzzle::BadLetter { pos, value } => {
                write!(f, "cell {pos} holds {value:?}, expected one letter or \"{BLOCK}\"")
            }
            MalformedPuzzle::UnnumberedStart { pos, direction } => {
                write!(f, "{direction} word starting at {pos} has no number")
            }
            MalformedPuzzle::DuplicateNumber { number, direction } => {
                write!(f, "number {number} starts two {direction} words")
            }
            MalformedPuzzle::StrayNumber { pos, number } => {
                write!(f, "cell {pos} is numbered {number} but starts no word")
            }
            MalformedPuzzle::ClueCount { direction, clues, starts } => {
                write!(f, "{clues} {direction} clues for {starts} {direction} words")
            }
            MalformedPuzzle::AnswerCount { direction, answers, starts } => {
                write!(f, "{answers} {direction} answers for {starts} {direction} words")
            }
            MalformedPuzzle::AnswerLength {
                number,
                direction,
                expected,
                actual,
            } => write!(
                f,
                "{number} {direction} spans {expected} cells but its answer has {actual} letters"
            ),
            MalformedPuzzle::ConflictingLetter { pos, existing, found } => {
                write!(f, "cell {pos} is both {existing:?} and {found:?}")
            }
            MalformedPuzzle::WordOutOfBounds { word, start } => {
                write!(f, "word {word:?} starting at {start} leaves the grid")
            }
            MalformedPuzzle::UnlistedWord { pos, direction } => {
                write!(f, "{direction} span at {pos} has no listed word")
            }
        }
    }
}

impl std::error::Error for MalformedPuzzle {}

// ============================================================================
// Scanning Helpers
// ============================================================================

/// Uppercases a letter the same way for the solution and for user entries.
pub fn normalize_letter(ch: char) -> char {
    ch.to_uppercase().next().unwrap_or(ch)
}

fn is_blocked(blocked: &[bool], size: usize, pos: Pos) -> bool {
    blocked[pos.row * size + pos.col]
}

fn starts_word(blocked: &[bool], size: usize, pos: Pos, direction: Direction) -> bool {
    !is_blocked(blocked, size, pos)
        && direction
            .previous(pos)
            .is_none_or(|prev| is_blocked(blocked, size, prev))
}

/// Word-start cells for `direction` in discovery order: row-major for
/// across, column-major for down. `blocked` is the flat `size * size` mask.
pub fn word_starts(blocked: &[bool], size: usize, direction: Direction) -> Vec<Pos> {
    let mut starts = Vec::new();
    for outer in 0..size {
        for inner in 0..size {
            let pos = match direction {
                Direction::Across => Pos::new(outer, inner),
                Direction::Down => Pos::new(inner, outer),
            };
            if starts_word(blocked, size, pos, direction) {
                starts.push(pos);
            }
        }
    }
    starts
}

/// Length of the open run beginning at `start`.
pub fn span_length(blocked: &[bool], size: usize, start: Pos, direction: Direction) -> usize {
    let mut length = 1;
    let mut pos = start;
    while let Some(next) = direction.step(pos, size) {
        if is_blocked(blocked, size, next) {
            break;
        }
        length += 1;
        pos = next;
    }
    length
}

/// Conventional numbering: row-major, one number for each cell starting a
/// word in either direction, 0 elsewhere.
pub fn number_cells(blocked: &[bool], size: usize) -> Vec<i64> {
    let mut numbers = vec![0; size * size];
    let mut next = 1;
    for row in 0..size {
        for col in 0..size {
            let pos = Pos::new(row, col);
            if starts_word(blocked, size, pos, Direction::Across)
                || starts_word(blocked, size, pos, Direction::Down)
            {
                numbers[row * size + col] = next;
                next += 1;
            }
        }
    }
    numbers
}

// ============================================================================
// Puzzle Model
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct PuzzleModel {
    size: usize,
    cells: Vec<Vec<Cell>>,
    across: Vec<Word>,
    down: Vec<Word>,
    across_numbers: BTreeMap<u32, usize>,
    down_numbers: BTreeMap<u32, usize>,
    title: Option<String>,
    author: Option<String>,
}

impl PuzzleModel {
    pub fn build(source: &PuzzleSource) -> Result<Self, MalformedPuzzle> {
        let size = source.side()?;
        let total = size * size;
        if source.grid.len() != total {
            return Err(MalformedPuzzle::GridLength {
                expected: total,
                actual: source.grid.len(),
            });
        }
        if source.gridnums.len() != total {
            return Err(MalformedPuzzle::NumbersLength {
                expected: total,
                actual: source.gridnums.len(),
            });
        }

        let mut cells = lay_out(source, size)?;
        let blocked: Vec<bool> = cells.iter().flatten().map(|cell| cell.blocked).collect();

        let across_starts = word_starts(&blocked, size, Direction::Across);
        let down_starts = word_starts(&blocked, size, Direction::Down);
        check_numbers(&cells, &across_starts, &down_starts)?;

        let (across, across_numbers) = index_words(
            &cells,
            &blocked,
            size,
            Direction::Across,
            &across_starts,
            source,
        )?;
        let (down, down_numbers) =
            index_words(&cells, &blocked, size, Direction::Down, &down_starts, source)?;

        for word in across.iter().chain(&down) {
            for pos in word.cells() {
                let cell = &mut cells[pos.row][pos.col];
                match word.direction {
                    Direction::Across => cell.across = Some(word.id),
                    Direction::Down => cell.down = Some(word.id),
                }
            }
        }

        Ok(Self {
            size,
            cells,
            across,
            down,
            across_numbers,
            down_numbers,
            title: source.title.clone(),
            author: source.author.clone(),
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    pub fn cell(&self, pos: Pos) -> Option<&Cell> {
        self.cells.get(pos.row)?.get(pos.col)
    }

    /// In bounds and not blocked.
    pub fn is_open(&self, pos: Pos) -> bool {
        self.cell(pos).is_some_and(|cell| !cell.blocked)
    }

    /// Words in discovery order, which is also clue source order.
    pub fn words(&self, direction: Direction) -> &[Word] {
        match direction {
            Direction::Across => &self.across,
            Direction::Down => &self.down,
        }
    }

    /// Words of one direction sorted by clue number.
    pub fn words_by_number(&self, direction: Direction) -> impl Iterator<Item = &Word> {
        let (numbers, words) = match direction {
            Direction::Across => (&self.across_numbers, &self.across),
            Direction::Down => (&self.down_numbers, &self.down),
        };
        numbers.values().map(move |&index| &words[index])
    }

    pub fn word(&self, id: WordId) -> Option<&Word> {
        self.words(id.direction).get(id.index)
    }

    pub fn word_by_number(&self, direction: Direction, number: u32) -> Option<&Word> {
        let numbers = match direction {
            Direction::Across => &self.across_numbers,
            Direction::Down => &self.down_numbers,
        };
        numbers
            .get(&number)
            .and_then(|&index| self.words(direction).get(index))
    }

    /// The word in `direction` whose span covers `pos`.
    pub fn word_at(&self, pos: Pos, direction: Direction) -> Option<&Word> {
        self.cell(pos)?
            .word(direction)
            .and_then(|id| self.word(id))
    }

    pub fn first_word(&self, direction: Direction) -> Option<&Word> {
        self.words(direction).first()
    }

    /// First word in source order: across words come before down words.
    pub fn first_word_overall(&self) -> Option<&Word> {
        self.first_word(Direction::Across)
            .or_else(|| self.first_word(Direction::Down))
    }

    pub fn word_count(&self) -> usize {
        self.across.len() + self.down.len()
    }

    /// Every non-blocked cell, row-major.
    pub fn open_cells(&self) -> impl Iterator<Item = (Pos, &Cell)> {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|(_, cell)| !cell.blocked)
                .map(move |(col, cell)| (Pos::new(row, col), cell))
        })
    }
}

fn lay_out(source: &PuzzleSource, size: usize) -> Result<Vec<Vec<Cell>>, MalformedPuzzle> {
    let mut cells = Vec::with_capacity(size);
    for row in 0..size {
        let mut cells_in_row = Vec::with_capacity(size);
        for col in 0..size {
            let index = row * size + col;
            let entry = source.grid[index].as_str();
            let number = u32::try_from(source.gridnums[index])
                .ok()
                .filter(|number| *number > 0);

            if entry == BLOCK {
                cells_in_row.push(Cell {
                    blocked: true,
                    number,
                    ..Cell::default()
                });
                continue;
            }

            let mut chars = entry.chars();
            let letter = match (chars.next(), chars.next()) {
                (Some(letter), None) => normalize_letter(letter),
                _ => {
                    return Err(MalformedPuzzle::BadLetter {
                        pos: Pos::new(row, col),
                        value: entry.to_string(),
                    });
                }
            };
            cells_in_row.push(Cell {
                letter: Some(letter),
                number,
                ..Cell::default()
            });
        }
        cells.push(cells_in_row);
    }
    Ok(cells)
}

/// Numbers must sit exactly on word-starts.
fn check_numbers(
    cells: &[Vec<Cell>],
    across_starts: &[Pos],
    down_starts: &[Pos],
) -> Result<(), MalformedPuzzle> {
    for (direction, starts) in [
        (Direction::Across, across_starts),
        (Direction::Down, down_starts),
    ] {
        if let Some(&pos) = starts
            .iter()
            .find(|pos| cells[pos.row][pos.col].number.is_none())
        {
            return Err(MalformedPuzzle::UnnumberedStart { pos, direction });
        }
    }

    let starts: HashSet<Pos> = across_starts.iter().chain(down_starts).copied().collect();
    for (row, cells_in_row) in cells.iter().enumerate() {
        for (col, cell) in cells_in_row.iter().enumerate() {
            let pos = Pos::new(row, col);
            if let Some(number) = cell.number
                && !starts.contains(&pos)
            {
                return Err(MalformedPuzzle::StrayNumber { pos, number });
            }
        }
    }
    Ok(())
}

/// Binds the k-th start of `direction` to the k-th clue and answer.
fn index_words(
    cells: &[Vec<Cell>],
    blocked: &[bool],
    size: usize,
    direction: Direction,
    starts: &[Pos],
    source: &PuzzleSource,
) -> Result<(Vec<Word>, BTreeMap<u32, usize>), MalformedPuzzle> {
    let clues = source.clues.get(direction);
    let answers = source.answers.get(direction);
    if clues.len() != starts.len() {
        return Err(MalformedPuzzle::ClueCount {
            direction,
            clues: clues.len(),
            starts: starts.len(),
        });
    }
    if answers.len() != starts.len() {
        return Err(MalformedPuzzle::AnswerCount {
            direction,
            answers: answers.len(),
            starts: starts.len(),
        });
    }

    let mut words = Vec::with_capacity(starts.len());
    let mut numbers = BTreeMap::new();
    for (index, ((&start, clue), answer)) in starts.iter().zip(clues).zip(answers).enumerate() {
        let number = cells[start.row][start.col]
            .number
            .ok_or(MalformedPuzzle::UnnumberedStart { pos: start, direction })?;
        let length = span_length(blocked, size, start, direction);
        let actual = answer.chars().count();
        if actual != length {
            return Err(MalformedPuzzle::AnswerLength {
                number,
                direction,
                expected: length,
                actual,
            });
        }
        if numbers.insert(number, index).is_some() {
            return Err(MalformedPuzzle::DuplicateNumber { number, direction });
        }
        words.push(Word {
            id: WordId { direction, index },
            number,
            direction,
            start,
            length,
            clue: clue.clone(),
            answer: answer.chars().map(normalize_letter).collect(),
        });
    }
    Ok((words, numbers))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::puzzle::GridSize;
    use crate::test_support::{sample_source, source_from_rows};

    #[test]
    fn test_sample_builds_expected_words() {
        let model = PuzzleModel::build(&sample_source()).unwrap();
        assert_eq!(model.size(), 5);
        assert_eq!(model.title(), Some("Five by Five"));

        let across: Vec<(u32, &str)> = model
            .words(Direction::Across)
            .iter()
            .map(|w| (w.number, w.answer.as_str()))
            .collect();
        assert_eq!(
            across,
            vec![(1, "ACE"), (4, "ARENA"), (6, "CEDAR"), (7, "ENACT"), (8, "ART")]
        );

        // Column-major discovery puts 4 Down ahead of 1 Down.
        let down: Vec<u32> = model.words(Direction::Down).iter().map(|w| w.number).collect();
        assert_eq!(down, vec![4, 1, 2, 3, 5]);
        let by_number: Vec<u32> = model.words_by_number(Direction::Down).map(|w| w.number).collect();
        assert_eq!(by_number, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_clues_bind_by_discovery_order() {
        let model = PuzzleModel::build(&sample_source()).unwrap();
        let four_down = model.word_by_number(Direction::Down, 4).unwrap();
        assert_eq!(four_down.clue, "Serve that can't be returned");
        assert_eq!(four_down.start, Pos::new(1, 0));
        assert_eq!(four_down.answer, "ACE");

        let eight_across = model.word_by_number(Direction::Across, 8).unwrap();
        assert_eq!(eight_across.clue, "Gallery contents");
        assert_eq!(eight_across.start, Pos::new(4, 1));
    }

    #[test]
    fn test_every_open_cell_belongs_to_a_word() {
        let model = PuzzleModel::build(&sample_source()).unwrap();
        for row in 0..model.size() {
            for col in 0..model.size() {
                let cell = model.cell(Pos::new(row, col)).unwrap();
                if cell.blocked {
                    assert!(cell.across.is_none() && cell.down.is_none());
                    assert!(cell.letter.is_none());
                } else {
                    assert!(cell.across.is_some() || cell.down.is_some());
                }
            }
        }
    }

    #[test]
    fn test_word_lengths_match_answers_and_cells_are_open() {
        let model = PuzzleModel::build(&sample_source()).unwrap();
        for direction in [Direction::Across, Direction::Down] {
            for word in model.words(direction) {
                assert_eq!(word.length, word.answer.chars().count());
                for (pos, expected) in word.cells().zip(word.answer.chars()) {
                    let cell = model.cell(pos).unwrap();
                    assert!(!cell.blocked);
                    assert_eq!(cell.letter, Some(expected));
                    assert_eq!(cell.word(direction), Some(word.id));
                }
            }
        }
    }

    #[test]
    fn test_word_starts_carry_numbers() {
        let model = PuzzleModel::build(&sample_source()).unwrap();
        for direction in [Direction::Across, Direction::Down] {
            for word in model.words(direction) {
                assert_eq!(model.cell(word.start).unwrap().number, Some(word.number));
            }
        }
    }

    #[test]
    fn test_isolated_cell_starts_both_directions() {
        let source = source_from_rows(&["...", ".Q.", "..."]);
        let model = PuzzleModel::build(&source).unwrap();
        let cell = model.cell(Pos::new(1, 1)).unwrap();
        assert_eq!(cell.number, Some(1));

        let across = model.word_at(Pos::new(1, 1), Direction::Across).unwrap();
        let down = model.word_at(Pos::new(1, 1), Direction::Down).unwrap();
        assert_eq!(across.length, 1);
        assert_eq!(down.length, 1);
        assert_eq!(model.word_count(), 2);
    }

    #[test]
    fn test_fewer_clues_than_starts_fails() {
        let mut source = sample_source();
        source.clues.across.pop();
        let err = PuzzleModel::build(&source).unwrap_err();
        assert_eq!(
            err,
            MalformedPuzzle::ClueCount {
                direction: Direction::Across,
                clues: 4,
                starts: 5,
            }
        );
    }

    #[test]
    fn test_fewer_answers_than_starts_fails() {
        let mut source = sample_source();
        source.answers.down.pop();
        assert!(matches!(
            PuzzleModel::build(&source),
            Err(MalformedPuzzle::AnswerCount {
                direction: Direction::Down,
                ..
            })
        ));
    }

    #[test]
    fn test_unnumbered_start_fails() {
        let mut source = sample_source();
        // (4, 1) starts 8 Across.
        source.gridnums[21] = 0;
        assert_eq!(
            PuzzleModel::build(&source).unwrap_err(),
            MalformedPuzzle::UnnumberedStart {
                pos: Pos::new(4, 1),
                direction: Direction::Across,
            }
        );
    }

    #[test]
    fn test_negative_number_on_start_fails() {
        let mut source = sample_source();
        source.gridnums[21] = -8;
        assert!(matches!(
            PuzzleModel::build(&source),
            Err(MalformedPuzzle::UnnumberedStart { .. })
        ));
    }

    #[test]
    fn test_duplicate_number_fails() {
        let mut source = sample_source();
        // 7 Across becomes a second 6 Across.
        source.gridnums[15] = 6;
        assert_eq!(
            PuzzleModel::build(&source).unwrap_err(),
            MalformedPuzzle::DuplicateNumber {
                number: 6,
                direction: Direction::Across,
            }
        );
    }

    #[test]
    fn test_stray_number_fails() {
        let mut source = sample_source();
        source.gridnums[6] = 9;
        assert_eq!(
            PuzzleModel::build(&source).unwrap_err(),
            MalformedPuzzle::StrayNumber {
                pos: Pos::new(1, 1),
                number: 9,
            }
        );
    }

    #[test]
    fn test_answer_length_mismatch_fails() {
        let mut source = sample_source();
        source.answers.across[1] = "ARENAS".to_string();
        assert!(matches!(
            PuzzleModel::build(&source),
            Err(MalformedPuzzle::AnswerLength {
                number: 4,
                expected: 5,
                actual: 6,
                ..
            })
        ));
    }

    #[test]
    fn test_shape_errors() {
        let mut source = sample_source();
        source.size.rows = 4;
        assert_eq!(
            PuzzleModel::build(&source).unwrap_err(),
            MalformedPuzzle::NotSquare { cols: 5, rows: 4 }
        );

        // Oversized sides fail before anything is allocated.
        let mut source = sample_source();
        source.size = GridSize {
            cols: 1 << 32,
            rows: 1 << 32,
        };
        source.grid.clear();
        source.gridnums.clear();
        assert_eq!(
            PuzzleModel::build(&source).unwrap_err(),
            MalformedPuzzle::TooLarge { size: 1 << 32 }
        );

        let mut source = sample_source();
        source.grid.pop();
        assert_eq!(
            PuzzleModel::build(&source).unwrap_err(),
            MalformedPuzzle::GridLength {
                expected: 25,
                actual: 24,
            }
        );

        let mut source = sample_source();
        source.gridnums.push(0);
        assert!(matches!(
            PuzzleModel::build(&source),
            Err(MalformedPuzzle::NumbersLength { .. })
        ));

        let mut source = sample_source();
        source.grid[1] = "AB".to_string();
        assert!(matches!(
            PuzzleModel::build(&source),
            Err(MalformedPuzzle::BadLetter { .. })
        ));
    }

    #[test]
    fn test_check_size_limit() {
        assert_eq!(check_size(MAX_SIZE), Ok(MAX_SIZE));
        assert_eq!(
            check_size(MAX_SIZE + 1),
            Err(MalformedPuzzle::TooLarge { size: 256 })
        );
        assert!(
            MalformedPuzzle::TooLarge { size: 256 }
                .to_string()
                .contains("limit of 255")
        );
    }

    #[test]
    fn test_lowercase_letters_are_normalized() {
        let mut source = sample_source();
        source.grid[1] = "a".to_string();
        source.answers.across[0] = "ace".to_string();
        let model = PuzzleModel::build(&source).unwrap();
        assert_eq!(model.cell(Pos::new(0, 1)).unwrap().letter, Some('A'));
        assert_eq!(model.word_by_number(Direction::Across, 1).unwrap().answer, "ACE");
    }

    #[test]
    fn test_all_blocked_grid_has_no_words() {
        let source = source_from_rows(&["..", ".."]);
        let model = PuzzleModel::build(&source).unwrap();
        assert_eq!(model.word_count(), 0);
        assert!(model.first_word_overall().is_none());
        assert_eq!(model.open_cells().count(), 0);
    }

    #[test]
    fn test_number_cells_conventional_order() {
        let blocked: Vec<bool> = ".ACE.ARENACEDARENACT.ART."
            .chars()
            .map(|c| c == '.')
            .collect();
        assert_eq!(
            number_cells(&blocked, 5),
            sample_source().gridnums
        );
    }

    #[test]
    fn test_word_contains_respects_span() {
        let model = PuzzleModel::build(&sample_source()).unwrap();
        let word = model.word_by_number(Direction::Across, 8).unwrap();
        assert!(word.contains(Pos::new(4, 1)));
        assert!(word.contains(Pos::new(4, 3)));
        assert!(!word.contains(Pos::new(4, 0)));
        assert!(!word.contains(Pos::new(4, 4)));
        assert!(!word.contains(Pos::new(3, 2)));
    }
}
