//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::grid::{BLOCK, Direction, PuzzleModel, number_cells, span_length, word_starts};
use crate::core::puzzle::{ByDirection, GridSize, PuzzleSource};
use crate::core::state::App;

pub use crate::loader::SAMPLE_PUZZLE as SAMPLE_JSON;

/// The bundled 5x5 puzzle as a raw source.
pub fn sample_source() -> PuzzleSource {
    serde_json::from_str(SAMPLE_JSON).unwrap()
}

pub fn sample_model() -> PuzzleModel {
    PuzzleModel::build(&sample_source()).unwrap()
}

/// Builds a consistent source from letter rows (`.` for blocks). Cells are
/// numbered conventionally, clues read "Across N" / "Down N", and answers
/// are spelled out from the rows.
pub fn source_from_rows(rows: &[&str]) -> PuzzleSource {
    let size = rows.len();
    let grid: Vec<String> = rows
        .iter()
        .flat_map(|row| row.chars().map(|ch| ch.to_string()))
        .collect();
    assert_eq!(grid.len(), size * size, "rows must form a square");

    let blocked: Vec<bool> = grid.iter().map(|cell| cell == BLOCK).collect();
    let gridnums = number_cells(&blocked, size);

    let mut clues = ByDirection::<Vec<String>>::default();
    let mut answers = ByDirection::<Vec<String>>::default();
    for direction in [Direction::Across, Direction::Down] {
        for start in word_starts(&blocked, size, direction) {
            let number = gridnums[start.row * size + start.col];
            let length = span_length(&blocked, size, start, direction);
            let mut word = String::new();
            let mut pos = Some(start);
            for _ in 0..length {
                let Some(at) = pos else { break };
                word.push_str(&grid[at.row * size + at.col]);
                pos = direction.step(at, size);
            }
            let (clue_list, answer_list) = match direction {
                Direction::Across => (&mut clues.across, &mut answers.across),
                Direction::Down => (&mut clues.down, &mut answers.down),
            };
            clue_list.push(format!("{} {}", direction.label(), number));
            answer_list.push(word);
        }
    }

    PuzzleSource {
        title: None,
        author: None,
        size: GridSize {
            cols: size,
            rows: size,
        },
        grid,
        gridnums,
        clues,
        answers,
    }
}

pub fn model_from_rows(rows: &[&str]) -> PuzzleModel {
    PuzzleModel::build(&source_from_rows(rows)).unwrap()
}

/// An idle App, as it is before the first load.
pub fn test_app() -> App {
    App::new("test source".to_string())
}
