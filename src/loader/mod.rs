//! # Puzzle Loading
//!
//! Gets a [`PuzzleDocument`](crate::core::puzzle::PuzzleDocument) from
//! somewhere and turns it into a validated model. The TUI only sees the
//! [`PuzzleLoader`] trait; which loader runs is decided by configuration.
//!
//! ```text
//! PuzzleLoader::fetch()  →  PuzzleDocument  →  PuzzleModel::build()
//!   (HTTP / file / embedded)   (serde)           (validation)
//! ```

pub mod loaders;
pub mod provider;

pub use loaders::{EmbeddedLoader, FileLoader, HttpLoader, SAMPLE_PUZZLE};
pub use provider::{LoadError, PuzzleLoader, load_puzzle, parse_document};
