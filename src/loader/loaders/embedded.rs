use async_trait::async_trait;

use crate::core::puzzle::PuzzleDocument;
use crate::loader::provider::{LoadError, PuzzleLoader, parse_document};

/// The bundled 5x5 puzzle, played when no source is configured.
pub const SAMPLE_PUZZLE: &str = include_str!("../../../puzzles/sample.json");

pub struct EmbeddedLoader;

#[async_trait]
impl PuzzleLoader for EmbeddedLoader {
    fn name(&self) -> &str {
        "built-in sample"
    }

    async fn fetch(&self) -> Result<PuzzleDocument, LoadError> {
        parse_document(SAMPLE_PUZZLE)
    }
}
