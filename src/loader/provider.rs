use std::fmt;

use async_trait::async_trait;
use log::{debug, info};

use crate::core::grid::{MalformedPuzzle, PuzzleModel};
use crate::core::puzzle::PuzzleDocument;

/// Errors that can occur while loading a puzzle.
#[derive(Debug)]
pub enum LoadError {
    /// Transport failure (timeout, DNS, connection refused).
    Network(String),
    /// The server answered with a non-success status.
    Api { status: u16, message: String },
    /// The payload is not a puzzle document.
    Parse(String),
    /// Local file could not be read.
    Io(std::io::Error),
    /// The document parsed but does not describe a consistent puzzle.
    Malformed(MalformedPuzzle),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Network(msg) => write!(f, "network error: {msg}"),
            LoadError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            LoadError::Parse(msg) => write!(f, "parse error: {msg}"),
            LoadError::Io(e) => write!(f, "I/O error: {e}"),
            LoadError::Malformed(e) => write!(f, "malformed puzzle: {e}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::Malformed(e) => Some(e),
            _ => None,
        }
    }
}

impl From<MalformedPuzzle> for LoadError {
    fn from(e: MalformedPuzzle) -> Self {
        LoadError::Malformed(e)
    }
}

#[async_trait]
pub trait PuzzleLoader: Send + Sync {
    /// Short description of the source, for the status line and logs.
    fn name(&self) -> &str;

    /// Fetches and deserializes the raw document. No validation.
    async fn fetch(&self) -> Result<PuzzleDocument, LoadError>;
}

/// Deserializes either document format.
pub fn parse_document(body: &str) -> Result<PuzzleDocument, LoadError> {
    PuzzleDocument::from_json(body).map_err(|e| LoadError::Parse(e.to_string()))
}

/// Fetch, convert and validate in one go.
pub async fn load_puzzle(loader: &dyn PuzzleLoader) -> Result<PuzzleModel, LoadError> {
    info!("Loading puzzle from {}", loader.name());
    let document = loader.fetch().await?;
    let model = document.into_model()?;
    debug!(
        "Built {}x{} puzzle with {} words",
        model.size(),
        model.size(),
        model.word_count()
    );
    Ok(model)
}
