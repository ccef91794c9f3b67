use std::path::PathBuf;

use async_trait::async_trait;
use log::debug;

use crate::core::puzzle::PuzzleDocument;
use crate::loader::provider::{LoadError, PuzzleLoader, parse_document};

/// Reads a puzzle document from a local JSON file.
pub struct FileLoader {
    path: PathBuf,
    name: String,
}

impl FileLoader {
    pub fn new(path: PathBuf) -> Self {
        let name = path.display().to_string();
        Self { path, name }
    }
}

#[async_trait]
impl PuzzleLoader for FileLoader {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch(&self) -> Result<PuzzleDocument, LoadError> {
        let body = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(LoadError::Io)?;
        debug!("Read {} bytes from {}", body.len(), self.name);
        parse_document(&body)
    }
}
