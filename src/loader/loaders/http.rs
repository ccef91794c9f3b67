use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};

use crate::core::puzzle::PuzzleDocument;
use crate::loader::provider::{LoadError, PuzzleLoader, parse_document};

/// Fetches the puzzle with a GET against a fixed URL.
pub struct HttpLoader {
    url: String,
    client: reqwest::Client,
}

impl HttpLoader {
    pub fn new(url: String, timeout: Duration) -> Result<Self, LoadError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LoadError::Network(e.to_string()))?;
        Ok(Self { url, client })
    }
}

#[async_trait]
impl PuzzleLoader for HttpLoader {
    fn name(&self) -> &str {
        &self.url
    }

    async fn fetch(&self) -> Result<PuzzleDocument, LoadError> {
        info!("GET {}", self.url);
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| LoadError::Network(e.to_string()))?;

        debug!("Puzzle response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Puzzle endpoint error: {} - {}", status, err_body);
            return Err(LoadError::Api {
                status,
                message: err_body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| LoadError::Network(e.to_string()))?;
        debug!("Puzzle body: {} bytes", body.len());
        parse_document(&body)
    }
}
