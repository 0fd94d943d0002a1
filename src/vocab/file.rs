use std::path::PathBuf;

use async_trait::async_trait;

use super::{VocabEntry, VocabularyStore};
use crate::error::AppError;

/// Vocabulary kept as a JSON array on disk. The file is re-read on every
/// call so edits show up without a restart.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl VocabularyStore for JsonFileStore {
    async fn list_all(&self) -> Result<Vec<VocabEntry>, AppError> {
        let raw = tokio::fs::read(&self.path).await.map_err(|e| {
            AppError::UpstreamUnavailable(format!(
                "Failed to read {}: {}",
                self.path.display(),
                e
            ))
        })?;

        let entries: Vec<VocabEntry> = serde_json::from_slice(&raw).map_err(|e| {
            AppError::UpstreamUnavailable(format!(
                "Failed to parse {}: {}",
                self.path.display(),
                e
            ))
        })?;

        tracing::debug!(
            "Loaded {} entries from {}",
            entries.len(),
            self.path.display()
        );

        Ok(entries)
    }
}
