pub mod file;
pub mod rest;

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

pub use file::JsonFileStore;
pub use rest::RestStore;

/// Flashcard id as stored upstream. Integer ids (local JSON) and string ids
/// (uuid rows) are both accepted and written back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntryId {
    Int(i64),
    Text(String),
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryId::Int(n) => write!(f, "{}", n),
            EntryId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for EntryId {
    fn from(n: i64) -> Self {
        EntryId::Int(n)
    }
}

impl From<&str> for EntryId {
    fn from(s: &str) -> Self {
        EntryId::Text(s.to_string())
    }
}

/// One flashcard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabEntry {
    pub id: EntryId,
    /// Source-language text shown to the learner.
    pub word: String,
    /// Target-language text, the one spoken in `audio_link`.
    pub translation: String,
    pub audio_link: String,
    pub image_link: String,
}

/// Read-only source of vocabulary. Implementations are expected to return a
/// fresh snapshot on every call.
#[async_trait]
pub trait VocabularyStore: Send + Sync {
    async fn list_all(&self) -> Result<Vec<VocabEntry>, AppError>;
}

pub struct MemoryStore {
    entries: Vec<VocabEntry>,
}

impl MemoryStore {
    pub fn new(entries: Vec<VocabEntry>) -> Self {
        Self { entries }
    }
}

#[async_trait]
impl VocabularyStore for MemoryStore {
    async fn list_all(&self) -> Result<Vec<VocabEntry>, AppError> {
        Ok(self.entries.clone())
    }
}
