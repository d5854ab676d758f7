// Error types shared by the word store and progress tracker

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the vocabulary and progress layers.
#[derive(Debug, Error)]
pub enum VocabError {
    /// The word store is empty and no review is due, so there is nothing to send.
    #[error("No vocabulary available: the word list is empty and no review is due")]
    NoVocabularyAvailable,

    /// The word source file does not exist.
    #[error("Vocabulary file {} not found", .path.display())]
    SourceMissing { path: PathBuf },

    /// The persisted history could not be parsed.
    #[error("History file {} is corrupt: {reason}", .path.display())]
    HistoryCorrupt { path: PathBuf, reason: String },

    /// A send time that is not `HH:MM`.
    #[error("Invalid send time '{0}': expected HH:MM (24h)")]
    InvalidSendTime(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, VocabError>;
