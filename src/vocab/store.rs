// Word store: read-only vocabulary list loaded from a text file

use std::fs;
use std::path::Path;
use tracing::{error, info, warn};

use super::entry::VocabEntry;
use crate::errors::{Result, VocabError};

/// Static list of vocabulary entries, in source order.
#[derive(Debug, Clone, Default)]
pub struct WordStore {
    entries: Vec<VocabEntry>,
}

impl WordStore {
    /// Load the word list, yielding an empty store when the file is missing.
    ///
    /// A missing source is logged and treated as "nothing to send"; selection
    /// on the empty store fails with [`VocabError::NoVocabularyAvailable`].
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(store) => store,
            Err(e) => {
                error!("{}", e);
                Self::default()
            }
        }
    }

    /// Load the word list, failing with [`VocabError::SourceMissing`] when absent.
    pub fn try_load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(VocabError::SourceMissing {
                path: path.to_path_buf(),
            });
        }
        let contents = fs::read_to_string(path)?;
        let store = Self::parse(&contents);
        info!("Loaded {} vocabulary entries from {}", store.len(), path.display());
        Ok(store)
    }

    /// Parse one entry per non-empty line. Malformed lines are skipped.
    pub fn parse(contents: &str) -> Self {
        let mut entries = Vec::new();
        for (idx, line) in contents.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match line.parse::<VocabEntry>() {
                Ok(entry) => entries.push(entry),
                Err(e) => warn!("Skipping vocabulary line {}: {} ({:?})", idx + 1, e, line.trim()),
            }
        }
        Self { entries }
    }

    pub fn from_entries(entries: Vec<VocabEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[VocabEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
