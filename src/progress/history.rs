// Persisted learning history (single pretty-printed JSON document)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::errors::{Result, VocabError};
use crate::vocab::VocabEntry;

/// A previously sent word waiting for re-exposure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewItem {
    pub vocab: VocabEntry,
    pub review_date: NaiveDate,
    pub times_reviewed: u32,
}

impl ReviewItem {
    pub fn new(vocab: VocabEntry, review_date: NaiveDate) -> Self {
        Self {
            vocab,
            review_date,
            times_reviewed: 0,
        }
    }

    pub fn is_due(&self, today: NaiveDate) -> bool {
        self.review_date <= today
    }
}

/// Everything the tracker persists between runs.
///
/// `sent_vocabs` and `mastered_vocabs` are sets kept as vectors so insertion
/// order survives for display. Fields missing from older files default to empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryState {
    #[serde(default)]
    pub sent_vocabs: Vec<VocabEntry>,
    #[serde(default)]
    pub last_sent_date: Option<NaiveDate>,
    #[serde(default)]
    pub review_queue: Vec<ReviewItem>,
    #[serde(default)]
    pub mastered_vocabs: Vec<VocabEntry>,
    #[serde(default)]
    pub sent_phrases: Vec<String>,
}

/// Loads and rewrites the history file as a whole.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the history, starting fresh when the file is missing or corrupt.
    ///
    /// A corrupt file discards all prior progress, so it is reported at warn level.
    pub fn load(&self) -> HistoryState {
        match self.try_load() {
            Ok(state) => state,
            Err(e @ VocabError::HistoryCorrupt { .. }) => {
                warn!("{}; starting with empty history, previous progress is discarded", e);
                HistoryState::default()
            }
            Err(e) => {
                warn!("Could not read history ({}); starting with empty history", e);
                HistoryState::default()
            }
        }
    }

    /// Load the history, surfacing parse failures as [`VocabError::HistoryCorrupt`].
    pub fn try_load(&self) -> Result<HistoryState> {
        if !self.path.exists() {
            debug!("No history at {}, starting fresh", self.path.display());
            return Ok(HistoryState::default());
        }
        let contents = fs::read_to_string(&self.path)?;
        serde_json::from_str(&contents).map_err(|e| VocabError::HistoryCorrupt {
            path: self.path.clone(),
            reason: e.to_string(),
        })
    }

    /// Rewrite the whole history: write a sibling temp file, then rename over the target.
    pub fn save(&self, state: &HistoryState) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(state)?;
        let tmp = self.temp_path();
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("history"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
