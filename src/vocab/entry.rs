// Vocabulary entry and its "word - definition" line format

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Separator between word and definition in source lines and persisted keys.
pub const DELIMITER: &str = " - ";

/// A word paired with its definition.
///
/// Identity is the (word, definition) pair. The `"word - definition"` string is
/// only the display and serialization form, which keeps history files
/// compatible with plain-text word lists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VocabEntry {
    word: String,
    definition: String,
}

/// Why a line could not be parsed into a [`VocabEntry`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseEntryError {
    #[error("missing ' - ' separator")]
    MissingSeparator,
    #[error("empty word")]
    EmptyWord,
    #[error("empty definition")]
    EmptyDefinition,
}

impl VocabEntry {
    /// Build an entry from its parts. Both parts are trimmed and must be non-empty.
    pub fn new(
        word: impl Into<String>,
        definition: impl Into<String>,
    ) -> Result<Self, ParseEntryError> {
        let word = word.into().trim().to_string();
        let definition = definition.into().trim().to_string();
        if word.is_empty() {
            return Err(ParseEntryError::EmptyWord);
        }
        if definition.is_empty() {
            return Err(ParseEntryError::EmptyDefinition);
        }
        Ok(Self { word, definition })
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn definition(&self) -> &str {
        &self.definition
    }
}

impl FromStr for VocabEntry {
    type Err = ParseEntryError;

    /// Split on the first `" - "`; later occurrences belong to the definition.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (word, definition) = line
            .trim()
            .split_once(DELIMITER)
            .ok_or(ParseEntryError::MissingSeparator)?;
        Self::new(word, definition)
    }
}

impl fmt::Display for VocabEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.word, DELIMITER, self.definition)
    }
}

impl TryFrom<String> for VocabEntry {
    type Error = ParseEntryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<VocabEntry> for String {
    fn from(entry: VocabEntry) -> Self {
        entry.to_string()
    }
}
