// Learning progress
//
// Persisted history, the spaced-repetition policy and word selection.

pub mod heuristics;
pub mod history;
pub mod schedule;
mod tracker;

pub use heuristics::{difficulty_score, example_sentence};
pub use history::{HistoryState, HistoryStore, ReviewItem};
pub use schedule::{ReviewStep, MASTERY_THRESHOLD, MAX_INTERVAL_DAYS};
pub use tracker::{ProgressTracker, Selection, SelectionKind};
