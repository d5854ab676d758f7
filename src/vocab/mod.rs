// Vocabulary module
// Word entries and the read-only word store

mod entry;
mod store;

pub use entry::{ParseEntryError, VocabEntry, DELIMITER};
pub use store::WordStore;
