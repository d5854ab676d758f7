// Word Capsule - daily vocabulary over WhatsApp with spaced repetition
// Library exports

pub mod cli;
pub mod config;
pub mod delivery;
pub mod errors;
pub mod logging;
pub mod message;
pub mod progress;
pub mod scheduling;
pub mod transport;
pub mod vocab;

pub use errors::{Result, VocabError};
