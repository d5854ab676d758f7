// Progress tracker: word selection and review scheduling over the persisted history

use chrono::{Duration, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info};

use super::history::{HistoryState, HistoryStore, ReviewItem};
use super::schedule::{self, ReviewStep, INITIAL_INTERVAL_DAYS};
use crate::errors::{Result, VocabError};
use crate::message::DailyPhrase;
use crate::vocab::{VocabEntry, WordStore};

/// Where a selected word came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionKind {
    /// A queued word whose review date has arrived.
    Review,
    /// A word not yet in `sent_vocabs`.
    New,
}

/// The word chosen for the next message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub entry: VocabEntry,
    pub kind: SelectionKind,
}

/// Owns the learning history and rewrites it after every mutation.
pub struct ProgressTracker {
    store: HistoryStore,
    state: HistoryState,
}

impl ProgressTracker {
    /// Load history from `store` (empty if missing or corrupt).
    pub fn open(store: HistoryStore) -> Self {
        let state = store.load();
        Self { store, state }
    }

    pub fn with_state(store: HistoryStore, state: HistoryState) -> Self {
        Self { store, state }
    }

    pub fn state(&self) -> &HistoryState {
        &self.state
    }

    /// Pick the next word to send.
    ///
    /// Due reviews always win over new words. When every word in the store has
    /// been sent, `sent_vocabs` is cleared (queue and mastered set are kept) and
    /// the pick is made from the full store. The reset is in memory only; it
    /// reaches disk with the next `record_sent`.
    pub fn select_next<R: Rng + ?Sized>(
        &mut self,
        words: &WordStore,
        today: NaiveDate,
        rng: &mut R,
    ) -> Result<Selection> {
        let due = self.due_review_words(today);
        if let Some(entry) = due.choose(rng) {
            debug!("{} review(s) due, picked '{}'", due.len(), entry.word());
            return Ok(Selection {
                entry: entry.clone(),
                kind: SelectionKind::Review,
            });
        }

        if words.is_empty() {
            return Err(VocabError::NoVocabularyAvailable);
        }

        let mut available: Vec<&VocabEntry> = words
            .entries()
            .iter()
            .filter(|e| !self.state.sent_vocabs.contains(e))
            .collect();

        if available.is_empty() {
            info!(
                "All {} vocabularies have been sent. Resetting sent history.",
                words.len()
            );
            self.state.sent_vocabs.clear();
            available = words.entries().iter().collect();
        }

        let entry = available
            .choose(rng)
            .copied()
            .cloned()
            .ok_or(VocabError::NoVocabularyAvailable)?;
        Ok(Selection {
            entry,
            kind: SelectionKind::New,
        })
    }

    /// Mark a new word as delivered and queue its first review for tomorrow.
    ///
    /// Call once per successful send: a second call queues a second review item.
    pub fn record_sent(&mut self, vocab: &VocabEntry, date: NaiveDate) -> Result<()> {
        if !self.state.sent_vocabs.contains(vocab) {
            self.state.sent_vocabs.push(vocab.clone());
        }
        self.state.last_sent_date = Some(date);
        self.state.review_queue.push(ReviewItem::new(
            vocab.clone(),
            date + Duration::days(INITIAL_INTERVAL_DAYS),
        ));
        self.persist()
    }

    /// Throw away in-memory changes made since `snapshot` was taken.
    pub fn rollback(&mut self, snapshot: HistoryState) {
        self.state = snapshot;
    }

    /// Apply a review outcome to the first queue item for `vocab`.
    ///
    /// Returns `None` (and writes nothing) when the word is not queued.
    pub fn record_review_outcome(
        &mut self,
        vocab: &VocabEntry,
        remembered: bool,
        today: NaiveDate,
    ) -> Result<Option<ReviewStep>> {
        let Some(idx) = self.state.review_queue.iter().position(|i| &i.vocab == vocab) else {
            debug!("'{}' is not in the review queue", vocab.word());
            return Ok(None);
        };

        let step = schedule::apply_review(&mut self.state.review_queue[idx], remembered, today);
        if step == ReviewStep::Mastered {
            self.state.review_queue.remove(idx);
            self.mark_mastered(vocab);
        }
        self.persist()?;
        Ok(Some(step))
    }

    /// A review word was delivered: count it as a remembered exposure.
    ///
    /// Every due queue item for `vocab` advances, so a word that was queued
    /// twice does not stay due. Returns the step of the first such item.
    pub fn record_review_sent(
        &mut self,
        vocab: &VocabEntry,
        date: NaiveDate,
    ) -> Result<Option<ReviewStep>> {
        self.state.last_sent_date = Some(date);

        let due: Vec<usize> = self
            .state
            .review_queue
            .iter()
            .enumerate()
            .filter(|(_, item)| &item.vocab == vocab && item.is_due(date))
            .map(|(idx, _)| idx)
            .collect();

        let mut first_step = None;
        for idx in due.into_iter().rev() {
            let step = schedule::apply_review(&mut self.state.review_queue[idx], true, date);
            if step == ReviewStep::Mastered {
                self.state.review_queue.remove(idx);
                self.mark_mastered(vocab);
            }
            first_step = Some(step);
        }

        self.persist()?;
        Ok(first_step)
    }

    /// Words whose review date is today or earlier, in queue order.
    pub fn due_review_words(&self, today: NaiveDate) -> Vec<VocabEntry> {
        self.state
            .review_queue
            .iter()
            .filter(|item| item.is_due(today))
            .map(|item| item.vocab.clone())
            .collect()
    }

    /// Pick a phrase not sent before, starting over once the catalogue is used up.
    ///
    /// Like the word reset, clearing `sent_phrases` is not written until
    /// `record_phrase_sent`.
    pub fn select_phrase<'a, R: Rng + ?Sized>(
        &mut self,
        phrases: &'a [DailyPhrase],
        rng: &mut R,
    ) -> Option<&'a DailyPhrase> {
        let mut available: Vec<&DailyPhrase> = phrases
            .iter()
            .filter(|p| !self.state.sent_phrases.iter().any(|s| s == p.phrase))
            .collect();

        if available.is_empty() && !phrases.is_empty() {
            info!("All daily phrases have been sent. Resetting phrase history.");
            self.state.sent_phrases.clear();
            available = phrases.iter().collect();
        }

        available.choose(rng).copied()
    }

    pub fn record_phrase_sent(&mut self, phrase: &str) -> Result<()> {
        if !self.state.sent_phrases.iter().any(|s| s == phrase) {
            self.state.sent_phrases.push(phrase.to_string());
        }
        self.persist()
    }

    /// Sequence number shown in the next message header.
    pub fn capsule_number(&self) -> usize {
        self.state.sent_vocabs.len() + 1
    }

    pub fn remaining_count(&self, words: &WordStore) -> usize {
        words
            .entries()
            .iter()
            .filter(|e| !self.state.sent_vocabs.contains(e))
            .count()
    }

    pub fn mastered_count(&self) -> usize {
        self.state.mastered_vocabs.len()
    }

    pub fn queue_len(&self) -> usize {
        self.state.review_queue.len()
    }

    fn mark_mastered(&mut self, vocab: &VocabEntry) {
        if !self.state.mastered_vocabs.contains(vocab) {
            self.state.mastered_vocabs.push(vocab.clone());
        }
        info!("'{}' mastered", vocab.word());
    }

    fn persist(&self) -> Result<()> {
        self.store.save(&self.state)
    }
}
