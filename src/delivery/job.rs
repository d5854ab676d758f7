// One complete send cycle: select, compose, send, record

use chrono::NaiveDate;
use rand::Rng;
use tracing::{error, info, warn};

use crate::errors::Result;
use crate::logging::{DeliveryKind, DeliveryLog, DeliveryRecord};
use crate::message::{render_review_digest, Capsule, DailyPhrase, DAILY_PHRASES};
use crate::progress::{difficulty_score, example_sentence, ProgressTracker, SelectionKind};
use crate::transport::{MessageSender, SendOutcome};
use crate::vocab::{VocabEntry, WordStore};

/// What a send attempt delivered (or tried to)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReport {
    pub kind: DeliveryKind,
    pub words: Vec<VocabEntry>,
    pub body: String,
    pub outcome: SendOutcome,
}

impl DeliveryReport {
    pub fn is_sent(&self) -> bool {
        self.outcome.is_sent()
    }
}

/// Ties the word store, the tracker and a sender together.
///
/// The history is only updated after the sender reports success, so a failed
/// send leaves the word unsent and it can be picked again next time. Resets
/// made while selecting are rolled back too.
pub struct CapsuleJob<S: MessageSender> {
    words: WordStore,
    tracker: ProgressTracker,
    sender: S,
    delivery_log: Option<DeliveryLog>,
    phrases: &'static [DailyPhrase],
}

impl<S: MessageSender> CapsuleJob<S> {
    pub fn new(words: WordStore, tracker: ProgressTracker, sender: S) -> Self {
        Self {
            words,
            tracker,
            sender,
            delivery_log: None,
            phrases: DAILY_PHRASES,
        }
    }

    pub fn with_delivery_log(mut self, log: DeliveryLog) -> Self {
        self.delivery_log = Some(log);
        self
    }

    pub fn with_phrases(mut self, phrases: &'static [DailyPhrase]) -> Self {
        self.phrases = phrases;
        self
    }

    pub fn words(&self) -> &WordStore {
        &self.words
    }

    pub fn tracker(&self) -> &ProgressTracker {
        &self.tracker
    }

    pub fn tracker_mut(&mut self) -> &mut ProgressTracker {
        &mut self.tracker
    }

    pub fn sender_name(&self) -> &str {
        self.sender.name()
    }

    pub fn delivery_log(&self) -> Option<&DeliveryLog> {
        self.delivery_log.as_ref()
    }

    /// Send today's capsule: a due review if there is one, otherwise a new word.
    pub async fn send_capsule<R: Rng + ?Sized>(
        &mut self,
        today: NaiveDate,
        rng: &mut R,
    ) -> Result<DeliveryReport> {
        let snapshot = self.tracker.state().clone();
        let selection = self
            .tracker
            .select_next(&self.words, today, rng)
            .inspect_err(|e| error!("Cannot send capsule: {}", e))?;

        let example = example_sentence(selection.entry.word(), rng);
        let difficulty = difficulty_score(selection.entry.word());
        let phrase = self.tracker.select_phrase(self.phrases, rng);

        let body = Capsule {
            date: today,
            number: self.tracker.capsule_number(),
            kind: selection.kind,
            entry: &selection.entry,
            example,
            difficulty,
            phrase,
        }
        .render();

        let outcome = self.sender.send(&body).await;
        let kind = match selection.kind {
            SelectionKind::New => DeliveryKind::Capsule,
            SelectionKind::Review => DeliveryKind::Review,
        };

        if outcome.is_sent() {
            match selection.kind {
                SelectionKind::New => self.tracker.record_sent(&selection.entry, today)?,
                SelectionKind::Review => {
                    self.tracker.record_review_sent(&selection.entry, today)?;
                }
            }
            if let Some(phrase) = phrase {
                self.tracker.record_phrase_sent(phrase.phrase)?;
            }
            info!(
                "Sent vocabulary '{}' and phrase '{}' on {}",
                selection.entry.word(),
                phrase.map(|p| p.phrase).unwrap_or("-"),
                today
            );
        } else {
            error!("Failed to send vocabulary on {}", today);
            self.tracker.rollback(snapshot);
        }

        let report = DeliveryReport {
            kind,
            words: vec![selection.entry],
            body,
            outcome,
        };
        self.log_delivery(&report);
        Ok(report)
    }

    /// Send one message listing every due review. `None` when nothing is due.
    ///
    /// On success each listed word counts as a remembered review.
    pub async fn send_review_digest(&mut self, today: NaiveDate) -> Result<Option<DeliveryReport>> {
        let mut due: Vec<VocabEntry> = Vec::new();
        for entry in self.tracker.due_review_words(today) {
            if !due.contains(&entry) {
                due.push(entry);
            }
        }
        if due.is_empty() {
            info!("No review words due on {}", today);
            return Ok(None);
        }

        let body = render_review_digest(today, &due);
        let outcome = self.sender.send(&body).await;

        if outcome.is_sent() {
            for entry in &due {
                self.tracker.record_review_sent(entry, today)?;
            }
            info!("Sent review digest with {} word(s) on {}", due.len(), today);
        } else {
            error!("Failed to send review digest on {}", today);
        }

        let report = DeliveryReport {
            kind: DeliveryKind::ReviewDigest,
            words: due,
            body,
            outcome,
        };
        self.log_delivery(&report);
        Ok(Some(report))
    }

    fn log_delivery(&self, report: &DeliveryReport) {
        let Some(log) = &self.delivery_log else {
            return;
        };
        let vocab = report.words.iter().map(|e| e.to_string()).collect();
        let record = DeliveryRecord::new(report.kind, vocab, &report.outcome);
        if let Err(e) = log.log(&record) {
            warn!("Failed to write delivery log: {:#}", e);
        }
    }
}
