// Integration tests for the daily send cycle
//
// Drives CapsuleJob end to end with in-memory senders and a temp history file:
// state must change only after a successful send.

use async_trait::async_trait;
use chrono::NaiveDate;
use rand::rngs::mock::StepRng;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

use wordcapsule::delivery::CapsuleJob;
use wordcapsule::logging::{DeliveryKind, DeliveryLog, DeliveryStatus};
use wordcapsule::progress::{HistoryState, HistoryStore, ProgressTracker, ReviewItem};
use wordcapsule::message::DAILY_PHRASES;
use wordcapsule::transport::{MessageSender, SendFailure, SendOutcome};
use wordcapsule::vocab::{VocabEntry, WordStore};
use wordcapsule::VocabError;

/// Records every body and answers with a fixed outcome.
#[derive(Clone)]
struct FakeSender {
    bodies: Arc<Mutex<Vec<String>>>,
    outcome: SendOutcome,
}

impl FakeSender {
    fn ok() -> Self {
        Self {
            bodies: Arc::new(Mutex::new(Vec::new())),
            outcome: SendOutcome::Sent {
                message_id: Some("SM123".to_string()),
            },
        }
    }

    fn failing() -> Self {
        Self {
            bodies: Arc::new(Mutex::new(Vec::new())),
            outcome: SendOutcome::Failed(SendFailure::Transport("connection reset".to_string())),
        }
    }

    fn sent(&self) -> Vec<String> {
        self.bodies.lock().unwrap().clone()
    }
}

#[async_trait]
impl MessageSender for FakeSender {
    async fn send(&self, body: &str) -> SendOutcome {
        self.bodies.lock().unwrap().push(body.to_string());
        self.outcome.clone()
    }

    fn name(&self) -> &str {
        "fake"
    }
}

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 9, d).unwrap()
}

fn entry(s: &str) -> VocabEntry {
    s.parse().unwrap()
}

fn words() -> WordStore {
    WordStore::parse("serene - calm and peaceful\nterse - brief\nlucid - clear\n")
}

fn history_path(dir: &TempDir) -> std::path::PathBuf {
    dir.path().join("vocab_history.json")
}

fn job_with(dir: &TempDir, words: WordStore, sender: FakeSender) -> CapsuleJob<FakeSender> {
    let tracker = ProgressTracker::open(HistoryStore::new(history_path(dir)));
    CapsuleJob::new(words, tracker, sender)
}

fn reload(dir: &TempDir) -> HistoryState {
    HistoryStore::new(history_path(dir)).try_load().unwrap()
}

// ── successful sends ────────────────────────────────────────────────────────

#[tokio::test]
async fn test_new_word_send_records_history() {
    let dir = tempfile::tempdir().unwrap();
    let sender = FakeSender::ok();
    let mut job = job_with(&dir, words(), sender.clone());

    let report = job.send_capsule(day(1), &mut StdRng::seed_from_u64(1)).await.unwrap();
    assert!(report.is_sent());
    assert_eq!(report.kind, DeliveryKind::Capsule);
    let sent_word = report.words[0].clone();

    let bodies = sender.sent();
    assert_eq!(bodies.len(), 1);
    assert!(bodies[0].contains("📦 Word Capsule #1"));
    assert!(bodies[0].contains(&sent_word.word().to_uppercase()));
    assert!(bodies[0].contains("🌟 Daily Phrase"));

    let state = reload(&dir);
    assert_eq!(state.sent_vocabs, vec![sent_word.clone()]);
    assert_eq!(state.last_sent_date, Some(day(1)));
    assert_eq!(
        state.review_queue,
        vec![ReviewItem {
            vocab: sent_word,
            review_date: day(2),
            times_reviewed: 0
        }]
    );
    assert_eq!(state.sent_phrases.len(), 1);
}

#[tokio::test]
async fn test_due_review_is_sent_before_new_words() {
    let dir = tempfile::tempdir().unwrap();
    let sender = FakeSender::ok();
    let mut job = job_with(&dir, words(), sender.clone());
    job.tracker_mut().record_sent(&entry("terse - brief"), day(1)).unwrap();

    let report = job.send_capsule(day(2), &mut StepRng::new(0, 0)).await.unwrap();
    assert_eq!(report.kind, DeliveryKind::Review);
    assert_eq!(report.words, vec![entry("terse - brief")]);
    assert!(sender.sent()[0].contains("🔁 Review"));

    // Counted as a remembered review: no duplicate queue entry, next review in 2 days.
    let state = reload(&dir);
    assert_eq!(state.sent_vocabs, vec![entry("terse - brief")]);
    assert_eq!(state.review_queue.len(), 1);
    assert_eq!(state.review_queue[0].times_reviewed, 1);
    assert_eq!(state.review_queue[0].review_date, day(4));
    assert_eq!(state.last_sent_date, Some(day(2)));
}

#[tokio::test]
async fn test_capsule_number_counts_sent_words() {
    let dir = tempfile::tempdir().unwrap();
    let sender = FakeSender::ok();
    let mut job = job_with(&dir, words(), sender.clone());
    let mut rng = StdRng::seed_from_u64(9);

    job.send_capsule(day(1), &mut rng).await.unwrap();
    // Same day again: the first word's review is not due until tomorrow.
    job.send_capsule(day(1), &mut rng).await.unwrap();

    let bodies = sender.sent();
    assert!(bodies[0].contains("Word Capsule #1"));
    assert!(bodies[1].contains("Word Capsule #2"));
    assert_eq!(reload(&dir).sent_vocabs.len(), 2);
}

#[tokio::test]
async fn test_exhausted_store_starts_over() {
    let dir = tempfile::tempdir().unwrap();
    let store = words();
    HistoryStore::new(history_path(&dir))
        .save(&HistoryState {
            sent_vocabs: store.entries().to_vec(),
            ..Default::default()
        })
        .unwrap();

    let sender = FakeSender::ok();
    let mut job = job_with(&dir, store.clone(), sender.clone());
    let report = job.send_capsule(day(5), &mut StepRng::new(0, 0)).await.unwrap();

    assert_eq!(report.kind, DeliveryKind::Capsule);
    assert!(store.entries().contains(&report.words[0]));
    assert_eq!(reload(&dir).sent_vocabs, report.words);
}

// ── failures ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_transport_failure_leaves_history_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut job = job_with(&dir, words(), FakeSender::ok());
        job.send_capsule(day(1), &mut StdRng::seed_from_u64(3)).await.unwrap();
    }
    let before = reload(&dir);
    let bytes_before = fs::read(history_path(&dir)).unwrap();

    let sender = FakeSender::failing();
    let mut job = job_with(&dir, words(), sender.clone());
    let report = job.send_capsule(day(1), &mut StdRng::seed_from_u64(4)).await.unwrap();

    assert!(!report.is_sent());
    assert_eq!(sender.sent().len(), 1);
    let after = reload(&dir);
    assert_eq!(after.sent_vocabs, before.sent_vocabs);
    assert_eq!(after.review_queue, before.review_queue);
    assert_eq!(fs::read(history_path(&dir)).unwrap(), bytes_before);
}

#[tokio::test]
async fn test_transport_failure_after_full_cycle_keeps_sent_sets() {
    let dir = tempfile::tempdir().unwrap();
    let store = words();
    HistoryStore::new(history_path(&dir))
        .save(&HistoryState {
            sent_vocabs: store.entries().to_vec(),
            sent_phrases: DAILY_PHRASES.iter().map(|p| p.phrase.to_string()).collect(),
            ..Default::default()
        })
        .unwrap();
    let bytes_before = fs::read(history_path(&dir)).unwrap();

    let mut job = job_with(&dir, store.clone(), FakeSender::failing());
    let report = job.send_capsule(day(5), &mut StepRng::new(0, 0)).await.unwrap();
    assert!(!report.is_sent());

    assert_eq!(fs::read(history_path(&dir)).unwrap(), bytes_before);
    let state = job.tracker().state();
    assert_eq!(state.sent_vocabs.len(), store.len());
    assert_eq!(state.sent_phrases.len(), DAILY_PHRASES.len());
}

#[tokio::test]
async fn test_failed_review_send_keeps_item_due() {
    let dir = tempfile::tempdir().unwrap();
    let mut job = job_with(&dir, words(), FakeSender::failing());
    job.tracker_mut().record_sent(&entry("terse - brief"), day(1)).unwrap();

    let report = job.send_capsule(day(3), &mut StepRng::new(0, 0)).await.unwrap();
    assert!(!report.is_sent());
    let state = reload(&dir);
    assert_eq!(state.review_queue[0].times_reviewed, 0);
    assert_eq!(state.review_queue[0].review_date, day(2));
}

#[tokio::test]
async fn test_empty_store_aborts_without_sending() {
    let dir = tempfile::tempdir().unwrap();
    let sender = FakeSender::ok();
    let missing = WordStore::load(&dir.path().join("vocabs.txt"));
    let mut job = job_with(&dir, missing, sender.clone());

    let err = job.send_capsule(day(1), &mut StepRng::new(0, 0)).await.unwrap_err();
    assert!(matches!(err, VocabError::NoVocabularyAvailable));
    assert!(sender.sent().is_empty());
    assert!(!history_path(&dir).exists());
}

// ── review digest and delivery log ──────────────────────────────────────────

#[tokio::test]
async fn test_review_digest_lists_due_words_and_advances_them() {
    let dir = tempfile::tempdir().unwrap();
    let sender = FakeSender::ok();
    let mut job = job_with(&dir, words(), sender.clone());
    job.tracker_mut().record_sent(&entry("terse - brief"), day(1)).unwrap();
    job.tracker_mut().record_sent(&entry("lucid - clear"), day(1)).unwrap();
    job.tracker_mut().record_sent(&entry("serene - calm and peaceful"), day(8)).unwrap();

    let report = job.send_review_digest(day(3)).await.unwrap().unwrap();
    assert!(report.is_sent());
    assert_eq!(report.words, vec![entry("terse - brief"), entry("lucid - clear")]);
    assert!(sender.sent()[0].contains("2 words due today"));

    let state = reload(&dir);
    assert_eq!(state.review_queue[0].review_date, day(5));
    assert_eq!(state.review_queue[1].review_date, day(5));
    assert_eq!(state.review_queue[2].review_date, day(9));
}

#[tokio::test]
async fn test_review_digest_advances_duplicate_queue_items() {
    let dir = tempfile::tempdir().unwrap();
    let sender = FakeSender::ok();
    let mut job = job_with(&dir, words(), sender.clone());
    job.tracker_mut().record_sent(&entry("terse - brief"), day(1)).unwrap();
    job.tracker_mut().record_sent(&entry("terse - brief"), day(1)).unwrap();

    let report = job.send_review_digest(day(2)).await.unwrap().unwrap();
    assert_eq!(report.words, vec![entry("terse - brief")]);
    assert!(sender.sent()[0].contains("1 word due today"));

    assert!(job.tracker().due_review_words(day(3)).is_empty());
    let state = reload(&dir);
    assert_eq!(state.review_queue.len(), 2);
    assert!(state.review_queue.iter().all(|i| i.review_date == day(4)));
    assert!(job.send_review_digest(day(3)).await.unwrap().is_none());
}

#[tokio::test]
async fn test_review_digest_with_nothing_due_sends_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let sender = FakeSender::ok();
    let mut job = job_with(&dir, words(), sender.clone());
    assert!(job.send_review_digest(day(1)).await.unwrap().is_none());
    assert!(sender.sent().is_empty());
}

#[tokio::test]
async fn test_every_attempt_is_logged() {
    let dir = tempfile::tempdir().unwrap();
    let log = DeliveryLog::new(dir.path().join("deliveries.jsonl")).unwrap();
    let mut job = job_with(&dir, words(), FakeSender::failing()).with_delivery_log(log);

    job.send_capsule(day(1), &mut StdRng::seed_from_u64(2)).await.unwrap();

    let records = job.delivery_log().unwrap().read_all().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].outcome, DeliveryStatus::Failed);
    assert_eq!(records[0].kind, DeliveryKind::Capsule);
    assert!(words().entries().iter().any(|e| e.to_string() == records[0].vocab[0]));
    assert_eq!(
        records[0].failure.as_deref(),
        Some("transport error: connection reset")
    );
}
