// Integration tests for the interactive console
//
// Feeds scripted input through Repl::run_with and checks both the printed
// output and the history written to disk.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::io::Cursor;

use wordcapsule::cli::Repl;
use wordcapsule::delivery::CapsuleJob;
use wordcapsule::progress::{HistoryStore, ProgressTracker};
use wordcapsule::transport::{MessageSender, SendOutcome};
use wordcapsule::vocab::{VocabEntry, WordStore};

struct OkSender;

#[async_trait]
impl MessageSender for OkSender {
    async fn send(&self, _body: &str) -> SendOutcome {
        SendOutcome::Sent { message_id: None }
    }

    fn name(&self) -> &str {
        "ok"
    }
}

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 10, d).unwrap()
}

fn entry(s: &str) -> VocabEntry {
    s.parse().unwrap()
}

async fn run_script(dir: &tempfile::TempDir, today: NaiveDate, script: &str) -> String {
    let words = WordStore::parse("serene - calm\nterse - brief\n");
    let tracker = ProgressTracker::open(HistoryStore::new(dir.path().join("h.json")));
    let mut repl = Repl::new(CapsuleJob::new(words, tracker, OkSender)).with_fixed(today, 5);

    let mut input = Cursor::new(script.as_bytes().to_vec());
    let mut output: Vec<u8> = Vec::new();
    repl.run_with(&mut input, &mut output).await.unwrap();
    String::from_utf8(output).unwrap()
}

fn seed_history(dir: &tempfile::TempDir) {
    let store = HistoryStore::new(dir.path().join("h.json"));
    let mut tracker = ProgressTracker::open(store);
    tracker.record_sent(&entry("serene - calm"), day(1)).unwrap();
    tracker.record_sent(&entry("terse - brief"), day(1)).unwrap();
}

#[tokio::test]
async fn test_help_and_quit() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_script(&dir, day(1), "/help\n/quit\n").await;
    assert!(out.contains("2 words loaded"));
    assert!(out.contains("/review"));
    assert!(out.ends_with("Goodbye!\n"));
}

#[tokio::test]
async fn test_unknown_input_prints_help() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_script(&dir, day(1), "hello\n").await;
    assert!(out.contains("Unknown command: hello"));
    assert!(out.contains("Available commands:"));
}

#[tokio::test]
async fn test_send_records_word() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_script(&dir, day(1), "/send\n/stats\n").await;
    assert!(out.contains("Sent:"));
    assert!(out.contains("Word Capsule #1"));
    assert!(out.contains("Vocabulary:     2"));
    assert!(out.contains("Remaining:      1"));

    let state = HistoryStore::new(dir.path().join("h.json")).try_load().unwrap();
    assert_eq!(state.sent_vocabs.len(), 1);
}

#[tokio::test]
async fn test_review_records_answers() {
    let dir = tempfile::tempdir().unwrap();
    seed_history(&dir);

    let out = run_script(&dir, day(2), "/due\n/review\ny\nn\n/quit\n").await;
    assert!(out.contains("1. serene - calm"));
    assert!(out.contains("2. terse - brief"));
    assert!(out.contains("Next review on 2024-10-04"));
    assert!(out.contains("Next review on 2024-10-03"));

    let state = HistoryStore::new(dir.path().join("h.json")).try_load().unwrap();
    assert_eq!(state.review_queue[0].vocab, entry("serene - calm"));
    assert_eq!(state.review_queue[0].times_reviewed, 1);
    assert_eq!(state.review_queue[0].review_date, day(4));
    assert_eq!(state.review_queue[1].times_reviewed, 0);
    assert_eq!(state.review_queue[1].review_date, day(3));
}

#[tokio::test]
async fn test_review_skip_leaves_item_untouched() {
    let dir = tempfile::tempdir().unwrap();
    seed_history(&dir);

    let out = run_script(&dir, day(2), "/review\ns\nq\n").await;
    assert!(out.contains("Skipped. Meaning: calm"));

    let state = HistoryStore::new(dir.path().join("h.json")).try_load().unwrap();
    assert!(state.review_queue.iter().all(|i| i.review_date == day(2)));
}

#[tokio::test]
async fn test_reviews_digest_with_nothing_due() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_script(&dir, day(1), "/reviews\n").await;
    assert!(out.contains("No words due for review."));
}
