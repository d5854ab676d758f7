// Console command handling

use chrono::NaiveDate;

use crate::delivery::CapsuleJob;
use crate::transport::MessageSender;

pub enum Command {
    Help,
    Quit,
    Send,
    Reviews,
    Due,
    Review,
    Stats,
}

impl Command {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "/help" => Some(Command::Help),
            "/quit" | "/exit" => Some(Command::Quit),
            "/send" => Some(Command::Send),
            "/reviews" => Some(Command::Reviews),
            "/due" => Some(Command::Due),
            "/review" => Some(Command::Review),
            "/stats" => Some(Command::Stats),
            _ => None,
        }
    }
}

pub fn format_help() -> String {
    r#"Available commands:
  /send      - Send today's word now
  /reviews   - Send one message with all words due for review
  /due       - List words due for review
  /review    - Go through due words and record whether you remembered them
  /stats     - Show learning progress
  /help      - Show this help message
  /quit      - Exit the console"#
        .to_string()
}

pub fn format_stats<S: MessageSender>(job: &CapsuleJob<S>, today: NaiveDate) -> String {
    let tracker = job.tracker();
    let words = job.words();
    let state = tracker.state();

    let mut lines = vec![
        format!("Vocabulary:     {}", words.len()),
        format!("Remaining:      {}", tracker.remaining_count(words)),
        format!("Sent:           {}", state.sent_vocabs.len()),
        format!("In review:      {}", tracker.queue_len()),
        format!("Due today:      {}", tracker.due_review_words(today).len()),
        format!("Mastered:       {}", tracker.mastered_count()),
        format!(
            "Last sent:      {}",
            state
                .last_sent_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "never".to_string())
        ),
    ];

    if let Some(summary) = job.delivery_log().and_then(|log| log.summary().ok()) {
        lines.push(format!(
            "Deliveries:     {} ({} sent, {} failed)",
            summary.total, summary.sent, summary.failed
        ));
    }
    lines.join("\n")
}

pub fn format_due<S: MessageSender>(job: &CapsuleJob<S>, today: NaiveDate) -> String {
    let due = job.tracker().due_review_words(today);
    if due.is_empty() {
        return "No words due for review.".to_string();
    }
    due.iter()
        .enumerate()
        .map(|(i, entry)| format!("{}. {}", i + 1, entry))
        .collect::<Vec<_>>()
        .join("\n")
}
