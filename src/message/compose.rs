// Message bodies for the daily capsule and the review digest

use chrono::NaiveDate;
use std::fmt::Write;

use super::phrases::DailyPhrase;
use crate::progress::SelectionKind;
use crate::vocab::VocabEntry;

/// Everything that goes into one daily message.
#[derive(Debug, Clone)]
pub struct Capsule<'a> {
    pub date: NaiveDate,
    /// Sequence number in the header (ignored for review capsules).
    pub number: usize,
    pub kind: SelectionKind,
    pub entry: &'a VocabEntry,
    pub example: String,
    pub difficulty: u8,
    pub phrase: Option<&'a DailyPhrase>,
}

impl Capsule<'_> {
    pub fn render(&self) -> String {
        let mut body = String::new();
        let _ = writeln!(body, "📅 Date: {}  ", self.date.format("%Y-%m-%d"));
        match self.kind {
            SelectionKind::New => {
                let _ = writeln!(body, "📦 Word Capsule #{}\n", self.number);
            }
            SelectionKind::Review => {
                let _ = writeln!(body, "🔁 Review: do you still remember this one?\n");
            }
        }
        let _ = writeln!(body, "🔤 Word: {} ", self.entry.word().to_uppercase());
        let _ = writeln!(body, "📚 Meaning: {}  ", self.entry.definition());
        let _ = writeln!(body, "✍️ Example: \"{}\"  ", self.example);
        let _ = writeln!(body, "📊 Difficulty: {}/10", self.difficulty);
        let _ = write!(body, "💭 Context Tip: {}", context_tip(self.difficulty));

        if let Some(phrase) = self.phrase {
            let _ = write!(body, "\n\n🌟 Daily Phrase: \"{}\"  \n", phrase.phrase);
            let _ = write!(body, "💡 Meaning: {}", phrase.meaning);
        }
        body
    }
}

/// Study hint keyed on the difficulty band.
pub fn context_tip(difficulty: u8) -> &'static str {
    match difficulty {
        0..=3 => "A handy everyday word. Try slipping it into a conversation today!",
        4..=6 => "This word often appears in academic and professional contexts",
        _ => "A challenging one. Break it into parts and link each to something familiar!",
    }
}

/// One message listing every word due for review.
pub fn render_review_digest(date: NaiveDate, due: &[VocabEntry]) -> String {
    let mut body = String::new();
    let _ = writeln!(body, "📅 Date: {}  ", date.format("%Y-%m-%d"));
    let _ = writeln!(
        body,
        "🔁 Review Time! {} word{} due today:",
        due.len(),
        if due.len() == 1 { "" } else { "s" }
    );
    for (i, entry) in due.iter().enumerate() {
        let _ = write!(
            body,
            "\n{}. {} - {}",
            i + 1,
            entry.word().to_uppercase(),
            entry.definition()
        );
    }
    body
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, 1).unwrap()
    }

    #[test]
    fn test_new_capsule_layout() {
        let entry: VocabEntry = "serene - calm and peaceful".parse().unwrap();
        let phrase = DailyPhrase::new("Time flies", "Time passes very quickly");
        let capsule = Capsule {
            date: date(),
            number: 12,
            kind: SelectionKind::New,
            entry: &entry,
            example: "Her serene attitude surprised everyone.".to_string(),
            difficulty: 3,
            phrase: Some(&phrase),
        };
        let body = capsule.render();
        let lines: Vec<&str> = body.lines().collect();
        assert_eq!(lines[0], "📅 Date: 2024-07-01  ");
        assert_eq!(lines[1], "📦 Word Capsule #12");
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "🔤 Word: SERENE ");
        assert_eq!(lines[4], "📚 Meaning: calm and peaceful  ");
        assert_eq!(lines[5], "✍️ Example: \"Her serene attitude surprised everyone.\"  ");
        assert_eq!(lines[6], "📊 Difficulty: 3/10");
        assert!(lines[7].starts_with("💭 Context Tip: "));
        assert_eq!(lines[9], "🌟 Daily Phrase: \"Time flies\"  ");
        assert_eq!(lines[10], "💡 Meaning: Time passes very quickly");
    }

    #[test]
    fn test_review_capsule_header_and_no_phrase() {
        let entry: VocabEntry = "terse - brief".parse().unwrap();
        let capsule = Capsule {
            date: date(),
            number: 99,
            kind: SelectionKind::Review,
            entry: &entry,
            example: "x".to_string(),
            difficulty: 8,
            phrase: None,
        };
        let body = capsule.render();
        assert!(body.contains("🔁 Review"));
        assert!(!body.contains("#99"));
        assert!(!body.contains("Daily Phrase"));
        assert!(body.ends_with(context_tip(8)));
    }

    #[test]
    fn test_context_tip_bands() {
        assert_ne!(context_tip(2), context_tip(5));
        assert_ne!(context_tip(5), context_tip(9));
        assert_eq!(context_tip(10), context_tip(7));
    }

    #[test]
    fn test_review_digest_lists_due_words() {
        let due: Vec<VocabEntry> = vec!["terse - brief".parse().unwrap(), "lucid - clear".parse().unwrap()];
        let body = render_review_digest(date(), &due);
        assert!(body.contains("2 words due today"));
        assert!(body.contains("1. TERSE - brief"));
        assert!(body.contains("2. LUCID - clear"));
    }
}
