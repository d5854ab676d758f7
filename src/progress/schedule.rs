//! Spaced-repetition policy
//!
//! Exponential backoff on remembered reviews with a hard ceiling, a one-day
//! reset on forgotten ones, and a fixed mastery threshold:
//!
//! - remembered: `times_reviewed += 1`; at the threshold the word is mastered,
//!   otherwise the next review is `min(2^times_reviewed, 90)` days out
//! - forgotten: `times_reviewed -= 1` (floor 0), next review tomorrow

use chrono::{Duration, NaiveDate};

use super::history::ReviewItem;

/// Interval before the first review of a newly sent word.
pub const INITIAL_INTERVAL_DAYS: i64 = 1;

/// Longest gap between two reviews.
pub const MAX_INTERVAL_DAYS: i64 = 90;

/// Remembered reviews needed before a word leaves the queue.
pub const MASTERY_THRESHOLD: u32 = 5;

/// Outcome of applying a review to a queue item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewStep {
    /// Keep the item; next review on `review_date`.
    Rescheduled { review_date: NaiveDate, interval_days: i64 },
    /// Threshold reached; the item leaves the queue.
    Mastered,
}

/// Days until the next review after `times_reviewed` remembered reviews.
pub fn interval_for(times_reviewed: u32) -> i64 {
    // 2^7 already exceeds the ceiling
    if times_reviewed >= 7 {
        return MAX_INTERVAL_DAYS;
    }
    (1i64 << times_reviewed).min(MAX_INTERVAL_DAYS)
}

/// Apply a review outcome to `item` in place.
pub fn apply_review(item: &mut ReviewItem, remembered: bool, today: NaiveDate) -> ReviewStep {
    let interval_days = if remembered {
        item.times_reviewed += 1;
        if item.times_reviewed >= MASTERY_THRESHOLD {
            return ReviewStep::Mastered;
        }
        interval_for(item.times_reviewed)
    } else {
        item.times_reviewed = item.times_reviewed.saturating_sub(1);
        INITIAL_INTERVAL_DAYS
    };

    item.review_date = today + Duration::days(interval_days);
    ReviewStep::Rescheduled {
        review_date: item.review_date,
        interval_days,
    }
}
