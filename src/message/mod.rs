// Outbound message composition

mod compose;
mod phrases;

pub use compose::{context_tip, render_review_digest, Capsule};
pub use phrases::{DailyPhrase, DAILY_PHRASES};
