// Daily send scheduling
//
// Single-threaded polling loop; the job for a day runs to completion before
// the loop sleeps again.

pub mod scheduler;

pub use scheduler::{next_run_after, DailyScheduler};
