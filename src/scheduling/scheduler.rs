// Daily scheduler loop

use anyhow::Result;
use chrono::{Duration as ChronoDuration, Local, NaiveDateTime, NaiveTime};
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

type Clock = Box<dyn Fn() -> NaiveDateTime + Send + Sync>;

/// Fires a job once a day at a fixed local time.
///
/// The loop wakes every `poll_interval`; a wake-up that lands after the
/// scheduled minute still fires, so coarse polling never skips a day.
pub struct DailyScheduler {
    send_time: NaiveTime,
    poll_interval: Duration,
    running: Arc<AtomicBool>,
    clock: Clock,
}

impl DailyScheduler {
    /// Scheduler driven by the local wall clock
    pub fn new(send_time: NaiveTime, poll_interval: Duration) -> Self {
        Self {
            send_time,
            poll_interval,
            running: Arc::new(AtomicBool::new(false)),
            clock: Box::new(|| Local::now().naive_local()),
        }
    }

    /// Replace the wall clock (used by tests).
    pub fn with_clock<F>(mut self, clock: F) -> Self
    where
        F: Fn() -> NaiveDateTime + Send + Sync + 'static,
    {
        self.clock = Box::new(clock);
        self
    }

    pub fn send_time(&self) -> NaiveTime {
        self.send_time
    }

    /// Flag that ends the loop at its next wake-up when cleared.
    pub fn stop_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.running)
    }

    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    /// Run until stopped. `job` runs to completion before the next wake-up.
    pub async fn run<F, Fut>(&self, mut job: F) -> Result<()>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = ()>,
    {
        self.running.store(true, Ordering::SeqCst);
        let mut next_run = next_run_after((self.clock)(), self.send_time);
        info!(
            "Scheduler started. Messages will be sent daily at {}; next at {}",
            self.send_time.format("%H:%M"),
            next_run
        );

        while self.running.load(Ordering::SeqCst) {
            tokio::time::sleep(self.poll_interval).await;

            let now = (self.clock)();
            if now < next_run {
                continue;
            }

            debug!("Scheduled run due at {} (now {})", next_run, now);
            job().await;
            next_run = next_run_after(now, self.send_time);
            info!("Next message at {}", next_run);
        }

        info!("Scheduler stopped");
        Ok(())
    }
}

/// First occurrence of `send_time` strictly after `now`.
pub fn next_run_after(now: NaiveDateTime, send_time: NaiveTime) -> NaiveDateTime {
    let today = now.date().and_time(send_time);
    if today > now {
        today
    } else {
        today + ChronoDuration::days(1)
    }
}
