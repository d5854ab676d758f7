// Word Capsule - daily vocabulary over WhatsApp
// Main entry point

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use wordcapsule::cli::{Cli, Repl, RunMode};
use wordcapsule::config::{is_ci_environment, load_config, Config};
use wordcapsule::delivery::CapsuleJob;
use wordcapsule::logging::DeliveryLog;
use wordcapsule::progress::{HistoryStore, ProgressTracker};
use wordcapsule::scheduling::DailyScheduler;
use wordcapsule::transport::{MessageSender, TwilioConfig, TwilioSender};
use wordcapsule::vocab::WordStore;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(cli.config.as_deref(), &cli.overrides())?;
    let ci = is_ci_environment();
    let mode = cli.mode(ci);
    if ci {
        info!("CI environment detected");
    }

    let mut job = build_job(&config)?;
    let tracker = job.tracker();
    info!(
        "{} words loaded, {} not yet sent, {} in review, {} mastered",
        job.words().len(),
        tracker.remaining_count(job.words()),
        tracker.queue_len(),
        tracker.mastered_count()
    );

    match mode {
        RunMode::SendNow => {
            let mut rng = StdRng::from_entropy();
            send_daily(&mut job, &mut rng).await;
        }
        RunMode::SendReviews => {
            let today = Local::now().date_naive();
            match job.send_review_digest(today).await {
                Ok(Some(report)) if report.is_sent() => {
                    info!("Review digest sent ({} words)", report.words.len())
                }
                Ok(Some(_)) => warn!("Review digest was not sent"),
                Ok(None) => {}
                Err(e) => error!("Review digest failed: {}", e),
            }
        }
        RunMode::Interactive => {
            Repl::new(job).run().await?;
        }
        RunMode::Scheduler => {
            let scheduler = DailyScheduler::new(config.send_time, config.poll_interval);
            let state = Arc::new(Mutex::new((job, StdRng::from_entropy())));
            let run = scheduler.run(|| {
                let state = Arc::clone(&state);
                async move {
                    let mut guard = state.lock().await;
                    let (job, rng) = &mut *guard;
                    send_daily(job, rng).await;
                }
            });

            println!(
                "Scheduler started. Messages will be sent at {} local time. Press Ctrl+C to exit.",
                config.send_time.format("%H:%M")
            );
            tokio::select! {
                result = run => result?,
                _ = tokio::signal::ctrl_c() => info!("Interrupted, shutting down"),
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "info,wordcapsule=debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn build_job(config: &Config) -> Result<CapsuleJob<TwilioSender>> {
    let words = WordStore::load(&config.vocab_file);
    let tracker = ProgressTracker::open(HistoryStore::new(config.history_file.clone()));

    let twilio = TwilioConfig::from_env(config.twilio_api_base.clone());
    let missing = twilio.missing();
    if !missing.is_empty() {
        warn!("Twilio credentials not set: {}", missing.join(", "));
    }
    let sender = TwilioSender::new(twilio)?;

    let mut job = CapsuleJob::new(words, tracker, sender);
    if let Some(path) = &config.delivery_log {
        match DeliveryLog::new(path.clone()) {
            Ok(log) => job = job.with_delivery_log(log),
            Err(e) => warn!("Delivery log disabled: {:#}", e),
        }
    }
    Ok(job)
}

/// One daily send. Failures are logged; the caller carries on either way.
async fn send_daily<S: MessageSender>(job: &mut CapsuleJob<S>, rng: &mut StdRng) {
    let today = Local::now().date_naive();
    match job.send_capsule(today, rng).await {
        Ok(report) if report.is_sent() => {
            info!("Daily capsule delivered via {}", job.sender_name())
        }
        Ok(_) => warn!("Daily capsule not delivered; the word stays unsent"),
        Err(e) => error!("Daily capsule aborted: {}", e),
    }
}
