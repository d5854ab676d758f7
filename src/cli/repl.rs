// Interactive console

use anyhow::Result;
use chrono::{Local, NaiveDate};
use crossterm::style::Stylize;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, BufRead, IsTerminal, Write};

use super::commands::{format_due, format_help, format_stats, Command};
use crate::delivery::{CapsuleJob, DeliveryReport};
use crate::progress::ReviewStep;
use crate::transport::{MessageSender, SendOutcome};

pub struct Repl<S: MessageSender> {
    job: CapsuleJob<S>,
    rng: StdRng,
    today: Option<NaiveDate>,
    is_interactive: bool,
}

impl<S: MessageSender> Repl<S> {
    pub fn new(job: CapsuleJob<S>) -> Self {
        Self {
            job,
            rng: StdRng::from_entropy(),
            today: None,
            is_interactive: io::stdout().is_terminal(),
        }
    }

    /// Pin the date and randomness (used by tests).
    pub fn with_fixed(mut self, today: NaiveDate, seed: u64) -> Self {
        self.today = Some(today);
        self.rng = StdRng::seed_from_u64(seed);
        self.is_interactive = false;
        self
    }

    pub fn job(&self) -> &CapsuleJob<S> {
        &self.job
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Run on the process's stdin/stdout.
    pub async fn run(&mut self) -> Result<()> {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut output = io::stdout();
        self.run_with(&mut input, &mut output).await
    }

    pub async fn run_with<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> Result<()> {
        let words = self.job.words().len();
        writeln!(out, "Word Capsule console: {} words loaded.", words)?;
        writeln!(out, "Type /help for commands.")?;

        loop {
            write!(out, "> ")?;
            out.flush()?;

            let Some(line) = read_line(input)? else {
                break;
            };
            if line.is_empty() {
                continue;
            }

            let Some(command) = Command::parse(&line) else {
                writeln!(out, "Unknown command: {}", line)?;
                writeln!(out, "{}", format_help())?;
                continue;
            };

            let today = self.today();
            match command {
                Command::Quit => {
                    writeln!(out, "Goodbye!")?;
                    break;
                }
                Command::Help => writeln!(out, "{}", format_help())?,
                Command::Stats => writeln!(out, "{}", format_stats(&self.job, today))?,
                Command::Due => writeln!(out, "{}", format_due(&self.job, today))?,
                Command::Send => {
                    match self.job.send_capsule(today, &mut self.rng).await {
                        Ok(report) => self.print_report(out, &report)?,
                        Err(e) => writeln!(out, "Error: {}", e)?,
                    }
                }
                Command::Reviews => match self.job.send_review_digest(today).await {
                    Ok(Some(report)) => self.print_report(out, &report)?,
                    Ok(None) => writeln!(out, "No words due for review.")?,
                    Err(e) => writeln!(out, "Error: {}", e)?,
                },
                Command::Review => self.review_due(input, out, today)?,
            }
        }

        Ok(())
    }

    /// Ask about each due word and record the answer.
    fn review_due<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        out: &mut W,
        today: NaiveDate,
    ) -> Result<()> {
        let due = self.job.tracker().due_review_words(today);
        if due.is_empty() {
            writeln!(out, "No words due for review.")?;
            return Ok(());
        }

        for entry in due {
            writeln!(out, "\n{}", entry.word().to_uppercase())?;
            write!(out, "Remembered? [y]es / [n]o / [s]kip / [q]uit: ")?;
            out.flush()?;

            let Some(answer) = read_line(input)? else {
                break;
            };
            let remembered = match answer.to_ascii_lowercase().as_str() {
                "y" | "yes" => true,
                "n" | "no" => false,
                "q" | "quit" => break,
                _ => {
                    writeln!(out, "Skipped. Meaning: {}", entry.definition())?;
                    continue;
                }
            };

            writeln!(out, "Meaning: {}", entry.definition())?;
            match self
                .job
                .tracker_mut()
                .record_review_outcome(&entry, remembered, today)?
            {
                Some(ReviewStep::Mastered) => writeln!(out, "Mastered! It leaves the review queue.")?,
                Some(ReviewStep::Rescheduled { review_date, .. }) => {
                    writeln!(out, "Next review on {}", review_date.format("%Y-%m-%d"))?
                }
                None => {}
            }
        }
        Ok(())
    }

    fn print_report<W: Write>(&self, out: &mut W, report: &DeliveryReport) -> Result<()> {
        match &report.outcome {
            SendOutcome::Sent { .. } => {
                let status = "Sent:";
                if self.is_interactive {
                    writeln!(out, "{}", status.green())?;
                } else {
                    writeln!(out, "{}", status)?;
                }
                writeln!(out, "{}", report.body)?;
            }
            SendOutcome::Failed(failure) => {
                let status = format!("Not sent ({}). Nothing was recorded.", failure);
                if self.is_interactive {
                    writeln!(out, "{}", status.red())?;
                } else {
                    writeln!(out, "{}", status)?;
                }
            }
        }
        Ok(())
    }
}

/// Next trimmed line, or `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
