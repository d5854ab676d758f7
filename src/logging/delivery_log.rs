// Delivery log: one JSON line per send attempt

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::transport::SendOutcome;

/// What was sent
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryKind {
    /// Daily message with a new word
    Capsule,
    /// Daily message with a word due for review
    Review,
    /// One message listing all due reviews
    ReviewDigest,
}

/// How a send attempt ended
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    Sent,
    Failed,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeliveryRecord {
    pub timestamp: DateTime<Utc>,
    pub kind: DeliveryKind,
    /// Full `"word - definition"` keys
    pub vocab: Vec<String>,
    pub outcome: DeliveryStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure: Option<String>,
}

impl DeliveryRecord {
    pub fn new(kind: DeliveryKind, vocab: Vec<String>, outcome: &SendOutcome) -> Self {
        let (status, message_id, failure) = match outcome {
            SendOutcome::Sent { message_id } => (DeliveryStatus::Sent, message_id.clone(), None),
            SendOutcome::Failed(f) => (DeliveryStatus::Failed, None, Some(f.to_string())),
        };
        Self {
            timestamp: Utc::now(),
            kind,
            vocab,
            outcome: status,
            message_id,
            failure,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeliverySummary {
    pub total: usize,
    pub sent: usize,
    pub failed: usize,
}

pub struct DeliveryLog {
    path: PathBuf,
}

impl DeliveryLog {
    pub fn new(path: PathBuf) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create delivery log directory: {}", parent.display())
            })?;
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record
    pub fn log(&self, record: &DeliveryRecord) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open delivery log: {}", self.path.display()))?;

        let json = serde_json::to_string(record).context("Failed to serialize delivery record")?;
        writeln!(file, "{}", json).context("Failed to write delivery record")?;
        Ok(())
    }

    pub fn read_all(&self) -> Result<Vec<DeliveryRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read delivery log: {}", self.path.display()))?;

        contents
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(serde_json::from_str)
            .collect::<Result<Vec<_>, _>>()
            .context("Failed to parse delivery log")
    }

    pub fn summary(&self) -> Result<DeliverySummary> {
        let records = self.read_all()?;
        let sent = records
            .iter()
            .filter(|r| r.outcome == DeliveryStatus::Sent)
            .count();
        Ok(DeliverySummary {
            total: records.len(),
            sent,
            failed: records.len() - sent,
        })
    }
}
