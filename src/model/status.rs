use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PublishingStatus {
    InProgress,
    Successful,
    Failed,
}

impl PublishingStatus {
    /// SUCCESSFUL and FAILED end the observable lifecycle of a record.
    pub fn is_terminal(self) -> bool {
        matches!(self, PublishingStatus::Successful | PublishingStatus::Failed)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PublishingStatus::InProgress => "IN_PROGRESS",
            PublishingStatus::Successful => "SUCCESSFUL",
            PublishingStatus::Failed => "FAILED",
        }
    }

    fn verb(self) -> &'static str {
        match self {
            PublishingStatus::InProgress => "started",
            PublishingStatus::Successful => "completed",
            PublishingStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for PublishingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One state transition of a publishing record. Records are only ever
/// appended; the history of a record id is the sequence of its records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusRecord {
    pub publishing_record_id: String,
    pub book_id: Option<String>,
    pub status: PublishingStatus,
    pub status_message: Option<String>,
    pub timestamp: SystemTime,
}

impl StatusRecord {
    /// Build a record stamped now, with the default status message.
    pub fn new(
        publishing_record_id: impl Into<String>,
        status: PublishingStatus,
        book_id: Option<&str>,
        reason: Option<&str>,
    ) -> Self {
        let timestamp = SystemTime::now();
        Self {
            publishing_record_id: publishing_record_id.into(),
            book_id: book_id.map(str::to_string),
            status,
            status_message: Some(status_message(status, timestamp, reason)),
            timestamp,
        }
    }
}

/// `Processing <verb> at <epoch ms>`, plus the reason when there is one.
fn status_message(status: PublishingStatus, at: SystemTime, reason: Option<&str>) -> String {
    let millis = at
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    let mut message = format!("Processing {} at {}", status.verb(), millis);
    if let Some(reason) = reason.filter(|r| !r.is_empty()) {
        message.push_str(". Additional notes: ");
        message.push_str(reason);
    }
    message
}
