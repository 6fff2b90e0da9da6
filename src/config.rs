//! Pipeline configuration, loadable from TOML.
//!
//! ```toml
//! [scheduler]
//! poll_interval_ms = 1000
//! drain_when_busy = false
//!
//! [worker]
//! convert_failure = "record_failed"
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub scheduler: SchedulerConfig,
    pub worker: WorkerConfig,
}

impl PipelineConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Delay between ticks.
    pub poll_interval_ms: u64,
    /// Keep ticking without delay while the previous tick found work.
    pub drain_when_busy: bool,
}

impl SchedulerConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval_ms = u64::try_from(interval.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn with_drain_when_busy(mut self, drain: bool) -> Self {
        self.drain_when_busy = drain;
        self
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 1000,
            drain_when_busy: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkerConfig {
    pub convert_failure: ConvertFailurePolicy,
}

/// What the worker does when conversion fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConvertFailurePolicy {
    /// Write a FAILED record with the conversion error and carry on.
    #[default]
    RecordFailed,
    /// Return the error from `process_one` without a terminal record.
    Propagate,
}
