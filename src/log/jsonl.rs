//! JSONL (JSON Lines) history of resolutions
//!
//! Provides append-only logging of resolved flags to `<dir>/log.jsonl`

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write as IoWrite;
use std::path::{Path, PathBuf};

use crate::business::{DisplayValue, TriState};

/// A single evaluation of the display value resolver
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Resolution {
    /// ISO 8601 timestamp of when the flag was resolved
    pub timestamp: DateTime<Utc>,
    /// The flag that was resolved (`null` when absent)
    pub input: Option<bool>,
    /// The label it resolved to
    pub output: DisplayValue,
}

impl Resolution {
    /// Resolve a flag now and record the result
    #[must_use]
    pub fn new(flag: TriState) -> Self {
        Self {
            timestamp: Utc::now(),
            input: flag.as_option(),
            output: flag.display_value(),
        }
    }
}

/// Per-label counts over a set of resolutions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    /// Number of `maybe` resolutions
    pub maybe: usize,
    /// Number of `yes` resolutions
    pub yes: usize,
    /// Number of `no` resolutions
    pub no: usize,
}

impl Tally {
    /// Total number of resolutions counted
    #[must_use]
    pub const fn total(&self) -> usize {
        self.maybe + self.yes + self.no
    }
}

/// Count resolutions per label
#[must_use]
pub fn tally(resolutions: &[Resolution]) -> Tally {
    let mut counts = Tally::default();
    for resolution in resolutions {
        match resolution.output {
            DisplayValue::Maybe => counts.maybe += 1,
            DisplayValue::Yes => counts.yes += 1,
            DisplayValue::No => counts.no += 1,
        }
    }
    counts
}

/// JSONL logger for resolution history
///
/// Provides append-only logging to `<dir>/log.jsonl`.
/// Each line is a JSON object representing a single resolution.
pub struct JsonlLogger {
    log_path: PathBuf,
}

impl JsonlLogger {
    /// Create a new JSONL logger
    ///
    /// # Arguments
    /// * `log_dir` - Directory where log.jsonl will be stored (typically `.mybusiness`)
    ///
    /// # Errors
    /// Returns an error if the log directory cannot be created
    pub fn new<P: AsRef<Path>>(log_dir: P) -> Result<Self> {
        let log_dir = log_dir.as_ref();

        fs::create_dir_all(log_dir)
            .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

        Ok(Self {
            log_path: log_dir.join("log.jsonl"),
        })
    }

    /// Append a resolution to the log
    ///
    /// # Errors
    /// Returns an error if:
    /// - The log file cannot be opened or created
    /// - The resolution cannot be serialized to JSON
    /// - Writing to the file fails
    pub fn append(&self, resolution: &Resolution) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .with_context(|| format!("Failed to open log file: {}", self.log_path.display()))?;

        let json =
            serde_json::to_string(resolution).context("Failed to serialize resolution to JSON")?;

        writeln!(file, "{json}").context("Failed to write to log file")?;

        Ok(())
    }

    /// Read all resolutions from the log, in the order they were written
    ///
    /// # Errors
    /// Returns an error if:
    /// - The log file cannot be read
    /// - Any line cannot be parsed as valid JSON
    pub fn read_all(&self) -> Result<Vec<Resolution>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.log_path)
            .with_context(|| format!("Failed to read log file: {}", self.log_path.display()))?;

        let mut resolutions = Vec::new();

        for (line_num, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let resolution: Resolution = serde_json::from_str(line)
                .with_context(|| format!("Failed to parse line {} as JSON", line_num + 1))?;

            resolutions.push(resolution);
        }

        Ok(resolutions)
    }

    /// Get the path to the log file
    #[must_use]
    pub fn log_path(&self) -> &Path {
        &self.log_path
    }
}
