//! Benchmark report and its output formats.

use crate::domain::TableName;
use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// How the final report is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// One `Work time` line per table
    #[default]
    Text,

    /// A single JSON document
    Json,
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            other => Err(format!("Must be \"text\" or \"json\", got: {}", other)),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "text"),
            ReportFormat::Json => write!(f, "json"),
        }
    }
}

fn serialize_micros<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_u64(duration.as_micros() as u64)
}

/// Timing of one read of the special items of a table.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TableTiming {
    /// Table that was read
    pub table: TableName,

    /// Wall time of prepare, query and row iteration
    #[serde(rename = "elapsed_us", serialize_with = "serialize_micros")]
    pub elapsed: Duration,

    /// Rows returned by the read
    pub items_read: usize,
}

/// Outcome of a complete benchmark run.
#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkReport {
    /// When the fill phase started
    pub started_at: DateTime<Utc>,

    /// Rows inserted into each table
    pub data_size: usize,

    /// One row in this many is special
    pub special_item_rarity: usize,

    /// Rows each read had to return
    pub expected_special_items: usize,

    /// Per-table read timings, in read order
    pub work_times: Vec<TableTiming>,
}

impl BenchmarkReport {
    /// Render the `Work time #<n>: <us> mcs.` lines, numbered from 1.
    pub fn work_time_lines(&self) -> Vec<String> {
        self.work_times
            .iter()
            .enumerate()
            .map(|(i, timing)| {
                let micros = timing.elapsed.as_micros();
                format!("Work time #{}: {} mcs.", i + 1, micros)
            })
            .collect()
    }

    /// Render the report in the requested format.
    pub fn render(&self, format: ReportFormat) -> serde_json::Result<String> {
        match format {
            ReportFormat::Text => Ok(self.work_time_lines().join("\n")),
            ReportFormat::Json => serde_json::to_string_pretty(self),
        }
    }
}
