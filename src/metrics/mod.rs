//! Counters collected during a benchmark run.
//!
//! Tracks inserted rows, read queries and their durations. A summary is logged
//! at the end of the run next to the per-table work times.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Metrics collector for one benchmark run.
#[derive(Debug, Clone)]
pub struct Metrics {
    /// Rows inserted across all tables
    rows_inserted_total: Arc<AtomicU64>,

    /// Special rows inserted across all tables
    special_rows_inserted_total: Arc<AtomicU64>,

    /// Read queries executed
    read_queries_total: Arc<AtomicU64>,

    /// Read queries that failed
    read_errors_total: Arc<AtomicU64>,

    /// Total duration of all read queries in microseconds
    read_duration_total_us: Arc<AtomicU64>,

    /// Rows returned by all read queries
    rows_read_total: Arc<AtomicU64>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self {
            rows_inserted_total: Arc::new(AtomicU64::new(0)),
            special_rows_inserted_total: Arc::new(AtomicU64::new(0)),
            read_queries_total: Arc::new(AtomicU64::new(0)),
            read_errors_total: Arc::new(AtomicU64::new(0)),
            read_duration_total_us: Arc::new(AtomicU64::new(0)),
            rows_read_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Record one inserted row.
    pub fn record_row_inserted(&self, is_special: bool) {
        self.rows_inserted_total.fetch_add(1, Ordering::Relaxed);
        if is_special {
            self.special_rows_inserted_total
                .fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Record a read query with duration.
    pub fn record_read_query(&self, duration: Duration) {
        self.read_queries_total.fetch_add(1, Ordering::Relaxed);
        self.read_duration_total_us
            .fetch_add(duration.as_micros() as u64, Ordering::Relaxed);
    }

    /// Record a failed read query.
    pub fn record_read_error(&self) {
        self.read_errors_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record rows returned by a read query.
    pub fn record_rows_read(&self, count: usize) {
        self.rows_read_total
            .fetch_add(count as u64, Ordering::Relaxed);
    }

    pub fn rows_inserted_total(&self) -> u64 {
        self.rows_inserted_total.load(Ordering::Relaxed)
    }

    pub fn special_rows_inserted_total(&self) -> u64 {
        self.special_rows_inserted_total.load(Ordering::Relaxed)
    }

    pub fn read_queries_total(&self) -> u64 {
        self.read_queries_total.load(Ordering::Relaxed)
    }

    pub fn read_errors_total(&self) -> u64 {
        self.read_errors_total.load(Ordering::Relaxed)
    }

    pub fn read_duration_total_us(&self) -> u64 {
        self.read_duration_total_us.load(Ordering::Relaxed)
    }

    pub fn rows_read_total(&self) -> u64 {
        self.rows_read_total.load(Ordering::Relaxed)
    }

    /// Get average read duration in microseconds.
    pub fn read_duration_avg_us(&self) -> f64 {
        let total = self.read_duration_total_us.load(Ordering::Relaxed);
        let count = self.read_queries_total.load(Ordering::Relaxed);
        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    }

    /// Get a summary of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            rows_inserted_total: self.rows_inserted_total(),
            special_rows_inserted_total: self.special_rows_inserted_total(),
            read_queries_total: self.read_queries_total(),
            read_errors_total: self.read_errors_total(),
            read_duration_total_us: self.read_duration_total_us(),
            read_duration_avg_us: self.read_duration_avg_us(),
            rows_read_total: self.rows_read_total(),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone)]
pub struct MetricsSummary {
    pub rows_inserted_total: u64,
    pub special_rows_inserted_total: u64,
    pub read_queries_total: u64,
    pub read_errors_total: u64,
    pub read_duration_total_us: u64,
    pub read_duration_avg_us: f64,
    pub rows_read_total: u64,
}

/// Helper for timing read queries.
pub struct QueryTimer {
    start: Instant,
    metrics: Metrics,
}

impl QueryTimer {
    /// Start timing a read query.
    pub fn new(metrics: Metrics) -> Self {
        Self {
            start: Instant::now(),
            metrics,
        }
    }

    /// Complete the timing, record it and return the elapsed time.
    pub fn complete(self) -> Duration {
        let duration = self.start.elapsed();
        self.metrics.record_read_query(duration);
        duration
    }

    /// Complete the timing and record it as an error.
    pub fn complete_with_error(self) -> Duration {
        let duration = self.start.elapsed();
        self.metrics.record_read_query(duration);
        self.metrics.record_read_error();
        duration
    }
}
