//! Boolean Index Bench - measures PostgreSQL queries that filter a rare boolean column.
//!
//! The benchmark fills two tables with synthetic rows, one row in every
//! thousand flagged as special, waits for the database to settle, and then
//! times a query selecting only the special rows of each table.
//!
//! # Architecture
//!
//! - **config**: Configuration management from environment variables
//! - **error**: Custom error types for precise error handling
//! - **domain**: Validated table names
//! - **models**: Benchmark rows and their deterministic generator
//! - **sql**: Insert and select statement templates
//! - **client**: PostgreSQL connection handling
//! - **repositories**: Database seam used by the benchmark (PostgreSQL or mock)
//! - **bench**: The fill, settle and read flow
//! - **metrics**: Counters collected during a run
//! - **report**: Per-table work times in text or JSON form

pub mod bench;
pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod models;
pub mod report;
pub mod repositories;
pub mod sql;

pub use bench::BenchmarkRunner;
pub use client::PgClient;
pub use config::Config;
pub use domain::TableName;
pub use error::{BenchError, BenchResult, ConfigError};
pub use metrics::{Metrics, MetricsSummary, QueryTimer};
pub use models::{expected_special_count, Item, ItemGenerator};
pub use report::{BenchmarkReport, ReportFormat, TableTiming};
pub use repositories::{Database, ItemRepository, PgDatabase, PgItemRepository};
