//! Boolean Index Bench - Main entry point
//!
//! Fills the benchmark tables, waits, times the special-items reads and prints
//! the per-table work times. Configuration comes from the environment.

use anyhow::Result;
use boolean_index_bench::{BenchmarkRunner, Config, Database, PgDatabase};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Configuration first: LOG_LEVEL may come from the .env file it loads
    let config = Config::from_env();

    let log_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    // Logs on stderr, report on stdout
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!("Connecting to {}", config.redacted_dsn());

    let database = Arc::new(PgDatabase::new(&config)) as Arc<dyn Database>;
    let report_format = config.report_format;
    let runner = BenchmarkRunner::new(config, database);

    let report = match runner.run().await {
        Ok(report) => report,
        Err(e) => {
            error!("Benchmark failed: {}", e);
            return Err(e.into());
        }
    };

    println!("{}", report.render(report_format)?);

    let summary = runner.metrics().summary();
    info!(
        rows_inserted = summary.rows_inserted_total,
        special_rows_inserted = summary.special_rows_inserted_total,
        read_queries = summary.read_queries_total,
        rows_read = summary.rows_read_total,
        read_avg_us = summary.read_duration_avg_us,
        "Benchmark complete"
    );

    Ok(())
}
