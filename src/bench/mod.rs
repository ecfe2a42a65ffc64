//! Benchmark flow: fill both tables, wait, then time the special-items reads.
//!
//! Every step runs sequentially. Each phase opens one connection, uses it
//! for both tables and closes it; a failure while closing is combined with
//! any failure of the phase itself.

use crate::config::Config;
use crate::domain::TableName;
use crate::error::{BenchError, BenchResult};
use crate::metrics::{Metrics, QueryTimer};
use crate::models::ItemGenerator;
use crate::report::{BenchmarkReport, TableTiming};
use crate::repositories::{Database, ItemRepository};
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Runs the boolean index benchmark against a [`Database`].
pub struct BenchmarkRunner {
    config: Config,
    database: Arc<dyn Database>,
    metrics: Metrics,
}

impl BenchmarkRunner {
    pub fn new(config: Config, database: Arc<dyn Database>) -> Self {
        Self {
            config,
            database,
            metrics: Metrics::new(),
        }
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Run the whole benchmark: fill, settle, read.
    pub async fn run(&self) -> BenchResult<BenchmarkReport> {
        info!(
            "Data Size: {}, Special Item Rarity: 1 of {}.",
            self.config.data_size, self.config.special_item_rarity
        );

        let started_at = Utc::now();

        self.fill_tables().await?;

        info!("Sleeping ...");
        tokio::time::sleep(self.config.settle_delay()).await;

        let work_times = self.read_special_items_from_tables().await?;

        Ok(BenchmarkReport {
            started_at,
            data_size: self.config.data_size,
            special_item_rarity: self.config.special_item_rarity,
            expected_special_items: self.config.expected_special_items,
            work_times,
        })
    }

    /// Fill both tables over a single connection.
    pub async fn fill_tables(&self) -> BenchResult<()> {
        let mut repo = self.database.connect().await?;

        let result = self.fill_all(repo.as_mut()).await;
        let cleanup = repo.disconnect().await;

        BenchError::combine(result, cleanup)
    }

    async fn fill_all(&self, repo: &mut dyn ItemRepository) -> BenchResult<()> {
        for table in self.config.tables() {
            info!("Filling the {} table ...", table);
            self.fill_table(repo, table).await?;
        }
        Ok(())
    }

    /// Insert every generated row into one table.
    ///
    /// Each insert must affect exactly one row.
    pub async fn fill_table(
        &self,
        repo: &mut dyn ItemRepository,
        table: &TableName,
    ) -> BenchResult<()> {
        let items = ItemGenerator::new(self.config.data_size, self.config.special_item_rarity);

        for (row, item) in items {
            let rows_affected = repo.insert_item(table, &item).await?;
            if rows_affected != 1 {
                warn!(table = %table, row, rows_affected, "Insert did not affect exactly one row");
                return Err(BenchError::RowNotInserted {
                    table: table.to_string(),
                    row,
                    rows_affected,
                });
            }
            self.metrics.record_row_inserted(item.is_special);
        }

        debug!(table = %table, rows = self.config.data_size, "Table filled");
        Ok(())
    }

    /// Read the special items of both tables over a single connection.
    ///
    /// Returns one timing per table, in read order.
    pub async fn read_special_items_from_tables(&self) -> BenchResult<Vec<TableTiming>> {
        let mut repo = self.database.connect().await?;

        let result = self.read_all(repo.as_mut()).await;
        let cleanup = repo.disconnect().await;

        BenchError::combine(result, cleanup)
    }

    async fn read_all(&self, repo: &mut dyn ItemRepository) -> BenchResult<Vec<TableTiming>> {
        let mut work_times = Vec::with_capacity(2);
        for table in self.config.tables() {
            work_times.push(self.read_table(repo, table).await?);
        }
        Ok(work_times)
    }

    /// Time one read of the special items of a table.
    ///
    /// The measured time covers preparing the statement, running it and
    /// iterating every returned row.
    pub async fn read_table(
        &self,
        repo: &mut dyn ItemRepository,
        table: &TableName,
    ) -> BenchResult<TableTiming> {
        let timer = QueryTimer::new(self.metrics.clone());

        let items_read = match repo.read_special_items(table).await {
            Ok(count) => count,
            Err(e) => {
                timer.complete_with_error();
                return Err(e);
            }
        };
        let elapsed = timer.complete();
        self.metrics.record_rows_read(items_read);

        debug!(
            table = %table,
            items_read,
            elapsed_us = elapsed.as_micros() as u64,
            "Special items read"
        );

        let expected = self.config.expected_special_items;
        if items_read != expected {
            return Err(BenchError::ItemsCountMismatch {
                table: table.to_string(),
                expected,
                actual: items_read,
            });
        }

        Ok(TableTiming {
            table: table.clone(),
            elapsed,
            items_read,
        })
    }
}
