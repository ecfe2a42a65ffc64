use crate::client::PgClient;
use crate::config::Config;
use crate::domain::TableName;
use crate::error::BenchResult;
use crate::models::Item;
use crate::repositories::traits::{Database, ItemRepository};
use crate::sql;
use async_trait::async_trait;
use futures::{pin_mut, TryStreamExt};
use std::collections::HashMap;
use tokio_postgres::Statement;

/// PostgreSQL database reachable through a connection string.
pub struct PgDatabase {
    dsn: String,
}

impl PgDatabase {
    /// Create a PgDatabase from configuration.
    pub fn new(config: &Config) -> Self {
        Self { dsn: config.dsn() }
    }

    /// Create a PgDatabase with an explicit connection string.
    pub fn with_dsn(dsn: impl Into<String>) -> Self {
        Self { dsn: dsn.into() }
    }
}

#[async_trait]
impl Database for PgDatabase {
    async fn connect(&self) -> BenchResult<Box<dyn ItemRepository>> {
        let client = PgClient::connect(&self.dsn).await?;
        Ok(Box::new(PgItemRepository::new(client)))
    }
}

/// Item repository implementation over a single PostgreSQL connection.
///
/// The insert statement is prepared the first time a table is written and
/// reused for every following row. The read statement is prepared on every
/// read so its preparation is part of the measured time.
pub struct PgItemRepository {
    client: PgClient,
    insert_statements: HashMap<TableName, Statement>,
}

impl PgItemRepository {
    /// Create a new PgItemRepository over an open connection.
    pub fn new(client: PgClient) -> Self {
        Self {
            client,
            insert_statements: HashMap::new(),
        }
    }

    async fn insert_statement(&mut self, table: &TableName) -> BenchResult<Statement> {
        if let Some(statement) = self.insert_statements.get(table) {
            return Ok(statement.clone());
        }

        let statement = self
            .client
            .client()?
            .prepare(&sql::insert_item(table))
            .await?;
        tracing::debug!(table = %table, "Prepared insert statement");
        self.insert_statements
            .insert(table.clone(), statement.clone());
        Ok(statement)
    }
}

#[async_trait]
impl ItemRepository for PgItemRepository {
    async fn insert_item(&mut self, table: &TableName, item: &Item) -> BenchResult<u64> {
        let statement = self.insert_statement(table).await?;
        let rows_affected = self
            .client
            .client()?
            .execute(&statement, &[&item.name, &item.is_special])
            .await?;
        Ok(rows_affected)
    }

    async fn read_special_items(&mut self, table: &TableName) -> BenchResult<usize> {
        let client = self.client.client()?;
        let statement = client.prepare(&sql::read_special_items(table)).await?;

        let rows = client
            .query_raw(&statement, std::iter::empty::<&str>())
            .await?;
        pin_mut!(rows);

        let mut items_count = 0;
        while rows.try_next().await?.is_some() {
            items_count += 1;
        }

        Ok(items_count)
    }

    async fn disconnect(&mut self) -> BenchResult<()> {
        // Prepared statements are closed server-side when dropped.
        self.insert_statements.clear();
        self.client.close().await
    }
}
