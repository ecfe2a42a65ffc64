use crate::domain::TableName;
use crate::error::BenchResult;
use crate::models::Item;
use async_trait::async_trait;

/// Source of connections to the benchmark database.
///
/// Each benchmark phase opens its own connection, uses it, and closes it.
#[async_trait]
pub trait Database: Send + Sync {
    /// Open a new connection.
    async fn connect(&self) -> BenchResult<Box<dyn ItemRepository>>;
}

/// One open connection to the benchmark tables.
///
/// Provides abstraction over the driver, enabling different implementations
/// (PostgreSQL, in-memory mock).
#[async_trait]
pub trait ItemRepository: Send {
    /// Insert one row and return the number of rows affected.
    async fn insert_item(&mut self, table: &TableName, item: &Item) -> BenchResult<u64>;

    /// Run the special-items query and return how many rows it yielded.
    ///
    /// Every returned row is consumed before counting completes.
    async fn read_special_items(&mut self, table: &TableName) -> BenchResult<usize>;

    /// Close the connection. Errors here are cleanup errors.
    async fn disconnect(&mut self) -> BenchResult<()>;
}
