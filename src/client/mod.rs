//! PostgreSQL connection handling.
//!
//! `tokio-postgres` splits a connection into a `Client`, used to issue
//! statements, and a connection future that performs the actual I/O. The
//! future runs on a spawned task for as long as the [`PgClient`] is open and is
//! joined on [`PgClient::close`], so errors raised while shutting the
//! connection down are reported instead of lost.

use crate::error::{BenchError, BenchResult};
use tokio::task::JoinHandle;
use tokio_postgres::{Client, NoTls};

/// An open connection to the benchmark database.
pub struct PgClient {
    client: Option<Client>,
    connection: Option<JoinHandle<Result<(), tokio_postgres::Error>>>,
}

impl PgClient {
    /// Open a connection using a `postgresql://` connection string.
    pub async fn connect(dsn: &str) -> BenchResult<Self> {
        let (client, connection) = tokio_postgres::connect(dsn, NoTls).await?;
        let connection = tokio::spawn(connection);

        tracing::debug!("Database connection established");

        Ok(Self {
            client: Some(client),
            connection: Some(connection),
        })
    }

    /// Borrow the driver client.
    ///
    /// Fails once the connection has been closed.
    pub fn client(&self) -> BenchResult<&Client> {
        self.client
            .as_ref()
            .ok_or_else(|| BenchError::Connection("Connection already closed".to_string()))
    }

    /// Whether [`PgClient::close`] has not been called yet.
    pub fn is_open(&self) -> bool {
        self.client.is_some()
    }

    /// Close the connection and wait for the connection task to finish.
    ///
    /// Dropping the client makes the connection send a terminate message and
    /// resolve. Closing twice is a no-op.
    pub async fn close(&mut self) -> BenchResult<()> {
        drop(self.client.take());

        let Some(connection) = self.connection.take() else {
            return Ok(());
        };

        match connection.await {
            Ok(Ok(())) => {
                tracing::debug!("Database connection closed");
                Ok(())
            }
            Ok(Err(e)) => {
                tracing::error!("Database connection failed while closing: {}", e);
                Err(BenchError::Database(e))
            }
            Err(e) => Err(BenchError::Connection(format!("Task join error: {}", e))),
        }
    }
}

impl Drop for PgClient {
    fn drop(&mut self) {
        if let Some(connection) = self.connection.take() {
            connection.abort();
        }
    }
}
