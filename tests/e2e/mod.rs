//! End-to-end test utilities and shared configuration.
//!
//! These helpers talk to a live PostgreSQL server. Point them at one with
//! `TEST_DATABASE_URL` (or the regular `DATABASE_*` variables) and run the
//! ignored tests explicitly: `cargo test -- --ignored`.

use boolean_index_bench::{Config, PgClient, TableName};
use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

/// Connection string for the test database.
pub fn test_dsn() -> String {
    dotenvy::dotenv().ok();

    env::var("TEST_DATABASE_URL").unwrap_or_else(|_| {
        Config::from_env()
            .expect("DATABASE_* variables must be valid for E2E tests")
            .dsn()
    })
}

/// A pair of freshly created benchmark tables, dropped by `drop_tables`.
pub struct TestTables {
    pub table_a: TableName,
    pub table_b: TableName,
}

impl TestTables {
    /// Create two empty tables with the benchmark layout and unique names.
    pub async fn create(dsn: &str) -> Self {
        let suffix = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let tables = Self {
            table_a: TableName::new(format!("bib_e2e_a_{}", suffix)).unwrap(),
            table_b: TableName::new(format!("bib_e2e_b_{}", suffix)).unwrap(),
        };

        let mut client = PgClient::connect(dsn).await.expect("connect for setup");
        for table in [&tables.table_a, &tables.table_b] {
            client
                .client()
                .unwrap()
                .batch_execute(&format!(
                    "CREATE TABLE {} (\"Name\" TEXT NOT NULL, \"IsSpecial\" BOOLEAN NOT NULL);\n\
                     CREATE INDEX {}_is_special ON {} (\"IsSpecial\");",
                    table, table, table
                ))
                .await
                .expect("create test table");
        }
        client.close().await.expect("close setup connection");

        tables
    }

    /// Drop both tables.
    pub async fn drop_tables(self, dsn: &str) {
        let mut client = PgClient::connect(dsn).await.expect("connect for teardown");
        client
            .client()
            .unwrap()
            .batch_execute(&format!(
                "DROP TABLE IF EXISTS {}; DROP TABLE IF EXISTS {};",
                self.table_a, self.table_b
            ))
            .await
            .expect("drop test tables");
        client.close().await.expect("close teardown connection");
    }

    /// Benchmark configuration targeting these tables.
    pub fn config(&self, dsn: &str, data_size: usize) -> Config {
        Config {
            database_url: Some(dsn.to_string()),
            data_size,
            expected_special_items: data_size / 1000,
            settle_delay_secs: 0,
            table_a: self.table_a.clone(),
            table_b: self.table_b.clone(),
            ..Config::default()
        }
    }
}
