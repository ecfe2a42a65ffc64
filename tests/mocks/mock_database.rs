use async_trait::async_trait;
use boolean_index_bench::error::{BenchError, BenchResult};
use boolean_index_bench::{Config, Database, Item, ItemRepository, TableName};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Configuration for mock runs: reference sizes, no settle delay.
#[allow(dead_code)]
pub fn test_config(data_size: usize) -> Config {
    Config {
        data_size,
        expected_special_items: data_size / 1000,
        settle_delay_secs: 0,
        ..Config::default()
    }
}

#[derive(Default)]
struct MockState {
    tables: HashMap<String, Vec<Item>>,
    call_counts: HashMap<String, usize>,
    connections_opened: usize,
    open_connections: usize,
    inserts: usize,
    fail_connect: bool,
    fail_insert_at: Option<usize>,
    rows_affected_at: Option<(usize, u64)>,
    fail_read_of: Option<String>,
    read_count_override: Option<usize>,
    fail_disconnect: bool,
}

/// Mock database holding the benchmark tables in memory.
///
/// Tables must be registered with `add_table` before rows can be inserted,
/// mirroring a database where the tables already exist.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockDatabase {
    state: Arc<Mutex<MockState>>,
}

#[allow(dead_code)]
impl MockDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mock database with both default benchmark tables present.
    pub fn with_default_tables() -> Self {
        let db = Self::new();
        db.add_table("boolean_index_table_a");
        db.add_table("boolean_index_table_b");
        db
    }

    pub fn add_table(&self, name: &str) {
        let mut state = self.state.lock().unwrap();
        state.tables.entry(name.to_string()).or_default();
    }

    pub fn table_rows(&self, name: &str) -> Vec<Item> {
        let state = self.state.lock().unwrap();
        state.tables.get(name).cloned().unwrap_or_default()
    }

    pub fn fail_connect(&self) {
        self.state.lock().unwrap().fail_connect = true;
    }

    /// Make the n-th insert (1-based, across all tables) fail.
    pub fn fail_insert_at(&self, n: usize) {
        self.state.lock().unwrap().fail_insert_at = Some(n);
    }

    /// Make the n-th insert (1-based, across all tables) report this row count.
    pub fn rows_affected_at(&self, n: usize, rows_affected: u64) {
        self.state.lock().unwrap().rows_affected_at = Some((n, rows_affected));
    }

    pub fn fail_read_of(&self, table: &str) {
        self.state.lock().unwrap().fail_read_of = Some(table.to_string());
    }

    /// Make every read return this many rows regardless of the table contents.
    pub fn override_read_count(&self, count: usize) {
        self.state.lock().unwrap().read_count_override = Some(count);
    }

    pub fn fail_disconnect(&self) {
        self.state.lock().unwrap().fail_disconnect = true;
    }

    pub fn connections_opened(&self) -> usize {
        self.state.lock().unwrap().connections_opened
    }

    pub fn open_connections(&self) -> usize {
        self.state.lock().unwrap().open_connections
    }

    pub fn get_call_count(&self, method: &str) -> usize {
        let state = self.state.lock().unwrap();
        *state.call_counts.get(method).unwrap_or(&0)
    }

    /// Open a connection without going through the trait object.
    pub fn open(&self) -> MockItemRepository {
        let mut state = self.state.lock().unwrap();
        state.connections_opened += 1;
        state.open_connections += 1;
        MockItemRepository {
            state: self.state.clone(),
            connected: true,
        }
    }
}

#[async_trait]
impl Database for MockDatabase {
    async fn connect(&self) -> BenchResult<Box<dyn ItemRepository>> {
        if self.state.lock().unwrap().fail_connect {
            return Err(BenchError::Connection("connection refused".to_string()));
        }
        Ok(Box::new(self.open()))
    }
}

/// One mock connection.
pub struct MockItemRepository {
    state: Arc<Mutex<MockState>>,
    connected: bool,
}

impl MockItemRepository {
    fn track_call(state: &mut MockState, method: &str) {
        *state.call_counts.entry(method.to_string()).or_insert(0) += 1;
    }

    fn ensure_connected(&self) -> BenchResult<()> {
        if self.connected {
            Ok(())
        } else {
            Err(BenchError::Connection(
                "Connection already closed".to_string(),
            ))
        }
    }
}

#[async_trait]
impl ItemRepository for MockItemRepository {
    async fn insert_item(&mut self, table: &TableName, item: &Item) -> BenchResult<u64> {
        self.ensure_connected()?;
        let mut state = self.state.lock().unwrap();
        Self::track_call(&mut state, "insert_item");

        state.inserts += 1;
        let n = state.inserts;

        if state.fail_insert_at == Some(n) {
            return Err(BenchError::Connection("insert failed".to_string()));
        }

        let rows_affected = match state.rows_affected_at {
            Some((at, rows)) if at == n => rows,
            _ => 1,
        };

        let rows = state.tables.get_mut(table.as_str()).ok_or_else(|| {
            BenchError::Connection(format!("relation \"{}\" does not exist", table))
        })?;
        for _ in 0..rows_affected {
            rows.push(item.clone());
        }

        Ok(rows_affected)
    }

    async fn read_special_items(&mut self, table: &TableName) -> BenchResult<usize> {
        self.ensure_connected()?;
        let mut state = self.state.lock().unwrap();
        Self::track_call(&mut state, "read_special_items");

        if state.fail_read_of.as_deref() == Some(table.as_str()) {
            return Err(BenchError::Connection("read failed".to_string()));
        }

        let rows = state.tables.get(table.as_str()).ok_or_else(|| {
            BenchError::Connection(format!("relation \"{}\" does not exist", table))
        })?;
        let count = rows.iter().filter(|item| item.is_special).count();

        Ok(state.read_count_override.unwrap_or(count))
    }

    async fn disconnect(&mut self) -> BenchResult<()> {
        let mut state = self.state.lock().unwrap();
        Self::track_call(&mut state, "disconnect");

        if self.connected {
            self.connected = false;
            state.open_connections -= 1;
        }

        if state.fail_disconnect {
            return Err(BenchError::Connection("disconnect failed".to_string()));
        }
        Ok(())
    }
}
