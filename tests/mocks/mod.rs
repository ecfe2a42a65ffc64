//! In-memory test doubles for the database seam.

pub mod mock_database;

#[allow(unused_imports)]
pub use mock_database::{test_config, MockDatabase};
