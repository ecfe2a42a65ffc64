//! Error types for the boolean index benchmark.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Errors that can occur while filling or reading the benchmark tables.
#[derive(Error, Debug)]
pub enum BenchError {
    /// The database driver reported an error
    #[error("Database error: {0}")]
    Database(#[from] tokio_postgres::Error),

    /// An insert did not affect exactly one row
    #[error("row has not been inserted (table {table}, row {row}, affected {rows_affected})")]
    RowNotInserted {
        table: String,
        row: usize,
        rows_affected: u64,
    },

    /// A read returned an unexpected number of special items
    #[error("items count mismatch (table {table}): expected {expected}, got {actual}")]
    ItemsCountMismatch {
        table: String,
        expected: usize,
        actual: usize,
    },

    /// The connection task failed or could not be joined
    #[error("Connection error: {0}")]
    Connection(String),

    /// A primary error combined with errors raised during cleanup
    #[error("{}", join_errors(.0))]
    Multiple(Vec<BenchError>),
}

impl BenchError {
    /// Combine the outcome of a phase with the outcome of its cleanup.
    ///
    /// A cleanup failure is never dropped: it is returned on its own when the
    /// phase succeeded, or appended to the primary error when it did not.
    pub fn combine<T>(primary: BenchResult<T>, cleanup: BenchResult<()>) -> BenchResult<T> {
        match (primary, cleanup) {
            (Ok(value), Ok(())) => Ok(value),
            (Ok(_), Err(cleanup_err)) => Err(cleanup_err),
            (Err(primary_err), Ok(())) => Err(primary_err),
            (Err(primary_err), Err(cleanup_err)) => {
                let mut errors = primary_err.into_errors();
                errors.extend(cleanup_err.into_errors());
                Err(BenchError::Multiple(errors))
            }
        }
    }

    /// Flatten this error into its component errors.
    pub fn into_errors(self) -> Vec<BenchError> {
        match self {
            BenchError::Multiple(errors) => errors,
            other => vec![other],
        }
    }

    /// Whether this error, or any error combined into it, is a count mismatch.
    pub fn is_count_mismatch(&self) -> bool {
        match self {
            BenchError::ItemsCountMismatch { .. } => true,
            BenchError::Multiple(errors) => errors.iter().any(BenchError::is_count_mismatch),
            _ => false,
        }
    }
}

fn join_errors(errors: &[BenchError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BenchError
pub type BenchResult<T> = Result<T, BenchError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
