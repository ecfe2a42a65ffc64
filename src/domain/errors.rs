//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided table name is empty.
    EmptyTableName,

    /// The provided table name is not a plain SQL identifier.
    InvalidTableName(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTableName => write!(f, "Table name cannot be empty"),
            Self::InvalidTableName(name) => write!(f, "Invalid table name: {}", name),
        }
    }
}

impl std::error::Error for ValidationError {}
