//! TableName value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Longest identifier PostgreSQL keeps without truncation.
pub const MAX_IDENTIFIER_LEN: usize = 63;

/// A table name that is safe to interpolate into SQL text.
///
/// Only ASCII letters, digits and underscores are accepted, and the name
/// may not start with a digit.
///
/// # Example
///
/// ```
/// use boolean_index_bench::domain::TableName;
///
/// let table = TableName::new("boolean_index_table_a").unwrap();
/// assert_eq!(table.as_str(), "boolean_index_table_a");
/// assert!(TableName::new("items; DROP TABLE items").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableName(String);

impl TableName {
    /// Create a new TableName, validating that it is a plain identifier.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyTableName` for an empty name and
    /// `ValidationError::InvalidTableName` for anything else that is not a
    /// plain identifier.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::EmptyTableName);
        }

        let starts_with_digit = name.chars().next().is_some_and(|c| c.is_ascii_digit());
        let valid_chars = name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');

        if starts_with_digit || !valid_chars || name.len() > MAX_IDENTIFIER_LEN {
            return Err(ValidationError::InvalidTableName(name));
        }

        Ok(Self(name))
    }

    /// Wrap a name known to be a valid identifier at compile time.
    pub(crate) fn from_static(name: &'static str) -> Self {
        debug_assert!(Self::new(name).is_ok(), "invalid table name: {}", name);
        Self(name.to_string())
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Serialize for TableName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TableName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        TableName::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
