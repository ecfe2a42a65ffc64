//! SQL statement templates for the benchmark tables.
//!
//! Column names are quoted because the tables use mixed-case identifiers.
//! Table names are interpolated as-is, which is only safe because
//! [`TableName`] accepts plain identifiers exclusively.

use crate::domain::TableName;

/// Parameterized insert of one row: `$1` is the name, `$2` the flag.
pub fn insert_item(table: &TableName) -> String {
    format!(
        "INSERT INTO {} (\"Name\", \"IsSpecial\")\nVALUES ($1, $2);",
        table
    )
}

/// Select every special row of a table.
pub fn read_special_items(table: &TableName) -> String {
    format!("SELECT * FROM {} WHERE \"IsSpecial\" = true;", table)
}
