//! Domain value objects and types.
//!
//! Table names end up inside SQL text, so they are wrapped in a value object
//! that validates them at construction time.

pub mod errors;
pub mod table_name;

pub use errors::ValidationError;
pub use table_name::TableName;
