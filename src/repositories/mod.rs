mod pg_item_repository;
mod traits;

pub use pg_item_repository::{PgDatabase, PgItemRepository};
pub use traits::{Database, ItemRepository};
