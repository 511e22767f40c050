//! Per-user product catalog: SQLite store plus an on-disk JSON mirror.

pub mod mirror;
pub mod store;
pub mod types;

pub use store::ProductCatalog;
pub use types::{NewProduct, SavedProduct};
