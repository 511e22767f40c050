//! User profile types and on-disk store.

pub mod store;
pub mod types;

pub use store::ProfileStore;
pub use types::{BudgetBand, ExperienceLevel, SkinType, UserProfile};
