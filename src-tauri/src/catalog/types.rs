use serde::{Deserialize, Serialize};

/// A product about to be saved, as produced by the scan pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub brand: String,
    /// Free text; the vision model returns arbitrary labels.
    pub product_type: String,
    /// Data URI or remote URL of the captured photo.
    pub image_ref: String,
    pub description: String,
    pub usage_time: String,
    pub ingredients: Vec<String>,
    pub benefits: Vec<String>,
}

/// A product in the user's catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedProduct {
    pub id: i64,
    pub name: String,
    pub brand: String,
    pub product_type: String,
    pub image_ref: String,
    pub description: String,
    pub usage_time: String,
    pub ingredients: Vec<String>,
    pub benefits: Vec<String>,
    pub date_added: String,
    /// User-curated daily-use flag; no scheduling semantics.
    pub in_routine: bool,
    /// Whether the record has reached the hosted data store.
    pub synced: bool,
}
