use std::path::Path;

use rusqlite::{params, Connection, Row};
use tracing::info;

use super::types::{NewProduct, SavedProduct};

/// SQLite store for the product catalog.
/// All operations are synchronous (rusqlite is blocking); commands open a
/// short-lived connection per call, which is fine at this write rate.
pub struct ProductCatalog {
    conn: Connection,
}

impl ProductCatalog {
    /// Create or open the catalog database.
    /// Typically called with: app.path().app_data_dir()?.join("catalog.db")
    pub fn new(db_path: &Path) -> Result<Self, String> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create data dir: {}", e))?;
        }

        let conn = Connection::open(db_path)
            .map_err(|e| format!("Failed to open catalog db: {}", e))?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS products (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                brand TEXT NOT NULL,
                product_type TEXT NOT NULL,
                image_ref TEXT NOT NULL,
                description TEXT NOT NULL,
                usage_time TEXT NOT NULL,
                ingredients_json TEXT NOT NULL DEFAULT '[]',
                benefits_json TEXT NOT NULL DEFAULT '[]',
                date_added TEXT NOT NULL DEFAULT (datetime('now')),
                in_routine INTEGER NOT NULL DEFAULT 0,
                synced INTEGER NOT NULL DEFAULT 0
            )",
            [],
        )
        .map_err(|e| format!("Failed to create products table: {}", e))?;

        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_products_synced ON products(synced)",
            [],
        )
        .map_err(|e| format!("Failed to create sync index: {}", e))?;

        Ok(Self { conn })
    }

    /// Insert a scanned product. Returns the new row id.
    /// Rows start with `synced = false`; the caller flips it after the
    /// remote write succeeds.
    pub fn save(&self, product: &NewProduct) -> Result<i64, String> {
        let ingredients_json = serde_json::to_string(&product.ingredients)
            .map_err(|e| format!("Failed to serialize ingredients: {}", e))?;
        let benefits_json = serde_json::to_string(&product.benefits)
            .map_err(|e| format!("Failed to serialize benefits: {}", e))?;

        self.conn
            .execute(
                "INSERT INTO products
                 (name, brand, product_type, image_ref, description, usage_time,
                  ingredients_json, benefits_json)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                params![
                    product.name,
                    product.brand,
                    product.product_type,
                    product.image_ref,
                    product.description,
                    product.usage_time,
                    ingredients_json,
                    benefits_json,
                ],
            )
            .map_err(|e| format!("Failed to insert product: {}", e))?;

        let id = self.conn.last_insert_rowid();
        info!("Saved product {} ('{}')", id, product.name);
        Ok(id)
    }

    /// List the catalog in insertion order.
    pub fn list(&self) -> Result<Vec<SavedProduct>, String> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, name, brand, product_type, image_ref, description,
                        usage_time, ingredients_json, benefits_json, date_added,
                        in_routine, synced
                 FROM products
                 ORDER BY id ASC",
            )
            .map_err(|e| format!("Failed to prepare query: {}", e))?;

        let rows = stmt
            .query_map([], row_to_product)
            .map_err(|e| format!("Failed to query products: {}", e))?;

        rows.collect::<Result<Vec<_>, _>>()
            .map_err(|e| format!("Failed to collect products: {}", e))
    }

    /// Flip the in-routine flag. Returns the new state.
    pub fn toggle_in_routine(&self, id: i64) -> Result<bool, String> {
        let updated = self
            .conn
            .execute(
                "UPDATE products SET in_routine = NOT in_routine WHERE id = ?1",
                params![id],
            )
            .map_err(|e| format!("Failed to toggle routine flag: {}", e))?;
        if updated == 0 {
            return Err(format!("Product not found: {}", id));
        }

        self.conn
            .query_row(
                "SELECT in_routine FROM products WHERE id = ?1",
                params![id],
                |row| row.get(0),
            )
            .map_err(|e| format!("Failed to read routine flag: {}", e))
    }

    /// Delete a product by id. Removes exactly one row or errors.
    pub fn remove(&self, id: i64) -> Result<(), String> {
        let deleted = self
            .conn
            .execute("DELETE FROM products WHERE id = ?1", params![id])
            .map_err(|e| format!("Failed to delete product: {}", e))?;
        if deleted == 0 {
            return Err(format!("Product not found: {}", id));
        }
        info!("Removed product {}", id);
        Ok(())
    }

    /// Mark a product as present in the hosted store.
    pub fn mark_synced(&self, id: i64) -> Result<(), String> {
        self.conn
            .execute("UPDATE products SET synced = 1 WHERE id = ?1", params![id])
            .map_err(|e| format!("Failed to mark product synced: {}", e))?;
        Ok(())
    }

    /// Products that never reached the hosted store, oldest first.
    /// This is the reconcile query: local and remote are allowed to
    /// diverge, but the divergence is always visible here.
    pub fn list_unsynced(&self) -> Result<Vec<SavedProduct>, String> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, name, brand, product_type, image_ref, description,
                        usage_time, ingredients_json, benefits_json, date_added,
                        in_routine, synced
                 FROM products
                 WHERE synced = 0
                 ORDER BY id ASC",
            )
            .map_err(|e| format!("Failed to prepare query: {}", e))?;

        let rows = stmt
            .query_map([], row_to_product)
            .map_err(|e| format!("Failed to query unsynced products: {}", e))?;

        rows.collect::<Result<Vec<_>, _>>()
            .map_err(|e| format!("Failed to collect unsynced products: {}", e))
    }
}

fn row_to_product(row: &Row<'_>) -> rusqlite::Result<SavedProduct> {
    let ingredients_json: String = row.get(7)?;
    let benefits_json: String = row.get(8)?;

    Ok(SavedProduct {
        id: row.get(0)?,
        name: row.get(1)?,
        brand: row.get(2)?,
        product_type: row.get(3)?,
        image_ref: row.get(4)?,
        description: row.get(5)?,
        usage_time: row.get(6)?,
        ingredients: serde_json::from_str(&ingredients_json).unwrap_or_default(),
        benefits: serde_json::from_str(&benefits_json).unwrap_or_default(),
        date_added: row.get(9)?,
        in_routine: row.get(10)?,
        synced: row.get(11)?,
    })
}
