//! Tauri commands for the product catalog.
//!
//! Every mutation goes to SQLite first, then rewrites the JSON mirror so
//! the on-disk copy always matches. The remote push happens last and its
//! outcome is recorded on the row (`synced`) and in the response.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tauri::Manager;
use tracing::{info, warn};

use super::state::SessionState;
use crate::catalog::{mirror, NewProduct, ProductCatalog, SavedProduct};
use crate::config::RemoteSettings;
use crate::error::SkinGuideError;
use crate::remote::RemoteStore;
use crate::scanner::ScanResult;

/// Catalog database file inside the app data dir.
const CATALOG_DB: &str = "catalog.db";

/// Request payload for saving a scanned product.
#[derive(Debug, Deserialize)]
pub struct SaveProductRequest {
    pub scan: ScanResult,
    /// Data URI of the captured photo.
    pub image_ref: String,
}

/// Outcome of a product save.
#[derive(Debug, Serialize)]
pub struct SaveOutcome {
    pub id: i64,
    pub remote_synced: bool,
}

/// Persist a scan result: catalog row + mirror unconditionally, then a
/// best-effort remote push.
#[tauri::command]
pub async fn save_product(
    app: tauri::AppHandle,
    state: tauri::State<'_, SessionState>,
    request: SaveProductRequest,
) -> Result<SaveOutcome, String> {
    let (catalog, data_dir) = open_catalog(&app)?;

    let product = NewProduct {
        name: request.scan.name,
        brand: request.scan.brand,
        product_type: request.scan.product_type,
        image_ref: request.image_ref,
        description: request.scan.description,
        usage_time: request.scan.usage_time,
        ingredients: request.scan.ingredients,
        benefits: request.scan.benefits,
    };

    let id = catalog.save(&product)?;
    rewrite_mirror(&catalog, &data_dir)?;

    let user_id = state
        .snapshot()
        .map(|p| p.id)
        .unwrap_or_else(|| "local-user".to_string());

    let remote_synced = match RemoteStore::from_settings(&RemoteSettings::from_env()) {
        Ok(Some(remote)) => match remote.insert_product(&user_id, &product).await {
            Ok(()) => {
                catalog.mark_synced(id)?;
                rewrite_mirror(&catalog, &data_dir)?;
                true
            }
            Err(e) => {
                warn!("Product {} kept local-only: {}", id, e);
                false
            }
        },
        Ok(None) => {
            info!("Remote store not configured; product {} kept local-only", id);
            false
        }
        Err(e) => {
            warn!("Remote store unavailable: {}", e);
            false
        }
    };

    Ok(SaveOutcome { id, remote_synced })
}

/// List the catalog in insertion order.
#[tauri::command]
pub async fn list_products(app: tauri::AppHandle) -> Result<Vec<SavedProduct>, String> {
    let (catalog, _) = open_catalog(&app)?;
    catalog.list()
}

/// Flip a product's in-routine flag. Returns the new state.
#[tauri::command]
pub async fn toggle_routine(app: tauri::AppHandle, product_id: i64) -> Result<bool, String> {
    let (catalog, data_dir) = open_catalog(&app)?;
    let in_routine = catalog.toggle_in_routine(product_id)?;
    rewrite_mirror(&catalog, &data_dir)?;
    info!("Product {} in_routine -> {}", product_id, in_routine);
    Ok(in_routine)
}

/// Remove a product from the catalog.
#[tauri::command]
pub async fn remove_product(app: tauri::AppHandle, product_id: i64) -> Result<(), String> {
    let (catalog, data_dir) = open_catalog(&app)?;
    catalog.remove(product_id)?;
    rewrite_mirror(&catalog, &data_dir)
}

/// Products that never reached the hosted store.
#[tauri::command]
pub async fn list_unsynced_products(app: tauri::AppHandle) -> Result<Vec<SavedProduct>, String> {
    let (catalog, _) = open_catalog(&app)?;
    catalog.list_unsynced()
}

fn open_catalog(app: &tauri::AppHandle) -> Result<(ProductCatalog, PathBuf), String> {
    let data_dir = app
        .path()
        .app_data_dir()
        .map_err(|e| format!("Failed to get data dir: {}", e))?;
    let catalog = ProductCatalog::new(&data_dir.join(CATALOG_DB))
        .map_err(SkinGuideError::Catalog)?;
    Ok((catalog, data_dir))
}

fn rewrite_mirror(catalog: &ProductCatalog, data_dir: &std::path::Path) -> Result<(), String> {
    let products = catalog.list()?;
    mirror::write_mirror(data_dir, &products)
        .map_err(|e| SkinGuideError::Catalog(format!("Failed to write mirror: {}", e)).into())
}
