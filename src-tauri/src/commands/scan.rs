//! Tauri command for the scan pipeline.
//!
//! The command never fails past its boundary: any problem between base64
//! decode and reply parsing degrades to the fixed placeholder result, with
//! the cause logged and the result tagged `identified = false`.

use base64::Engine;
use serde::Deserialize;
use tauri::AppHandle;
use tauri_plugin_store::StoreExt;
use tracing::{info, warn};

use crate::config::{self, DEFAULT_VISION_MODEL};
use crate::error::SkinGuideError;
use crate::scanner::{analyze_product, prepare_photo, ScanResult};

/// Request payload for a product scan.
#[derive(Debug, Deserialize)]
pub struct ScanRequest {
    /// Base64-encoded photo bytes (from the frontend file reader).
    pub image_base64: String,
}

/// Analyze a product photo. Always returns a fully-populated result.
#[tauri::command]
pub async fn scan_product(app: AppHandle, request: ScanRequest) -> Result<ScanResult, String> {
    info!("Starting product scan");

    match run_scan(&app, &request).await {
        Ok(result) => Ok(result),
        Err(e) => {
            warn!("Scan failed, substituting placeholder: {}", e);
            Ok(ScanResult::placeholder())
        }
    }
}

async fn run_scan(app: &AppHandle, request: &ScanRequest) -> Result<ScanResult, SkinGuideError> {
    let image_bytes = base64::engine::general_purpose::STANDARD
        .decode(&request.image_base64)
        .map_err(|e| SkinGuideError::Scan(format!("Invalid base64 image data: {}", e)))?;

    let prepared = prepare_photo(&image_bytes).map_err(SkinGuideError::Scan)?;

    let api_key = config::vision_api_key()
        .ok_or_else(|| SkinGuideError::Scan("No vision API key configured".to_string()))?;
    let model = vision_model(app);

    analyze_product(&prepared, &model, &api_key)
        .await
        .map_err(SkinGuideError::Scan)
}

/// Model preference from the settings store, defaulting to gpt-4o.
fn vision_model(app: &AppHandle) -> String {
    app.store("settings.json")
        .ok()
        .and_then(|store| store.get("vision_model"))
        .and_then(|v| v.as_str().map(|s| s.to_string()))
        .unwrap_or_else(|| DEFAULT_VISION_MODEL.to_string())
}
