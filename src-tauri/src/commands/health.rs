use serde::Serialize;
use tauri::Manager;
use tracing::info;

use crate::config::{self, RemoteSettings};

#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub data_dir_accessible: bool,
    pub data_dir_path: Option<String>,
    pub vision_key_set: bool,
    pub remote_configured: bool,
}

/// Check that SkinGuide can reach everything it needs: the app data dir,
/// a vision API key (keychain or environment), and the hosted store
/// settings. Surfaced on the Settings screen.
#[tauri::command]
pub fn run_health_check(app: tauri::AppHandle) -> Result<HealthReport, String> {
    info!("Running health check");

    let data_dir = app.path().app_data_dir().ok();
    let data_dir_accessible = data_dir
        .as_ref()
        .map(|d| std::fs::create_dir_all(d).is_ok())
        .unwrap_or(false);

    let vision_key_set = config::vision_api_key().is_some();
    let remote_configured = RemoteSettings::from_env().is_configured();

    info!(
        "Health: data dir {}, vision key {}, remote {}",
        data_dir_accessible, vision_key_set, remote_configured
    );

    Ok(HealthReport {
        data_dir_accessible,
        data_dir_path: data_dir.map(|d| d.to_string_lossy().to_string()),
        vision_key_set,
        remote_configured,
    })
}
