//! Tauri commands for the user profile.

use chrono::Utc;
use serde::Serialize;
use tauri::Manager;
use tracing::{info, warn};

use super::state::SessionState;
use crate::config::RemoteSettings;
use crate::error::SkinGuideError;
use crate::profile::{ProfileStore, UserProfile};
use crate::remote::RemoteStore;

/// Result of a profile save: the stored record plus whether it reached
/// the hosted store.
#[derive(Debug, Serialize)]
pub struct ProfileSaveOutcome {
    pub profile: UserProfile,
    pub remote_synced: bool,
}

/// Save the profile: local file first (always), then a best-effort push
/// to the hosted store. The push outcome is reported, never swallowed.
#[tauri::command]
pub async fn save_profile(
    app: tauri::AppHandle,
    state: tauri::State<'_, SessionState>,
    mut profile: UserProfile,
) -> Result<ProfileSaveOutcome, String> {
    profile.validate()?;

    if profile.id.is_empty() {
        profile.id = Utc::now().timestamp_millis().to_string();
    }

    let data_dir = app
        .path()
        .app_data_dir()
        .map_err(|e| format!("Failed to get data dir: {}", e))?;

    ProfileStore::new(&data_dir)
        .save(&profile)
        .map_err(|e| SkinGuideError::Profile(format!("Failed to save profile: {}", e)))?;

    state.replace(profile.clone());

    let remote_synced = push_profile(&profile).await;
    info!(
        "Saved profile {} (remote_synced: {})",
        profile.id, remote_synced
    );

    Ok(ProfileSaveOutcome {
        profile,
        remote_synced,
    })
}

/// Load the saved profile, if any, and seed the session state with it.
/// The view orchestrator uses this on startup to pick the first screen.
#[tauri::command]
pub async fn load_profile(
    app: tauri::AppHandle,
    state: tauri::State<'_, SessionState>,
) -> Result<Option<UserProfile>, String> {
    let data_dir = app
        .path()
        .app_data_dir()
        .map_err(|e| format!("Failed to get data dir: {}", e))?;

    let profile = ProfileStore::new(&data_dir)
        .load()
        .map_err(|e| SkinGuideError::Profile(format!("Failed to load profile: {}", e)))?;

    if let Some(ref p) = profile {
        state.replace(p.clone());
        info!("Restored profile {} from disk", p.id);
    }

    Ok(profile)
}

async fn push_profile(profile: &UserProfile) -> bool {
    match RemoteStore::from_settings(&RemoteSettings::from_env()) {
        Ok(Some(remote)) => match remote.insert_profile(profile).await {
            Ok(()) => true,
            Err(e) => {
                warn!("Profile kept local-only: {}", e);
                false
            }
        },
        Ok(None) => {
            info!("Remote store not configured; profile kept local-only");
            false
        }
        Err(e) => {
            warn!("Remote store unavailable: {}", e);
            false
        }
    }
}
