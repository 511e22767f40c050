//! Runtime configuration for external services.
//!
//! Credentials come from two places: the OS keychain (set from the Settings
//! screen) and the process environment, read once at call time. Missing
//! environment variables degrade to empty strings; callers check
//! `is_configured` and fall back to local-only behavior instead of failing.

use keyring::Entry;
use tracing::warn;

/// Keychain service name for the vision API key.
pub const VISION_KEY_SERVICE: &str = "skinguide-openai-api";

/// Keychain account name shared by all SkinGuide entries.
pub const KEYRING_USER: &str = "skinguide";

/// Default vision model when no preference is set.
pub const DEFAULT_VISION_MODEL: &str = "gpt-4o";

/// Connection settings for the hosted data store.
#[derive(Debug, Clone)]
pub struct RemoteSettings {
    pub base_url: String,
    pub api_key: String,
}

impl RemoteSettings {
    /// Read remote-store settings from the environment.
    /// Absent variables become empty strings; the store is then treated
    /// as unconfigured and writes stay local-only.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("SKINGUIDE_REMOTE_URL").unwrap_or_default(),
            api_key: std::env::var("SKINGUIDE_REMOTE_KEY").unwrap_or_default(),
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.base_url.is_empty() && !self.api_key.is_empty()
    }
}

/// Resolve the vision API key: keychain first, then environment.
///
/// Returns `None` when no key is configured anywhere. The scan command
/// treats that the same as any other scan failure (placeholder result),
/// so a missing key never blocks the UI.
pub fn vision_api_key() -> Option<String> {
    match Entry::new(VISION_KEY_SERVICE, KEYRING_USER) {
        Ok(entry) => match entry.get_password() {
            Ok(key) => return Some(key),
            Err(keyring::Error::NoEntry) => {}
            Err(e) => warn!("Failed to read vision API key from keychain: {}", e),
        },
        Err(e) => warn!("Failed to open keychain entry: {}", e),
    }

    std::env::var("SKINGUIDE_OPENAI_API_KEY")
        .or_else(|_| std::env::var("OPENAI_API_KEY"))
        .ok()
        .filter(|k| !k.is_empty())
}
