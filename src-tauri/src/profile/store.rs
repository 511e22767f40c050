use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Result;
use tempfile::NamedTempFile;
use tracing::info;

use super::types::UserProfile;

/// File name of the profile mirror inside the app data dir.
const PROFILE_FILE: &str = "profile.json";

/// JSON file store for the user profile.
///
/// The profile is a singleton: one fixed file, replaced whole on every save.
/// Writes are atomic (temp file + rename) so an interrupted save never
/// leaves a truncated profile behind.
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    /// Create a store rooted at the given data directory.
    /// Typically called with `app.path().app_data_dir()?`.
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(PROFILE_FILE),
        }
    }

    /// Load the saved profile, if one exists.
    /// A missing file is `Ok(None)`; a corrupt file is an error.
    pub fn load(&self) -> Result<Option<UserProfile>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = std::fs::read_to_string(&self.path)?;
        let profile: UserProfile = serde_json::from_str(&raw)?;
        Ok(Some(profile))
    }

    /// Replace the stored profile with the given one.
    pub fn save(&self, profile: &UserProfile) -> Result<()> {
        let json = serde_json::to_string_pretty(profile)?;

        let parent = self
            .path
            .parent()
            .ok_or_else(|| anyhow::anyhow!("Profile path has no parent directory: {:?}", self.path))?;
        std::fs::create_dir_all(parent)?;

        // Temp file in the same directory so the rename stays on one filesystem
        let mut temp = NamedTempFile::new_in(parent)?;
        temp.write_all(json.as_bytes())?;
        temp.flush()?;
        temp.persist(&self.path)?;

        info!("Wrote profile {} to {:?}", profile.id, self.path);
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::types::{BudgetBand, ExperienceLevel, SkinType};
    use chrono::Utc;
    use tempfile::TempDir;

    fn sample_profile() -> UserProfile {
        UserProfile {
            id: "1754600000000".to_string(),
            name: "Maria Silva".to_string(),
            email: "maria@example.com".to_string(),
            skin_type: SkinType::Combination,
            concerns: vec!["T-zone oiliness".to_string()],
            level: ExperienceLevel::Intermediate,
            budget: BudgetBand::Mid,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_load_missing_file_is_none() {
        let dir = TempDir::new().unwrap();
        let store = ProfileStore::new(dir.path());
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = ProfileStore::new(dir.path());

        let profile = sample_profile();
        store.save(&profile).unwrap();

        let loaded = store.load().unwrap().expect("profile should exist");
        assert_eq!(loaded, profile);
    }

    #[test]
    fn test_save_replaces_whole_record() {
        let dir = TempDir::new().unwrap();
        let store = ProfileStore::new(dir.path());

        let mut profile = sample_profile();
        store.save(&profile).unwrap();

        profile.skin_type = SkinType::Dry;
        profile.concerns.clear();
        store.save(&profile).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.skin_type, SkinType::Dry);
        assert!(loaded.concerns.is_empty());
    }

    #[test]
    fn test_load_corrupt_file_is_error() {
        let dir = TempDir::new().unwrap();
        let store = ProfileStore::new(dir.path());
        std::fs::write(store.path(), "not json").unwrap();
        assert!(store.load().is_err());
    }
}
