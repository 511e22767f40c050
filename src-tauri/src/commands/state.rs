use std::sync::Mutex;

use crate::profile::UserProfile;

/// Session-scoped state managed by Tauri.
///
/// Holds the active user's profile; commands read an immutable snapshot
/// instead of sharing a mutable global. Seeded by `load_profile` on
/// startup and replaced whole by `save_profile`.
pub struct SessionState {
    profile: Mutex<Option<UserProfile>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            profile: Mutex::new(None),
        }
    }

    /// Clone of the active profile at this moment.
    pub fn snapshot(&self) -> Option<UserProfile> {
        self.profile.lock().expect("session state poisoned").clone()
    }

    /// Replace the active profile.
    pub fn replace(&self, profile: UserProfile) {
        *self.profile.lock().expect("session state poisoned") = Some(profile);
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{BudgetBand, ExperienceLevel, SkinType};
    use chrono::Utc;

    #[test]
    fn test_snapshot_is_none_until_seeded() {
        let state = SessionState::new();
        assert!(state.snapshot().is_none());
    }

    #[test]
    fn test_replace_updates_snapshot() {
        let state = SessionState::new();
        let profile = UserProfile {
            id: "1".to_string(),
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            skin_type: SkinType::Normal,
            concerns: vec![],
            level: ExperienceLevel::Beginner,
            budget: BudgetBand::Low,
            created_at: Utc::now(),
        };
        state.replace(profile.clone());
        assert_eq!(state.snapshot(), Some(profile));
    }
}
