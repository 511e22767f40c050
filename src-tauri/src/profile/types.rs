use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Self-reported skin type, chosen once during setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkinType {
    Oily,
    Dry,
    Combination,
    Sensitive,
    Normal,
}

/// Skincare experience level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
}

/// Monthly budget band for product recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetBand {
    Low,
    Mid,
    Premium,
}

impl SkinType {
    /// Display label for chat and dashboard copy.
    pub fn label(&self) -> &'static str {
        match self {
            SkinType::Oily => "oily",
            SkinType::Dry => "dry",
            SkinType::Combination => "combination",
            SkinType::Sensitive => "sensitive",
            SkinType::Normal => "normal",
        }
    }
}

/// The user's profile. Singleton per logical user: created once at setup,
/// replaced whole on edit, never deleted in-app.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Assigned on first save; empty string means "not yet assigned".
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub email: String,
    pub skin_type: SkinType,
    /// Up to 3 by UI convention; not enforced here.
    #[serde(default)]
    pub concerns: Vec<String>,
    pub level: ExperienceLevel,
    pub budget: BudgetBand,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl UserProfile {
    /// Check the fields the setup form requires. Enum fields are always
    /// present by construction; only the free-text fields can be empty.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name is required".to_string());
        }
        if self.email.trim().is_empty() {
            return Err("Email is required".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> UserProfile {
        UserProfile {
            id: String::new(),
            name: "Maria Silva".to_string(),
            email: "maria@example.com".to_string(),
            skin_type: SkinType::Combination,
            concerns: vec!["T-zone oiliness".to_string(), "Enlarged pores".to_string()],
            level: ExperienceLevel::Intermediate,
            budget: BudgetBand::Mid,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_validate_complete_profile() {
        assert!(sample_profile().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        let mut profile = sample_profile();
        profile.name = "  ".to_string();
        let err = profile.validate().unwrap_err();
        assert!(err.contains("Name"));
    }

    #[test]
    fn test_validate_rejects_empty_email() {
        let mut profile = sample_profile();
        profile.email = String::new();
        let err = profile.validate().unwrap_err();
        assert!(err.contains("Email"));
    }

    #[test]
    fn test_skin_type_serializes_lowercase() {
        let json = serde_json::to_string(&SkinType::Combination).unwrap();
        assert_eq!(json, "\"combination\"");

        let parsed: SkinType = serde_json::from_str("\"sensitive\"").unwrap();
        assert_eq!(parsed, SkinType::Sensitive);
    }

    #[test]
    fn test_profile_round_trips_through_json() {
        let profile = sample_profile();
        let json = serde_json::to_string(&profile).unwrap();
        let parsed: UserProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, profile);
    }

    #[test]
    fn test_profile_deserializes_without_optional_fields() {
        // Older mirrors may predate the concerns list.
        let json = r#"{
            "name": "Ana",
            "email": "ana@example.com",
            "skin_type": "dry",
            "level": "beginner",
            "budget": "low"
        }"#;
        let parsed: UserProfile = serde_json::from_str(json).unwrap();
        assert!(parsed.id.is_empty());
        assert!(parsed.concerns.is_empty());
    }
}
