//! Scripted chat assistant.
//!
//! Reply generation sits behind the [`ResponseGenerator`] trait so the
//! canned implementation can be swapped for a hosted language model
//! without touching the UI or command layer.

pub mod canned;
pub mod types;

pub use canned::CannedResponder;
pub use types::{ChatMessage, Role};

use crate::profile::UserProfile;

/// Capability interface for producing assistant replies.
pub trait ResponseGenerator: Send + Sync {
    fn respond(&self, user_text: &str) -> String;
}

/// Opening assistant message for a new chat session.
pub fn greeting(profile: Option<&UserProfile>) -> String {
    match profile {
        Some(p) => format!(
            "Hi, {}! I'm your AI skincare consultant. I can help with questions about \
             products, routines, and specific care for your {} skin. How can I help you today?",
            p.name,
            p.skin_type.label()
        ),
        None => "Hi! I'm your AI skincare consultant. How can I help you today?".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{BudgetBand, ExperienceLevel, SkinType};
    use chrono::Utc;

    #[test]
    fn test_greeting_names_user_and_skin_type() {
        let profile = UserProfile {
            id: "1".to_string(),
            name: "Maria".to_string(),
            email: "maria@example.com".to_string(),
            skin_type: SkinType::Combination,
            concerns: vec![],
            level: ExperienceLevel::Beginner,
            budget: BudgetBand::Low,
            created_at: Utc::now(),
        };

        let text = greeting(Some(&profile));
        assert!(text.contains("Maria"));
        assert!(text.contains("combination"));
    }

    #[test]
    fn test_greeting_without_profile() {
        let text = greeting(None);
        assert!(text.contains("skincare consultant"));
    }
}
