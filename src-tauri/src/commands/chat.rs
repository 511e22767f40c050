//! Tauri commands for the chat assistant.

use std::time::Duration;

use tracing::info;

use super::state::SessionState;
use crate::chat::{self, CannedResponder, ChatMessage, ResponseGenerator};

/// Opening assistant message for a new chat session, personalized from
/// the active profile when one exists.
#[tauri::command]
pub fn chat_greeting(state: tauri::State<'_, SessionState>) -> Result<ChatMessage, String> {
    let profile = state.snapshot();
    Ok(ChatMessage::assistant(chat::greeting(profile.as_ref())))
}

/// Produce an assistant reply to the user's message.
///
/// The short sleep stands in for model latency so the typing indicator is
/// visible; the generator behind the trait is where a real model call
/// would go.
#[tauri::command]
pub async fn chat_respond(message: String) -> Result<ChatMessage, String> {
    info!("Chat message received ({} chars)", message.len());

    tokio::time::sleep(Duration::from_millis(900)).await;

    let generator: &dyn ResponseGenerator = &CannedResponder;
    Ok(ChatMessage::assistant(generator.respond(&message)))
}
