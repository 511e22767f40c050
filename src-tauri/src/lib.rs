pub mod catalog;
pub mod chat;
mod commands;
pub mod config;
pub mod error;
pub mod profile;
pub mod remote;
pub mod scanner;

pub use catalog::{ProductCatalog, SavedProduct};
pub use profile::UserProfile;
pub use scanner::ScanResult;

pub fn run() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tauri::Builder::default()
        .plugin(tauri_plugin_store::Builder::new().build())
        .manage(commands::state::SessionState::new())
        .invoke_handler(tauri::generate_handler![
            commands::keychain::set_api_key,
            commands::keychain::get_api_key,
            commands::keychain::delete_api_key,
            commands::config::get_preference,
            commands::config::set_preference,
            commands::health::run_health_check,
            commands::profile::save_profile,
            commands::profile::load_profile,
            commands::scan::scan_product,
            commands::catalog::save_product,
            commands::catalog::list_products,
            commands::catalog::toggle_routine,
            commands::catalog::remove_product,
            commands::catalog::list_unsynced_products,
            commands::chat::chat_greeting,
            commands::chat::chat_respond,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
