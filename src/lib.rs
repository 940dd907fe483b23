/// Rulu IDE host
/// Trusted side of the editor: every file-system access, project listing and
/// rulu tool run the webview front end asks for goes through here
///
/// Module structure:
/// - bridge: closed request set and dispatch
/// - services: file access, persistence, project enumeration, tool runner
/// - models: values exchanged with the front end
/// - commands / desktop: Tauri IPC handlers and the dialog-backed host shell

pub mod bridge;
pub mod config;
pub mod error;
pub mod models;
pub mod services;

#[cfg(feature = "desktop")]
mod commands;
#[cfg(feature = "desktop")]
pub mod desktop;

pub use bridge::{Bridge, Request, Response};
pub use config::BridgeConfig;
pub use error::{BridgeError, ChooserError, PresentationFault};

#[cfg(feature = "desktop")]
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    use tauri::Manager;

    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .setup(|app| {
            if cfg!(debug_assertions) {
                app.handle().plugin(
                    tauri_plugin_log::Builder::default()
                        .level(log::LevelFilter::Info)
                        .build(),
                )?;
            }

            let shell = desktop::TauriShell::new(app.handle().clone());
            app.manage(Bridge::new(shell, BridgeConfig::from_env()));
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::files::open_file,
            commands::files::save_file,
            commands::files::save_file_silent,
            commands::project::open_project,
            commands::project::get_files,
            commands::tool::run_rulu,
            commands::bridge::bridge_invoke,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
