/// File commands
/// open-file, save-file and save-file-silent

use crate::desktop::DesktopBridge;
use crate::models::{FileHandle, SaveRequest};
use std::path::PathBuf;
use tauri::{AppHandle, Manager};

/// Read a document. `null` when it could not be read.
/// Called from frontend via: invoke("open_file", { filePath })
#[tauri::command]
pub async fn open_file(app: AppHandle, file_path: PathBuf) -> Option<FileHandle> {
    app.state::<DesktopBridge>().open_file(&file_path).await
}

/// Save through a destination chooser.
#[tauri::command]
pub async fn save_file(app: AppHandle, content: String) -> Option<PathBuf> {
    app.state::<DesktopBridge>().save_file(&content).await
}

/// Save without prompting when a path or default directory is known.
#[tauri::command]
pub async fn save_file_silent(app: AppHandle, request: SaveRequest) -> Option<PathBuf> {
    app.state::<DesktopBridge>().save_file_silent(&request).await
}
