/// Project commands

use crate::desktop::DesktopBridge;
use crate::models::DirectoryEntry;
use std::path::PathBuf;
use tauri::{AppHandle, Manager};

#[tauri::command]
pub async fn open_project(app: AppHandle) -> Option<PathBuf> {
    app.state::<DesktopBridge>().open_project().await
}

/// List a project directory; prompts for one when `dir` is omitted.
#[tauri::command]
pub async fn get_files(app: AppHandle, dir: Option<PathBuf>) -> Vec<DirectoryEntry> {
    app.state::<DesktopBridge>().get_files(dir.as_deref()).await
}
