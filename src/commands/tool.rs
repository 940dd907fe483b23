/// Tool command
/// Runs the rulu tool on a document and returns its captured outcome

use crate::desktop::DesktopBridge;
use crate::models::ExecutionResult;
use std::path::PathBuf;
use tauri::{AppHandle, Manager};

#[tauri::command]
pub async fn run_rulu(app: AppHandle, file_path: PathBuf) -> ExecutionResult {
    app.state::<DesktopBridge>().run_rulu(&file_path).await
}
