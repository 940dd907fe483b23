/// Generic bridge command
/// Takes `{ channel, data }` as sent by the front end's invoke helper

use crate::bridge::Response;
use crate::desktop::DesktopBridge;
use tauri::{AppHandle, Manager};

/// Unknown channels and malformed payloads are rejected with an error string.
#[tauri::command]
pub async fn bridge_invoke(
    app: AppHandle,
    request: serde_json::Value,
) -> Result<Response, String> {
    app.state::<DesktopBridge>()
        .invoke(request)
        .await
        .map_err(|e| e.to_string())
}
