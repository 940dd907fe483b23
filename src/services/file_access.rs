/// File access
/// Reads a document as text for the front end

use crate::error::BridgeError;
use crate::models::FileHandle;
use crate::services::shell::{HostShell, Notification};
use std::path::Path;

/// Read the whole file as UTF-8.
pub async fn read_file(path: &Path) -> Result<FileHandle, BridgeError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| BridgeError::OpenFile {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(FileHandle {
        content,
        file_path: path.to_path_buf(),
    })
}

/// `open-file`: failures become a modal fault and `None`.
pub async fn open_file<S: HostShell + ?Sized>(shell: &S, path: &Path) -> Option<FileHandle> {
    match read_file(path).await {
        Ok(handle) => {
            log::debug!("Opened {} ({} bytes)", path.display(), handle.content.len());
            shell.notify(Notification::FileOpened(handle.clone()));
            Some(handle)
        }
        Err(e) => {
            log::warn!("{}", e);
            shell.report_fault(e.to_fault()).await;
            None
        }
    }
}
