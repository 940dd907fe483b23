/// Project enumeration
/// One-level listing of a project directory, filtered to folders and documents

use crate::config::BridgeConfig;
use crate::error::BridgeError;
use crate::models::{DirectoryEntry, EntryKind};
use crate::services::given;
use crate::services::shell::{HostShell, Notification};
use std::path::{Path, PathBuf};

/// List the immediate children of `dir`: every subdirectory, and files whose
/// name ends in the reserved extension. Sorted by name.
pub async fn list_directory(
    config: &BridgeConfig,
    dir: &Path,
) -> Result<Vec<DirectoryEntry>, BridgeError> {
    let read_err = |source| BridgeError::ReadDirectory {
        path: dir.to_path_buf(),
        source,
    };
    let suffix = config.dotted_extension();

    let mut reader = tokio::fs::read_dir(dir).await.map_err(read_err)?;
    let mut entries = Vec::new();
    while let Some(item) = reader.next_entry().await.map_err(read_err)? {
        // Symlinks count as what they are, not what they point at
        let file_type = item.file_type().await.map_err(read_err)?;
        let name = item.file_name().to_string_lossy().into_owned();

        let kind = if file_type.is_dir() {
            EntryKind::Directory
        } else if name.ends_with(&suffix) {
            EntryKind::File
        } else {
            continue;
        };
        entries.push(DirectoryEntry::new(dir, name, kind));
    }

    entries.sort_by(|a, b| a.text.cmp(&b.text));
    Ok(entries)
}

async fn report<S: HostShell + ?Sized>(shell: &S, e: BridgeError) {
    log::warn!("{}", e);
    shell.report_fault(e.to_fault()).await;
}

/// `open-project`: pick a project directory.
pub async fn open_project<S: HostShell + ?Sized>(shell: &S) -> Option<PathBuf> {
    let dir = match shell.choose_directory().await {
        Ok(dir) => dir?,
        Err(e) => {
            report(shell, BridgeError::OpenProject(e)).await;
            return None;
        }
    };
    log::info!("Opened project {}", dir.display());
    shell.notify(Notification::ProjectOpened(dir.clone()));
    Some(dir)
}

/// `get-files`: list `dir`, or a directory the user picks when none is given.
pub async fn get_files<S: HostShell + ?Sized>(
    shell: &S,
    config: &BridgeConfig,
    dir: Option<&Path>,
) -> Vec<DirectoryEntry> {
    let dir = match given(dir) {
        Some(dir) => dir.to_path_buf(),
        None => match shell.choose_directory().await {
            Ok(Some(dir)) => dir,
            Ok(None) => return Vec::new(),
            Err(e) => {
                report(shell, BridgeError::DirectoryChooser(e)).await;
                return Vec::new();
            }
        },
    };

    match list_directory(config, &dir).await {
        Ok(entries) => {
            log::debug!("Listed {} entries in {}", entries.len(), dir.display());
            shell.notify(Notification::FilesList(entries.clone()));
            entries
        }
        Err(e) => {
            report(shell, e).await;
            Vec::new()
        }
    }
}
