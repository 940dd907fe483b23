/// File persistence
/// Interactive save, silent save and untitled-name generation

use crate::config::BridgeConfig;
use crate::error::BridgeError;
use crate::models::SaveRequest;
use crate::services::given;
use crate::services::shell::HostShell;
use std::io;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;

/// Candidate names in search order: `untitled.rulu`, `untitled-1.rulu`, ...
pub fn untitled_names(config: &BridgeConfig) -> impl Iterator<Item = String> + '_ {
    (0..config.untitled_attempts).map(move |i| {
        if i == 0 {
            format!("{}.{}", config.untitled_stem, config.extension)
        } else {
            format!("{}-{}.{}", config.untitled_stem, i, config.extension)
        }
    })
}

async fn write_file(path: &Path, content: &str) -> Result<(), BridgeError> {
    tokio::fs::write(path, content)
        .await
        .map_err(|source| BridgeError::SaveFile {
            path: path.to_path_buf(),
            source,
        })
}

/// Create `path` only if nothing exists there yet.
/// Returns `Ok(false)` when the name was taken between the check and the create.
async fn create_new_file(path: &Path, content: &str) -> Result<bool, BridgeError> {
    let save_err = |source| BridgeError::SaveFile {
        path: path.to_path_buf(),
        source,
    };

    let mut file = match tokio::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .await
    {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => return Ok(false),
        Err(e) => return Err(save_err(e)),
    };
    file.write_all(content.as_bytes()).await.map_err(save_err)?;
    file.flush().await.map_err(save_err)?;
    Ok(true)
}

/// Write `content` to the first free untitled name in `dir`.
///
/// The search is sequential and stops at the first gap. Existence is checked
/// before each create, which is racy against other writers in the same
/// directory; the create itself is exclusive, so a lost race moves on to the
/// next index instead of overwriting. `Ok(None)` means every name was taken.
pub async fn save_untitled(
    config: &BridgeConfig,
    dir: &Path,
    content: &str,
) -> Result<Option<PathBuf>, BridgeError> {
    for name in untitled_names(config) {
        let candidate = dir.join(&name);
        if matches!(tokio::fs::try_exists(&candidate).await, Ok(true)) {
            continue;
        }
        if create_new_file(&candidate, content).await? {
            return Ok(Some(candidate));
        }
        log::debug!("{} appeared during the untitled search", candidate.display());
    }
    Ok(None)
}

async fn save_interactive<S: HostShell + ?Sized>(
    shell: &S,
    config: &BridgeConfig,
    content: &str,
) -> Result<Option<PathBuf>, BridgeError> {
    let chosen = shell
        .choose_save_path(&config.file_filter())
        .await
        .map_err(BridgeError::SaveChooser)?;
    let Some(path) = chosen else {
        log::debug!("Save cancelled");
        return Ok(None);
    };
    write_file(&path, content).await?;
    Ok(Some(path))
}

async fn save_silent_inner<S: HostShell + ?Sized>(
    shell: &S,
    config: &BridgeConfig,
    request: &SaveRequest,
) -> Result<Option<PathBuf>, BridgeError> {
    if let Some(path) = given(request.file_path.as_deref()) {
        write_file(path, &request.content).await?;
        return Ok(Some(path.to_path_buf()));
    }

    if let Some(dir) = given(request.default_directory.as_deref()) {
        if let Some(path) = save_untitled(config, dir, &request.content).await? {
            return Ok(Some(path));
        }
        log::warn!(
            "No free untitled name in {} after {} attempts, asking for a destination",
            dir.display(),
            config.untitled_attempts
        );
    }

    save_interactive(shell, config, &request.content).await
}

async fn absorb<S: HostShell + ?Sized>(
    shell: &S,
    result: Result<Option<PathBuf>, BridgeError>,
) -> Option<PathBuf> {
    match result {
        Ok(Some(path)) => {
            log::info!("Saved {}", path.display());
            Some(path)
        }
        Ok(None) => None,
        Err(e) => {
            log::warn!("{}", e);
            shell.report_fault(e.to_fault()).await;
            None
        }
    }
}

/// `save-file`: always prompts for the destination.
pub async fn save_file<S: HostShell + ?Sized>(
    shell: &S,
    config: &BridgeConfig,
    content: &str,
) -> Option<PathBuf> {
    absorb(shell, save_interactive(shell, config, content).await).await
}

/// `save-file-silent`: explicit path, then an untitled name under the
/// default directory, then a prompt.
pub async fn save_file_silent<S: HostShell + ?Sized>(
    shell: &S,
    config: &BridgeConfig,
    request: &SaveRequest,
) -> Option<PathBuf> {
    absorb(shell, save_silent_inner(shell, config, request).await).await
}
