/// Host shell seam
/// Everything the bridge needs from the windowing host: choosers,
/// modal diagnostics and push notifications to the front end

use crate::config::FileFilter;
use crate::error::{ChooserError, PresentationFault};
use crate::models::{DirectoryEntry, FileHandle};
use async_trait::async_trait;
use std::path::PathBuf;

/// Push channels the bridge may emit to the front end
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    FileOpened(FileHandle),
    ProjectOpened(PathBuf),
    FilesList(Vec<DirectoryEntry>),
}

impl Notification {
    /// Event name on the front-end side
    pub fn channel(&self) -> &'static str {
        match self {
            Notification::FileOpened(_) => "file-opened",
            Notification::ProjectOpened(_) => "project-opened",
            Notification::FilesList(_) => "files-list",
        }
    }
}

#[async_trait]
pub trait HostShell: Send + Sync {
    /// Ask the user for a save destination. `Ok(None)` when cancelled.
    async fn choose_save_path(&self, filter: &FileFilter)
        -> Result<Option<PathBuf>, ChooserError>;

    /// Ask the user for a directory. `Ok(None)` when cancelled.
    async fn choose_directory(&self) -> Result<Option<PathBuf>, ChooserError>;

    /// Show a modal diagnostic and wait until it is dismissed.
    async fn report_fault(&self, fault: PresentationFault);

    fn notify(&self, notification: Notification);
}
