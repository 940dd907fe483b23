//! Failures absorbed at the bridge boundary.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("Failed to open file: {}: {source}", .path.display())]
    OpenFile { path: PathBuf, source: io::Error },

    #[error("Failed to save file: {}: {source}", .path.display())]
    SaveFile { path: PathBuf, source: io::Error },

    #[error("Failed to read directory: {}: {source}", .path.display())]
    ReadDirectory { path: PathBuf, source: io::Error },

    #[error("Failed to save file: {0}")]
    SaveChooser(#[source] ChooserError),

    #[error("Failed to open project: {0}")]
    OpenProject(#[source] ChooserError),

    #[error("Failed to read directory: {0}")]
    DirectoryChooser(#[source] ChooserError),

    #[error("Invalid bridge request: {0}")]
    InvalidRequest(#[from] serde_json::Error),
}

impl BridgeError {
    /// The modal diagnostic shown for this failure.
    pub fn to_fault(&self) -> PresentationFault {
        PresentationFault::error(self.to_string())
    }
}

/// A native chooser could not be shown or never answered
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct ChooserError(pub String);

/// A diagnostic the host shows to the user, separate from any operation result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentationFault {
    pub title: String,
    pub message: String,
}

impl PresentationFault {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            title: "Error".to_string(),
            message: message.into(),
        }
    }
}
