/// Models module
/// Values exchanged with the front end over the bridge
/// Field names are camelCase on the wire

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A file read from disk, handed to the caller by value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileHandle {
    pub content: String,
    pub file_path: PathBuf,
}

/// Whether a listed child is a file or a directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Directory,
}

/// Tree icon tag shown next to an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryIcon {
    #[serde(rename = "jstree-folder")]
    Folder,
    #[serde(rename = "jstree-file")]
    File,
}

/// One immediate child of an enumerated project directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryEntry {
    /// Parent directory joined with the entry name, not canonicalized
    pub id: PathBuf,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub has_children: bool,
    pub icon: EntryIcon,
}

impl DirectoryEntry {
    pub fn new(parent: &std::path::Path, name: String, kind: EntryKind) -> Self {
        let is_dir = kind == EntryKind::Directory;
        Self {
            id: parent.join(&name),
            text: name,
            kind,
            has_children: is_dir,
            icon: if is_dir { EntryIcon::Folder } else { EntryIcon::File },
        }
    }
}

/// Outcome of one external tool invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Input of a silent save
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveRequest {
    pub content: String,
    #[serde(default)]
    pub file_path: Option<PathBuf>,
    #[serde(default, alias = "defaultDir")]
    pub default_directory: Option<PathBuf>,
}
