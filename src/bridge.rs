//! Request/response bridge between the front end and the host.
//!
//! The set of requests is closed: every channel the front end may call is a
//! [`Request`] variant bound to one handler, and anything else fails to decode
//! before any work is done.

use crate::config::BridgeConfig;
use crate::error::BridgeError;
use crate::models::{DirectoryEntry, ExecutionResult, FileHandle, SaveRequest};
use crate::services::{file_access, persistence, project, HostShell, ToolRunner};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A decoded front-end request, `{"channel": "<name>", "data": <payload>}`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "channel", content = "data", rename_all = "kebab-case")]
pub enum Request {
    OpenFile(PathBuf),
    SaveFile(String),
    SaveFileSilent(SaveRequest),
    OpenProject,
    GetFiles(Option<PathBuf>),
    RunRulu(PathBuf),
}

impl Request {
    pub fn from_value(value: serde_json::Value) -> Result<Self, BridgeError> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn channel(&self) -> &'static str {
        match self {
            Request::OpenFile(_) => "open-file",
            Request::SaveFile(_) => "save-file",
            Request::SaveFileSilent(_) => "save-file-silent",
            Request::OpenProject => "open-project",
            Request::GetFiles(_) => "get-files",
            Request::RunRulu(_) => "run-rulu",
        }
    }
}

/// What a request returns; serialized as the bare value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Response {
    File(Option<FileHandle>),
    Path(Option<PathBuf>),
    Entries(Vec<DirectoryEntry>),
    Execution(ExecutionResult),
}

/// The trusted side of the bridge. Holds no per-request state.
pub struct Bridge<S> {
    shell: S,
    config: BridgeConfig,
    runner: ToolRunner,
}

impl<S: HostShell> Bridge<S> {
    pub fn new(shell: S, config: BridgeConfig) -> Self {
        let runner = ToolRunner::from_config(&config);
        Self {
            shell,
            config,
            runner,
        }
    }

    pub fn shell(&self) -> &S {
        &self.shell
    }

    pub async fn open_file(&self, path: &Path) -> Option<FileHandle> {
        file_access::open_file(&self.shell, path).await
    }

    pub async fn save_file(&self, content: &str) -> Option<PathBuf> {
        persistence::save_file(&self.shell, &self.config, content).await
    }

    pub async fn save_file_silent(&self, request: &SaveRequest) -> Option<PathBuf> {
        persistence::save_file_silent(&self.shell, &self.config, request).await
    }

    pub async fn open_project(&self) -> Option<PathBuf> {
        project::open_project(&self.shell).await
    }

    pub async fn get_files(&self, dir: Option<&Path>) -> Vec<DirectoryEntry> {
        project::get_files(&self.shell, &self.config, dir).await
    }

    pub async fn run_rulu(&self, file: &Path) -> ExecutionResult {
        self.runner.run(file).await
    }

    pub async fn dispatch(&self, request: Request) -> Response {
        log::debug!("Bridge request {}", request.channel());
        match request {
            Request::OpenFile(path) => Response::File(self.open_file(&path).await),
            Request::SaveFile(content) => Response::Path(self.save_file(&content).await),
            Request::SaveFileSilent(req) => Response::Path(self.save_file_silent(&req).await),
            Request::OpenProject => Response::Path(self.open_project().await),
            Request::GetFiles(dir) => Response::Entries(self.get_files(dir.as_deref()).await),
            Request::RunRulu(path) => Response::Execution(self.run_rulu(&path).await),
        }
    }

    /// Decode a raw request and dispatch it.
    pub async fn invoke(&self, value: serde_json::Value) -> Result<Response, BridgeError> {
        let request = Request::from_value(value).map_err(|e| {
            log::warn!("Rejected bridge request: {}", e);
            e
        })?;
        Ok(self.dispatch(request).await)
    }
}
