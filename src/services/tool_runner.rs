/// Tool runner
/// Launches the external tool once per request and normalizes its outcome

use crate::config::BridgeConfig;
use crate::models::ExecutionResult;
use crate::services::env::build_extended_path;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;

/// Exit code reported when the tool could not be found.
pub const NOT_FOUND_EXIT_CODE: i32 = 127;

#[derive(Debug, Clone)]
pub struct ToolRunner {
    program: PathBuf,
    extend_path: bool,
}

impl ToolRunner {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            extend_path: true,
        }
    }

    pub fn from_config(config: &BridgeConfig) -> Self {
        Self {
            program: config.tool_program.clone(),
            extend_path: config.extend_tool_path,
        }
    }

    /// Run the tool with `file` as its only argument, in the directory that
    /// contains `file`. The argument is passed as-is, never through a shell.
    pub async fn run(&self, file: &Path) -> ExecutionResult {
        let cwd = working_dir_for(file);
        log::info!(
            "Running {} {} in {}",
            self.program.display(),
            file.display(),
            cwd.display()
        );

        let mut command = Command::new(&self.program);
        command
            .arg(file)
            .current_dir(&cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        if self.extend_path {
            if let Some(path) = build_extended_path() {
                command.env("PATH", path);
            }
        }

        match command.output().await {
            Ok(output) => {
                let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
                let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

                if output.status.success() {
                    return ExecutionResult {
                        exit_code: 0,
                        stdout,
                        stderr,
                    };
                }

                // Killed by a signal has no code
                let exit_code = output.status.code().filter(|c| *c != 0).unwrap_or(1);
                log::warn!("{} exited with code {}", self.program.display(), exit_code);
                let stderr = if stderr.is_empty() {
                    format!("Command failed: {} {}", self.program.display(), file.display())
                } else {
                    stderr
                };
                ExecutionResult {
                    exit_code,
                    stdout,
                    stderr,
                }
            }
            Err(e) => self.launch_failure(e),
        }
    }

    fn launch_failure(&self, e: io::Error) -> ExecutionResult {
        log::warn!("Failed to launch {}: {}", self.program.display(), e);
        if e.kind() == io::ErrorKind::NotFound {
            let name = self.program.display();
            return ExecutionResult {
                exit_code: NOT_FOUND_EXIT_CODE,
                stdout: String::new(),
                stderr: format!(
                    "Executable not found: {name}. Make sure '{name}' is on PATH or provide the full path."
                ),
            };
        }
        ExecutionResult {
            exit_code: 1,
            stdout: String::new(),
            stderr: e.to_string(),
        }
    }
}

/// Parent directory of `file`, or the process working directory when the
/// path has no usable parent.
fn working_dir_for(file: &Path) -> PathBuf {
    match file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}
