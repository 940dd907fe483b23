//! Bridge configuration.

use std::ffi::OsString;
use std::path::PathBuf;

/// Environment variable that overrides the tool program.
pub const TOOL_ENV_VAR: &str = "RULU_TOOL";

#[derive(Debug, Clone)]
pub struct BridgeConfig {
    /// Reserved document extension, without the dot.
    pub extension: String,
    /// Label of the extension filter in save choosers.
    pub filter_name: String,
    /// Program launched by `run-rulu`. A bare name is resolved on `PATH`.
    pub tool_program: PathBuf,
    pub untitled_stem: String,
    /// How many untitled names are tried before falling back to a prompt.
    pub untitled_attempts: usize,
    /// Append common install locations to `PATH` when launching the tool.
    pub extend_tool_path: bool,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            extension: "rulu".to_string(),
            filter_name: "Rulu Files".to_string(),
            tool_program: PathBuf::from("rulu"),
            untitled_stem: "untitled".to_string(),
            untitled_attempts: 1000,
            extend_tool_path: true,
        }
    }
}

impl BridgeConfig {
    /// Defaults, with the tool program taken from `RULU_TOOL` when set.
    pub fn from_env() -> Self {
        Self::default().with_tool_override(std::env::var_os(TOOL_ENV_VAR))
    }

    /// Replace the tool program unless `tool` is unset or empty.
    pub fn with_tool_override(mut self, tool: Option<OsString>) -> Self {
        if let Some(tool) = tool.filter(|v| !v.is_empty()) {
            log::info!("Using tool program from {}: {:?}", TOOL_ENV_VAR, tool);
            self.tool_program = PathBuf::from(tool);
        }
        self
    }

    /// `.rulu`
    pub fn dotted_extension(&self) -> String {
        format!(".{}", self.extension)
    }

    pub fn file_filter(&self) -> FileFilter {
        FileFilter {
            name: self.filter_name.clone(),
            extensions: vec![self.extension.clone()],
        }
    }
}

/// Extension filter shown by a destination chooser
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFilter {
    pub name: String,
    pub extensions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_override_replaces_program() {
        let config = BridgeConfig::default().with_tool_override(Some("/opt/rulu/bin/rulu".into()));
        assert_eq!(config.tool_program, PathBuf::from("/opt/rulu/bin/rulu"));
    }

    #[test]
    fn empty_or_missing_override_keeps_default() {
        let config = BridgeConfig::default().with_tool_override(Some(OsString::new()));
        assert_eq!(config.tool_program, PathBuf::from("rulu"));

        let config = BridgeConfig::default().with_tool_override(None);
        assert_eq!(config.tool_program, PathBuf::from("rulu"));
    }

    #[test]
    fn filter_uses_reserved_extension() {
        let filter = BridgeConfig::default().file_filter();
        assert_eq!(filter.name, "Rulu Files");
        assert_eq!(filter.extensions, vec!["rulu".to_string()]);
        assert_eq!(BridgeConfig::default().dotted_extension(), ".rulu");
    }
}
