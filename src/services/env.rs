/// Tool environment
/// Bundled desktop apps start with a minimal PATH, so tool lookup also
/// searches the usual install locations

use std::ffi::OsString;
use std::path::PathBuf;

/// Common install locations, in lookup order after the inherited PATH.
fn extra_tool_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();

    #[cfg(unix)]
    {
        if let Some(home) = std::env::var_os("HOME") {
            let home = PathBuf::from(home);
            dirs.push(home.join(".local/bin"));
            dirs.push(home.join(".cargo/bin"));
        }
        dirs.extend(
            [
                "/opt/homebrew/bin", // Homebrew Apple Silicon
                "/usr/local/bin",    // Homebrew Intel / system
                "/usr/bin",
                "/bin",
            ]
            .into_iter()
            .map(PathBuf::from),
        );
    }

    #[cfg(windows)]
    {
        if let Some(profile) = std::env::var_os("USERPROFILE") {
            dirs.push(PathBuf::from(profile).join(".cargo").join("bin"));
        }
    }

    dirs
}

/// The inherited PATH followed by any missing install locations.
/// `None` when the result cannot be represented as a PATH value.
pub fn build_extended_path() -> Option<OsString> {
    let mut paths: Vec<PathBuf> = std::env::var_os("PATH")
        .map(|p| std::env::split_paths(&p).collect())
        .unwrap_or_default();

    for dir in extra_tool_dirs() {
        if !paths.contains(&dir) {
            paths.push(dir);
        }
    }

    std::env::join_paths(paths).ok()
}
