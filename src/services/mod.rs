/// Services module
/// The four bridge capabilities and the host seam they report through
/// None of them keeps state between calls

pub mod env;
pub mod file_access;
pub mod persistence;
pub mod project;
pub mod shell;
pub mod tool_runner;

pub use shell::{HostShell, Notification};
pub use tool_runner::ToolRunner;

use std::path::Path;

/// An empty path from the front end means the path was not given.
pub(crate) fn given(path: Option<&Path>) -> Option<&Path> {
    path.filter(|p| !p.as_os_str().is_empty())
}
