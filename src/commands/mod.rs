/// Commands module
/// Tauri IPC handlers, one per bridge channel
/// Each one only forwards to the managed bridge

pub mod bridge;
pub mod files;
pub mod project;
pub mod tool;
