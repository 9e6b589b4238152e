//! Locations of files the application owns

use std::path::{Path, PathBuf};

/// Directory containing the running executable
///
/// Falls back to the current directory when the executable path cannot be resolved.
pub fn app_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Directory the log files are written to
pub fn log_dir() -> PathBuf {
    app_dir().join("logs")
}

/// Fully quoted path of the running executable, suitable as a launch command
pub fn launch_command() -> std::io::Result<String> {
    let exe = std::env::current_exe()?;
    Ok(quote_path(&exe))
}

/// Wrap a path in double quotes so paths with spaces survive command parsing
pub fn quote_path(path: &Path) -> String {
    format!("\"{}\"", path.display())
}
