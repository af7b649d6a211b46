//! Best-effort "open the report in a browser" support.
//!
//! The pipeline never depends on this step: the spawned opener is detached
//! from our stdio and every failure is swallowed, so a missing or broken
//! viewer cannot change the run's outcome.

use std::path::Path;
use std::process::{Command, Stdio};

#[cfg(target_os = "linux")]
const OPENER: &str = "xdg-open";
#[cfg(target_os = "macos")]
const OPENER: &str = "open";
#[cfg(target_os = "windows")]
const OPENER: &str = "explorer";

/// Try to open `path` with the platform viewer. Never blocks, never fails.
pub fn try_open(path: &Path) {
    #[cfg(any(target_os = "linux", target_os = "macos", target_os = "windows"))]
    {
        let _ = Command::new(OPENER)
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();
    }
    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        let _ = path;
    }
}
