//! Colored stderr diagnostics, kept off stdout so the printed report path
//! stays machine-readable.

use colored::Colorize;

/// Non-fatal notice (stderr).
pub fn warn(message: impl AsRef<str>) {
    eprintln!("{} {}", "WARN".yellow().bold(), message.as_ref());
}

/// Prefix a fatal diagnostic; the caller decides how to abort with it.
pub fn error_message(message: impl AsRef<str>) -> String {
    format!("{} {}", "ERROR".red().bold(), message.as_ref())
}
