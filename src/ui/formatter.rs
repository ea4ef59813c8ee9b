//! Pure formatting functions for UI output.
//!
//! Diagnostics go to stderr so stdout carries nothing but the extracted
//! section. Styling is dropped automatically when stderr is not a terminal.

use std::path::Path;

use console::style;

use crate::warning::ExtractionWarning;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").for_stderr().red(), message);
}

/// Display an extraction warning to the user.
///
/// Shows a yellow warning icon followed by the warning message.
pub fn display_warning(warning: &ExtractionWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").for_stderr().yellow(), warning);
}

/// Build the two-line report for a version missing from a changelog.
///
/// ```text
/// Version "9.9.9" not found in CHANGELOG.md.
/// Available: 1.0.0, 0.9.0
/// ```
pub fn format_not_found(version: &str, file: &Path, available: &[String]) -> String {
    format!(
        "Version \"{}\" not found in {}.\nAvailable: {}",
        version,
        file.display(),
        available.join(", ")
    )
}

/// Display the not-found report on stderr.
pub fn display_not_found(version: &str, file: &Path, available: &[String]) {
    display_error(&format_not_found(version, file, available));
}

/// Display every version heading found in a changelog, one per line.
pub fn display_available_versions(versions: &[&str]) {
    for version in versions {
        println!("{}", version);
    }
}
