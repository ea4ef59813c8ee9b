//! Main extraction workflow
//!
//! Resolves the changelog path, reads the document and hands it to the
//! section extractor. Kept apart from `main.rs` so the workflow can be driven
//! programmatically without depending on clap.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::changelog;
use crate::config::Config;
use crate::error::Result;
use crate::version::VersionSpec;
use crate::warning::ExtractionWarning;

/// Arguments for the extraction workflow
///
/// Mirrors the CLI Args in a format suitable for orchestration logic.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractArgs {
    /// Requested version, as typed by the caller (e.g. "v5.0.2")
    pub version: String,

    /// Changelog path; falls back to the configured path
    pub file: Option<PathBuf>,
}

/// Result of a successful extraction
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractOutcome {
    /// The changelog that was read
    pub file: PathBuf,

    /// Version as written in the matched heading
    pub heading_version: String,

    /// Trimmed section body
    pub section: String,

    /// Non-fatal issues noticed while matching
    pub warnings: Vec<ExtractionWarning>,
}

/// Picks the explicit `--file` if given, otherwise the configured path.
pub fn resolve_changelog_path(file: Option<&Path>, config: &Config) -> PathBuf {
    file.map(Path::to_path_buf)
        .unwrap_or_else(|| config.changelog.path.clone())
}

/// Reads a whole changelog, replacing malformed UTF-8 instead of failing.
pub fn read_document(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;
    debug!(path = %path.display(), bytes = bytes.len(), "read changelog");
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Main extraction workflow
///
/// 1. Parse and validate the requested version
/// 2. Resolve and read the changelog
/// 3. Extract the matching section
///
/// # Returns
/// * `Ok(ExtractOutcome)` - The section and where it came from
/// * `Err(InvalidVersionFormat)` - Before the changelog is touched
/// * `Err(VersionNotFound)` - With up to 20 available versions
/// * `Err(Io)` - If the changelog cannot be read
pub fn run_extract(args: &ExtractArgs, config: &Config) -> Result<ExtractOutcome> {
    let spec = VersionSpec::parse(&args.version)?;
    let file = resolve_changelog_path(args.file.as_deref(), config);
    info!(version = %spec, file = %file.display(), "extracting release notes");

    let document = read_document(&file)?;
    let extraction = changelog::extract(&document, &spec)?;

    Ok(ExtractOutcome {
        heading_version: extraction.heading_version.to_string(),
        section: extraction.section.to_string(),
        warnings: extraction.warnings,
        file,
    })
}

/// Lists every version heading in the changelog, in document order.
pub fn run_list(file: Option<&Path>, config: &Config) -> Result<Vec<String>> {
    let file = resolve_changelog_path(file, config);
    let document = read_document(&file)?;
    Ok(changelog::available_versions(&document)
        .into_iter()
        .map(str::to_string)
        .collect())
}
