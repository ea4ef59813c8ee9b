//! Locating a version's release notes inside a markdown changelog.
//!
//! A heading is a line starting with `##` and whitespace. A section runs from
//! the line after its heading up to the next heading (or end of document).

use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::error::{ChangelogError, Result};
use crate::version::{VersionSpec, SUFFIX_CLASS};
use crate::warning::ExtractionWarning;

/// How many available versions a not-found error reports.
pub const MAX_LISTED_VERSIONS: usize = 20;

fn any_heading_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?m)^##\s+").expect("heading pattern is valid"))
}

fn version_heading_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(
            r"(?m)^##\s+([0-9]+\.[0-9]+\.[0-9]+(?:-[{}]+)?)",
            SUFFIX_CLASS
        ))
        .expect("version heading pattern is valid")
    })
}

/// Build the heading pattern for one requested version.
///
/// Group 1 captures the version as written in the heading. With an explicit
/// suffix only that exact suffix is accepted; without one any suffix is.
fn heading_regex(spec: &VersionSpec) -> Result<Regex> {
    let version = match spec.suffix() {
        Some(suffix) => format!(
            "{}-{}",
            regex::escape(spec.base()),
            regex::escape(suffix)
        ),
        None => format!(
            "{}(?:-[{}]+)?",
            regex::escape(spec.base()),
            SUFFIX_CLASS
        ),
    };
    Ok(Regex::new(&format!(r"(?m)^##\s+({})(?:\s|$)", version))?)
}

/// A successful extraction, with the heading it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction<'a> {
    /// Trimmed section body
    pub section: &'a str,
    /// Version as written in the matched heading (e.g. `5.0.2-beta1`)
    pub heading_version: &'a str,
    /// Non-fatal observations about the match
    pub warnings: Vec<ExtractionWarning>,
}

/// Extract the section for `spec`, reporting anything suspicious about the match.
///
/// Only the first matching heading is used. Later headings with the same
/// version produce [`ExtractionWarning::DuplicateHeading`]; a suffix-less
/// request landing on a suffixed heading produces
/// [`ExtractionWarning::PrereleaseMatched`].
///
/// # Returns
/// * `Ok(Extraction)` - The section and its heading
/// * `Err(ChangelogError::VersionNotFound)` - If no heading matches, listing
///   up to [`MAX_LISTED_VERSIONS`] versions that do exist
pub fn extract<'a>(document: &'a str, spec: &VersionSpec) -> Result<Extraction<'a>> {
    let heading_re = heading_regex(spec)?;
    debug!(pattern = heading_re.as_str(), "searching for version heading");

    let Some(version_match) = heading_re.captures(document).and_then(|c| c.get(1)) else {
        let available: Vec<String> = available_versions(document)
            .into_iter()
            .take(MAX_LISTED_VERSIONS)
            .map(str::to_string)
            .collect();
        debug!(found = available.len(), "no heading matched");
        return Err(ChangelogError::VersionNotFound {
            version: spec.to_string(),
            available,
        });
    };

    let heading_version = version_match.as_str();

    let start = match document[version_match.end()..].find('\n') {
        Some(offset) => version_match.end() + offset + 1,
        None => document.len(),
    };
    let end = match any_heading_regex().find(&document[start..]) {
        Some(next) => start + next.start(),
        None => document.len(),
    };
    debug!(heading_version, start, end, "section located");

    let mut warnings = Vec::new();
    if spec.suffix().is_none() && heading_version != spec.base() {
        warnings.push(ExtractionWarning::PrereleaseMatched {
            requested: spec.to_string(),
            matched: heading_version.to_string(),
        });
    }
    let occurrences = heading_re
        .captures_iter(document)
        .filter(|c| c.get(1).map(|m| m.as_str()) == Some(heading_version))
        .count();
    if occurrences > 1 {
        warnings.push(ExtractionWarning::DuplicateHeading {
            version: heading_version.to_string(),
            occurrences,
        });
    }

    Ok(Extraction {
        section: document[start..end].trim(),
        heading_version,
        warnings,
    })
}

/// Return the trimmed release notes for `spec`.
///
/// # Example
/// ```ignore
/// let doc = "## 5.0.2\nbody1\n## 5.0.3\nbody2";
/// let spec = VersionSpec::parse("5.0.2")?;
/// assert_eq!(find_section(doc, &spec)?, "body1");
/// ```
pub fn find_section<'a>(document: &'a str, spec: &VersionSpec) -> Result<&'a str> {
    extract(document, spec).map(|extraction| extraction.section)
}

/// Every `## X.Y.Z[-suffix]` heading version, in document order.
pub fn available_versions(document: &str) -> Vec<&str> {
    version_heading_regex()
        .captures_iter(document)
        .filter_map(|c| c.get(1).map(|m| m.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(s: &str) -> VersionSpec {
        VersionSpec::parse(s).unwrap()
    }

    #[test]
    fn test_find_simple_sections() {
        let doc = "## 5.0.2\nbody1\n## 5.0.3\nbody2";
        assert_eq!(find_section(doc, &spec("5.0.2")).unwrap(), "body1");
        assert_eq!(find_section(doc, &spec("v5.0.3")).unwrap(), "body2");
    }

    #[test]
    fn test_wildcard_suffix_takes_first_in_document_order() {
        let doc = "## 5.0.2-beta1\nbodyA\n## 5.0.2\nbodyB";
        let extraction = extract(doc, &spec("5.0.2")).unwrap();
        assert_eq!(extraction.section, "bodyA");
        assert_eq!(extraction.heading_version, "5.0.2-beta1");
        assert_eq!(
            extraction.warnings,
            vec![ExtractionWarning::PrereleaseMatched {
                requested: "5.0.2".to_string(),
                matched: "5.0.2-beta1".to_string(),
            }]
        );
    }

    #[test]
    fn test_explicit_suffix_is_exact() {
        let doc = "## 5.0.2-beta1\nbodyA\n## 5.0.2\nbodyB";
        assert_eq!(find_section(doc, &spec("5.0.2-beta1")).unwrap(), "bodyA");

        let err = find_section(doc, &spec("5.0.2-beta2")).unwrap_err();
        assert!(matches!(err, ChangelogError::VersionNotFound { .. }));
    }

    #[test]
    fn test_explicit_suffix_does_not_match_longer_suffix() {
        let doc = "## 1.0.0-rc10\nten\n## 1.0.0-rc1\none\n";
        assert_eq!(find_section(doc, &spec("1.0.0-rc1")).unwrap(), "one");
    }

    #[test]
    fn test_base_must_end_at_boundary() {
        let doc = "## 5.0.20\nwrong\n## 5.0.2 (2024-03-01)\nright\n";
        assert_eq!(find_section(doc, &spec("5.0.2")).unwrap(), "right");
    }

    #[test]
    fn test_heading_trailer_is_not_part_of_section() {
        let doc = "## 1.1.0 - 2024-05-01\n\n- Added things\n";
        assert_eq!(find_section(doc, &spec("1.1.0")).unwrap(), "- Added things");
    }

    #[test]
    fn test_last_section_runs_to_end() {
        let doc = "# Changelog\n\n## 2.0.0\nnew\n\n## 1.0.0\n\n- first\n- second\n\n";
        assert_eq!(
            find_section(doc, &spec("1.0.0")).unwrap(),
            "- first\n- second"
        );
    }

    #[test]
    fn test_subheadings_stay_inside_section() {
        let doc = "## 1.0.0\n### Fixed\n- a\n#### Detail\n## 0.9.0\nold";
        assert_eq!(
            find_section(doc, &spec("1.0.0")).unwrap(),
            "### Fixed\n- a\n#### Detail"
        );
    }

    #[test]
    fn test_heading_without_trailing_newline() {
        let doc = "## 1.0.0\nbody\n## 0.1.0";
        assert_eq!(find_section(doc, &spec("0.1.0")).unwrap(), "");
    }

    #[test]
    fn test_heading_must_start_line() {
        let doc = "text ## 1.0.0\nnot a heading\n";
        assert!(find_section(doc, &spec("1.0.0")).is_err());
    }

    #[test]
    fn test_level_three_heading_is_ignored() {
        let doc = "### 1.0.0\nnope\n";
        assert!(find_section(doc, &spec("1.0.0")).is_err());
    }

    #[test]
    fn test_base_is_matched_literally() {
        let doc = "## 1x0x0\nnope\n## 1.0.0\nyes";
        assert_eq!(find_section(doc, &spec("1.0.0")).unwrap(), "yes");
    }

    #[test]
    fn test_crlf_document() {
        let doc = "## 1.0.0\r\nwindows body\r\n## 0.9.0\r\nold\r\n";
        assert_eq!(find_section(doc, &spec("1.0.0")).unwrap(), "windows body");
    }

    #[test]
    fn test_duplicate_heading_uses_first_and_warns() {
        let doc = "## 1.0.0\nfirst\n## 1.0.0\nsecond\n";
        let extraction = extract(doc, &spec("1.0.0")).unwrap();
        assert_eq!(extraction.section, "first");
        assert_eq!(
            extraction.warnings,
            vec![ExtractionWarning::DuplicateHeading {
                version: "1.0.0".to_string(),
                occurrences: 2,
            }]
        );
    }

    #[test]
    fn test_exact_match_has_no_warnings() {
        let doc = "## 1.0.0-rc1\na\n## 1.0.0\nb\n";
        let extraction = extract(doc, &spec("1.0.0-rc1")).unwrap();
        assert!(extraction.warnings.is_empty());
    }

    #[test]
    fn test_not_found_lists_available_versions() {
        let doc = "## 1.0.0\na\n## 0.9.0-rc1 (draft)\nb\n## Unreleased\nc\n";
        match find_section(doc, &spec("2.0.0")) {
            Err(ChangelogError::VersionNotFound { version, available }) => {
                assert_eq!(version, "2.0.0");
                assert_eq!(available, vec!["1.0.0", "0.9.0-rc1"]);
            }
            other => panic!("expected VersionNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_not_found_list_is_truncated() {
        let doc: String = (0..30)
            .map(|i| format!("## 1.0.{}\nnotes {}\n", i, i))
            .collect();
        let err = find_section(&doc, &spec("9.9.9")).unwrap_err();
        let available = err.available_versions().unwrap();
        assert_eq!(available.len(), MAX_LISTED_VERSIONS);
        assert_eq!(available[0], "1.0.0");
        assert_eq!(available[19], "1.0.19");
    }

    #[test]
    fn test_available_versions_in_document_order() {
        let doc = "# Title\n## 0.2.0\n## 0.10.0-beta.1\n## notes\n##  0.1.0\n";
        assert_eq!(
            available_versions(doc),
            vec!["0.2.0", "0.10.0-beta.1", "0.1.0"]
        );
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let doc = "## 3.1.4\n\n  pi release  \n\n## 2.7.1\ne\n";
        let first = find_section(doc, &spec("3.1.4")).unwrap();
        let second = find_section(doc, &spec("3.1.4")).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, "pi release");
    }
}
