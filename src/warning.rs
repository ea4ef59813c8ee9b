use std::fmt;

/// Warnings raised while matching a version heading.
/// These are non-fatal issues that should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractionWarning {
    /// The matched version has more than one heading; only the first is used
    DuplicateHeading { version: String, occurrences: usize },
    /// A request without suffix matched a pre-release heading
    PrereleaseMatched { requested: String, matched: String },
}

impl fmt::Display for ExtractionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractionWarning::DuplicateHeading {
                version,
                occurrences,
            } => {
                write!(
                    f,
                    "Version '{}' has {} headings; using the first one",
                    version, occurrences
                )
            }
            ExtractionWarning::PrereleaseMatched { requested, matched } => {
                write!(
                    f,
                    "Requested '{}' matched heading '{}'; pass the full version to select another",
                    requested, matched
                )
            }
        }
    }
}
