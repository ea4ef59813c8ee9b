use thiserror::Error;

/// Unified error type for changelog-section operations
#[derive(Error, Debug)]
pub enum ChangelogError {
    #[error("Invalid version: {0}")]
    InvalidVersionFormat(String),

    #[error("Version \"{version}\" not found. Available: {}", .available.join(", "))]
    VersionNotFound {
        version: String,
        available: Vec<String>,
    },

    #[error("Heading pattern error: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in changelog-section
pub type Result<T> = std::result::Result<T, ChangelogError>;

impl ChangelogError {
    /// Create an invalid version error for the given raw input
    pub fn invalid_version(input: impl Into<String>) -> Self {
        ChangelogError::InvalidVersionFormat(input.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ChangelogError::Config(msg.into())
    }

    /// Versions listed as available, if this is a not-found error
    pub fn available_versions(&self) -> Option<&[String]> {
        match self {
            ChangelogError::VersionNotFound { available, .. } => Some(available),
            _ => None,
        }
    }
}
