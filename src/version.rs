use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{ChangelogError, Result};

/// Characters allowed in a pre-release/build suffix, as a regex class body.
pub(crate) const SUFFIX_CLASS: &str = "A-Za-z0-9.+-";

fn version_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(
            r"^([0-9]+\.[0-9]+\.[0-9]+)(?:-([{}]+))?$",
            SUFFIX_CLASS
        ))
        .expect("version pattern is valid")
    })
}

/// A requested version: a `major.minor.patch` base plus an optional suffix.
///
/// The base is kept verbatim (e.g. `05.0.2` stays `05.0.2`) because headings
/// are matched textually, not numerically.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionSpec {
    base: String,
    suffix: Option<String>,
}

impl VersionSpec {
    /// Parse a version string such as `5.0.2`, `v5.0.2` or `V5.0.2-rc1`.
    ///
    /// Surrounding whitespace and one leading `v`/`V` are ignored. The rest
    /// must be exactly three dot-separated integers, optionally followed by a
    /// hyphen and a suffix made of letters, digits, `.`, `+` and `-`.
    ///
    /// # Returns
    /// * `Ok(VersionSpec)` - Successfully parsed version
    /// * `Err(ChangelogError::InvalidVersionFormat)` - If the string doesn't match
    ///
    /// # Example
    /// ```ignore
    /// let spec = VersionSpec::parse("v5.0.2-beta1")?;
    /// assert_eq!(spec.base(), "5.0.2");
    /// assert_eq!(spec.suffix(), Some("beta1"));
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let raw = trimmed
            .strip_prefix('v')
            .or_else(|| trimmed.strip_prefix('V'))
            .unwrap_or(trimmed);

        let captures = version_regex()
            .captures(raw)
            .ok_or_else(|| ChangelogError::invalid_version(input))?;

        Ok(VersionSpec {
            base: captures[1].to_string(),
            suffix: captures.get(2).map(|m| m.as_str().to_string()),
        })
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn suffix(&self) -> Option<&str> {
        self.suffix.as_deref()
    }

    /// Whether a heading must carry exactly this suffix.
    pub fn is_exact(&self) -> bool {
        self.suffix.is_some()
    }
}

impl FromStr for VersionSpec {
    type Err = ChangelogError;

    fn from_str(s: &str) -> Result<Self> {
        VersionSpec::parse(s)
    }
}

impl fmt::Display for VersionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.suffix {
            Some(suffix) => write!(f, "{}-{}", self.base, suffix),
            None => write!(f, "{}", self.base),
        }
    }
}
