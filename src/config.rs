use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ChangelogError, Result};

/// File name looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "changelog-section.toml";

/// File name looked up in the user config directory.
pub const USER_CONFIG_FILE: &str = ".changelog-section.toml";

/// Represents the complete configuration for changelog-section.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub changelog: ChangelogConfig,
}

/// Returns the default changelog document path.
fn default_changelog_path() -> PathBuf {
    PathBuf::from("CHANGELOG.md")
}

/// Where the changelog document lives when `--file` is not given.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ChangelogConfig {
    #[serde(default = "default_changelog_path")]
    pub path: PathBuf,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        ChangelogConfig {
            path: default_changelog_path(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `changelog-section.toml` in current directory
/// 3. `.changelog-section.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new(LOCAL_CONFIG_FILE).exists() {
        fs::read_to_string(LOCAL_CONFIG_FILE)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(USER_CONFIG_FILE);
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    parse_config(&config_str)
}

/// Parses configuration from TOML text.
pub fn parse_config(config_str: &str) -> Result<Config> {
    toml::from_str(config_str).map_err(|e| ChangelogError::config(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_path() {
        let config = Config::default();
        assert_eq!(config.changelog.path, PathBuf::from("CHANGELOG.md"));
    }

    #[test]
    fn test_parse_empty_uses_defaults() {
        assert_eq!(parse_config("").unwrap(), Config::default());
        assert_eq!(parse_config("[changelog]\n").unwrap(), Config::default());
    }

    #[test]
    fn test_parse_custom_path() {
        let config = parse_config("[changelog]\npath = \"docs/HISTORY.md\"\n").unwrap();
        assert_eq!(config.changelog.path, PathBuf::from("docs/HISTORY.md"));
    }

    #[test]
    fn test_parse_invalid() {
        let err = parse_config("[changelog\npath = 1").unwrap_err();
        assert!(matches!(err, ChangelogError::Config(_)));
    }

    #[test]
    fn test_parse_wrong_type() {
        assert!(parse_config("[changelog]\npath = 42\n").is_err());
    }
}
