pub mod changelog;
pub mod cli;
pub mod config;
pub mod error;
pub mod ui;
pub mod version;
pub mod warning;

pub use changelog::{available_versions, extract, find_section, Extraction};
pub use error::{ChangelogError, Result};
pub use version::VersionSpec;
