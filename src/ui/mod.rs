//! User interface module - section output and diagnostics.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions for diagnostics
//! - This module - Writing the extracted section

use std::io::{self, Write};

use anyhow::Result;

pub mod formatter;

pub use formatter::{
    display_available_versions, display_error, display_not_found, display_warning,
    format_not_found,
};

/// Writes a section followed by a newline.
pub fn write_section<W: Write>(out: &mut W, section: &str) -> Result<()> {
    writeln!(out, "{}", section)?;
    out.flush()?;
    Ok(())
}

/// Prints a section to stdout.
pub fn print_section(section: &str) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_section(&mut handle, section)
}
