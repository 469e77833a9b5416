//! User interface module - result emission and formatting.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Emitting the named result for downstream pipeline steps

use std::env;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use anyhow::{anyhow, Result};

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_boundary_warning, display_error, display_selection, display_status, display_success,
};

/// Name of the output carrying the computed tag.
pub const UPDATED_TAG_OUTPUT: &str = "updated_tag";

/// Emits a named result.
///
/// Prints `name=value` on standard output. When `GITHUB_OUTPUT` points to a file,
/// the same line is appended there so later workflow steps can read it.
pub fn emit_output(name: &str, value: &str) -> Result<()> {
    println!("{}={}", name, value);

    if let Some(path) = env::var_os("GITHUB_OUTPUT").filter(|p| !p.is_empty()) {
        write_output_file(Path::new(&path), name, value)?;
    }
    Ok(())
}

/// Appends `name=value` to an output file, creating it if needed.
pub fn write_output_file(path: &Path, name: &str, value: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| anyhow!("Cannot open output file {}: {}", path.display(), e))?;
    writeln!(file, "{}={}", name, value)
        .map_err(|e| anyhow!("Cannot write output file {}: {}", path.display(), e))?;
    Ok(())
}
