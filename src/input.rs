//! Reading CLI inputs.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

/// Reads `path` to a string, or all of stdin when `path` is `-`.
///
/// # Errors
///
/// Returns an error naming the path if it can't be read or isn't UTF-8.
pub fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read stdin")?;
        return Ok(buffer);
    }
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file: {}", path.display()))
}
