// crates/locate_script_markers/src/lib.rs

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

mod scanner;

pub use scanner::{InProcessLineScanner, LineScanner};

/// Pattern for the opening marker: optional leading whitespace, then the
/// fixed tag. Trailing content on the same line is allowed.
pub static START_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*// INGAME SCRIPT START").unwrap());

/// Pattern for the closing marker, same shape as [`START_MARKER`].
pub static END_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*// INGAME SCRIPT END").unwrap());

#[derive(Debug, Error)]
pub enum LocateError {
    /// No line of the scanned file matched the pattern.
    #[error("no line matching `{pattern}` was found")]
    MarkerNotFound { pattern: String },

    /// A scan row did not carry the `<line-number>:` prefix.
    #[error("scan output has no line number: {line:?}")]
    MalformedMatchLine { line: String },

    #[error("failed to scan file")]
    Scan(#[from] std::io::Error),
}

/// Returns the 1-based number of the first line of `path` that matches
/// `pattern`.
///
/// The scan itself is delegated to the [`LineScanner`] collaborator, which
/// reports matches as grep-style `<line-number>:<content>` rows.
///
/// # Errors
///
/// Returns [`LocateError::MarkerNotFound`] if nothing matches, and
/// [`LocateError::MalformedMatchLine`] if the first reported row has no
/// parseable line-number prefix.
pub fn locate_first_match(
    scanner: &dyn LineScanner,
    path: &Path,
    pattern: &Regex,
) -> Result<usize, LocateError> {
    let rows = scanner.scan(path, pattern)?;
    log::debug!("{} line(s) match `{}` in {}", rows.len(), pattern, path.display());
    let first = rows.into_iter().next().ok_or_else(|| LocateError::MarkerNotFound {
        pattern: pattern.to_string(),
    })?;
    extract_line_num(&first)
}

// Row must look like: "28:    // INGAME ...".
fn extract_line_num(row: &str) -> Result<usize, LocateError> {
    let malformed = || LocateError::MalformedMatchLine { line: row.to_string() };
    let colon_pos = row.find(':').filter(|&pos| pos >= 1).ok_or_else(malformed)?;
    row[..colon_pos].parse().map_err(|_| malformed())
}
