// crates/locate_script_markers/src/scanner.rs

use std::fs;
use std::io;
use std::path::Path;

use regex::Regex;

/// Trait abstracting the line-scan collaborator.
///
/// A scanner reports every line of the file that matches the pattern, each
/// prefixed with its 1-based line number and a colon (the `grep -n` output
/// shape), in file order. No match yields an empty vector, not an error.
pub trait LineScanner {
    fn scan(&self, path: &Path, pattern: &Regex) -> io::Result<Vec<String>>;
}

/// Default implementation of the [`LineScanner`] trait.
///
/// Matches lines in process instead of shelling out. Undecodable byte
/// sequences are replaced rather than failing the scan.
pub struct InProcessLineScanner;

impl LineScanner for InProcessLineScanner {
    fn scan(&self, path: &Path, pattern: &Regex) -> io::Result<Vec<String>> {
        let bytes = fs::read(path)?;
        let content = String::from_utf8_lossy(&bytes);
        Ok(content
            .lines()
            .enumerate()
            .filter(|(_, line)| pattern.is_match(line))
            .map(|(idx, line)| format!("{}:{}", idx + 1, line))
            .collect())
    }
}
