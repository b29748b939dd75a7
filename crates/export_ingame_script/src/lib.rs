// crates/export_ingame_script/src/lib.rs

use std::fs;
use std::path::{Path, PathBuf};

use locate_script_markers::{locate_first_match, InProcessLineScanner, END_MARKER, START_MARKER};

mod error;

pub use error::ExportError;

/// Fixed name of the script file, both inside the project dir and at the
/// destination.
pub const SCRIPT_FILENAME: &str = "Script.cs";

/// Immutable root-directory configuration, built once at startup and passed
/// explicitly into [`export_script`].
#[derive(Clone, Debug)]
pub struct ExportConfig {
    /// Directory containing one subdirectory per script project.
    pub scripts_root: PathBuf,
    /// Directory the game loads local scripts from
    /// (`<...>\AppData\Roaming\SpaceEngineers\IngameScripts\local`).
    pub destination_root: PathBuf,
}

impl ExportConfig {
    /// Destination file for the given project.
    pub fn destination_path(&self, project_id: &str) -> PathBuf {
        self.destination_root.join(project_id).join(SCRIPT_FILENAME)
    }
}

/// Resolves the project's `Script.cs`, checking existence of both the
/// project dir and the file itself.
pub fn resolve_script_path(config: &ExportConfig, project_id: &str) -> Result<PathBuf, ExportError> {
    let project_dir = config.scripts_root.join(project_id);
    if !project_dir.is_dir() {
        return Err(ExportError::ProjectDirNotFound {
            project: project_id.to_string(),
        });
    }
    let script_path = project_dir.join(SCRIPT_FILENAME);
    if !script_path.is_file() {
        return Err(ExportError::ScriptFileNotFound {
            project: project_id.to_string(),
        });
    }
    Ok(script_path)
}

/// Copies the lines strictly between the two ingame markers of the project's
/// `Script.cs` into `<destination_root>/<project_id>/Script.cs`, overwriting
/// any prior copy.
///
/// The destination subdirectory is created if absent; a pre-existing
/// destination file is deleted before the new content is written. Nothing is
/// written when the markers cannot be located.
pub fn export_script(config: &ExportConfig, project_id: &str) -> Result<(), ExportError> {
    // Source existence is checked before the destination is touched.
    let script_path = resolve_script_path(config, project_id)?;

    let destination_dir = config.destination_root.join(project_id);
    if !destination_dir.is_dir() {
        fs::create_dir(&destination_dir).map_err(|source| ExportError::DestinationWrite {
            path: destination_dir.clone(),
            source,
        })?;
    }

    let destination_path = destination_dir.join(SCRIPT_FILENAME);
    if destination_path.exists() {
        fs::remove_file(&destination_path).map_err(|source| ExportError::DestinationWrite {
            path: destination_path.clone(),
            source,
        })?;
    }

    let (start_line, end_line) = trimming_borders(&script_path)?;
    log::debug!("markers of {project_id} at lines {start_line} and {end_line}");

    let bytes = fs::read(&script_path).map_err(|source| ExportError::SourceRead {
        path: script_path.clone(),
        source,
    })?;
    let content = String::from_utf8_lossy(&bytes);
    let lines: Vec<&str> = content.split_inclusive('\n').collect();

    let ingame_script = ingame_slice(&lines, start_line, end_line)?;
    fs::write(&destination_path, ingame_script.concat()).map_err(|source| {
        ExportError::DestinationWrite {
            path: destination_path.clone(),
            source,
        }
    })?;

    log::info!(
        "exported {} line(s) to {}",
        ingame_script.len(),
        destination_path.display()
    );
    Ok(())
}

/// Locates the two marker lines of the script file. Both numbers are
/// 1-based; the two scans are independent.
fn trimming_borders(script_path: &Path) -> Result<(usize, usize), ExportError> {
    let scanner = InProcessLineScanner;
    let start_line = locate_first_match(&scanner, script_path, &START_MARKER)?;
    let end_line = locate_first_match(&scanner, script_path, &END_MARKER)?;
    Ok((start_line, end_line))
}

// The marker lines themselves are excluded: the span starts on the line
// after the start marker and stops on the line before the end marker.
fn ingame_slice<'a>(
    lines: &'a [&'a str],
    start_line: usize,
    end_line: usize,
) -> Result<&'a [&'a str], ExportError> {
    if start_line >= end_line {
        return Err(ExportError::MarkersOutOfOrder {
            start: start_line,
            end: end_line,
        });
    }
    let end_idx = (end_line - 1).min(lines.len());
    let start_idx = start_line.min(end_idx);
    Ok(&lines[start_idx..end_idx])
}
