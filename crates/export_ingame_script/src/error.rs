// crates/export_ingame_script/src/error.rs

use std::io;
use std::path::PathBuf;

use locate_script_markers::LocateError;
use thiserror::Error;

/// Terminal failures of a single export run. None are retried.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("project dir {project} is not found")]
    ProjectDirNotFound { project: String },

    #[error("Script.cs file is not found in {project} dir")]
    ScriptFileNotFound { project: String },

    #[error("failed to read {path}")]
    SourceRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Locate(#[from] LocateError),

    /// The start marker sits on or below the end marker, so there is no
    /// well-defined span between them.
    #[error("start marker at line {start} is not above end marker at line {end}")]
    MarkersOutOfOrder { start: usize, end: usize },

    #[error("failed to write {path}")]
    DestinationWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
