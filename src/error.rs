use std::{io, path::PathBuf};
use thiserror::Error;

/// Errors produced while computing the center of mass.
///
/// Line numbers are 1-based, matching what an editor shows.
#[derive(Debug, Error)]
pub enum CenterError {
    #[error("failed to open {path:?}")]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read line {line}")]
    Io {
        line: usize,
        #[source]
        source: io::Error,
    },

    #[error("malformed record at line {line}: {reason}")]
    Format { line: usize, reason: String },

    #[error("no qualifying records found, the mean position is undefined")]
    EmptyInput,
}
