//! Error kinds raised while scanning a source tree.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while scanning a source tree.
///
/// Every variant except [`StatsError::FileReadFailed`] is fatal and stops the run
/// before a report is produced. `FileReadFailed` is logged and the file is skipped.
#[derive(Debug, Error)]
pub enum StatsError {
    #[error("Directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Directory not readable: {}", .0.display())]
    DirectoryNotReadable(PathBuf),

    #[error("Could not enumerate directory {}: {source}", path.display())]
    DirectoryEnumerationFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not process {}: {source}", path.display())]
    FileReadFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
