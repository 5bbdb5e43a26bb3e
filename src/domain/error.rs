use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for spritelst operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure outside the manifest steps.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The resource directory could not be listed.
    #[error("Failed to list resource directory {}: {source}", path.display())]
    ResourceDirUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The manifest file could not be opened or written.
    #[error("Failed to write manifest {}: {source}", path.display())]
    ManifestNotWritable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The manifest file could not be read back.
    #[error("Failed to read manifest {}: {source}", path.display())]
    ManifestUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl AppError {
    /// The `io::ErrorKind` of the underlying filesystem failure.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::ResourceDirUnreadable { source, .. }
            | AppError::ManifestNotWritable { source, .. }
            | AppError::ManifestUnreadable { source, .. } => source.kind(),
        }
    }
}
