//! Filesystem adapter for the manifest store port.
//!
//! `FilesystemStore` owns a base directory and implements
//! `ResourceFilesystem` on top of `std::fs`.

mod resource_filesystem;

use std::path::PathBuf;

use crate::domain::AppError;

/// Filesystem-backed store rooted at a base directory.
#[derive(Debug, Clone)]
pub struct FilesystemStore {
    root: PathBuf,
}

impl FilesystemStore {
    /// Create a store rooted at the given directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Create a store rooted at the current working directory.
    pub fn current() -> Result<Self, AppError> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(cwd))
    }
}
