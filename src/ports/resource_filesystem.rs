//! Filesystem operations needed to build and read the sprite manifest.
//!
//! All `path` arguments are relative to the store's base directory.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Port for the manifest's filesystem access.
pub trait ResourceFilesystem {
    /// Names of the immediate entries of a directory, in enumeration order.
    ///
    /// Files and subdirectories are both returned, names as the OS gives them.
    /// No sorting is applied.
    fn list_entry_names(&self, path: &Path) -> Result<Vec<OsString>, AppError>;

    /// Replace the content of a file, creating it if absent.
    ///
    /// Parent directories are not created.
    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError>;

    /// Read a file as UTF-8 text.
    fn read_file(&self, path: &Path) -> Result<String, AppError>;

    /// Resolve a relative path against the base directory.
    fn resolve_path(&self, path: &Path) -> PathBuf;
}
