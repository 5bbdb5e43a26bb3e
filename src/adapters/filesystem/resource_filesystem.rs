//! `ResourceFilesystem` implementation for `FilesystemStore`.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::ResourceFilesystem;

use super::FilesystemStore;

impl ResourceFilesystem for FilesystemStore {
    fn list_entry_names(&self, path: &Path) -> Result<Vec<OsString>, AppError> {
        let full_path = self.resolve_path(path);
        let unreadable = |source: io::Error| AppError::ResourceDirUnreadable {
            path: full_path.clone(),
            source,
        };

        let entries = fs::read_dir(&full_path).map_err(unreadable)?;
        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(unreadable)?;
            names.push(entry.file_name());
        }
        Ok(names)
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        let full_path = self.resolve_path(path);
        fs::write(&full_path, content)
            .map_err(|source| AppError::ManifestNotWritable { path: full_path, source })
    }

    fn read_file(&self, path: &Path) -> Result<String, AppError> {
        let full_path = self.resolve_path(path);
        fs::read_to_string(&full_path)
            .map_err(|source| AppError::ManifestUnreadable { path: full_path, source })
    }

    fn resolve_path(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }
}
