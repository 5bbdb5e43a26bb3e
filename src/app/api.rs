//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::PathBuf;

use crate::adapters::FilesystemStore;
use crate::app::{
    AppContext,
    commands::{generate, read},
};

pub use crate::app::commands::generate::GenerateOutcome;
pub use crate::domain::{AppError, ManifestLayout, SpriteEntry};

/// Create an `AppContext` rooted at a given path.
fn create_context(path: PathBuf) -> AppContext<FilesystemStore> {
    AppContext::new(FilesystemStore::new(path))
}

/// Regenerate `src/resources/sprites.lst` under the current directory.
pub fn generate() -> Result<GenerateOutcome, AppError> {
    let ctx = AppContext::new(FilesystemStore::current()?);
    generate::execute(&ctx)
}

/// Regenerate `src/resources/sprites.lst` under the specified base directory.
pub fn generate_at(path: impl Into<PathBuf>) -> Result<GenerateOutcome, AppError> {
    let ctx = create_context(path.into());
    generate::execute(&ctx)
}

/// Sprite keys listed in the manifest under the current directory.
pub fn sprite_names() -> Result<Vec<String>, AppError> {
    let ctx = AppContext::new(FilesystemStore::current()?);
    sprite_keys(&ctx)
}

/// Sprite keys listed in the manifest under the specified base directory.
pub fn sprite_names_at(path: impl Into<PathBuf>) -> Result<Vec<String>, AppError> {
    sprite_keys(&create_context(path.into()))
}

fn sprite_keys(ctx: &AppContext<FilesystemStore>) -> Result<Vec<String>, AppError> {
    let entries = read::execute(ctx)?;
    Ok(entries.into_iter().map(|entry| entry.key).collect())
}
