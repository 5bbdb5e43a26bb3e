//! Regenerate the sprite manifest from the resource directory listing.

use std::io;
use std::path::PathBuf;

use crate::app::AppContext;
use crate::domain::{AppError, render_manifest, select_sprite_entries};
use crate::ports::ResourceFilesystem;

/// Result of a manifest generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOutcome {
    /// Path of the written manifest, resolved against the base directory.
    pub manifest_path: PathBuf,
    /// Entries written, in manifest order.
    pub entries: Vec<String>,
}

/// List the resource directory, keep sprite entries, and overwrite the manifest.
///
/// Nothing is written when the listing fails, or when a matching name is not
/// valid UTF-8 and so cannot be written to the manifest.
pub fn execute<F: ResourceFilesystem>(ctx: &AppContext<F>) -> Result<GenerateOutcome, AppError> {
    let fs = ctx.filesystem();
    let layout = ctx.layout();

    let names = fs.list_entry_names(layout.resource_dir())?;
    let manifest = layout.manifest_path();
    let manifest_path = fs.resolve_path(&manifest);

    let entries = select_sprite_entries(names)
        .into_iter()
        .map(|name| {
            name.into_string().map_err(|raw| AppError::ManifestNotWritable {
                path: manifest_path.clone(),
                source: io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("entry name {} is not valid UTF-8", raw.to_string_lossy()),
                ),
            })
        })
        .collect::<Result<Vec<String>, AppError>>()?;

    fs.write_file(&manifest, &render_manifest(&entries))?;

    log::info!("Wrote {} sprite(s) to {}", entries.len(), manifest_path.display());
    Ok(GenerateOutcome { manifest_path, entries })
}
