//! Load sprite entries back from an existing manifest.

use crate::app::AppContext;
use crate::domain::{AppError, SpriteEntry, parse_manifest};
use crate::ports::ResourceFilesystem;

pub fn execute<F: ResourceFilesystem>(ctx: &AppContext<F>) -> Result<Vec<SpriteEntry>, AppError> {
    let content = ctx.filesystem().read_file(&ctx.layout().manifest_path())?;
    let entries = parse_manifest(&content);
    log::debug!("Read {} sprite(s) from manifest", entries.len());
    Ok(entries)
}
