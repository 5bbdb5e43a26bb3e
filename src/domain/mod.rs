pub mod error;
pub mod manifest;

pub use error::AppError;
pub use manifest::{
    LINE_SEPARATOR, MANIFEST_FILE, ManifestLayout, RESOURCE_DIR_SEGMENTS, SPRITE_SUFFIX,
    SpriteEntry, parse_manifest, render_manifest, select_sprite_entries,
};
