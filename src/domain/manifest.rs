//! Sprite manifest layout and content rules.
//!
//! The manifest is a flat list of file names taken from one directory,
//! newline-joined with no trailing newline. Selection is an exact,
//! case-sensitive suffix match and keeps the enumeration order as given.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Path segments of the resource directory, relative to the base directory.
pub const RESOURCE_DIR_SEGMENTS: [&str; 2] = ["src", "resources"];

/// File name of the manifest inside the resource directory.
pub const MANIFEST_FILE: &str = "sprites.lst";

/// Suffix an entry name must end with to be listed.
pub const SPRITE_SUFFIX: &str = ".png";

/// Separator placed between manifest lines.
pub const LINE_SEPARATOR: &str = "\n";

/// Where the manifest reads from and writes to, relative to a base directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestLayout {
    resource_dir: PathBuf,
    manifest_file: &'static str,
}

impl ManifestLayout {
    /// `src/resources/sprites.lst`.
    pub fn standard() -> Self {
        let resource_dir = RESOURCE_DIR_SEGMENTS.iter().collect::<PathBuf>();
        Self { resource_dir, manifest_file: MANIFEST_FILE }
    }

    /// Directory whose immediate entries are enumerated.
    pub fn resource_dir(&self) -> &Path {
        &self.resource_dir
    }

    /// Path of the manifest file.
    pub fn manifest_path(&self) -> PathBuf {
        self.resource_dir.join(self.manifest_file)
    }
}

/// Suffix match on the raw name bytes, so names that are not UTF-8 still match.
fn is_sprite_name(name: &OsStr) -> bool {
    name.as_encoded_bytes().ends_with(SPRITE_SUFFIX.as_bytes())
}

/// Keep the names that end with [`SPRITE_SUFFIX`], in their original order.
pub fn select_sprite_entries<I>(names: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    names
        .into_iter()
        .filter(|name| {
            let keep = is_sprite_name(name);
            if !keep {
                log::debug!("Skipping non-sprite entry {}", name.to_string_lossy());
            }
            keep
        })
        .collect()
}

/// Manifest file content for the selected entries.
pub fn render_manifest(entries: &[String]) -> String {
    entries.join(LINE_SEPARATOR)
}

/// One sprite listed in a manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteEntry {
    /// File name as written in the manifest, trimmed.
    pub file_name: String,
    /// Lookup key: the file name with every [`SPRITE_SUFFIX`] removed.
    pub key: String,
}

impl SpriteEntry {
    /// Build an entry from one manifest line. Blank lines yield `None`.
    pub fn from_line(line: &str) -> Option<Self> {
        let file_name = line.trim();
        if file_name.is_empty() {
            return None;
        }
        let key = file_name.replace(SPRITE_SUFFIX, "");
        Some(Self { file_name: file_name.to_string(), key })
    }
}

/// Parse manifest content into its sprite entries, in file order.
pub fn parse_manifest(content: &str) -> Vec<SpriteEntry> {
    content.lines().filter_map(SpriteEntry::from_line).collect()
}
