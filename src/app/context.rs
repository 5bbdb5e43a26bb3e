use crate::domain::ManifestLayout;
use crate::ports::ResourceFilesystem;

/// Application context holding dependencies for command execution.
pub struct AppContext<F: ResourceFilesystem> {
    filesystem: F,
    layout: ManifestLayout,
}

impl<F: ResourceFilesystem> AppContext<F> {
    /// Create a context using the standard manifest layout.
    pub fn new(filesystem: F) -> Self {
        Self { filesystem, layout: ManifestLayout::standard() }
    }

    /// Get a reference to the filesystem port.
    pub fn filesystem(&self) -> &F {
        &self.filesystem
    }

    /// Get a reference to the manifest layout.
    pub fn layout(&self) -> &ManifestLayout {
        &self.layout
    }
}
