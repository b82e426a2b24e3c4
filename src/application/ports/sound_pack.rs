//! Sound pack port interface

use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::error::ManifestError;
use crate::domain::pack::PackManifest;

/// Port for reading sound packs
#[async_trait]
pub trait SoundPackSource: Send + Sync {
    /// Load the manifest of a pack
    async fn manifest(&self, pack: &str) -> Result<PackManifest, ManifestError>;

    /// Absolute path of a sound file in a pack.
    ///
    /// # Returns
    /// `None` unless the file exists inside the pack.
    async fn resolve_sound(&self, pack: &str, file: &str) -> Option<PathBuf>;
}
