//! Sound pack directory adapter
//!
//! Layout under the packs root:
//!
//! ```text
//! packs/<pack>/manifest.json
//! packs/<pack>/sounds/<file>
//! ```

use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use crate::application::ports::SoundPackSource;
use crate::domain::error::ManifestError;
use crate::domain::pack::PackManifest;

/// Packs directory name inside the engine directory
pub const PACKS_DIR_NAME: &str = "packs";

const MANIFEST_FILE_NAME: &str = "manifest.json";
const SOUNDS_DIR_NAME: &str = "sounds";

/// Sound packs stored as directories on disk
pub struct PackDirectory {
    root: PathBuf,
}

impl PackDirectory {
    /// Use `packs/` inside the engine directory
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            root: dir.into().join(PACKS_DIR_NAME),
        }
    }

    /// Use a custom packs root
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory of a pack, if the name is a single plain path segment
    fn pack_dir(&self, pack: &str) -> Option<PathBuf> {
        let mut components = Path::new(pack).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => Some(self.root.join(pack)),
            _ => None,
        }
    }
}

/// True when `file` is relative and stays below the directory it is joined to
fn is_contained(file: &str) -> bool {
    let path = Path::new(file);
    !file.is_empty() && path.components().all(|c| matches!(c, Component::Normal(_)))
}

#[async_trait]
impl SoundPackSource for PackDirectory {
    async fn manifest(&self, pack: &str) -> Result<PackManifest, ManifestError> {
        let dir = self
            .pack_dir(pack)
            .ok_or_else(|| ManifestError::InvalidPackName(pack.to_string()))?;

        let content = match fs::read_to_string(dir.join(MANIFEST_FILE_NAME)).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(ManifestError::NotFound(pack.to_string()))
            }
            Err(e) => return Err(ManifestError::ReadError(e.to_string())),
        };

        serde_json::from_str(&content).map_err(|e| ManifestError::ParseError(e.to_string()))
    }

    async fn resolve_sound(&self, pack: &str, file: &str) -> Option<PathBuf> {
        if !is_contained(file) {
            tracing::warn!(pack, file, "Rejecting sound path outside the pack");
            return None;
        }

        let path = self.pack_dir(pack)?.join(SOUNDS_DIR_NAME).join(file);
        match fs::metadata(&path).await {
            Ok(meta) if meta.is_file() => Some(path),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{tempdir, TempDir};

    fn pack_fixture() -> TempDir {
        let dir = tempdir().unwrap();
        let pack = dir.path().join("packs").join("peon");
        std::fs::create_dir_all(pack.join("sounds")).unwrap();
        std::fs::write(
            pack.join("manifest.json"),
            r#"{ "categories": { "error": { "sounds": [ { "file": "oops.wav" } ] } } }"#,
        )
        .unwrap();
        std::fs::write(pack.join("sounds").join("oops.wav"), b"RIFF").unwrap();
        dir
    }

    #[tokio::test]
    async fn loads_manifest() {
        let dir = pack_fixture();
        let packs = PackDirectory::in_dir(dir.path());

        let manifest = packs.manifest("peon").await.unwrap();
        assert_eq!(manifest.sounds("error")[0].file, "oops.wav");
    }

    #[tokio::test]
    async fn missing_pack_is_not_found() {
        let dir = pack_fixture();
        let packs = PackDirectory::in_dir(dir.path());

        assert!(matches!(
            packs.manifest("peasant").await,
            Err(ManifestError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn malformed_manifest_is_parse_error() {
        let dir = pack_fixture();
        std::fs::write(dir.path().join("packs/peon/manifest.json"), "{{").unwrap();

        let packs = PackDirectory::in_dir(dir.path());
        assert!(matches!(
            packs.manifest("peon").await,
            Err(ManifestError::ParseError(_))
        ));
    }

    #[tokio::test]
    async fn pack_names_cannot_escape_root() {
        let packs = PackDirectory::with_root("/srv/packs");
        for name in ["..", "../etc", "/etc", "a/b", ""] {
            assert!(matches!(
                packs.manifest(name).await,
                Err(ManifestError::InvalidPackName(_))
            ));
        }
    }

    #[tokio::test]
    async fn resolves_existing_sound() {
        let dir = pack_fixture();
        let packs = PackDirectory::in_dir(dir.path());

        let path = packs.resolve_sound("peon", "oops.wav").await.unwrap();
        assert_eq!(path, dir.path().join("packs/peon/sounds/oops.wav"));
        assert!(path.is_absolute());
    }

    #[tokio::test]
    async fn missing_or_escaping_sound_is_none() {
        let dir = pack_fixture();
        let packs = PackDirectory::in_dir(dir.path());

        assert!(packs.resolve_sound("peon", "gone.wav").await.is_none());
        assert!(packs.resolve_sound("peon", "../manifest.json").await.is_none());
        assert!(packs.resolve_sound("peon", "/etc/passwd").await.is_none());
        assert!(packs.resolve_sound("peon", "").await.is_none());
    }

    #[tokio::test]
    async fn nested_sound_paths_are_allowed() {
        let dir = pack_fixture();
        let nested = dir.path().join("packs/peon/sounds/extra");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(nested.join("more.wav"), b"RIFF").unwrap();

        let packs = PackDirectory::in_dir(dir.path());
        assert!(packs.resolve_sound("peon", "extra/more.wav").await.is_some());
    }
}
