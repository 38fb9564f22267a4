use std::fs;
use std::ops::Deref;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory for manifests which is deleted when it goes out
/// of scope
pub struct ManifestDir {
    dir: TempDir,
}

impl ManifestDir {
    /// Creates a new empty manifest directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Temporary directory could not be created");
        ManifestDir { dir }
    }

    /// Writes a file with the given content and returns its path.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        self.write_bytes(name, content.as_bytes())
    }

    /// Writes a file with the given raw content and returns its path.
    pub fn write_bytes(&self, name: &str, content: &[u8]) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).expect("Manifest could not be written");
        path
    }
}

impl Deref for ManifestDir {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        self.dir.path()
    }
}
