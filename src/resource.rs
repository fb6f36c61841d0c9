//! Bundled resource loading.
//!
//! Workflows that instrument a build need static payloads shipped alongside
//! the program (e.g. an instrumentation agent jar) loaded fully into memory
//! before being handed to the build invocation. [`ResourceLoader`] reads
//! such assets from a caller-supplied root directory; assets known at
//! compile time are better served by `include_bytes!`, but installers and
//! plugins typically carry them on disk next to the executable.
//!
//! Reads are all-or-nothing: a resource that cannot be opened or fully read
//! is an error, never partial data. The underlying handle is released on
//! every exit path.

use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::core::CovkitError;

/// Loads byte payloads from a bundled-assets directory.
#[derive(Debug, Clone)]
pub struct ResourceLoader {
    root: PathBuf,
}

impl ResourceLoader {
    /// Creates a loader rooted at the given assets directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The assets root this loader resolves against.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Reads the resource at `resource` (relative to the assets root) fully
    /// into memory.
    ///
    /// # Errors
    ///
    /// Returns [`CovkitError::ResourceNotFound`] if the resource does not
    /// exist, or an I/O error with context if it cannot be fully read.
    pub fn load(&self, resource: impl AsRef<Path>) -> Result<Vec<u8>> {
        let path = self.root.join(resource.as_ref());
        match fs::read(&path) {
            Ok(bytes) => Ok(bytes),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                Err(CovkitError::ResourceNotFound {
                    path: path.display().to_string(),
                }
                .into())
            }
            Err(err) => Err(err).with_context(|| {
                format!("failed to read bundled resource {}", path.display())
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_reads_full_payload() {
        let assets = tempdir().unwrap();
        fs::create_dir(assets.path().join("agent")).unwrap();
        let payload: Vec<u8> = (0..=255).collect();
        fs::write(assets.path().join("agent/agent.jar"), &payload).unwrap();

        let loader = ResourceLoader::new(assets.path());
        let bytes = loader.load("agent/agent.jar").unwrap();
        assert_eq!(bytes, payload);
    }

    #[test]
    fn test_load_empty_resource() {
        let assets = tempdir().unwrap();
        fs::write(assets.path().join("empty.bin"), b"").unwrap();

        let loader = ResourceLoader::new(assets.path());
        assert!(loader.load("empty.bin").unwrap().is_empty());
    }

    #[test]
    fn test_load_missing_resource_is_typed_error() {
        let assets = tempdir().unwrap();
        let loader = ResourceLoader::new(assets.path());

        let err = loader.load("nope.jar").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CovkitError>(),
            Some(CovkitError::ResourceNotFound { .. })
        ));
    }

    #[test]
    fn test_handle_released_after_load() {
        let assets = tempdir().unwrap();
        let path = assets.path().join("payload.bin");
        fs::write(&path, b"data").unwrap();

        let loader = ResourceLoader::new(assets.path());
        loader.load("payload.bin").unwrap();

        // The file must be deletable immediately after the call.
        fs::remove_file(&path).unwrap();
    }
}
