//! Class-file loaders
//!
//! Adapters for the [`ClassFileLoader`] port. Rust cannot pull declarations
//! into a running program, so inclusion means: the file must resolve to a
//! readable regular file, and it is recorded so each path is handled once.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use ioc_domain::{BoxError, ClassFileLoader};
use tracing::debug;

/// Includes class files from the local filesystem, once per path
#[derive(Debug, Default)]
pub struct FilesystemClassFileLoader {
    root: Option<PathBuf>,
    loaded: Mutex<HashSet<PathBuf>>,
}

impl FilesystemClassFileLoader {
    /// Resolve relative paths against the working directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve relative paths against `root`
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
            loaded: Mutex::default(),
        }
    }

    /// Whether `path` has already been included
    pub fn is_loaded(&self, path: &str) -> bool {
        let Ok(resolved) = self.resolve(path).canonicalize() else {
            return false;
        };
        self.loaded_paths().contains(&resolved)
    }

    /// Number of distinct files included so far
    pub fn loaded_count(&self) -> usize {
        self.loaded_paths().len()
    }

    fn resolve(&self, path: &str) -> PathBuf {
        let path = Path::new(path);
        match &self.root {
            Some(root) if path.is_relative() => root.join(path),
            _ => path.to_path_buf(),
        }
    }

    fn loaded_paths(&self) -> std::sync::MutexGuard<'_, HashSet<PathBuf>> {
        // The set stays consistent even if a holder panicked
        self.loaded
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl ClassFileLoader for FilesystemClassFileLoader {
    fn load(&self, path: &str) -> Result<(), BoxError> {
        let resolved = self
            .resolve(path)
            .canonicalize()
            .map_err(|e| format!("class file '{path}' does not resolve: {e}"))?;
        if self.loaded_paths().contains(&resolved) {
            return Ok(());
        }
        let metadata = std::fs::metadata(&resolved)?;
        if !metadata.is_file() {
            return Err(format!("class file '{}' is not a regular file", resolved.display()).into());
        }
        std::fs::File::open(&resolved)?;
        debug!(path = %resolved.display(), "Included class file");
        self.loaded_paths().insert(resolved);
        Ok(())
    }
}

/// Accepts every path without touching the filesystem
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopClassFileLoader;

impl ClassFileLoader for NoopClassFileLoader {
    fn load(&self, _path: &str) -> Result<(), BoxError> {
        Ok(())
    }
}
