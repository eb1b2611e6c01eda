//! In-memory filesystem for tests and virtual hosts.

use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use rustc_hash::FxHashSet;

use super::FileSystem;

/// [`FileSystem`] holding a set of file paths in memory.
///
/// Paths are compared exactly as given; no normalization is applied, which
/// matches how the resolver builds candidates by plain concatenation.
///
/// # Example
///
/// ```rust
/// use scss_resolve::fs::{FileSystem, MemoryFs};
/// use std::path::Path;
///
/// let fs = MemoryFs::from_files(["/styles/_vars.scss"]);
/// assert!(fs.exists(Path::new("/styles/_vars.scss")));
/// assert!(!fs.exists(Path::new("/styles/vars.scss")));
/// ```
#[derive(Debug, Default)]
pub struct MemoryFs {
    files: RwLock<FxHashSet<PathBuf>>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a filesystem containing the given files.
    pub fn from_files<I, P>(files: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            files: RwLock::new(files.into_iter().map(Into::into).collect()),
        }
    }

    /// Add a file. Returns `false` if it was already present.
    pub fn add_file(&self, path: impl Into<PathBuf>) -> bool {
        self.files.write().insert(path.into())
    }

    /// Remove a file. Returns `false` if it was not present.
    pub fn remove_file(&self, path: &Path) -> bool {
        self.files.write().remove(path)
    }

    pub fn len(&self) -> usize {
        self.files.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.read().is_empty()
    }
}

impl FileSystem for MemoryFs {
    fn exists(&self, path: &Path) -> bool {
        self.files.read().contains(path)
    }
}
