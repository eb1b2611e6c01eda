//! Filesystem abstraction for import resolution
//!
//! The resolver never touches `std::fs` directly. It asks a [`FileSystem`]
//! whether a candidate path names a file, so hosts can resolve against the
//! real disk ([`NativeFs`]), an in-memory tree ([`MemoryFs`]), or their own
//! virtual filesystem.

mod memory;
mod native;

pub use memory::MemoryFs;
pub use native::NativeFs;

use std::path::Path;

/// Existence check used while probing import candidates.
///
/// Implementations must not mutate anything: resolution only ever reads.
///
/// # Example
///
/// ```rust
/// use scss_resolve::fs::FileSystem;
/// use std::path::Path;
///
/// #[derive(Debug)]
/// struct Nothing;
///
/// impl FileSystem for Nothing {
///     fn exists(&self, _path: &Path) -> bool {
///         false
///     }
/// }
/// ```
pub trait FileSystem: Send + Sync + std::fmt::Debug {
    /// Whether `path` names an existing regular file.
    ///
    /// Directories do not count: an import candidate that happens to name a
    /// directory is not a match.
    fn exists(&self, path: &Path) -> bool;
}

impl<T: FileSystem + ?Sized> FileSystem for std::sync::Arc<T> {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }
}
