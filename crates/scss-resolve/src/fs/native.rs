//! Native filesystem implementation backed by `std`.

// NativeFs is the one place that is allowed to query the real disk
#![allow(clippy::disallowed_methods)]

use std::path::Path;

use super::FileSystem;

/// [`FileSystem`] over the host operating system.
///
/// Uses a blocking metadata lookup per probe; callers resolve a handful of
/// candidates per import, so no caching is done here.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeFs;

impl FileSystem for NativeFs {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }
}
