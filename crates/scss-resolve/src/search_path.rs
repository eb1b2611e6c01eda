//! Ordered search-path entries consulted during resolution.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Host callback that maps an import token to a file.
///
/// Callbacks always receive the token exactly as written in the import
/// statement, never an alias-expanded candidate.
#[derive(Clone)]
pub struct ImportCallback {
    name: String,
    func: Arc<dyn Fn(&str) -> Option<PathBuf> + Send + Sync>,
}

impl ImportCallback {
    /// Wrap a closure. `name` only shows up in logs and `Debug` output.
    pub fn new<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&str) -> Option<PathBuf> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            func: Arc::new(func),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn call(&self, token: &str) -> Option<PathBuf> {
        (self.func)(token)
    }
}

impl fmt::Debug for ImportCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ImportCallback").field(&self.name).finish()
    }
}

/// One entry of a search path.
#[derive(Debug, Clone)]
pub enum SearchPathEntry {
    /// Directory that import candidates are appended to.
    Directory(PathBuf),
    /// Callback consulted with the original token.
    Resolver(ImportCallback),
}

impl SearchPathEntry {
    pub fn as_directory(&self) -> Option<&Path> {
        match self {
            SearchPathEntry::Directory(dir) => Some(dir.as_path()),
            SearchPathEntry::Resolver(_) => None,
        }
    }
}

impl From<PathBuf> for SearchPathEntry {
    fn from(dir: PathBuf) -> Self {
        SearchPathEntry::Directory(dir)
    }
}

impl From<&str> for SearchPathEntry {
    fn from(dir: &str) -> Self {
        SearchPathEntry::Directory(PathBuf::from(dir))
    }
}

impl From<ImportCallback> for SearchPathEntry {
    fn from(callback: ImportCallback) -> Self {
        SearchPathEntry::Resolver(callback)
    }
}

/// The caller-configured, ordered list of search-path entries.
///
/// Order is resolution priority. Directories discovered through aliases are
/// tracked separately by the session and never land here.
#[derive(Debug, Clone, Default)]
pub struct SearchPath {
    entries: Vec<SearchPathEntry>,
}

impl SearchPath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a directory unless it is already present.
    ///
    /// Returns `false` when the directory was already registered.
    pub fn add_import_path(&mut self, dir: impl Into<PathBuf>) -> bool {
        let dir = dir.into();
        if self.contains_directory(&dir) {
            return false;
        }
        self.entries.push(SearchPathEntry::Directory(dir));
        true
    }

    /// Append a resolver callback.
    pub fn push_resolver(&mut self, callback: ImportCallback) {
        self.entries.push(SearchPathEntry::Resolver(callback));
    }

    /// Replace every entry.
    pub fn set_import_paths<I, E>(&mut self, entries: I)
    where
        I: IntoIterator<Item = E>,
        E: Into<SearchPathEntry>,
    {
        self.entries = entries.into_iter().map(Into::into).collect();
    }

    pub fn contains_directory(&self, dir: &Path) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.as_directory() == Some(dir))
    }

    pub fn entries(&self) -> &[SearchPathEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<E: Into<SearchPathEntry>> FromIterator<E> for SearchPath {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_import_path_is_idempotent() {
        let mut path = SearchPath::new();
        assert!(path.add_import_path("/styles"));
        assert!(!path.add_import_path("/styles"));
        assert!(path.add_import_path("/vendor"));
        assert_eq!(path.len(), 2);
    }

    #[test]
    fn test_set_import_paths_replaces() {
        let mut path: SearchPath = ["/a", "/b"].into_iter().collect();
        path.set_import_paths(["/c"]);
        assert_eq!(path.len(), 1);
        assert!(path.contains_directory(Path::new("/c")));
        assert!(!path.contains_directory(Path::new("/a")));
    }

    #[test]
    fn test_callback_receives_token() {
        let cb = ImportCallback::new("echo", |token| Some(PathBuf::from(token)));
        assert_eq!(cb.call("icons/star"), Some(PathBuf::from("icons/star")));
        assert_eq!(cb.name(), "echo");
        assert_eq!(format!("{cb:?}"), "ImportCallback(\"echo\")");
    }

    #[test]
    fn test_mixed_entries_keep_order() {
        let mut path = SearchPath::new();
        path.push_resolver(ImportCallback::new("none", |_| None));
        path.add_import_path("/styles");

        assert!(matches!(path.entries()[0], SearchPathEntry::Resolver(_)));
        assert_eq!(path.entries()[1].as_directory(), Some(Path::new("/styles")));
    }
}
