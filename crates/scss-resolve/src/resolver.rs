//! Import resolution over an ordered search path.
//!
//! [`ImportResolver`] holds the immutable part of resolution: the caller's
//! search path, the alias facility and the filesystem. Aliases discovered
//! while resolving live in a caller-owned [`AliasTable`], usually through a
//! [`ResolveSession`].
//!
//! # Algorithm
//!
//! ```text
//! token ──▶ external? (.css / http(s)://) ──yes──▶ no candidates
//!   │no
//!   ▼
//! [verbatim, _partial] ──▶ strip @alias, register alias directory
//!   │
//!   ▼
//! caller entries, then discovered alias directories, in order:
//!   Directory(dir) → dir/cand.scss, dir/cand (verbatim first, then partial)
//!   Resolver(f)    → f(original token)
//! first hit wins, otherwise None
//! ```

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::alias::{AliasResolver, AliasTable};
use crate::error::Result;
use crate::fs::FileSystem;
use crate::search_path::{SearchPath, SearchPathEntry};
use crate::token::{self, Candidate};

/// Extension tried before the bare candidate path.
pub const SCSS_EXTENSION: &str = "scss";

/// Resolves SCSS import tokens to files.
///
/// Cheap to clone; all state is shared behind `Arc`s.
///
/// # Example
///
/// ```rust
/// use scss_resolve::fs::MemoryFs;
/// use scss_resolve::{AliasMap, ImportResolver, SearchPath};
/// use std::path::PathBuf;
///
/// let fs = MemoryFs::from_files(["/themes/dark/buttons.scss"]);
/// let mut aliases = AliasMap::new();
/// aliases.insert("@theme", "/themes/dark").unwrap();
///
/// let resolver = ImportResolver::new(SearchPath::new(), aliases, fs);
/// let mut session = resolver.session();
///
/// let found = session.resolve("@theme/buttons").unwrap();
/// assert_eq!(found, Some(PathBuf::from("/themes/dark/buttons.scss")));
/// ```
#[derive(Debug, Clone)]
pub struct ImportResolver {
    search_path: Arc<SearchPath>,
    aliases: Arc<dyn AliasResolver>,
    fs: Arc<dyn FileSystem>,
}

impl ImportResolver {
    pub fn new(
        search_path: SearchPath,
        aliases: impl AliasResolver + 'static,
        fs: impl FileSystem + 'static,
    ) -> Self {
        Self {
            search_path: Arc::new(search_path),
            aliases: Arc::new(aliases),
            fs: Arc::new(fs),
        }
    }

    /// Build from already shared collaborators.
    pub fn from_shared(
        search_path: Arc<SearchPath>,
        aliases: Arc<dyn AliasResolver>,
        fs: Arc<dyn FileSystem>,
    ) -> Self {
        Self {
            search_path,
            aliases,
            fs,
        }
    }

    /// The caller-configured search path.
    pub fn search_path(&self) -> &SearchPath {
        &self.search_path
    }

    /// Start a private session with an empty alias table.
    pub fn session(&self) -> ResolveSession {
        ResolveSession {
            resolver: self.clone(),
            aliases: AliasTable::new(),
        }
    }

    /// Resolve `token`, recording discovered aliases in `table`.
    ///
    /// Returns `Ok(None)` when nothing matches. The only errors come from the
    /// alias facility.
    pub fn find_import(&self, token: &str, table: &mut AliasTable) -> Result<Option<PathBuf>> {
        let candidates = token::candidates(token);

        for candidate in &candidates {
            if let Some(alias) = &candidate.alias {
                self.register_alias(alias, table)?;
            }
        }

        for entry in self.search_path.entries() {
            let found = match entry {
                SearchPathEntry::Directory(dir) => self.probe_directory(dir, &candidates),
                SearchPathEntry::Resolver(callback) => {
                    let found = callback.call(token);
                    if found.is_some() {
                        tracing::trace!("Import callback '{}' claimed {}", callback.name(), token);
                    }
                    found
                }
            };

            if let Some(path) = found {
                tracing::debug!("Resolved import '{}' to {}", token, path.display());
                return Ok(Some(path));
            }
        }

        for dir in table.directories() {
            // already probed as a caller entry
            if self.search_path.contains_directory(dir) {
                continue;
            }
            if let Some(path) = self.probe_directory(dir, &candidates) {
                tracing::debug!("Resolved import '{}' to {}", token, path.display());
                return Ok(Some(path));
            }
        }

        tracing::debug!("Import '{}' not found", token);
        Ok(None)
    }

    fn register_alias(&self, alias: &str, table: &mut AliasTable) -> Result<()> {
        if table.get(alias).is_some() {
            return Ok(());
        }

        let dir = self.aliases.resolve_alias(alias)?;
        tracing::trace!("Alias {} registered as {}", alias, dir.display());
        table.register(alias, dir);
        Ok(())
    }

    fn probe_directory(&self, dir: &Path, candidates: &[Candidate]) -> Option<PathBuf> {
        for candidate in candidates {
            let base = join_candidate(dir, &candidate.path);

            let mut with_ext = base.clone().into_os_string();
            with_ext.push(".");
            with_ext.push(SCSS_EXTENSION);
            let with_ext = PathBuf::from(with_ext);

            tracing::trace!("Probing {}", with_ext.display());
            if self.fs.exists(&with_ext) {
                return Some(with_ext);
            }

            tracing::trace!("Probing {}", base.display());
            if self.fs.exists(&base) {
                return Some(base);
            }
        }
        None
    }
}

/// Append a candidate to a directory by plain concatenation.
///
/// A `/` is inserted only when the directory is non-empty and does not
/// already end with one. Unlike `Path::join`, an absolute candidate does not
/// replace the directory.
pub fn join_candidate(dir: &Path, candidate: &str) -> PathBuf {
    let mut joined = OsString::from(dir.as_os_str());
    let needs_separator = !joined.is_empty() && !dir.to_string_lossy().ends_with('/');
    if needs_separator {
        joined.push("/");
    }
    joined.push(candidate);
    PathBuf::from(joined)
}

/// Caller-owned resolution context.
///
/// Aliases resolved by one import are remembered for the rest of the
/// session, and their directories become fallback search locations for
/// every later import, including unrelated ones.
#[derive(Debug, Clone)]
pub struct ResolveSession {
    resolver: ImportResolver,
    aliases: AliasTable,
}

impl ResolveSession {
    pub fn resolve(&mut self, token: &str) -> Result<Option<PathBuf>> {
        self.resolver.find_import(token, &mut self.aliases)
    }

    pub fn resolver(&self) -> &ImportResolver {
        &self.resolver
    }

    pub fn alias_table(&self) -> &AliasTable {
        &self.aliases
    }

    /// Forget every discovered alias.
    pub fn reset(&mut self) {
        self.aliases.clear();
    }

    /// New session seeded with this session's discoveries.
    ///
    /// The two sessions diverge from here on.
    pub fn fork(&self) -> Self {
        self.clone()
    }

    pub fn into_shared(self) -> SharedSession {
        SharedSession {
            inner: Arc::new(Mutex::new(self)),
        }
    }
}

/// A session shared by concurrent compilations.
///
/// Every resolution holds the lock for its whole duration, so alias
/// registration and the search that follows it are atomic.
#[derive(Debug, Clone)]
pub struct SharedSession {
    inner: Arc<Mutex<ResolveSession>>,
}

impl SharedSession {
    pub fn resolve(&self, token: &str) -> Result<Option<PathBuf>> {
        self.inner.lock().resolve(token)
    }

    /// Copy the current state into a private session.
    pub fn snapshot(&self) -> ResolveSession {
        self.inner.lock().fork()
    }

    pub fn discovered_directories(&self) -> Vec<PathBuf> {
        self.inner.lock().alias_table().directories().to_vec()
    }
}
