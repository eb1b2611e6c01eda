//! Alias lookup and the per-session alias table.
//!
//! An alias is a path segment of the form `@name`. The host decides what
//! each alias means through an [`AliasResolver`]; [`AliasMap`] is the
//! configuration-driven implementation used by default.

use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;

use crate::error::{ConfigError, ResolveError, Result};

/// Upper bound on alias-to-alias indirection.
const MAX_ALIAS_DEPTH: usize = 16;

/// Maps an alias segment such as `@theme` to a directory.
///
/// Must be idempotent and free of side effects: the session caches the
/// answer and will not ask again for the same alias.
pub trait AliasResolver: Send + Sync + std::fmt::Debug {
    fn resolve_alias(&self, alias: &str) -> Result<PathBuf>;
}

/// Normalize an alias name to its `@name` form.
///
/// Accepts `theme` and `@theme`. Rejects empty names and names containing
/// `/`, since an alias always occupies exactly one path segment.
pub fn normalize_alias_name(name: &str) -> std::result::Result<String, ConfigError> {
    let bare = name.strip_prefix('@').unwrap_or(name);
    if bare.is_empty() || bare.contains('/') {
        return Err(ConfigError::InvalidAlias {
            name: name.to_string(),
        });
    }
    Ok(format!("@{bare}"))
}

/// Table-backed [`AliasResolver`].
///
/// A target may itself start with an alias segment (`@theme` →
/// `@web/themes/dark`); such targets are expanded recursively.
///
/// # Example
///
/// ```rust
/// use scss_resolve::{AliasMap, AliasResolver};
/// use std::path::PathBuf;
///
/// let mut aliases = AliasMap::new();
/// aliases.insert("@web", "/srv/app/web").unwrap();
/// aliases.insert("theme", "@web/themes/dark").unwrap();
///
/// assert_eq!(
///     aliases.resolve_alias("@theme").unwrap(),
///     PathBuf::from("/srv/app/web/themes/dark"),
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct AliasMap {
    aliases: FxHashMap<String, PathBuf>,
}

impl AliasMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register or replace an alias. Returns the previous target, if any.
    pub fn insert(
        &mut self,
        name: &str,
        target: impl Into<PathBuf>,
    ) -> std::result::Result<Option<PathBuf>, ConfigError> {
        let name = normalize_alias_name(name)?;
        Ok(self.aliases.insert(name, target.into()))
    }

    pub fn get(&self, alias: &str) -> Option<&Path> {
        self.aliases.get(alias).map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    fn expand(&self, alias: &str, chain: &mut Vec<String>) -> Result<PathBuf> {
        if chain.iter().any(|seen| seen == alias) || chain.len() >= MAX_ALIAS_DEPTH {
            return Err(ResolveError::AliasCycle {
                alias: chain.first().cloned().unwrap_or_else(|| alias.to_string()),
            });
        }

        let target = self
            .aliases
            .get(alias)
            .ok_or_else(|| ResolveError::UnknownAlias {
                alias: alias.to_string(),
            })?;

        let target_str = target.to_string_lossy();
        if !target_str.starts_with('@') {
            return Ok(target.clone());
        }

        let (head, rest) = match target_str.split_once('/') {
            Some((head, rest)) => (head, rest),
            None => (&*target_str, ""),
        };

        chain.push(alias.to_string());
        let base = self.expand(head, chain)?;
        let rest = rest.trim_matches('/');
        if rest.is_empty() {
            Ok(base)
        } else {
            Ok(base.join(rest))
        }
    }
}

impl AliasResolver for AliasMap {
    fn resolve_alias(&self, alias: &str) -> Result<PathBuf> {
        self.expand(alias, &mut Vec::new())
    }
}

impl<N: AsRef<str>, P: Into<PathBuf>> FromIterator<(N, P)> for AliasMap {
    /// Collect pairs, skipping names that fail [`normalize_alias_name`].
    fn from_iter<I: IntoIterator<Item = (N, P)>>(iter: I) -> Self {
        let mut map = AliasMap::new();
        for (name, target) in iter {
            if let Err(err) = map.insert(name.as_ref(), target) {
                tracing::warn!("Skipping alias: {}", err);
            }
        }
        map
    }
}

/// Aliases discovered during one resolution session.
///
/// Remembers what each alias resolved to, and the discovered directories in
/// registration order without duplicates. Those directories are searched
/// after the caller's own entries, for every later import.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    resolved: FxHashMap<String, PathBuf>,
    directories: Vec<PathBuf>,
}

impl AliasTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory previously resolved for `alias`.
    pub fn get(&self, alias: &str) -> Option<&Path> {
        self.resolved.get(alias).map(PathBuf::as_path)
    }

    /// Record an alias and its directory.
    ///
    /// Returns `true` when the directory was not yet part of the discovered
    /// search locations.
    pub fn register(&mut self, alias: &str, dir: PathBuf) -> bool {
        self.resolved.insert(alias.to_string(), dir.clone());
        if self.directories.contains(&dir) {
            return false;
        }
        self.directories.push(dir);
        true
    }

    /// Discovered directories, oldest first.
    pub fn directories(&self) -> &[PathBuf] {
        &self.directories
    }

    /// Number of distinct aliases seen.
    pub fn len(&self) -> usize {
        self.resolved.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolved.is_empty()
    }

    pub fn clear(&mut self) {
        self.resolved.clear();
        self.directories.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_alias_name() {
        assert_eq!(normalize_alias_name("theme").unwrap(), "@theme");
        assert_eq!(normalize_alias_name("@theme").unwrap(), "@theme");
        assert!(normalize_alias_name("@").is_err());
        assert!(normalize_alias_name("").is_err());
        assert!(normalize_alias_name("@a/b").is_err());
    }

    #[test]
    fn test_alias_map_lookup() {
        let mut map = AliasMap::new();
        map.insert("@theme", "/themes/dark").unwrap();

        assert_eq!(
            map.resolve_alias("@theme").unwrap(),
            PathBuf::from("/themes/dark")
        );
        assert!(matches!(
            map.resolve_alias("@missing"),
            Err(ResolveError::UnknownAlias { alias }) if alias == "@missing"
        ));
    }

    #[test]
    fn test_alias_map_chained_target() {
        let mut map = AliasMap::new();
        map.insert("@root", "/srv/app").unwrap();
        map.insert("@web", "@root/web").unwrap();
        map.insert("@theme", "@web/themes/dark/").unwrap();
        map.insert("@same", "@root").unwrap();

        assert_eq!(
            map.resolve_alias("@theme").unwrap(),
            PathBuf::from("/srv/app/web/themes/dark")
        );
        assert_eq!(map.resolve_alias("@same").unwrap(), PathBuf::from("/srv/app"));
    }

    #[test]
    fn test_alias_map_cycle() {
        let mut map = AliasMap::new();
        map.insert("@a", "@b/x").unwrap();
        map.insert("@b", "@a/y").unwrap();

        assert!(matches!(
            map.resolve_alias("@a"),
            Err(ResolveError::AliasCycle { alias }) if alias == "@a"
        ));
    }

    #[test]
    fn test_alias_map_from_iter_skips_invalid() {
        let map: AliasMap = [("theme", "/t"), ("bad/name", "/x")].into_iter().collect();
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("@theme"), Some(Path::new("/t")));
    }

    #[test]
    fn test_alias_table_registration() {
        let mut table = AliasTable::new();
        assert!(table.register("@theme", PathBuf::from("/themes/dark")));
        assert!(!table.register("@theme", PathBuf::from("/themes/dark")));
        assert!(!table.register("@skin", PathBuf::from("/themes/dark")));
        assert!(table.register("@vendor", PathBuf::from("/vendor")));

        assert_eq!(table.len(), 3);
        assert_eq!(
            table.directories(),
            &[PathBuf::from("/themes/dark"), PathBuf::from("/vendor")]
        );
        assert_eq!(table.get("@skin"), Some(Path::new("/themes/dark")));

        table.clear();
        assert!(table.is_empty());
        assert!(table.directories().is_empty());
    }
}
