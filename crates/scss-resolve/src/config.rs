//! Resolver configuration.
//!
//! Values are layered with figment. Priority, highest first:
//!
//! 1. Environment variables prefixed `SCSS_RESOLVE_`
//! 2. TOML config file (`scss-resolve.toml` unless a path is given)
//! 3. Defaults
//!
//! ```toml
//! import_paths = ["assets/scss", "vendor/scss"]
//!
//! [aliases]
//! "@theme" = "themes/dark"
//! "@web" = "/srv/app/web"
//! ```

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format as _, Serialized, Toml},
    Figment,
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::alias::{normalize_alias_name, AliasMap};
use crate::error::ConfigError;
use crate::fs::FileSystem;
use crate::resolver::ImportResolver;
use crate::search_path::SearchPath;

/// Config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "scss-resolve.toml";

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "SCSS_RESOLVE_";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Directories searched in order.
    #[serde(default)]
    pub import_paths: Vec<PathBuf>,

    /// Alias name (`@theme`) to directory.
    #[serde(default)]
    pub aliases: IndexMap<String, PathBuf>,

    /// Log filter used by the CLI (`error`, `warn`, `info`, `debug`).
    #[serde(default)]
    pub log_level: Option<String>,
}

impl ResolverConfig {
    /// Load configuration from defaults, a TOML file and the environment.
    ///
    /// An explicit `path` must exist. Without one, `scss-resolve.toml` in
    /// the current directory is used when present.
    #[allow(clippy::disallowed_methods)] // config discovery reads the real disk
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config_file = match path {
            Some(path) if !path.is_file() => {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Some(path) => Some(path.to_path_buf()),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                default_path.is_file().then(|| default_path.to_path_buf())
            }
        };

        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));
        if let Some(path) = config_file {
            tracing::debug!("Loading resolver config from {}", path.display());
            figment = figment.merge(Toml::file(path));
        }
        figment = figment.merge(Env::prefixed(ENV_PREFIX));

        Self::extract(figment)
    }

    /// Parse configuration from a TOML string, without file or environment layers.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let figment = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Toml::string(source));
        Self::extract(figment)
    }

    fn extract(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every alias name is a single `@name` segment.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for name in self.aliases.keys() {
            normalize_alias_name(name)?;
        }
        Ok(())
    }

    /// Merge another config on top of this one.
    ///
    /// Import paths are appended after existing ones (duplicates skipped);
    /// aliases from `other` replace same-named ones.
    pub fn merge(&mut self, other: ResolverConfig) {
        for dir in other.import_paths {
            if !self.import_paths.contains(&dir) {
                self.import_paths.push(dir);
            }
        }
        self.aliases.extend(other.aliases);
        if other.log_level.is_some() {
            self.log_level = other.log_level;
        }
    }

    pub fn search_path(&self) -> SearchPath {
        let mut search_path = SearchPath::new();
        for dir in &self.import_paths {
            search_path.add_import_path(dir.clone());
        }
        search_path
    }

    pub fn alias_map(&self) -> Result<AliasMap, ConfigError> {
        let mut map = AliasMap::new();
        for (name, target) in &self.aliases {
            map.insert(name, target.clone())?;
        }
        Ok(map)
    }

    /// Build a resolver over `fs` from this configuration.
    ///
    /// Alias names are checked again here, since `aliases` may have been
    /// edited after loading.
    pub fn build(&self, fs: impl FileSystem + 'static) -> crate::Result<ImportResolver> {
        Ok(ImportResolver::new(self.search_path(), self.alias_map()?, fs))
    }
}
