//! Error types for import resolution and configuration loading.
//!
//! An import that matches no file is not an error: resolution returns
//! `Ok(None)`. Errors only come from the alias facility or from loading
//! configuration.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ResolveError>;

/// Errors raised while resolving an import token.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The alias facility has no mapping for this alias.
    #[error("unknown alias '{alias}'")]
    UnknownAlias { alias: String },

    /// An alias target refers back to itself through other aliases.
    #[error("alias '{alias}' expands to itself")]
    AliasCycle { alias: String },

    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors raised while loading a [`ResolverConfig`](crate::ResolverConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    NotFound(PathBuf),

    #[error("invalid config value: {0}")]
    Extract(#[from] Box<figment::Error>),

    #[error("invalid alias name '{name}': expected '@name' without '/'")]
    InvalidAlias { name: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        ConfigError::Extract(Box::new(err))
    }
}
