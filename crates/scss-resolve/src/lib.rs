//! SCSS import resolution with `@alias` expansion and `_partial` fallback
//!
//! Preprocessors call an import hook for every `@import "token"` they meet.
//! This crate answers that hook: given the token and an ordered search path
//! it returns the file to inline, or `None` so the host can apply its
//! default behaviour.
//!
//! ## Features
//!
//! - **Partials**: `@import "base/reset"` also finds `base/_reset.scss`
//! - **Aliases**: `@import "@theme/buttons"` looks under the directory the
//!   host maps `@theme` to, and keeps that directory as a search location
//!   for the rest of the session
//! - **Callbacks**: search-path entries can be host functions that receive
//!   the raw token
//! - **Pass-through**: `.css` and `http(s)://` imports are never looked up
//!   on disk
//!
//! ## Example
//!
//! ```rust
//! use scss_resolve::fs::MemoryFs;
//! use scss_resolve::{AliasMap, ImportResolver, SearchPath};
//! use std::path::PathBuf;
//!
//! let fs = MemoryFs::from_files(["/app/scss/base/_reset.scss"]);
//! let mut search_path = SearchPath::new();
//! search_path.add_import_path("/app/scss");
//!
//! let resolver = ImportResolver::new(search_path, AliasMap::new(), fs);
//! let mut session = resolver.session();
//!
//! assert_eq!(
//!     session.resolve("base/reset").unwrap(),
//!     Some(PathBuf::from("/app/scss/base/_reset.scss")),
//! );
//! assert_eq!(session.resolve("reset.css").unwrap(), None);
//! ```
//!
//! Logging goes through `tracing`; install a subscriber to see it.

pub mod alias;
pub mod config;
pub mod error;
pub mod fs;
pub mod resolver;
pub mod search_path;
pub mod token;

pub use alias::{AliasMap, AliasResolver, AliasTable};
pub use config::ResolverConfig;
pub use error::{ConfigError, ResolveError, Result};
pub use resolver::{ImportResolver, ResolveSession, SharedSession};
pub use search_path::{ImportCallback, SearchPath, SearchPathEntry};
