//! Resolve command implementation.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use scss_resolve::fs::NativeFs;
use scss_resolve::ResolverConfig;
use serde::Serialize;

use crate::cli::Cli;
use crate::logger::LogLevel;

/// Outcome for one token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub token: String,
    pub path: Option<PathBuf>,
}

/// Merge the config file with command-line overrides.
pub fn load_config(args: &Cli) -> anyhow::Result<ResolverConfig> {
    let mut config = ResolverConfig::load(args.config.as_deref())
        .context("Failed to load resolver configuration")?;

    config.merge(ResolverConfig {
        import_paths: args.include.clone(),
        aliases: args.aliases.iter().cloned().collect(),
        log_level: None,
    });

    Ok(config)
}

/// Log level requested by the config file, if valid.
pub fn configured_level(config: &ResolverConfig) -> Option<LogLevel> {
    config.log_level.as_deref().and_then(|level| level.parse().ok())
}

/// Resolve every token in one session, in order.
///
/// Aliases discovered by earlier tokens act as search locations for later
/// ones, the same way they would within one stylesheet compilation.
pub fn resolve_all(config: &ResolverConfig, tokens: &[String]) -> anyhow::Result<Vec<Resolution>> {
    let resolver = config.build(NativeFs)?;
    let mut session = resolver.session();

    tokens
        .iter()
        .map(|token| {
            let path = session
                .resolve(token)
                .with_context(|| format!("Failed to resolve '{token}'"))?;
            Ok(Resolution {
                token: token.clone(),
                path,
            })
        })
        .collect()
}

/// Write results as tab-separated lines or as a JSON array.
pub fn write_results(out: &mut impl Write, results: &[Resolution], json: bool) -> anyhow::Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, results)?;
        writeln!(out)?;
        return Ok(());
    }

    for result in results {
        match &result.path {
            Some(path) => writeln!(out, "{}\t{}", result.token, path.display())?,
            None => writeln!(out, "{}\tnot found", result.token)?,
        }
    }
    Ok(())
}
