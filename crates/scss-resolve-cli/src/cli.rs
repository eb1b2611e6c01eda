//! Command-line interface definition.

use std::path::PathBuf;

use clap::Parser;
use scss_resolve::alias::normalize_alias_name;

/// Resolve SCSS import tokens to files
#[derive(Parser, Debug)]
#[command(
    name = "scss-resolve",
    version,
    about = "Resolve SCSS import tokens to files",
    long_about = "Resolves SCSS @import tokens against an ordered list of directories,\n\
                  expanding @alias segments and falling back to _partial file names.\n\
                  Exits with status 1 when any token cannot be resolved."
)]
pub struct Cli {
    /// Import tokens to resolve, e.g. `@theme/buttons` or `base/reset`
    #[arg(required = true, value_name = "TOKEN")]
    pub tokens: Vec<String>,

    /// Config file (defaults to ./scss-resolve.toml when present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory to search, after those from the config file
    ///
    /// May be repeated; directories are searched in the order given.
    #[arg(short = 'I', long = "include", value_name = "DIR")]
    pub include: Vec<PathBuf>,

    /// Alias mapping in the form `@name=DIR`
    ///
    /// Overrides a same-named alias from the config file.
    #[arg(short, long = "alias", value_name = "@NAME=DIR", value_parser = parse_alias)]
    pub aliases: Vec<(String, PathBuf)>,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable verbose logging (debug level)
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all log output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored log output
    #[arg(long)]
    pub no_color: bool,
}

/// Parse `@name=DIR`.
pub fn parse_alias(value: &str) -> Result<(String, PathBuf), String> {
    let (name, dir) = value
        .split_once('=')
        .ok_or_else(|| format!("expected @NAME=DIR, got '{value}'"))?;

    if dir.is_empty() {
        return Err(format!("alias '{name}' has an empty directory"));
    }

    let name = normalize_alias_name(name).map_err(|e| e.to_string())?;
    Ok((name, PathBuf::from(dir)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_alias() {
        assert_eq!(
            parse_alias("@theme=/themes/dark").unwrap(),
            ("@theme".to_string(), PathBuf::from("/themes/dark"))
        );
        assert_eq!(parse_alias("web=web").unwrap().0, "@web");
        assert!(parse_alias("@theme").is_err());
        assert!(parse_alias("@theme=").is_err());
        assert!(parse_alias("@a/b=/x").is_err());
    }

    #[test]
    fn test_parse_args() {
        let cli = Cli::try_parse_from([
            "scss-resolve",
            "-I",
            "/a",
            "--include",
            "/b",
            "--alias",
            "@theme=/t",
            "--json",
            "@theme/buttons",
            "base",
        ])
        .unwrap();

        assert_eq!(cli.include, vec![PathBuf::from("/a"), PathBuf::from("/b")]);
        assert_eq!(cli.aliases.len(), 1);
        assert!(cli.json);
        assert_eq!(cli.tokens, vec!["@theme/buttons", "base"]);
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["scss-resolve", "-v", "-q", "x"]).is_err());
    }
}
