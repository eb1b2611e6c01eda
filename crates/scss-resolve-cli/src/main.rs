//! scss-resolve - resolve SCSS import tokens from the command line.

use std::process::ExitCode;

use clap::Parser;
use miette::{miette, Result};
use scss_resolve_cli::{cli, commands, logger};

fn main() -> Result<ExitCode> {
    let args = cli::Cli::parse();

    let config = commands::load_config(&args).map_err(|e| miette!("{e:#}"))?;
    logger::init_logger(
        args.verbose,
        args.quiet,
        args.no_color,
        commands::configured_level(&config),
    );

    let results = commands::resolve_all(&config, &args.tokens).map_err(|e| miette!("{e:#}"))?;

    let mut stdout = std::io::stdout().lock();
    commands::write_results(&mut stdout, &results, args.json).map_err(|e| miette!("{e:#}"))?;

    if results.iter().all(|r| r.path.is_some()) {
        Ok(ExitCode::SUCCESS)
    } else {
        tracing::warn!(
            "{} of {} imports not found",
            results.iter().filter(|r| r.path.is_none()).count(),
            results.len()
        );
        Ok(ExitCode::FAILURE)
    }
}
