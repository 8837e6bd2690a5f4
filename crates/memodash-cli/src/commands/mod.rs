//! CLI command definitions and dispatch.

pub mod run;
pub mod simulate;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use memodash_common::config::DashboardConfig;
use memodash_common::constants::BIN_NAME;

/// memodash: see what memoization saves, one render at a time.
#[derive(Parser, Debug)]
#[command(name = BIN_NAME, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,

    /// Path to a JSON dashboard configuration.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Open the interactive dashboard.
    Run(run::RunArgs),
    /// Replay interactions headlessly and print render counts.
    Simulate(simulate::SimulateArgs),
}

/// Dispatches the parsed CLI command to its handler.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the command fails.
pub fn execute(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_deref())?;
    match cli.command {
        Command::Run(args) => run::execute(args, config),
        Command::Simulate(args) => simulate::execute(&args, &config),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<DashboardConfig> {
    let Some(path) = path else {
        return Ok(DashboardConfig::default());
    };
    tracing::debug!(path = %path.display(), "loading configuration");
    DashboardConfig::load(path)
        .with_context(|| format!("invalid configuration in {}", path.display()))
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
        assert_eq!(Cli::command().get_name(), BIN_NAME);
    }

    #[test]
    fn parses_global_config_after_subcommand() {
        let cli = Cli::try_parse_from([BIN_NAME, "simulate", "--config", "dash.json"]);
        assert!(matches!(
            cli,
            Ok(Cli { config: Some(ref p), command: Command::Simulate(_) }) if p == Path::new("dash.json")
        ));
    }

    #[test]
    fn missing_config_means_defaults() {
        assert!(matches!(load_config(None), Ok(c) if c == DashboardConfig::default()));
    }
}
