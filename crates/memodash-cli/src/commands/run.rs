//! `memodash run`: open the interactive dashboard.

use anyhow::Context;
use clap::{Args, ValueEnum};
use memodash_common::config::DashboardConfig;
use memodash_common::types::Variant;

/// Dashboard to open first.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantArg {
    /// Prop-drilled, unmemoized.
    Before,
    /// Store-backed, memoized.
    After,
}

impl From<VariantArg> for Variant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Before => Self::Before,
            VariantArg::After => Self::After,
        }
    }
}

/// Arguments for the `run` command.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Dashboard shown on start; overrides the configuration file.
    #[arg(long, value_enum)]
    pub variant: Option<VariantArg>,
}

/// Executes the `run` command.
///
/// # Errors
///
/// Returns an error if the terminal cannot be driven.
pub fn execute(args: RunArgs, mut config: DashboardConfig) -> anyhow::Result<()> {
    if let Some(variant) = args.variant {
        config.variant = variant.into();
    }
    tracing::info!(variant = %config.variant, "opening dashboard");
    memodash_tui::terminal::run(config).context("dashboard exited with an error")
}
