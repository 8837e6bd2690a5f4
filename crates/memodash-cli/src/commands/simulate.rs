//! `memodash simulate`: replay interactions without a terminal.

use clap::{Args, ValueEnum};
use memodash_common::config::DashboardConfig;
use memodash_common::types::Variant;
use memodash_tui::app::{Action, App};
use memodash_tui::report::RenderReport;
use memodash_tui::ui::dashboard::DashboardAction;

use crate::output;

/// Which dashboards to replay.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantsArg {
    /// Only the unoptimized dashboard.
    Before,
    /// Only the optimized dashboard.
    After,
    /// Both, side by side.
    Both,
}

impl VariantsArg {
    const fn variants(self) -> &'static [Variant] {
        match self {
            Self::Before => &[Variant::Before],
            Self::After => &[Variant::After],
            Self::Both => &[Variant::Before, Variant::After],
        }
    }
}

/// One scripted interaction.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepArg {
    /// Toggle the sidebar theme.
    Theme,
    /// Toggle the before dashboard's unused local theme.
    FakeToggle,
    /// Press "Refresh All".
    Refresh,
    /// Press the first stat card's refresh button.
    Stats,
    /// Rename the signed-in user.
    User,
}

impl StepArg {
    const DEFAULT_SCRIPT: [Self; 5] = [
        Self::Theme,
        Self::FakeToggle,
        Self::Refresh,
        Self::Stats,
        Self::User,
    ];

    const fn action(self) -> Action {
        match self {
            Self::Theme => Action::ToggleTheme,
            Self::FakeToggle => Action::Dashboard(DashboardAction::FakeToggle),
            Self::Refresh => Action::Dashboard(DashboardAction::RefreshAll),
            Self::Stats => Action::Dashboard(DashboardAction::RefreshStats),
            Self::User => Action::Dashboard(DashboardAction::UpdateUser),
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Theme => "theme",
            Self::FakeToggle => "fake-toggle",
            Self::Refresh => "refresh",
            Self::Stats => "stats",
            Self::User => "user",
        }
    }
}

/// Arguments for the `simulate` command.
#[derive(Args, Debug)]
pub struct SimulateArgs {
    /// Dashboards to replay.
    #[arg(long, value_enum, default_value = "both")]
    pub variant: VariantsArg,

    /// Step to apply after the first pass; repeat for a script. Defaults to
    /// every step once.
    #[arg(long = "step", value_enum)]
    pub steps: Vec<StepArg>,

    /// Print the reports as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Executes the `simulate` command.
///
/// # Errors
///
/// Returns an error if a dashboard fails or the reports cannot be encoded.
pub fn execute(args: &SimulateArgs, config: &DashboardConfig) -> anyhow::Result<()> {
    let reports = simulate(args, config)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        print!("{}", output::render_table(&reports));
    }
    Ok(())
}

fn simulate(args: &SimulateArgs, config: &DashboardConfig) -> anyhow::Result<Vec<RenderReport>> {
    let steps: &[StepArg] = if args.steps.is_empty() {
        &StepArg::DEFAULT_SCRIPT
    } else {
        &args.steps
    };
    let script: Vec<Action> = steps.iter().map(|step| step.action()).collect();
    let labels: Vec<String> = steps.iter().map(|step| step.label().to_string()).collect();

    args.variant
        .variants()
        .iter()
        .map(|&variant| -> anyhow::Result<RenderReport> {
            let mut app = App::new(DashboardConfig {
                variant,
                ..config.clone()
            })?;
            app.run_script(&script)?;
            tracing::info!(%variant, steps = labels.len(), "simulation finished");
            Ok(app.report(labels.clone()))
        })
        .collect()
}
