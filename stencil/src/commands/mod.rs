mod completions;
mod controller;
mod list;
mod placeholders;
mod sass;
mod splice;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use completions::CompletionsCommand;
use controller::ControllerCommand;
use eyre::Result;
use list::ListCommand;
use placeholders::PlaceholdersCommand;
use sass::SassCommand;
use splice::SpliceCommand;
use stencil_codegen_typescript::GenerateReport;

use crate::{
    project::Project,
    reports::{GenerateSummary, Report, TerminalOutput},
};

/// Extension trait for exiting on stencil errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for stencil_core::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "stencil")]
#[command(version)]
#[command(about = "Scaffold controllers, components and stylesheets into a TypeScript project")]
pub(crate) struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Flags shared by every command.
#[derive(Args, Debug, Default)]
pub(crate) struct GlobalArgs {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to stencil.toml (defaults to ./stencil.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Print what would be written instead of writing it
    #[arg(long, global = true)]
    pub dry_run: bool,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        let project = || Project::open(self.global.config.as_deref(), self.global.dry_run);

        match &self.command {
            Commands::Controller(cmd) => cmd.run(&project().unwrap_or_exit()),
            Commands::Sass(cmd) => cmd.run(&project().unwrap_or_exit()),
            Commands::List(cmd) => cmd.run(&project().unwrap_or_exit()),
            Commands::Splice(cmd) => cmd.run(&project().unwrap_or_exit()),
            Commands::Placeholders(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a controller and register it in the route table and import aggregator
    Controller(ControllerCommand),

    /// Generate a stylesheet partial and import it from _common.scss
    Sass(SassCommand),

    /// Generate a list component for a model
    List(ListCommand),

    /// Insert a fragment before a placeholder in an existing file
    Splice(SpliceCommand),

    /// List the known placeholders and their tokens
    Placeholders(PlaceholdersCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Print the outcome of a generator run, or the dry-run preview, and fail
/// when some target could not be updated.
fn finish(project: &Project, report: &GenerateReport) -> Result<()> {
    let mut out = TerminalOutput::new();
    match project.preview() {
        Some(preview) => preview.render(&mut out),
        None => GenerateSummary {
            root: project.root(),
            report,
        }
        .render(&mut out),
    }

    if report.is_clean() {
        Ok(())
    } else {
        Err(eyre::eyre!(
            "{} target(s) could not be updated",
            report.failed.len()
        ))
    }
}
