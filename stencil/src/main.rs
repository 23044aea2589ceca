mod commands;
mod logging;
mod project;
mod reports;

use clap::Parser;
use commands::Cli;
use eyre::Result;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    logging::init_logging(&cli.global)?;
    cli.run()
}
