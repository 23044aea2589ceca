use std::io::{self, Write};

use clap::{Args, CommandFactory};
use clap_complete::Shell;
use eyre::{Result, WrapErr};

use super::Cli;

#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    shell: Shell,
}

impl CompletionsCommand {
    pub fn run(&self) -> Result<()> {
        let mut stdout = io::stdout().lock();
        self.write_to(&mut stdout)?;
        stdout.flush().wrap_err("failed to write completions")
    }

    /// Write the completion script for `self.shell`. Placeholder names are
    /// completed from their closed set.
    fn write_to(&self, out: &mut impl Write) -> Result<()> {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        tracing::debug!(shell = %self.shell, bin = %name, "generating completions");
        clap_complete::generate(self.shell, &mut cmd, name, out);
        Ok(())
    }
}
