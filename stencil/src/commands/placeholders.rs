use clap::Args;
use eyre::Result;
use stencil_codegen::Placeholder;

use crate::reports::{Output, TerminalOutput};

#[derive(Args)]
pub struct PlaceholdersCommand {}

impl PlaceholdersCommand {
    pub fn run(&self) -> Result<()> {
        let mut out = TerminalOutput::new();
        for placeholder in Placeholder::ALL {
            out.key_value(placeholder.name(), placeholder.token());
        }
        Ok(())
    }
}
