use std::path::PathBuf;

use clap::{
    Args,
    builder::{PossibleValuesParser, TypedValueParser},
};
use eyre::Result;
use stencil_codegen::{Placeholder, Splice, SpliceOutcome, splice_file};

use super::UnwrapOrExit;
use crate::{
    project::Project,
    reports::{Output, Report, TerminalOutput},
};

#[derive(Args)]
pub struct SpliceCommand {
    /// File containing the placeholder, relative to the project root
    file: PathBuf,

    /// Placeholder to insert before (see `stencil placeholders`)
    #[arg(short, long, value_parser = placeholder_parser())]
    placeholder: Placeholder,

    /// Text to insert
    #[arg(short, long)]
    fragment: String,
}

/// Placeholder names as closed possible values, so help and completions
/// list them.
fn placeholder_parser() -> impl TypedValueParser<Value = Placeholder> {
    PossibleValuesParser::new(Placeholder::ALL.map(|p| p.name()))
        .try_map(|name| name.parse::<Placeholder>())
}

impl SpliceCommand {
    pub fn run(&self, project: &Project) -> Result<()> {
        let path = project.resolve(&self.file);
        let splice = Splice::new(self.placeholder, self.fragment.as_str());
        let outcomes = splice_file(project.storage(), &path, &[splice]).unwrap_or_exit();

        let mut out = TerminalOutput::new();
        if let Some(preview) = project.preview() {
            preview.render(&mut out);
            return Ok(());
        }
        let file = path.display().to_string();
        match outcomes.first() {
            Some(SpliceOutcome::Inserted) => out.modified_item(&file),
            _ => out.unchanged_item(&file),
        }
        Ok(())
    }
}
