use clap::Args;
use eyre::{Context, Result};
use stencil_codegen_typescript::{SassGenerator, SassKind};

use super::finish;
use crate::project::Project;

#[derive(Args)]
pub struct SassCommand {
    /// Partial name
    name: String,

    /// Kind of partial (page, component, directive, font)
    #[arg(short, long, default_value_t = SassKind::Page)]
    kind: SassKind,
}

impl SassCommand {
    pub fn run(&self, project: &Project) -> Result<()> {
        let generator = SassGenerator::new(&self.name, self.kind, &project.config().paths.scss);
        let report = generator
            .generate(project.storage(), project.root())
            .wrap_err_with(|| format!("failed to generate stylesheet '{}'", self.name))?;
        finish(project, &report)
    }
}
