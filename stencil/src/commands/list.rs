use clap::Args;
use eyre::{Context, Result};
use stencil_codegen_typescript::ListGenerator;

use super::finish;
use crate::project::Project;

#[derive(Args)]
pub struct ListCommand {
    /// Model the list displays
    model: String,

    /// Model field shown as a column; repeat for more columns
    #[arg(short, long = "field", value_name = "FIELD")]
    fields: Vec<String>,
}

impl ListCommand {
    pub fn run(&self, project: &Project) -> Result<()> {
        let report = ListGenerator::new(&self.model, project.config())
            .with_fields(self.fields.iter().cloned())
            .generate(project.storage(), project.root())
            .wrap_err_with(|| format!("failed to generate the list of '{}'", self.model))?;
        finish(project, &report)
    }
}
