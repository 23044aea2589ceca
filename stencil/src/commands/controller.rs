use clap::Args;
use eyre::Result;
use stencil_codegen_typescript::{
    ControllerConfig, ControllerGenerator, ControllerKind, Injectable,
};

use super::{UnwrapOrExit, finish};
use crate::project::Project;

#[derive(Args)]
pub struct ControllerCommand {
    /// Controller name; a trailing `Controller` is dropped
    name: String,

    /// Module the controller belongs to
    #[arg(short, long)]
    module: Option<String>,

    /// Model the controller manages
    #[arg(long)]
    model: Option<String>,

    /// Kind of model controller (list, add, edit)
    #[arg(short, long, default_value_t = ControllerKind::List)]
    kind: ControllerKind,

    /// Declare a typed `$scope` for the controller
    #[arg(long)]
    scope: bool,

    /// Service to inject; prefix the name with `$` for library services
    #[arg(short, long = "inject", value_name = "NAME:TYPE[:PATH]")]
    injects: Vec<Injectable>,
}

impl ControllerCommand {
    pub fn run(&self, project: &Project) -> Result<()> {
        let config = ControllerConfig {
            name: self.name.clone(),
            module: self.module.clone(),
            model: self.model.clone(),
            kind: self.kind,
            scope: self.scope,
            injects: self.injects.clone(),
        };
        let report = ControllerGenerator::new(config, project.config())
            .generate(project.storage(), project.root())
            .unwrap_or_exit();
        finish(project, &report)
    }
}
