//! TypeScript code model and artifact generators for Stencil.
//!
//! The [`model`] module holds an in-memory representation of one source
//! file (imports, interfaces, classes, free functions) that independent
//! generator passes mutate through get-or-create accessors before it is
//! serialized in a fixed, deterministic order.
//!
//! The [`generators`] module builds concrete artifacts on top of it and
//! merges their entries into the shared aggregator files with the splice
//! engine from `stencil-codegen`.
//!
//! # Example
//!
//! ```
//! use stencil_codegen_typescript::model::{FileModel, ImportKind, Parameter, Property};
//!
//! let mut file = FileModel::new("UserController");
//! file.add_import(["BaseController"], "./BaseController", ImportKind::Module);
//!
//! let class = file.add_class("UserController");
//! class.set_parent("BaseController");
//! class.constructor_mut().set_content("super();");
//! class
//!     .constructor_mut()
//!     .add_parameter(Parameter::new("apiService", "ApiService").private())
//!     .unwrap();
//! class.add_property(Property::new("busy", "boolean").with_default(false)).unwrap();
//!
//! let code = file.generate();
//! assert!(code.starts_with("import { BaseController } from \"./BaseController\";\n\n"));
//! assert!(code.contains("constructor(private apiService: ApiService) {"));
//! ```

pub mod generators;
pub mod model;

pub use generators::{
    ControllerConfig, ControllerGenerator, ControllerKind, GenerateReport, Injectable,
    ListGenerator, SassGenerator, SassKind, SourceFile,
};
pub use model::{ClassModel, FileModel, ImportKind, ImportTable, InterfaceModel};
