//! Core utilities and types for the Stencil scaffolding tool.
//!
//! This crate provides the pieces every generator relies on: the error
//! taxonomy, the storage port generated files are written through, the
//! project configuration and a handful of naming helpers.

mod config;
mod error;
mod file;
mod storage;
mod utils;

pub use config::{CONFIG_FILE, Config, PathsConfig, ProjectConfig};
pub use error::{DeclarationKind, Error, Result};
// File operations
pub use file::{FileRules, GeneratedFile, Overwrite, WriteResult};
pub use storage::{LocalStorage, MemoryStorage, Storage};
// String utilities
pub use utils::{plural, relative_import_path, to_camel_case, to_kebab_case, to_pascal_case};
