//! Structured model of a TypeScript source file.
//!
//! A [`FileModel`] is built up incrementally by several independent
//! generator passes and then serialized with [`FileModel::generate`].

mod class;
mod decl;
mod file;
mod imports;

pub use class::{ClassModel, ConstructorMut, InterfaceModel};
pub use decl::{Access, Constructor, DefaultValue, Method, Parameter, Property};
pub use file::FileModel;
pub use imports::{ImportEntry, ImportKind, ImportTable};
