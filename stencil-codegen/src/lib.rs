//! Shared code generation utilities for Stencil.
//!
//! This crate provides language-agnostic building blocks used by the
//! language-specific code models (e.g., `stencil-codegen-typescript`).
//!
//! # Module Organization
//!
//! - [`builder`] - Emission primitives (CodeBuilder, CodeFragment, Renderable, Indent)
//! - [`splice`] - Placeholder catalogue and the idempotent splice engine used to
//!   grow aggregator files (route tables, import indexes, stylesheet lists)

pub mod builder;
pub mod splice;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
pub use splice::{
    Placeholder, Splice, SpliceOutcome, marker_indent, splice, splice_all, splice_file,
};
