//! Artifact generators built on the file model and the splice engine.
//!
//! Each generator renders its artifacts fully in memory, writes them through
//! a [`Storage`](stencil_core::Storage) and splices entries into the shared
//! aggregator files. A missing placeholder only fails the aggregator it
//! belongs to; the outcome of every target is collected in a
//! [`GenerateReport`].

mod aggregator;
mod controller;
mod injector;
mod list;
mod sass;

use std::path::{Path, PathBuf};

use stencil_codegen::SpliceOutcome;
use stencil_core::{Error, GeneratedFile, Result, WriteResult};

use crate::model::FileModel;

pub use aggregator::{AggregatorKind, aggregator_entries, register_in_aggregator};
pub use controller::{ControllerConfig, ControllerGenerator, ControllerKind};
pub use injector::{Injectable, inject};
pub use list::ListGenerator;
pub use sass::{COMMON_SCSS, SassGenerator, SassKind};

/// What one generator run did to each of its targets.
#[derive(Debug, Default)]
pub struct GenerateReport {
    /// Files written from scratch or regenerated.
    pub written: Vec<PathBuf>,
    /// Create-once files left alone because they already exist.
    pub skipped: Vec<PathBuf>,
    /// Aggregator files that received at least one new entry.
    pub spliced: Vec<PathBuf>,
    /// Aggregator files that already contained every entry.
    pub unchanged: Vec<PathBuf>,
    /// Targets that could not be updated; the rest of the run went on.
    pub failed: Vec<(PathBuf, Error)>,
}

impl GenerateReport {
    pub(crate) fn record_write(&mut self, path: PathBuf, result: WriteResult) {
        match result {
            WriteResult::Written => self.written.push(path),
            WriteResult::Skipped => self.skipped.push(path),
        }
    }

    /// Record a splice into `path`. Errors local to the target are kept in
    /// the report; storage failures are returned.
    pub(crate) fn record_splice(
        &mut self,
        path: &Path,
        result: Result<Vec<SpliceOutcome>>,
    ) -> Result<()> {
        match result {
            Ok(outcomes) if outcomes.contains(&SpliceOutcome::Inserted) => {
                self.spliced.push(path.to_path_buf());
                Ok(())
            }
            Ok(_) => {
                self.unchanged.push(path.to_path_buf());
                Ok(())
            }
            Err(err) if err.is_recoverable() => {
                tracing::warn!(path = %path.display(), error = %err, "aggregator not updated");
                self.failed.push((path.to_path_buf(), err));
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    /// Whether every target was updated or already up to date.
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }

    pub(crate) fn merge(&mut self, other: GenerateReport) {
        self.written.extend(other.written);
        self.skipped.extend(other.skipped);
        self.spliced.extend(other.spliced);
        self.unchanged.extend(other.unchanged);
        self.failed.extend(other.failed);
    }
}

/// A [`FileModel`] bound to its destination.
#[derive(Debug, Clone)]
pub struct SourceFile {
    dir: PathBuf,
    file_name: String,
    model: FileModel,
}

impl SourceFile {
    /// Place `model` at `dir/<model name>.<extension>`.
    pub fn new(dir: impl Into<PathBuf>, model: FileModel, extension: &str) -> Self {
        Self {
            dir: dir.into(),
            file_name: format!("{}.{extension}", model.name()),
            model,
        }
    }

    pub fn model(&self) -> &FileModel {
        &self.model
    }
}

impl GeneratedFile for SourceFile {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.dir).join(&self.file_name)
    }

    fn render(&self) -> String {
        self.model.generate()
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use stencil_core::DeclarationKind;

    use super::*;

    #[test]
    fn test_source_file_path() {
        let file = SourceFile::new("src/app/modules/user", FileModel::new("UserController"), "ts");
        assert_eq!(
            file.path(Path::new("/project")),
            PathBuf::from("/project/src/app/modules/user/UserController.ts")
        );
    }

    #[test]
    fn test_report_keeps_recoverable_errors() {
        let mut report = GenerateReport::default();
        let missing = Error::MissingPlaceholder {
            path: Some("route.ts".into()),
            placeholder: "router".to_string(),
            token: "// <stencil:router/>".to_string(),
        };
        report.record_splice(Path::new("route.ts"), Err(missing)).unwrap();
        report
            .record_splice(Path::new("import.ts"), Ok(vec![SpliceOutcome::AlreadyPresent]))
            .unwrap();

        assert!(!report.is_clean());
        assert_eq!(report.unchanged, vec![PathBuf::from("import.ts")]);
    }

    #[test]
    fn test_report_propagates_storage_errors() {
        let mut report = GenerateReport::default();
        let io = Error::io(
            "import.ts",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(report.record_splice(Path::new("import.ts"), Err(io)).is_err());

        let dup = Error::duplicate(DeclarationKind::Class, "A", "a");
        assert!(report.record_splice(Path::new("a.ts"), Err(dup)).is_ok());
    }
}
