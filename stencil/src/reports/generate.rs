//! Reports for generation runs.

use std::path::{Path, PathBuf};

use stencil_codegen_typescript::GenerateReport;

use super::output::{Output, Report};

/// What a generator did, with paths shown relative to the project root.
#[derive(Debug)]
pub struct GenerateSummary<'a> {
    pub root: &'a Path,
    pub report: &'a GenerateReport,
}

impl GenerateSummary<'_> {
    fn display(&self, path: &Path) -> String {
        path.strip_prefix(self.root)
            .unwrap_or(path)
            .display()
            .to_string()
    }
}

impl Report for GenerateSummary<'_> {
    fn render(&self, out: &mut dyn Output) {
        let report = self.report;

        for path in &report.written {
            out.added_item(&self.display(path));
        }
        for path in &report.spliced {
            out.modified_item(&self.display(path));
        }
        for path in report.skipped.iter().chain(&report.unchanged) {
            out.unchanged_item(&self.display(path));
        }

        for (path, err) in &report.failed {
            out.warning(&format!("{}: {}", self.display(path), err));
        }
    }
}

/// A file in dry-run mode.
#[derive(Debug)]
pub struct PreviewFile {
    pub path: PathBuf,
    pub content: String,
}

/// Files a dry run would have written.
#[derive(Debug)]
pub struct PreviewReport {
    pub files: Vec<PreviewFile>,
}

impl Report for PreviewReport {
    fn render(&self, out: &mut dyn Output) {
        for file in &self.files {
            out.divider(&file.path.display().to_string());
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be written", self.files.len()));
    }
}
